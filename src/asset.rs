//! Card asset resolution.
//!
//! Assets follow the `{rank}_of_{suit}.{ext}` naming convention inside a
//! single directory, e.g. `cards/A_of_spades.png`.

use core::fmt;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::card::{Card, DECK_SIZE};
use crate::error::AssetError;
use crate::options::{DisplayOptions, MissingAssetPolicy};

/// The outcome of resolving one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAsset {
    /// The asset file exists.
    File {
        /// Asset base name, e.g. `A_of_spades`.
        name: String,
        /// Full path to the file.
        path: PathBuf,
    },
    /// No file exists; the renderer should draw a stand-in.
    Placeholder {
        /// Asset base name that was looked for.
        name: String,
    },
}

impl ResolvedAsset {
    /// Returns the asset base name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Placeholder { name } => name,
        }
    }

    /// Returns whether this is a placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

impl fmt::Display for ResolvedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { name, .. } => f.write_str(name),
            Self::Placeholder { name } => write!(f, "?{name}"),
        }
    }
}

/// Maps cards to asset files on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    dir: PathBuf,
    extension: String,
    policy: MissingAssetPolicy,
}

impl AssetResolver {
    /// Creates a resolver for `dir` with the given file extension.
    pub fn new(dir: impl Into<PathBuf>, extension: &str, policy: MissingAssetPolicy) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_owned(),
            policy,
        }
    }

    /// Creates a resolver from display options.
    #[must_use]
    pub fn from_options(options: &DisplayOptions) -> Self {
        Self::new(
            &options.asset_dir,
            &options.asset_extension,
            options.missing_assets,
        )
    }

    /// Returns the asset directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path where the asset for `card` is expected.
    #[must_use]
    pub fn path_for(&self, card: Card) -> PathBuf {
        let mut path = self.dir.join(card.asset_name());
        if !self.extension.is_empty() {
            path.set_extension(&self.extension);
        }
        path
    }

    /// Resolves the asset for a single card.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Missing`] if the file does not exist and the
    /// policy is [`MissingAssetPolicy::Fail`].
    pub fn resolve(&self, card: Card) -> Result<ResolvedAsset, AssetError> {
        let path = self.path_for(card);
        if path.is_file() {
            return Ok(ResolvedAsset::File {
                name: card.asset_name(),
                path,
            });
        }

        match self.policy {
            MissingAssetPolicy::Placeholder => {
                warn!(%card, path = %path.display(), "asset missing, using placeholder");
                Ok(ResolvedAsset::Placeholder {
                    name: card.asset_name(),
                })
            }
            MissingAssetPolicy::Fail => Err(AssetError::Missing { card, path }),
        }
    }

    /// Resolves a full deck, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first [`AssetError`] encountered.
    pub fn resolve_all(&self, cards: &[Card; DECK_SIZE]) -> Result<Vec<ResolvedAsset>, AssetError> {
        cards.iter().map(|&card| self.resolve(card)).collect()
    }
}
