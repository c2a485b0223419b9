//! Display configuration options.
//!
//! These describe how a renderer presents the grid. The deck and controller
//! never read them.

use alloc::string::String;

/// What a renderer does when a card has no asset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum MissingAssetPolicy {
    /// Substitute a placeholder and keep rendering.
    #[default]
    Placeholder,
    /// Abort the render with an error.
    Fail,
}

/// Configuration options for displaying the card grid.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardgrid::{DisplayOptions, MissingAssetPolicy};
///
/// let options = DisplayOptions::default()
///     .with_asset_dir("assets/cards")
///     .with_asset_extension("svg")
///     .with_missing_assets(MissingAssetPolicy::Fail);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Title shown above the grid.
    pub title: String,
    /// Label of the control that requests a shuffle.
    pub shuffle_label: String,
    /// Directory holding the card assets.
    pub asset_dir: String,
    /// File extension of the card assets, without the leading dot.
    pub asset_extension: String,
    /// Handling of cards without an asset file.
    pub missing_assets: MissingAssetPolicy,
    /// Width of one grid cell in characters, for text renderers.
    pub cell_width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            title: String::from("Card Randomizer"),
            shuffle_label: String::from("Shuffle"),
            asset_dir: String::from("cards"),
            asset_extension: String::from("png"),
            missing_assets: MissingAssetPolicy::Placeholder,
            cell_width: 15,
        }
    }
}

impl DisplayOptions {
    /// Sets the title.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgrid::DisplayOptions;
    ///
    /// let options = DisplayOptions::default().with_title("Table 1");
    /// assert_eq!(options.title, "Table 1");
    /// ```
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the shuffle control label.
    #[must_use]
    pub fn with_shuffle_label(mut self, label: impl Into<String>) -> Self {
        self.shuffle_label = label.into();
        self
    }

    /// Sets the asset directory.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgrid::DisplayOptions;
    ///
    /// let options = DisplayOptions::default().with_asset_dir("img");
    /// assert_eq!(options.asset_dir, "img");
    /// ```
    #[must_use]
    pub fn with_asset_dir(mut self, dir: impl Into<String>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Sets the asset file extension. A leading dot is stripped.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgrid::DisplayOptions;
    ///
    /// let options = DisplayOptions::default().with_asset_extension(".svg");
    /// assert_eq!(options.asset_extension, "svg");
    /// ```
    #[must_use]
    pub fn with_asset_extension(mut self, extension: &str) -> Self {
        self.asset_extension = String::from(extension.trim_start_matches('.'));
        self
    }

    /// Sets the missing asset policy.
    #[must_use]
    pub const fn with_missing_assets(mut self, policy: MissingAssetPolicy) -> Self {
        self.missing_assets = policy;
        self
    }

    /// Sets the text cell width.
    #[must_use]
    pub const fn with_cell_width(mut self, width: usize) -> Self {
        self.cell_width = width;
        self
    }
}
