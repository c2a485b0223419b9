//! Error types.
//!
//! The deck itself has no failure modes. Errors only arise at the
//! collaborator boundary: renderers, their asset lookups, and controller
//! wiring.

use thiserror::Error;

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use crate::card::Card;

/// Errors returned by [`DisplayController`](crate::DisplayController)
/// operations, generic over the renderer's error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError<E> {
    /// The controller already registered its shuffle handler.
    #[error("display controller is already initialized")]
    AlreadyInitialized,
    /// The renderer rejected a repaint.
    #[error("renderer failed: {0}")]
    Render(E),
}

/// Errors that can occur while resolving card assets.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// No asset file exists for the card.
    #[error("no asset for {card} at {}", path.display())]
    Missing {
        /// The card that could not be resolved.
        card: Card,
        /// The path that was probed.
        path: PathBuf,
    },
}

/// Errors raised by the [`TextRenderer`](crate::render::TextRenderer).
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum RenderError {
    /// A card asset could not be resolved.
    #[error(transparent)]
    Asset(#[from] AssetError),
    /// Writing the grid failed.
    #[error("failed to write grid: {0}")]
    Io(#[from] std::io::Error),
}
