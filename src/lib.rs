//! A 52-card deck model with fair shuffling, and a controller that keeps a
//! 4 x 13 card grid in sync with it.
//!
//! The crate separates the pure model ([`Deck`]) from presentation. A
//! [`DisplayController`] owns the deck and drives a [`Renderer`]; shuffle
//! requests arrive through an [`InputSource`].
//!
//! # Example
//!
//! ```
//! use cardgrid::Deck;
//!
//! let mut deck = Deck::new(42);
//! deck.shuffle();
//! assert!(deck.is_permutation());
//!
//! deck.reset();
//! assert!(deck.is_ordered());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

#[cfg(feature = "std")]
pub mod asset;
pub mod card;
pub mod controller;
pub mod deck;
pub mod error;
pub mod grid;
pub mod options;
pub mod render;
pub mod state;
mod sync;

// Re-export main types
#[cfg(feature = "std")]
pub use asset::{AssetResolver, ResolvedAsset};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use controller::DisplayController;
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::{AssetError, RenderError};
pub use error::ControllerError;
pub use grid::{GRID_COLUMNS, GRID_ROWS, GridCell};
pub use options::{DisplayOptions, MissingAssetPolicy};
#[cfg(feature = "std")]
pub use render::TextRenderer;
pub use render::{InputSource, Renderer, ShuffleButton, ShuffleHandler};
pub use state::DisplayState;
