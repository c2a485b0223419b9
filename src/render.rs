//! Collaborator capabilities of the display controller.
//!
//! A [`Renderer`] paints an ordered deck as the 4 x 13 grid. An
//! [`InputSource`] delivers shuffle requests to a single registered handler.

use alloc::boxed::Box;

use tracing::trace;

use crate::card::{Card, DECK_SIZE};

#[cfg(feature = "std")]
pub use text::TextRenderer;

/// Paints a full deck, replacing whatever was displayed before.
///
/// Cards are laid out left to right, top to bottom, 13 per row, in the
/// order given. See [`crate::grid`] for the exact mapping.
///
/// Implementations must not call back into the controller that drives them.
pub trait Renderer {
    /// Error raised when the grid cannot be painted.
    type Error;

    /// Replaces the visible grid with `cards`.
    ///
    /// # Errors
    ///
    /// Implementation defined, e.g. a missing card asset.
    fn render(&mut self, cards: &[Card; DECK_SIZE]) -> Result<(), Self::Error>;
}

/// Callback invoked once per shuffle request.
///
/// Errors returned by the handler belong to whoever dispatched the request.
pub type ShuffleHandler<E> = Box<dyn FnMut() -> Result<(), E> + Send>;

/// A source of user-initiated shuffle requests.
pub trait InputSource<E> {
    /// Registers the handler to call on every shuffle request.
    fn on_shuffle_requested(&mut self, handler: ShuffleHandler<E>);
}

/// An in-process shuffle control, the equivalent of a button.
///
/// Each [`press`](ShuffleButton::press) dispatches one request to the
/// registered handler.
pub struct ShuffleButton<E> {
    label: alloc::string::String,
    handler: Option<ShuffleHandler<E>>,
}

impl<E> ShuffleButton<E> {
    /// Creates a button with no handler attached.
    pub fn new(label: impl Into<alloc::string::String>) -> Self {
        Self {
            label: label.into(),
            handler: None,
        }
    }

    /// Returns the button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns whether a handler is registered.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.handler.is_some()
    }

    /// Dispatches one shuffle request.
    ///
    /// Returns `Ok(false)` if no handler is registered.
    ///
    /// # Errors
    ///
    /// Returns the handler's error unchanged.
    pub fn press(&mut self) -> Result<bool, E> {
        let Some(handler) = self.handler.as_mut() else {
            return Ok(false);
        };
        trace!(label = %self.label, "shuffle requested");
        handler()?;
        Ok(true)
    }
}

impl<E> InputSource<E> for ShuffleButton<E> {
    fn on_shuffle_requested(&mut self, handler: ShuffleHandler<E>) {
        self.handler = Some(handler);
    }
}

#[cfg(feature = "std")]
mod text {
    use std::io::Write;

    use crate::asset::AssetResolver;
    use crate::card::{Card, DECK_SIZE};
    use crate::error::RenderError;
    use crate::grid;
    use crate::options::DisplayOptions;

    use super::Renderer;

    /// Paints the grid as text, one line per row.
    ///
    /// Cells show card identifiers, or resolved asset names when an
    /// [`AssetResolver`] is attached. Placeholders are prefixed with `?`.
    pub struct TextRenderer<W> {
        out: W,
        options: DisplayOptions,
        assets: Option<AssetResolver>,
        frames: usize,
    }

    impl<W: Write> TextRenderer<W> {
        /// Creates a renderer writing to `out`.
        pub const fn new(out: W, options: DisplayOptions) -> Self {
            Self {
                out,
                options,
                assets: None,
                frames: 0,
            }
        }

        /// Attaches an asset resolver.
        #[must_use]
        pub fn with_assets(mut self, assets: AssetResolver) -> Self {
            self.assets = Some(assets);
            self
        }

        /// Returns how many grids have been painted.
        pub const fn frames(&self) -> usize {
            self.frames
        }

        /// Returns the underlying writer.
        pub const fn get_ref(&self) -> &W {
            &self.out
        }

        /// Consumes the renderer, returning the writer.
        pub fn into_inner(self) -> W {
            self.out
        }

        fn cells(&self, cards: &[Card; DECK_SIZE]) -> Result<Vec<String>, RenderError> {
            match &self.assets {
                Some(assets) => Ok(assets
                    .resolve_all(cards)?
                    .iter()
                    .map(ToString::to_string)
                    .collect()),
                None => Ok(cards.iter().map(ToString::to_string).collect()),
            }
        }
    }

    impl<W: Write> Renderer for TextRenderer<W> {
        type Error = RenderError;

        fn render(&mut self, cards: &[Card; DECK_SIZE]) -> Result<(), RenderError> {
            // Resolve everything before writing so a failure leaves no partial frame.
            let cells = self.cells(cards)?;
            let width = self.options.cell_width;

            writeln!(self.out, "{}", self.options.title)?;
            for row in cells.chunks_exact(grid::GRID_COLUMNS) {
                let line: Vec<String> = row.iter().map(|cell| format!("{cell:<width$}")).collect();
                writeln!(self.out, "{}", line.join(" ").trim_end())?;
            }
            writeln!(self.out, "[{}]", self.options.shuffle_label)?;
            self.out.flush()?;

            self.frames += 1;
            Ok(())
        }
    }
}
