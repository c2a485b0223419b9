//! Keeps a rendered grid in sync with the deck.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tracing::{debug, info, trace};

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::ControllerError;
use crate::render::{InputSource, Renderer};
use crate::state::DisplayState;
use crate::sync::Mutex;

/// Drives a [`Renderer`] from a [`Deck`].
///
/// The controller owns the deck and is the only party that mutates it. Each
/// shuffle request shuffles the deck and repaints the whole grid while the
/// deck lock is held, so concurrent requests are applied one at a time.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cardgrid::{Card, DECK_SIZE, DisplayController, DisplayState, Renderer, ShuffleButton};
///
/// struct Count(usize);
///
/// impl Renderer for Count {
///     type Error = core::convert::Infallible;
///
///     fn render(&mut self, _cards: &[Card; DECK_SIZE]) -> Result<(), Self::Error> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let controller = Arc::new(DisplayController::new(Count(0), 42));
/// let mut button = ShuffleButton::new("Shuffle");
/// controller.initialize(&mut button).unwrap();
/// assert_eq!(controller.state(), DisplayState::Ordered);
///
/// button.press().unwrap();
/// assert_eq!(controller.state(), DisplayState::Shuffled);
/// assert_eq!(controller.with_renderer(|r| r.0), 2);
/// ```
pub struct DisplayController<R> {
    /// The deck being displayed.
    deck: Mutex<Deck>,
    /// Paints the grid.
    renderer: Mutex<R>,
    /// Current display state.
    state: Mutex<DisplayState>,
    /// Shuffles applied since the last reset.
    shuffles: AtomicUsize,
    /// Whether the shuffle handler has been registered.
    initialized: AtomicBool,
}

impl<R: Renderer> DisplayController<R> {
    /// Creates a controller whose deck shuffles are driven by `seed`.
    ///
    /// Nothing is rendered until [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(renderer: R, seed: u64) -> Self {
        Self {
            deck: Mutex::new(Deck::new(seed)),
            renderer: Mutex::new(renderer),
            state: Mutex::new(DisplayState::Ordered),
            shuffles: AtomicUsize::new(0),
            initialized: AtomicBool::new(false),
        }
    }

    /// Resets the deck, renders it once, and registers the shuffle handler
    /// with `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::AlreadyInitialized`] on a second call, or
    /// [`ControllerError::Render`] if the first render fails. The handler is
    /// only registered after a successful render.
    pub fn initialize<I>(self: &Arc<Self>, input: &mut I) -> Result<(), ControllerError<R::Error>>
    where
        I: InputSource<R::Error> + ?Sized,
        R: Send + 'static,
    {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return Err(ControllerError::AlreadyInitialized);
        }

        if let Err(err) = self.reset() {
            self.initialized.store(false, Ordering::SeqCst);
            return Err(ControllerError::Render(err));
        }

        let controller = Arc::clone(self);
        input.on_shuffle_requested(Box::new(move || controller.handle_shuffle_request()));
        info!("display controller initialized");
        Ok(())
    }

    /// Shuffles the deck and repaints the grid.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error. The deck stays shuffled in that case.
    pub fn handle_shuffle_request(&self) -> Result<(), R::Error> {
        let mut deck = self.deck.lock();
        deck.shuffle();
        *self.state.lock() = DisplayState::Shuffled;
        let shuffles = self.shuffles.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(shuffles, "deck shuffled");
        self.repaint(deck.cards())
    }

    /// Returns the deck to canonical order and repaints the grid.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error. The deck stays ordered in that case.
    pub fn reset(&self) -> Result<(), R::Error> {
        let mut deck = self.deck.lock();
        deck.reset();
        *self.state.lock() = DisplayState::Ordered;
        self.shuffles.store(0, Ordering::SeqCst);
        info!("deck reset to canonical order");
        self.repaint(deck.cards())
    }

    fn repaint(&self, cards: &[Card; DECK_SIZE]) -> Result<(), R::Error> {
        trace!("repainting grid");
        self.renderer.lock().render(cards)
    }
}

impl<R> DisplayController<R> {
    /// Returns the current display state.
    pub fn state(&self) -> DisplayState {
        *self.state.lock()
    }

    /// Returns a copy of the current deck order.
    pub fn snapshot(&self) -> [Card; DECK_SIZE] {
        self.deck.lock().snapshot()
    }

    /// Returns the number of shuffles since the last reset.
    pub fn shuffle_count(&self) -> usize {
        self.shuffles.load(Ordering::SeqCst)
    }

    /// Returns whether the shuffle handler has been registered.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Runs `f` with exclusive access to the renderer.
    ///
    /// Must not be called from inside a render.
    pub fn with_renderer<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut self.renderer.lock())
    }
}
