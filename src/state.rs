//! Display state types.

/// What the displayed grid currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Canonical order, right after initialization or an explicit reset.
    #[default]
    Ordered,
    /// A permuted order produced by at least one shuffle.
    Shuffled,
}
