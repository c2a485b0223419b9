//! Card identifiers.

use core::fmt;

/// Card suit.
///
/// Variants are declared in canonical deck order, which is also the row
/// order of the freshly reset grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the position of this suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase suit name used in identifiers and asset names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, ascending from Ace to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the position of this rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rank symbol (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card identifier.
///
/// Formats as `{rank}_{suit}`, e.g. `A_spades` or `10_hearts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the card's position in a freshly reset deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.index() * RANKS_PER_SUIT + self.rank.index()
    }

    /// Returns the card at `index` of a freshly reset deck.
    ///
    /// Returns `None` if `index` is not below [`DECK_SIZE`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        Some(Self::new(
            Rank::ALL[index % RANKS_PER_SUIT],
            Suit::ALL[index / RANKS_PER_SUIT],
        ))
    }

    /// Returns the asset base name for this card, e.g. `A_of_spades`.
    ///
    /// Renderers append their own directory and file extension.
    #[must_use]
    pub fn asset_name(self) -> alloc::string::String {
        alloc::format!("{}_of_{}", self.rank, self.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.rank, self.suit)
    }
}

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
