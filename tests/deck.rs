//! Deck model integration tests.

use std::collections::HashSet;

use cardgrid::{Card, DECK_SIZE, Deck, Rank, Suit};
use statrs::distribution::{ChiSquared, ContinuousCDF};

fn canonical_identifiers() -> Vec<String> {
    let mut ids = Vec::with_capacity(DECK_SIZE);
    for suit in ["spades", "hearts", "clubs", "diamonds"] {
        for rank in [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ] {
            ids.push(format!("{rank}_{suit}"));
        }
    }
    ids
}

fn identifiers(deck: &Deck) -> Vec<String> {
    deck.cards().iter().map(ToString::to_string).collect()
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort();
    cards
}

#[test]
fn reset_contains_each_card_once() {
    let mut deck = Deck::new(3);
    deck.shuffle();
    deck.reset();

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&Card::new(rank, suit)));
        }
    }
    assert!(deck.is_permutation());
}

#[test]
fn reset_produces_canonical_order() {
    let mut deck = Deck::new(11);
    deck.shuffle();
    deck.reset();

    assert!(deck.is_ordered());
    assert_eq!(identifiers(&deck), canonical_identifiers());
    assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(deck.cards()[12], Card::new(Rank::King, Suit::Spades));
    assert_eq!(deck.cards()[13], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(deck.cards()[51], Card::new(Rank::King, Suit::Diamonds));
}

#[test]
fn new_deck_starts_ordered() {
    let deck = Deck::new(0);
    assert!(deck.is_ordered());
    assert_eq!(identifiers(&deck), canonical_identifiers());
}

#[test]
fn shuffle_preserves_card_set() {
    let mut deck = Deck::new(5);
    let before = sorted(deck.cards());

    for _ in 0..100 {
        deck.shuffle();
        assert_eq!(deck.cards().len(), DECK_SIZE);
        assert!(deck.is_permutation());
        assert_eq!(sorted(deck.cards()), before);
    }
}

#[test]
fn shuffle_changes_order() {
    let mut deck = Deck::new(42);
    deck.shuffle();

    let shuffled = identifiers(&deck);
    let canonical = canonical_identifiers();
    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_ne!(shuffled, canonical);

    let mut a = shuffled;
    let mut b = canonical;
    a.sort();
    b.sort();
    assert_eq!(a, b);
    assert!(!deck.is_ordered());
}

#[test]
fn same_seed_shuffles_identically() {
    let mut a = Deck::new(99);
    let mut b = Deck::new(99);
    for _ in 0..3 {
        a.shuffle();
        b.shuffle();
        assert_eq!(a.cards(), b.cards());
    }

    let mut c = Deck::new(100);
    c.shuffle();
    assert_ne!(a.snapshot(), c.snapshot());
}

#[test]
fn reads_do_not_mutate() {
    let mut deck = Deck::new(8);
    deck.shuffle();

    let first = deck.snapshot();
    let second = deck.snapshot();
    assert_eq!(first, second);
    assert_eq!(deck.cards(), &first);
    assert_eq!(deck.cards(), deck.cards());
}

#[test]
fn snapshot_is_detached_from_deck() {
    let mut deck = Deck::new(2);
    let mut copy = deck.snapshot();
    copy.swap(0, 1);
    assert!(deck.is_ordered());

    deck.shuffle();
    assert_ne!(deck.snapshot(), cardgrid::deck::ordered_cards());
    assert_eq!(
        copy[0],
        Card::new(Rank::Two, Suit::Spades),
        "copy is unaffected by later shuffles"
    );
}

#[test]
fn card_index_round_trips_canonical_positions() {
    let ordered = cardgrid::deck::ordered_cards();
    for (index, card) in ordered.iter().enumerate() {
        assert_eq!(card.index(), index);
        assert_eq!(Card::from_index(index), Some(*card));
    }
    assert_eq!(Card::from_index(DECK_SIZE), None);
}

#[test]
fn card_names() {
    let ten = Card::new(Rank::Ten, Suit::Hearts);
    assert_eq!(ten.to_string(), "10_hearts");
    assert_eq!(ten.asset_name(), "10_of_hearts");
    assert_eq!(
        Card::new(Rank::Ace, Suit::Spades).asset_name(),
        "A_of_spades"
    );
    assert_eq!(Card::new(Rank::Queen, Suit::Clubs).to_string(), "Q_clubs");
}

#[test]
fn shuffle_positions_are_uniform() {
    const TRIALS: usize = 20_800;

    let mut deck = Deck::new(2024);
    let mut counts = [[0_u32; DECK_SIZE]; DECK_SIZE];

    for _ in 0..TRIALS {
        deck.reset();
        deck.shuffle();
        for (position, card) in deck.cards().iter().enumerate() {
            counts[card.index()][position] += 1;
        }
    }

    let expected = TRIALS as f64 / DECK_SIZE as f64;
    let degrees_of_freedom = (DECK_SIZE - 1) as f64;
    let critical = ChiSquared::new(degrees_of_freedom)
        .unwrap()
        .inverse_cdf(0.999_99);

    for (card_index, positions) in counts.iter().enumerate() {
        let statistic: f64 = positions
            .iter()
            .map(|&observed| {
                let diff = f64::from(observed) - expected;
                diff * diff / expected
            })
            .sum();
        assert!(
            statistic < critical,
            "card {} position distribution is skewed: chi2={statistic:.2} critical={critical:.2}",
            Card::from_index(card_index).unwrap()
        );
    }
}
