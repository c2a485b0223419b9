//! Asset resolution integration tests.

use std::fs;
use std::sync::Arc;

use cardgrid::{
    AssetError, AssetResolver, Card, ControllerError, DisplayController, DisplayOptions,
    MissingAssetPolicy, Rank, RenderError, ResolvedAsset, ShuffleButton, Suit, TextRenderer,
};

fn write_full_set(dir: &std::path::Path) {
    for card in cardgrid::deck::ordered_cards() {
        fs::write(dir.join(format!("{}.png", card.asset_name())), b"png").unwrap();
    }
}

#[test]
fn path_follows_naming_convention() {
    let resolver = AssetResolver::new("cards", "png", MissingAssetPolicy::Fail);
    assert_eq!(
        resolver.path_for(Card::new(Rank::Ace, Suit::Spades)),
        std::path::Path::new("cards").join("A_of_spades.png")
    );
    assert_eq!(
        resolver.path_for(Card::new(Rank::Ten, Suit::Hearts)),
        std::path::Path::new("cards").join("10_of_hearts.png")
    );

    let dotted = AssetResolver::new("cards", ".svg", MissingAssetPolicy::Fail);
    assert_eq!(
        dotted.path_for(Card::new(Rank::King, Suit::Diamonds)),
        std::path::Path::new("cards").join("K_of_diamonds.svg")
    );
}

#[test]
fn resolver_from_options_uses_configured_directory() {
    let options = DisplayOptions::default()
        .with_asset_dir("assets")
        .with_asset_extension("jpg");
    let resolver = AssetResolver::from_options(&options);
    assert_eq!(resolver.dir(), std::path::Path::new("assets"));
    assert_eq!(
        resolver.path_for(Card::new(Rank::Jack, Suit::Clubs)),
        std::path::Path::new("assets").join("J_of_clubs.jpg")
    );
}

#[test]
fn existing_assets_resolve_in_deck_order() {
    let dir = tempfile::tempdir().unwrap();
    write_full_set(dir.path());

    let resolver = AssetResolver::new(dir.path(), "png", MissingAssetPolicy::Fail);
    let ordered = cardgrid::deck::ordered_cards();
    let assets = resolver.resolve_all(&ordered).unwrap();

    assert_eq!(assets.len(), 52);
    assert_eq!(assets[0].name(), "A_of_spades");
    assert_eq!(assets[51].name(), "K_of_diamonds");
    assert!(assets.iter().all(|asset| !asset.is_placeholder()));
    assert_eq!(
        assets[13],
        ResolvedAsset::File {
            name: "A_of_hearts".to_owned(),
            path: dir.path().join("A_of_hearts.png"),
        }
    );
}

#[test]
fn missing_asset_fails_under_strict_policy() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = AssetResolver::new(dir.path(), "png", MissingAssetPolicy::Fail);
    let card = Card::new(Rank::Queen, Suit::Hearts);

    let err = resolver.resolve(card).unwrap_err();
    assert_eq!(
        err,
        AssetError::Missing {
            card,
            path: dir.path().join("Q_of_hearts.png"),
        }
    );
    assert!(err.to_string().starts_with("no asset for Q_hearts at "));
}

#[test]
fn missing_asset_becomes_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    write_full_set(dir.path());
    fs::remove_file(dir.path().join("7_of_clubs.png")).unwrap();

    let resolver = AssetResolver::new(dir.path(), "png", MissingAssetPolicy::Placeholder);
    let ordered = cardgrid::deck::ordered_cards();
    let assets = resolver.resolve_all(&ordered).unwrap();

    let seven = Card::new(Rank::Seven, Suit::Clubs);
    let placeholders: Vec<&ResolvedAsset> =
        assets.iter().filter(|asset| asset.is_placeholder()).collect();
    assert_eq!(placeholders.len(), 1);
    assert_eq!(placeholders[0], &assets[seven.index()]);
    assert_eq!(assets[seven.index()].to_string(), "?7_of_clubs");
}

#[test]
fn text_renderer_shows_asset_names() {
    let dir = tempfile::tempdir().unwrap();
    write_full_set(dir.path());

    let options = DisplayOptions::default();
    let resolver = AssetResolver::new(dir.path(), "png", options.missing_assets);
    let renderer = TextRenderer::new(Vec::new(), options).with_assets(resolver);
    let controller = Arc::new(DisplayController::new(renderer, 12));
    let mut button = ShuffleButton::new("Shuffle");
    controller.initialize(&mut button).unwrap();

    let output = controller.with_renderer(|r| String::from_utf8(r.get_ref().clone()).unwrap());
    let row: Vec<&str> = output.lines().nth(2).unwrap().split_whitespace().collect();
    assert_eq!(row[0], "A_of_hearts");
    assert_eq!(row[12], "K_of_hearts");
}

#[test]
fn strict_renderer_failure_aborts_initialization() {
    let dir = tempfile::tempdir().unwrap();
    let options = DisplayOptions::default().with_missing_assets(MissingAssetPolicy::Fail);
    let resolver = AssetResolver::new(dir.path(), "png", options.missing_assets);
    let renderer = TextRenderer::new(Vec::new(), options).with_assets(resolver);
    let controller = Arc::new(DisplayController::new(renderer, 12));
    let mut button = ShuffleButton::new("Shuffle");

    let err = controller.initialize(&mut button).unwrap_err();
    assert!(matches!(
        err,
        ControllerError::Render(RenderError::Asset(AssetError::Missing { .. }))
    ));
    assert!(controller.with_renderer(|r| r.get_ref().is_empty()));
    assert_eq!(controller.with_renderer(|r| r.frames()), 0);
}
