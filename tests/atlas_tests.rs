use std::collections::HashSet;

use card_table::core::{AtlasGeometry, AtlasSlot, Deck, SpriteAtlasIndex, TableError};
use card_table::types::{Card, Rect, CARD_HEIGHT, CARD_WIDTH};

fn atlas() -> SpriteAtlasIndex {
    SpriteAtlasIndex::new(&Deck::standard(), AtlasGeometry::default()).unwrap()
}

#[test]
fn every_card_gets_a_distinct_cell() {
    let atlas = atlas();
    let deck = Deck::standard();
    let rects: HashSet<Rect> = deck
        .cards()
        .iter()
        .map(|&card| atlas.source_rect(card).unwrap())
        .collect();

    assert_eq!(rects.len(), 54);
    assert!(!rects.contains(&atlas.back_rect()));
    for r in &rects {
        assert_eq!(r.width(), CARD_WIDTH);
        assert_eq!(r.height(), CARD_HEIGHT);
    }
}

#[test]
fn cells_follow_the_sheet_grid() {
    let atlas = atlas();
    let ace_clubs = Card::from_str("ac").unwrap();
    assert_eq!(atlas.source_rect(ace_clubs).unwrap(), Rect::new(0, 0, 80, 110));

    // Cell 53: column 1, row 4.
    assert_eq!(
        atlas.source_rect(Card::RED_JOKER).unwrap(),
        Rect::new(80, 440, 160, 550)
    );
    assert_eq!(atlas.back_rect(), Rect::new(160, 440, 240, 550));
}

#[test]
fn reverse_lookup_recovers_the_card() {
    let atlas = atlas();
    for &card in Deck::standard().cards() {
        let src = atlas.source_rect(card).unwrap();
        assert_eq!(atlas.slot_at(src), Some(AtlasSlot::Face(card)));
    }
    assert_eq!(atlas.slot_at(atlas.back_rect()), Some(AtlasSlot::Back));
    assert_eq!(atlas.slot_at(Rect::new(1, 1, 81, 111)), None);
}

#[test]
fn card_outside_the_building_deck_is_unknown() {
    let atlas = SpriteAtlasIndex::new(&Deck::without_jokers(), AtlasGeometry::default()).unwrap();
    assert_eq!(atlas.len(), 52);
    assert_eq!(
        atlas.source_rect(Card::BLACK_JOKER),
        Err(TableError::UnknownCard(Card::BLACK_JOKER))
    );
}
