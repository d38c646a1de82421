//! Sprite atlas index - card identity to sprite-sheet source rectangle
//!
//! Built once from a deck; read-only afterwards and cheap to clone, so any
//! number of views can share it.

use std::collections::HashMap;

use crate::config::AtlasGeometry;
use crate::deck::Deck;
use crate::error::{Result, TableError};
use crate::types::{Card, Rect};

/// What a sprite-sheet cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtlasSlot {
    Face(Card),
    Back,
}

#[derive(Debug, Clone)]
pub struct SpriteAtlasIndex {
    geometry: AtlasGeometry,
    by_card: HashMap<Card, Rect>,
    by_cell: HashMap<u32, Card>,
}

impl SpriteAtlasIndex {
    /// Index every card of `deck` into the grid described by `geometry`.
    pub fn new(deck: &Deck, geometry: AtlasGeometry) -> Result<Self> {
        geometry.validate()?;

        let mut by_card = HashMap::with_capacity(deck.len());
        let mut by_cell = HashMap::with_capacity(deck.len());
        for &card in deck.cards() {
            let cell = card.atlas_index();
            if cell == geometry.back_cell {
                return Err(TableError::InvalidConfig(format!(
                    "card {card} collides with the card-back cell {cell}"
                )));
            }
            if by_cell.insert(cell, card).is_some() {
                return Err(TableError::DuplicateCard(card));
            }
            by_card.insert(card, cell_rect(&geometry, cell));
        }

        Ok(Self {
            geometry,
            by_card,
            by_cell,
        })
    }

    pub fn geometry(&self) -> AtlasGeometry {
        self.geometry
    }

    pub fn len(&self) -> usize {
        self.by_card.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_card.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.by_card.contains_key(&card)
    }

    /// Source rectangle of a card face
    pub fn source_rect(&self, card: Card) -> Result<Rect> {
        self.by_card
            .get(&card)
            .copied()
            .ok_or(TableError::UnknownCard(card))
    }

    /// Source rectangle of the card back
    pub fn back_rect(&self) -> Rect {
        cell_rect(&self.geometry, self.geometry.back_cell)
    }

    /// Reverse lookup: which card (or the back) a source rectangle shows
    pub fn slot_at(&self, src: Rect) -> Option<AtlasSlot> {
        let g = &self.geometry;
        if src.left < 0 || src.top < 0 || src.left % g.cell_width != 0 || src.top % g.cell_height != 0 {
            return None;
        }
        let col = (src.left / g.cell_width) as u32;
        let row = (src.top / g.cell_height) as u32;
        if col >= g.columns {
            return None;
        }
        let cell = row * g.columns + col;
        if cell == g.back_cell {
            return Some(AtlasSlot::Back);
        }
        self.by_cell.get(&cell).copied().map(AtlasSlot::Face)
    }
}

fn cell_rect(geometry: &AtlasGeometry, cell: u32) -> Rect {
    let col = (cell % geometry.columns) as i32;
    let row = (cell / geometry.columns) as i32;
    Rect::from_size(
        geometry.cell_width * col,
        geometry.cell_height * row,
        geometry.cell_width,
        geometry.cell_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atlas() -> SpriteAtlasIndex {
        SpriteAtlasIndex::new(&Deck::standard(), AtlasGeometry::default()).unwrap()
    }

    #[test]
    fn every_card_maps_to_its_grid_cell() {
        let atlas = atlas();
        for &card in Deck::standard().cards() {
            let i = card.atlas_index() as i32;
            let r = atlas.source_rect(card).unwrap();
            assert_eq!(r, Rect::from_size((i % 13) * 80, (i / 13) * 110, 80, 110));
        }
    }

    #[test]
    fn card_rects_are_distinct() {
        let atlas = atlas();
        let mut rects: Vec<Rect> = Deck::standard()
            .cards()
            .iter()
            .map(|&c| atlas.source_rect(c).unwrap())
            .collect();
        rects.push(atlas.back_rect());
        let n = rects.len();
        rects.sort_by_key(|r| (r.top, r.left));
        rects.dedup();
        assert_eq!(rects.len(), n);
    }

    #[test]
    fn back_is_cell_54() {
        assert_eq!(atlas().back_rect(), Rect::new(160, 440, 240, 550));
    }

    #[test]
    fn unknown_card_is_a_configuration_error() {
        let atlas = SpriteAtlasIndex::new(&Deck::without_jokers(), AtlasGeometry::default()).unwrap();
        assert_eq!(
            atlas.source_rect(Card::RED_JOKER),
            Err(TableError::UnknownCard(Card::RED_JOKER))
        );
    }

    #[test]
    fn slot_at_inverts_source_rect() {
        let atlas = atlas();
        let qh = Card::from_str("qh").unwrap();
        assert_eq!(
            atlas.slot_at(atlas.source_rect(qh).unwrap()),
            Some(AtlasSlot::Face(qh))
        );
        assert_eq!(atlas.slot_at(atlas.back_rect()), Some(AtlasSlot::Back));
        assert_eq!(atlas.slot_at(Rect::from_size(5, 0, 80, 110)), None);
    }

    #[test]
    fn back_cell_collision_is_rejected() {
        let geometry = AtlasGeometry {
            back_cell: 53,
            ..AtlasGeometry::default()
        };
        assert!(matches!(
            SpriteAtlasIndex::new(&Deck::standard(), geometry),
            Err(TableError::InvalidConfig(_))
        ));
    }
}
