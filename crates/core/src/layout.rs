//! Hand layout engine - destination rectangles for hands and the trick area.
//!
//! All functions are pure: they take a card count and the current table size
//! and return base rectangles. Selection pop offsets are applied on top by
//! [`HandLayoutEngine::placed`] and never move neighbouring cards.
//!
//! Fans use 1-based card indices, so the first card already sits one step
//! into its band. Small hands therefore occupy less than the whole band.

use crate::config::LayoutConfig;
use crate::types::{Rect, SeatPosition, SeatRole, TableSize};

#[derive(Debug, Clone)]
pub struct HandLayoutEngine {
    config: LayoutConfig,
}

/// One seat's fan, resolved for a given card count.
#[derive(Debug, Clone, Copy)]
struct Fan {
    horizontal: bool,
    band_start: i32,
    step: i32,
    /// Fixed coordinate on the cross axis (top for horizontal fans, left otherwise).
    cross: i32,
    card_width: i32,
    card_height: i32,
}

impl Fan {
    fn rect(&self, index: usize) -> Rect {
        let along = self.band_start + self.step * index as i32;
        if self.horizontal {
            Rect::from_size(along, self.cross, self.card_width, self.card_height)
        } else {
            Rect::from_size(self.cross, along, self.card_width, self.card_height)
        }
    }
}

impl HandLayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Base rectangles of a hand of `count` cards, in hand order.
    ///
    /// `face_up` selects the wider side-seat band used when rival hands are shown.
    pub fn hand_rects(
        &self,
        position: SeatPosition,
        count: usize,
        table: TableSize,
        face_up: bool,
    ) -> impl Iterator<Item = Rect> {
        let fan = self.fan(position, count, table, face_up);
        (1..=count).filter_map(move |k| fan.map(|f| f.rect(k)))
    }

    /// Base rectangle of card `index` (1-based) out of `count`.
    pub fn hand_rect(
        &self,
        position: SeatPosition,
        index: usize,
        count: usize,
        table: TableSize,
        face_up: bool,
    ) -> Option<Rect> {
        if index == 0 || index > count {
            return None;
        }
        self.fan(position, count, table, face_up).map(|f| f.rect(index))
    }

    /// Rectangles of the trick area, left to right.
    ///
    /// The row starts at `(width - (card_width + gap) * count) / 2` and each
    /// card sits one gap past the right edge of the previous one.
    pub fn trick_rects(&self, count: usize, table: TableSize) -> impl Iterator<Item = Rect> {
        let cfg = self.config;
        let n = count as i32;
        let start = (table.width - (cfg.card_width + cfg.trick_gap) * n) / 2;
        let top = (table.height - cfg.card_height) / 2;
        (0..n).map(move |i| {
            let left = start + cfg.trick_gap * (i + 1) + cfg.card_width * i;
            Rect::from_size(left, top, cfg.card_width, cfg.card_height)
        })
    }

    /// Apply the selection pop for `role` to a base rectangle.
    pub fn placed(&self, base: Rect, selected: bool, role: SeatRole) -> Rect {
        if selected {
            base.offset(role.pop_offset(self.config.popup))
        } else {
            base
        }
    }

    fn fan(
        &self,
        position: SeatPosition,
        count: usize,
        table: TableSize,
        face_up: bool,
    ) -> Option<Fan> {
        if count == 0 {
            return None;
        }
        let cfg = &self.config;
        let n = count as i32;

        let fan = if position.is_horizontal() {
            let total = cfg.width_ratio.apply(table.width);
            let cross = match position {
                SeatPosition::Top => cfg.bottom_margin,
                _ => table.height - cfg.card_height - cfg.bottom_margin,
            };
            Fan {
                horizontal: true,
                band_start: (table.width - total) / 2,
                step: total / n,
                cross,
                card_width: cfg.card_width,
                card_height: cfg.card_height,
            }
        } else {
            let total = cfg.side_ratio(face_up).apply(table.height);
            let cross = match position {
                SeatPosition::Right => table.width - cfg.side_margin - cfg.card_width,
                _ => cfg.side_margin,
            };
            Fan {
                horizontal: false,
                band_start: (table.height - total) / 2,
                step: total / n,
                cross,
                card_width: cfg.card_width,
                card_height: cfg.card_height,
            }
        };
        Some(fan)
    }
}

impl Default for HandLayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
