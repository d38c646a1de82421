//! TableView: draws a `core::CardTable` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The table is laid out in table units and
//! each terminal cell covers a fixed block of units (`CellScale`), so the
//! same layout code drives both pixel canvases and the terminal.

use crate::core::{AtlasSlot, Canvas, CardTable, SpriteAtlasIndex};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Rect, SeatPosition, TableSize};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Table units covered by one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub units_x: i32,
    pub units_y: i32,
}

impl Default for CellScale {
    fn default() -> Self {
        // 80x110 cards come out 8 columns by about 6 rows; a 20-unit pop is one row.
        Self {
            units_x: 10,
            units_y: 20,
        }
    }
}

impl CellScale {
    /// Table units spanned by a viewport.
    pub fn table_size(&self, viewport: Viewport) -> TableSize {
        TableSize::new(
            viewport.width as i32 * self.units_x,
            viewport.height as i32 * self.units_y,
        )
    }

    /// Table point at the centre of a terminal cell.
    pub fn cell_center(&self, column: u16, row: u16) -> (i32, i32) {
        (
            column as i32 * self.units_x + self.units_x / 2,
            row as i32 * self.units_y + self.units_y / 2,
        )
    }

    /// Cells touched by a table rectangle: `(x, y, w, h)`.
    fn cells_of(&self, r: Rect) -> (i32, i32, i32, i32) {
        let x0 = r.left.div_euclid(self.units_x);
        let y0 = r.top.div_euclid(self.units_y);
        let x1 = ceil_div(r.right, self.units_x);
        let y1 = ceil_div(r.bottom, self.units_y);
        (x0, y0, x1 - x0, y1 - y0)
    }
}

fn ceil_div(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}

const FELT: Rgb = Rgb::new(20, 90, 50);
const FACE_BG: Rgb = Rgb::new(245, 245, 235);
const RED_INK: Rgb = Rgb::new(200, 30, 40);
const BLACK_INK: Rgb = Rgb::new(20, 20, 20);

/// `Canvas` over a framebuffer: each sprite becomes a bordered box labelled
/// with the card it shows.
pub struct TermCanvas<'a> {
    fb: &'a mut FrameBuffer,
    atlas: &'a SpriteAtlasIndex,
    scale: CellScale,
}

impl<'a> TermCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, atlas: &'a SpriteAtlasIndex, scale: CellScale) -> Self {
        Self { fb, atlas, scale }
    }
}

impl Canvas for TermCanvas<'_> {
    fn draw_sprite(&mut self, src: Rect, dst: Rect) {
        let (x, y, w, h) = self.scale.cells_of(dst);
        match self.atlas.slot_at(src) {
            Some(AtlasSlot::Face(card)) => {
                let ink = if card.is_red() { RED_INK } else { BLACK_INK };
                let style = CellStyle::new(ink, FACE_BG);
                self.fb.draw_box(x, y, w, h, ' ', style);
                // Label rides on the top border so it stays visible under overlap.
                let after = self.fb.put_str(x + 1, y, card.rank().label(), style.bold());
                if !card.rank().is_joker() {
                    self.fb.put_char(after, y, card.suit().symbol(), style.bold());
                }
            }
            Some(AtlasSlot::Back) => {
                let style = CellStyle::new(Rgb::new(170, 190, 240), Rgb::new(30, 50, 130));
                self.fb.draw_box(x, y, w, h, '▒', style);
            }
            None => {
                let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 0, 120));
                self.fb.draw_box(x, y, w, h, '?', style);
            }
        }
    }
}

/// A terminal renderer for a card table.
pub struct TableView {
    atlas: SpriteAtlasIndex,
    scale: CellScale,
}

impl TableView {
    pub fn new(atlas: SpriteAtlasIndex) -> Self {
        Self::with_scale(atlas, CellScale::default())
    }

    pub fn with_scale(atlas: SpriteAtlasIndex, scale: CellScale) -> Self {
        Self { atlas, scale }
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// The table is resized to the viewport first, so layout always matches
    /// what is on screen and pointer hits line up with the drawn cards.
    pub fn render_into(&self, table: &mut CardTable, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(FELT, FELT),
        });

        table.set_table_size(self.scale.table_size(viewport));
        table.render(&mut TermCanvas::new(fb, &self.atlas, self.scale));

        self.draw_seat_labels(fb, table);
        self.draw_status_line(fb, table);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, table: &mut CardTable, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(table, viewport, &mut fb);
        fb
    }

    /// Turn a terminal cell press into a table pointer event.
    pub fn handle_press(&self, table: &mut CardTable, column: u16, row: u16) -> bool {
        let (x, y) = self.scale.cell_center(column, row);
        table.handle_pointer(x, y)
    }

    fn draw_seat_labels(&self, fb: &mut FrameBuffer, table: &CardTable) {
        let label = CellStyle::new(Rgb::new(240, 240, 200), FELT).bold();
        let size = table.table_size();
        let layout = table.layout().config();
        for seat in table.seats() {
            let marker = if seat.is_lord() { "♛ " } else { "" };
            let count = seat.hand().len();
            let text = format!("{marker}{} ({count})", seat.name());
            let width = text.chars().count() as i32;

            let (x, y) = match seat.position() {
                SeatPosition::Bottom => (
                    (fb.width() as i32 - width) / 2,
                    ceil_div(size.height - layout.bottom_margin, self.scale.units_y),
                ),
                SeatPosition::Top => (
                    (fb.width() as i32 - width) / 2,
                    ceil_div(layout.bottom_margin + layout.card_height, self.scale.units_y),
                ),
                SeatPosition::Left => (layout.side_margin.div_euclid(self.scale.units_x), 1),
                SeatPosition::Right => (fb.width() as i32 - width - 1, 1),
            };
            fb.put_str(x, y, &text, label);
        }
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, table: &CardTable) {
        let style = CellStyle::new(Rgb::new(200, 220, 200), Rgb::new(10, 40, 25));
        fb.fill_rect(0, 0, fb.width() as i32, 1, ' ', style);
        let rivals = if table.show_rival_hands() {
            "rivals shown"
        } else {
            "rivals hidden"
        };
        let picked = table.selected_cards(table.local_seat().seat_index()).len();
        let text = format!(
            " {rivals} | {picked} picked | click: pick  p: play  v: rivals  c: clear  r: redeal  q: quit"
        );
        fb.put_str(0, 0, &text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_cover_partial_units() {
        let scale = CellScale::default();
        assert_eq!(scale.cells_of(Rect::from_size(350, 560, 80, 110)), (35, 28, 8, 6));
        assert_eq!(scale.cells_of(Rect::from_size(-15, -30, 80, 110)), (-2, -2, 9, 6));
    }

    #[test]
    fn cell_center_maps_into_the_cell() {
        let scale = CellScale::default();
        assert_eq!(scale.cell_center(0, 0), (5, 10));
        assert_eq!(scale.cell_center(35, 30), (355, 610));
        assert_eq!(scale.table_size(Viewport::new(90, 35)), TableSize::new(900, 700));
    }

    #[test]
    fn ceil_div_rounds_up_for_negatives_too() {
        assert_eq!(ceil_div(11, 10), 2);
        assert_eq!(ceil_div(10, 10), 1);
        assert_eq!(ceil_div(-11, 10), -1);
    }
}
