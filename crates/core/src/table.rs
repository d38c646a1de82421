//! Card table - the session-owned state behind one rendered table.
//!
//! `CardTable` exclusively owns the seats, the trick area, the selection state
//! and the placements of the last frame. Everything is single-threaded: a
//! [`CardTable::render`] call and a [`CardTable::handle_pointer`] call never
//! interleave, and a toggle made by one pointer event shows up in the very
//! next frame.

use arrayvec::ArrayVec;
use tracing::{debug, error, warn};

use crate::atlas::SpriteAtlasIndex;
use crate::canvas::Canvas;
use crate::config::{TableConfig, TableRule};
use crate::deck::Deck;
use crate::error::{Result, TableError};
use crate::hit_test::{hit_test, Placements};
use crate::layout::HandLayoutEngine;
use crate::seat::Seat;
use crate::selection::SelectionState;
use crate::snapshot::{SeatSnapshot, TableSnapshot, TrickSnapshot};
use crate::types::{Card, Rect, TableSize, MAX_SEATS};

/// Cards laid down by the most recent play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    seat: Option<usize>,
    cards: Vec<Card>,
}

impl Trick {
    /// Seat that played the cards, if known
    pub fn seat(&self) -> Option<usize> {
        self.seat
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[derive(Debug, Clone)]
pub struct CardTable {
    deck: Deck,
    atlas: SpriteAtlasIndex,
    layout: HandLayoutEngine,
    rule: TableRule,
    size: TableSize,
    seats: ArrayVec<Seat, MAX_SEATS>,
    local: usize,
    trick: Option<Trick>,
    selection: SelectionState,
    placements: Placements,
}

/// A hand is visible (face up and touchable) for the local seat, or for every
/// seat when rival hands are shown.
fn hand_visible(rule: &TableRule, seat: &Seat) -> bool {
    seat.is_local() || rule.show_rival_hands
}

impl CardTable {
    /// Build a table. Seat indices are assigned from the order of `seats`,
    /// which is also the draw and hit-test priority order.
    pub fn new(deck: Deck, seats: Vec<Seat>, config: TableConfig, size: TableSize) -> Result<Self> {
        config.validate()?;
        if seats.len() > MAX_SEATS {
            return Err(TableError::TooManySeats {
                max: MAX_SEATS,
                got: seats.len(),
            });
        }
        let locals = seats.iter().filter(|s| s.is_local()).count();
        if locals != 1 {
            return Err(TableError::LocalSeatCount(locals));
        }

        let atlas = SpriteAtlasIndex::new(&deck, config.atlas)?;

        let mut table_seats = ArrayVec::new();
        let mut local = 0;
        for (index, mut seat) in seats.into_iter().enumerate() {
            seat.set_seat_index(index);
            debug!(
                seat = index,
                name = seat.name(),
                position = seat.position().as_str(),
                automated = seat.is_automated(),
                "seat assigned"
            );
            if seat.is_local() {
                local = index;
            }
            table_seats.push(seat);
        }

        debug!(
            seats = table_seats.len(),
            deck = deck.len(),
            width = size.width,
            height = size.height,
            "card table created"
        );

        Ok(Self {
            deck,
            atlas,
            layout: HandLayoutEngine::new(config.layout),
            rule: config.rule,
            size,
            seats: table_seats,
            local,
            trick: None,
            selection: SelectionState::new(),
            placements: Placements::new(),
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn atlas(&self) -> &SpriteAtlasIndex {
        &self.atlas
    }

    pub fn layout(&self) -> &HandLayoutEngine {
        &self.layout
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    pub fn local_seat(&self) -> &Seat {
        &self.seats[self.local]
    }

    pub fn current_trick(&self) -> Option<&Trick> {
        self.trick.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_selected(&self, card: Card) -> bool {
        self.selection.is_selected(card)
    }

    /// Where `card` was drawn in the last frame
    pub fn placement(&self, card: Card) -> Option<Rect> {
        self.placements.get(card)
    }

    pub fn table_size(&self) -> TableSize {
        self.size
    }

    pub fn set_table_size(&mut self, size: TableSize) {
        self.size = size;
    }

    pub fn show_rival_hands(&self) -> bool {
        self.rule.show_rival_hands
    }

    /// Change rival-hand visibility; selection follows the new visible set.
    pub fn set_show_rival_hands(&mut self, show: bool) {
        if self.rule.show_rival_hands == show {
            return;
        }
        self.rule.show_rival_hands = show;
        let visible: Vec<Card> = self
            .seats
            .iter()
            .filter(|seat| hand_visible(&self.rule, seat))
            .flat_map(|seat| seat.hand().iter().copied())
            .collect();
        self.selection.sync(visible);
        for seat in self.seats.iter().filter(|seat| !hand_visible(&self.rule, seat)) {
            self.placements.forget(seat.hand().iter().copied());
        }
        debug!(show, "rival hand visibility changed");
    }

    /// Replace a seat's hand. The hand is sorted and its selection starts clear.
    pub fn deal_hand(&mut self, seat: usize, cards: Vec<Card>) -> Result<()> {
        self.check_seat(seat)?;
        self.check_incoming(seat, &cards, true)?;

        let visible = hand_visible(&self.rule, &self.seats[seat]);
        let old = self.seats[seat].replace_hand(cards);
        self.selection.forget(old.iter().copied());
        self.placements.forget(old);
        if visible {
            self.selection.track(self.seats[seat].hand().iter().copied());
        }

        debug!(seat, cards = self.seats[seat].hand().len(), "hand dealt");
        Ok(())
    }

    /// Give the leftover cards to `seat` and make it the lord.
    pub fn award_kitty(&mut self, seat: usize, cards: Vec<Card>) -> Result<()> {
        self.check_seat(seat)?;
        self.check_incoming(seat, &cards, false)?;

        for s in self.seats.iter_mut() {
            let is_lord = s.seat_index() == seat;
            s.set_lord(is_lord);
        }
        let visible = hand_visible(&self.rule, &self.seats[seat]);
        self.seats[seat].add_cards(&cards);
        if visible {
            self.selection.track(cards.iter().copied());
        }

        debug!(seat, kitty = cards.len(), "kitty awarded");
        Ok(())
    }

    /// Move `cards` from a seat's hand into the trick area.
    ///
    /// An empty play is a pass and leaves the table untouched.
    pub fn play_cards(&mut self, seat: usize, cards: &[Card]) -> Result<()> {
        self.check_seat(seat)?;
        if cards.is_empty() {
            debug!(seat, "pass");
            return Ok(());
        }
        if let Some(dup) = first_duplicate(cards) {
            return Err(TableError::DuplicateCard(dup));
        }
        if let Err(err) = self.seats[seat].remove_cards(cards) {
            warn!(seat, %err, "play rejected");
            return Err(err);
        }

        self.selection.forget(cards.iter().copied());
        self.placements.forget(cards.iter().copied());

        let mut played = cards.to_vec();
        played.sort();
        debug!(seat, cards = played.len(), "cards played");
        self.trick = Some(Trick {
            seat: Some(seat),
            cards: played,
        });
        Ok(())
    }

    /// Selected cards of one seat, in hand order
    pub fn selected_cards(&self, seat: usize) -> Vec<Card> {
        self.seats
            .get(seat)
            .map(|s| {
                s.hand()
                    .iter()
                    .copied()
                    .filter(|&c| self.selection.is_selected(c))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Play whatever the seat has selected; returns the played cards.
    pub fn play_selected(&mut self, seat: usize) -> Result<Vec<Card>> {
        self.check_seat(seat)?;
        let picked = self.selected_cards(seat);
        self.play_cards(seat, &picked)?;
        Ok(picked)
    }

    pub fn clear_trick(&mut self) {
        self.trick = None;
    }

    /// Empty every hand and the trick, and drop lord status.
    pub fn reset(&mut self) {
        for seat in self.seats.iter_mut() {
            seat.replace_hand(Vec::new());
            seat.set_lord(false);
        }
        self.trick = None;
        self.selection.clear();
        self.placements.clear();
    }

    /// Draw one frame: every seat in table order, then the trick area.
    ///
    /// All rectangles are recomputed from the current hands, selection and
    /// table size. Destinations of visible hand cards are remembered for hit
    /// testing; face-down cards leave no placement behind.
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.placements.clear();
        let face_up = self.rule.show_rival_hands;

        for seat in &self.seats {
            let visible = hand_visible(&self.rule, seat);
            let role = seat.role();
            let hand = seat.hand();
            let rects = self
                .layout
                .hand_rects(seat.position(), hand.len(), self.size, face_up);

            for (&card, base) in hand.iter().zip(rects) {
                let dst = self
                    .layout
                    .placed(base, self.selection.is_selected(card), role);
                let src = if visible {
                    match self.atlas.source_rect(card) {
                        Ok(src) => src,
                        Err(err) => {
                            error!(%err, seat = seat.seat_index(), "card missing from atlas");
                            continue;
                        }
                    }
                } else {
                    self.atlas.back_rect()
                };
                canvas.draw_sprite(src, dst);
                if visible {
                    self.placements.record(card, dst);
                }
            }
        }

        if let Some(trick) = &self.trick {
            let rects = self.layout.trick_rects(trick.cards.len(), self.size);
            for (&card, dst) in trick.cards.iter().zip(rects) {
                match self.atlas.source_rect(card) {
                    Ok(src) => canvas.draw_sprite(src, dst),
                    Err(err) => error!(%err, "trick card missing from atlas"),
                }
            }
        }
    }

    /// Topmost visible hand card under `(x, y)` in the last frame.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<Card> {
        hit_test(
            self.seats.iter(),
            |seat| hand_visible(&self.rule, seat),
            &self.placements,
            x,
            y,
        )
    }

    /// Resolve a pointer press; toggles the hit card's selection.
    ///
    /// Returns `true` when a card was hit and toggled.
    pub fn handle_pointer(&mut self, x: i32, y: i32) -> bool {
        let Some(card) = self.hit_test(x, y) else {
            return false;
        };
        match self.selection.toggle(card) {
            Some(selected) => {
                debug!(%card, selected, "card toggled");
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            width: self.size.width,
            height: self.size.height,
            show_rival_hands: self.rule.show_rival_hands,
            seats: self
                .seats
                .iter()
                .map(|seat| SeatSnapshot {
                    name: seat.name().to_string(),
                    seat_index: seat.seat_index(),
                    position: seat.position(),
                    is_local: seat.is_local(),
                    is_automated: seat.is_automated(),
                    is_lord: seat.is_lord(),
                    hand: seat.hand().to_vec(),
                    selected: self.selected_cards(seat.seat_index()),
                })
                .collect(),
            trick: self.trick.as_ref().map(|t| TrickSnapshot {
                seat: t.seat,
                cards: t.cards.clone(),
            }),
        }
    }

    fn check_seat(&self, seat: usize) -> Result<()> {
        if seat < self.seats.len() {
            Ok(())
        } else {
            Err(TableError::NoSuchSeat(seat))
        }
    }

    /// Cards entering `seat` must be known, distinct and not held elsewhere.
    fn check_incoming(&self, seat: usize, cards: &[Card], replacing: bool) -> Result<()> {
        if let Some(dup) = first_duplicate(cards) {
            return Err(TableError::DuplicateCard(dup));
        }
        for &card in cards {
            if !self.atlas.contains(card) {
                return Err(TableError::UnknownCard(card));
            }
            let in_trick = self
                .trick
                .as_ref()
                .is_some_and(|t| t.cards.contains(&card));
            let in_hand = self
                .seats
                .iter()
                .any(|s| s.holds(card) && !(replacing && s.seat_index() == seat));
            if in_trick || in_hand {
                return Err(TableError::CardAlreadyPlaced(card));
            }
        }
        Ok(())
    }
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .enumerate()
        .find(|(i, card)| cards[..*i].contains(card))
        .map(|(_, &card)| card)
}
