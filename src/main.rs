//! Terminal card-table runner (default binary).
//!
//! Deals a three-seat game, shows the local hand at the bottom and lets the
//! player pick cards with the mouse. It uses crossterm for input and the
//! framebuffer renderer from `card_table::term`.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use card_table::core::{CardTable, Deck, Seat, TableConfig};
use card_table::input::{handle_event, should_quit};
use card_table::term::{CellScale, FrameBuffer, TableView, TerminalRenderer, Viewport};
use card_table::types::{SeatPosition, TableAction};

const SEATS: usize = 3;
const HAND_SIZE: usize = 17;

/// "1" or "true" marks the local seat as automated (cards slide instead of lift).
const LOCAL_AUTOMATED_ENV: &str = "CARD_TABLE_LOCAL_AUTOMATED";

fn main() -> Result<()> {
    card_table::telemetry::init_tracing()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut table = CardTable::new(
        Deck::standard(),
        vec![
            Seat::local("you").with_automated(local_automated()),
            Seat::robot("west", SeatPosition::Left),
            Seat::robot("east", SeatPosition::Right),
        ],
        TableConfig::from_env(),
        CellScale::default().table_size(Viewport::new(w, h)),
    )?;
    let view = TableView::with_scale(table.atlas().clone(), CellScale::default());

    let mut seed = initial_seed();
    deal(&mut table, seed)?;

    let mut fb = FrameBuffer::new(w, h);
    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&mut table, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let ev = event::read()?;
        if let Event::Key(key) = ev {
            if key.kind == KeyEventKind::Press && should_quit(key) {
                break;
            }
        }
        if let Event::Resize(..) = ev {
            term.invalidate();
            continue;
        }

        let Some(action) = handle_event(&ev) else {
            continue;
        };
        let local = table.local_seat().seat_index();
        debug!(action = action.as_str(), "table action");
        match action {
            TableAction::Select { column, row } => {
                view.handle_press(&mut table, column, row);
            }
            TableAction::PlaySelected => {
                match table.play_selected(local) {
                    Ok(played) => info!(cards = played.len(), "local play"),
                    Err(err) => warn!(%err, "local play rejected"),
                }
            }
            TableAction::ToggleRivalHands => {
                let show = !table.show_rival_hands();
                table.set_show_rival_hands(show);
            }
            TableAction::Redeal => {
                seed = seed.wrapping_add(1);
                table.reset();
                deal(&mut table, seed)?;
            }
            TableAction::ClearTrick => table.clear_trick(),
        }
    }

    let snapshot = serde_json::to_string(&table.snapshot())?;
    info!(%snapshot, "final table");
    Ok(())
}

/// Deal fresh hands and hand the kitty to seat 0.
fn deal(table: &mut CardTable, seed: u32) -> Result<()> {
    let dealt = table.deck().deal(seed, SEATS, HAND_SIZE)?;
    for (seat, hand) in dealt.hands.into_iter().enumerate() {
        table.deal_hand(seat, hand)?;
    }
    table.award_kitty(0, dealt.kitty)?;
    info!(seed, "new deal");
    Ok(())
}

fn initial_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}

fn local_automated() -> bool {
    std::env::var(LOCAL_AUTOMATED_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
