use card_table::core::{CardTable, Deck, RecordingCanvas, Seat, TableConfig, TableSnapshot};
use card_table::types::{Card, SeatPosition, TableSize};

fn c(s: &str) -> Card {
    Card::from_str(s).unwrap()
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut table = CardTable::new(
        Deck::standard(),
        vec![
            Seat::local("me"),
            Seat::robot("west", SeatPosition::Left),
            Seat::robot("east", SeatPosition::Right),
        ],
        TableConfig::default(),
        TableSize::new(900, 700),
    )
    .unwrap();
    table.deal_hand(0, vec![c("3h"), c("4h"), c("bj")]).unwrap();
    table.award_kitty(0, vec![c("2s")]).unwrap();
    table.deal_hand(1, vec![c("7c"), c("8c")]).unwrap();
    table.play_cards(1, &[c("8c")]).unwrap();
    table.render(&mut RecordingCanvas::new());
    table.handle_pointer(360, 600);

    let snapshot = table.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: TableSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);

    let me = back.seat(0).unwrap();
    assert!(me.is_lord);
    assert!(me.is_local);
    assert_eq!(me.hand, vec![c("3h"), c("4h"), c("2s"), c("bj")]);
    assert_eq!(me.selected, vec![c("3h")]);

    let trick = back.trick.as_ref().unwrap();
    assert_eq!(trick.seat, Some(1));
    assert_eq!(trick.cards, vec![c("8c")]);
}

#[test]
fn snapshot_json_uses_stable_names() {
    let table = CardTable::new(
        Deck::standard(),
        vec![Seat::local("me"), Seat::robot("east", SeatPosition::Right)],
        TableConfig::default(),
        TableSize::new(900, 700),
    )
    .unwrap();

    let value = serde_json::to_value(table.snapshot()).unwrap();
    assert_eq!(value["width"], 900);
    assert_eq!(value["show_rival_hands"], false);
    assert_eq!(value["seats"][1]["name"], "east");
    assert_eq!(value["seats"][1]["position"], "right");
    assert!(value["trick"].is_null());
}
