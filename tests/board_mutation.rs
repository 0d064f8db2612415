use poker_grid::board::{Board, Pos};
use poker_grid::cards::parse_cards;
use poker_grid::deck::Deck;
use poker_grid::mutate::{compact, replenish};

#[test]
fn compact_preserves_column_order_everywhere() {
    let mut b = Board::from_rows([
        "2c .  7h .  Ks",
        "3c .  .  .  .",
        ".  9d 8h .  .",
        "4c .  .  .  .",
        ".  10d .  .  Qs",
    ])
    .unwrap();
    compact(&mut b);

    let expect = Board::from_rows([
        ".  .  .  .  .",
        ".  .  .  .  .",
        "2c .  .  .  .",
        "3c 9d 7h .  Ks",
        "4c 10d 8h .  Qs",
    ])
    .unwrap();
    assert_eq!(b, expect);
}

#[test]
fn compact_twice_changes_nothing() {
    let mut b = Board::from_rows([
        ".  Ah .  3d .",
        ".  .  .  .  .",
        "Kc .  .  .  9s",
        ".  .  5h .  .",
        ".  .  .  .  .",
    ])
    .unwrap();
    compact(&mut b);
    let once = b.clone();
    compact(&mut b);
    assert_eq!(b, once, "compaction must be idempotent");
}

#[test]
fn replenishment_order_is_row_major() {
    let mut b = Board::from_rows([
        ".  .  .  .  .",
        ".  .  .  .  .",
        ".  .  .  .  .",
        ".  .  .  .  .",
        "2c 3c 4c 5c 6c",
    ])
    .unwrap();
    // 20 empties, a 3-card deck: only (0,0) (0,1) (0,2) get filled.
    let mut deck = Deck::from_cards(parse_cards("7c 8c 9c").unwrap());
    let filled = replenish(&mut b, &mut deck);
    assert_eq!(filled, 3);
    assert_eq!(b.card_at(Pos::new(0, 0)), Some("9c".parse().unwrap()));
    assert_eq!(b.card_at(Pos::new(0, 1)), Some("8c".parse().unwrap()));
    assert_eq!(b.card_at(Pos::new(0, 2)), Some("7c".parse().unwrap()));
    assert!(b.is_empty_at(Pos::new(0, 3)));
    assert!(b.is_empty_at(Pos::new(1, 0)));
    assert!(deck.is_empty());
}

#[test]
fn exhausted_deck_leaves_board_under_populated() {
    let mut b = Board::new();
    let mut deck = Deck::from_cards(parse_cards("Ah Kh Qh").unwrap());
    let filled = replenish(&mut b, &mut deck);
    assert_eq!(filled, 3);
    assert_eq!(b.occupied_count(), 3);
    assert_eq!(replenish(&mut b, &mut deck), 0);
}

#[test]
fn compact_and_replenish_conserve_the_card_total() {
    let mut board = Board::new();
    let mut deck = Deck::standard();
    deck.shuffle_seeded(99);
    replenish(&mut board, &mut deck);
    assert_eq!(deck.len() + board.occupied_count(), 52);

    // Remove an arbitrary clump; the two phases move cards, never mint them.
    let mut removed = Vec::new();
    for pos in [Pos::new(2, 2), Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 4)] {
        removed.push(board.take(pos).unwrap());
    }
    assert_eq!(deck.len() + board.occupied_count() + removed.len(), 52);
    compact(&mut board);
    replenish(&mut board, &mut deck);
    assert_eq!(deck.len() + board.occupied_count() + removed.len(), 52);
    assert!(board.is_full());
    assert_eq!(deck.len(), 52 - 25 - removed.len());
}
