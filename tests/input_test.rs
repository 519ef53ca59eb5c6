use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use tui_2048::app::Session;
use tui_2048::core::{Board, GameState};
use tui_2048::input::{handle_key_event, should_quit, terminal_swipe_tracker};
use tui_2048::reporter::NullSink;
use tui_2048::types::{Direction, GameAction};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn drag(from: (u16, u16), to: (u16, u16)) -> Option<GameAction> {
    let mut tracker = terminal_swipe_tracker();
    assert_eq!(
        tracker.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1)),
        None
    );
    tracker.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1));
    tracker.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1))
}

#[test]
fn arrows_and_wasd_map_to_the_same_moves() {
    let pairs = [
        (KeyCode::Up, 'w', Direction::Up),
        (KeyCode::Down, 's', Direction::Down),
        (KeyCode::Left, 'a', Direction::Left),
        (KeyCode::Right, 'd', Direction::Right),
    ];
    for (arrow, letter, dir) in pairs {
        let expected = Some(GameAction::Move(dir));
        assert_eq!(handle_key_event(key(arrow)), expected);
        assert_eq!(handle_key_event(key(KeyCode::Char(letter))), expected);
    }
    assert_eq!(handle_key_event(key(KeyCode::Enter)), None);
    assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
}

#[test]
fn quit_keys() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(key(KeyCode::Char('c'))));
    assert!(!should_quit(key(KeyCode::Left)));
}

#[test]
fn terminal_drags_become_moves() {
    // Four columns is the threshold; rows count double.
    assert_eq!(drag((10, 10), (20, 11)), Some(GameAction::Move(Direction::Right)));
    assert_eq!(drag((20, 10), (10, 9)), Some(GameAction::Move(Direction::Left)));
    assert_eq!(drag((10, 10), (11, 13)), Some(GameAction::Move(Direction::Down)));
    assert_eq!(drag((10, 10), (10, 7)), Some(GameAction::Move(Direction::Up)));

    // Too short.
    assert_eq!(drag((10, 10), (14, 10)), None);
    assert_eq!(drag((10, 10), (10, 12)), None);
    // Equal travel resolves vertically.
    assert_eq!(drag((10, 10), (16, 13)), Some(GameAction::Move(Direction::Down)));
}

#[test]
fn release_without_press_is_ignored() {
    let mut tracker = terminal_swipe_tracker();
    assert_eq!(
        tracker.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 50, 5)),
        None
    );
    assert!(!tracker.in_progress());
}

#[test]
fn swipe_and_key_drive_the_same_move() {
    let board = Board::from_rows([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);

    let mut by_key = Session::from_state(GameState::from_board(board, 0, 3), None, NullSink);
    let mut by_swipe = Session::from_state(GameState::from_board(board, 0, 3), None, NullSink);

    let action = handle_key_event(key(KeyCode::Left)).unwrap();
    by_key.handle(action);
    let action = drag((30, 5), (5, 5)).unwrap();
    by_swipe.handle(action);

    assert_eq!(by_key.snapshot(), by_swipe.snapshot());
    assert_eq!(by_key.state().score(), 4);
}
