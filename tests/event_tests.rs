use tictactoe::{Cell, GameApi, GameEngine, GameStatus, InputEvent, Player};

fn win_for_x(engine: &mut GameEngine) {
    for event in [0, 3, 1, 4, 2].map(InputEvent::CellSelected) {
        engine.handle_event(event);
    }
}

#[test]
fn test_cell_selected_places_mark() {
    let mut engine = GameEngine::new();
    engine.handle_event(InputEvent::CellSelected(4));

    assert_eq!(GameApi::cell(&engine, 4).unwrap(), Cell::Occupied(Player::X));
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_selecting_occupied_cell_is_ignored() {
    let mut engine = GameEngine::new();
    engine.handle_event(InputEvent::CellSelected(4));
    let before = engine.state();

    engine.handle_event(InputEvent::CellSelected(4));
    assert_eq!(engine.state(), before);
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_out_of_range_selection_is_ignored() {
    let mut engine = GameEngine::new();
    let before = engine.state();
    engine.handle_event(InputEvent::CellSelected(99));
    assert_eq!(engine.state(), before);
}

#[test]
fn test_selection_after_game_over_is_ignored() {
    let mut engine = GameEngine::new();
    win_for_x(&mut engine);
    let before = engine.state();

    engine.handle_event(InputEvent::CellSelected(8));
    assert_eq!(engine.state(), before);
    assert!(engine.status().is_terminal());
}

#[test]
fn test_undo_event_pops_last_move() {
    let mut engine = GameEngine::new();
    engine.handle_event(InputEvent::CellSelected(0));
    engine.handle_event(InputEvent::CellSelected(5));

    engine.handle_event(InputEvent::UndoRequested);
    assert_eq!(GameApi::cell(&engine, 5).unwrap(), Cell::Empty);
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_undo_event_with_empty_history_is_ignored() {
    let mut engine = GameEngine::new();
    let before = engine.state();
    engine.handle_event(InputEvent::UndoRequested);
    assert_eq!(engine.state(), before);
}

#[test]
fn test_undo_event_reopens_won_game() {
    let mut engine = GameEngine::new();
    win_for_x(&mut engine);
    assert_eq!(engine.winning_line(), Some([0, 1, 2]));

    engine.handle_event(InputEvent::UndoRequested);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_restart_event_resets() {
    let mut engine = GameEngine::new();
    win_for_x(&mut engine);

    engine.handle_event(InputEvent::RestartRequested);
    assert_eq!(engine.state(), GameEngine::new().state());
    assert!(!engine.can_undo());
}

#[test]
fn test_fallible_cell_query() {
    let engine = GameEngine::new();
    assert_eq!(GameApi::cell(&engine, 0).unwrap(), Cell::Empty);
    assert!(GameApi::cell(&engine, 9).is_err());
}
