use tictactoe::{GameApi, GameEngine, GridView, InputEvent};

#[test]
fn test_fresh_view() {
    let engine = GameEngine::new();
    let view = GridView::snapshot(&engine);

    assert!(view.cells().iter().all(|&c| c == '.'));
    assert!((0..9).all(|i| !view.is_highlighted(i)));
    assert_eq!(view.result_text(), "");
    assert!(!view.undo_enabled());
}

#[test]
fn test_view_mirrors_moves() {
    let mut engine = GameEngine::new();
    engine.handle_event(InputEvent::CellSelected(0));
    engine.handle_event(InputEvent::CellSelected(4));

    let view = GridView::snapshot(&engine);
    assert_eq!(view.cells()[0], 'X');
    assert_eq!(view.cells()[4], 'O');
    assert_eq!(view.cells()[8], '.');
    assert!(view.undo_enabled());
    assert_eq!(view.result_text(), "");
}

#[test]
fn test_view_highlights_winning_line() {
    let mut engine = GameEngine::new();
    for index in [0, 3, 1, 4, 2] {
        engine.handle_event(InputEvent::CellSelected(index));
    }

    let view = GridView::snapshot(&engine);
    assert_eq!(view.result_text(), "X Wins!");
    for index in [0, 1, 2] {
        assert!(view.is_highlighted(index));
    }
    for index in 3..9 {
        assert!(!view.is_highlighted(index));
    }

    let rendered = view.to_string();
    assert!(rendered.contains("[X]"));
    assert!(rendered.contains("X Wins!"));
}

#[test]
fn test_view_after_draw() {
    let mut engine = GameEngine::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        engine.handle_event(InputEvent::CellSelected(index));
    }

    let view = GridView::snapshot(&engine);
    assert_eq!(view.result_text(), "Draw!");
    assert!((0..9).all(|i| !view.is_highlighted(i)));
    assert!(view.cells().iter().all(|&c| c != '.'));
}

#[test]
fn test_view_clears_after_restart() {
    let mut engine = GameEngine::new();
    for index in [0, 3, 1, 4, 2] {
        engine.handle_event(InputEvent::CellSelected(index));
    }
    engine.handle_event(InputEvent::RestartRequested);

    let view = GridView::snapshot(&engine);
    assert!(view.cells().iter().all(|&c| c == '.'));
    assert_eq!(view.result_text(), "");
    assert!(!view.undo_enabled());
}
