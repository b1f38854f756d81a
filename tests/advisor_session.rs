//! End-to-end resolver behavior over full games
//!
//! These tests drive the same resolve/learn/persist loop the interactive
//! session uses, with a scripted tutor in place of the console.

use std::path::Path;

use apprentice::{
    Advice, Advisor, MoveBook, Position,
    adapters::{InMemoryRepository, ScriptedTutor},
    app::App,
    tictactoe::{Game, GameOutcome, Player},
};

fn pos(value: usize) -> Position {
    Position::new(value).unwrap()
}

#[test]
fn test_first_lesson_is_recorded() {
    // The human opens in the center; the apprentice knows nothing and asks.
    let mut book = MoveBook::new();
    let mut game = Game::new();
    game.play(pos(4)).unwrap();

    let board_after_center = *game.current_state();
    let mut tutor = ScriptedTutor::new([pos(0)]);
    let advice = Advisor::resolve(&mut book, &board_after_center, &mut tutor).unwrap();

    assert_eq!(
        advice,
        Advice::Learned {
            position: pos(0),
            replaced: None,
        }
    );
    assert_eq!(tutor.consulted(), 1);
    assert_eq!(book.len(), 1);
    assert_eq!(
        book.recommendation(&board_after_center.key()),
        Some(pos(0)),
        "the board after X in the center should map to the taught cell"
    );
}

#[test]
fn test_second_encounter_needs_no_tutor() {
    let mut book = MoveBook::new();

    // First round: learn the reply to a center opening.
    let mut first = Game::new();
    first.play(pos(4)).unwrap();
    let mut tutor = ScriptedTutor::new([pos(0)]);
    Advisor::resolve(&mut book, first.current_state(), &mut tutor).unwrap();

    // Second round, same opening: the book answers by itself.
    let mut second = Game::new();
    second.play(pos(4)).unwrap();
    let mut silent_tutor = ScriptedTutor::new([]);
    let advice = Advisor::resolve(&mut book, second.current_state(), &mut silent_tutor).unwrap();

    assert_eq!(advice, Advice::Recalled(pos(0)));
    assert_eq!(silent_tutor.consulted(), 0);
}

#[test]
fn test_resolver_never_returns_an_occupied_cell() {
    // Walk a full tutored game; every resolved move must land on an empty
    // cell or the subsequent play() would fail.
    let mut book = MoveBook::new();
    let mut game = Game::new();
    let mut tutor = ScriptedTutor::new([pos(0), pos(2), pos(6), pos(7)]);

    for human_move in [4, 8, 1, 5] {
        if game.outcome().is_some() {
            break;
        }
        game.play(pos(human_move)).unwrap();
        if game.outcome().is_some() {
            break;
        }

        let advice = Advisor::resolve(&mut book, game.current_state(), &mut tutor).unwrap();
        assert!(
            game.current_state().is_empty(advice.position().value()),
            "resolved move must target an empty cell"
        );
        game.play(advice.position()).unwrap();
    }

    assert!(game.outcome().is_some() || game.moves().len() == 8);
}

#[test]
fn test_stale_entry_is_replaced_and_persisted() {
    let app = App::for_testing()
        .with_repository(InMemoryRepository::new())
        .build();
    let book_path = Path::new("session_book");

    let mut game = Game::new();
    game.play(pos(4)).unwrap();
    let board = *game.current_state();

    // Seed the book with a recommendation pointing at the occupied center.
    let mut book = MoveBook::new();
    book.learn(board.key(), pos(4));
    app.save_book(&book, book_path).unwrap();

    let mut tutor = ScriptedTutor::new([pos(8)]);
    let advice = Advisor::resolve(&mut book, &board, &mut tutor).unwrap();
    assert_eq!(
        advice,
        Advice::Learned {
            position: pos(8),
            replaced: Some(pos(4)),
        }
    );

    // Persist after the lesson, like the interactive session does.
    app.save_book(&book, book_path).unwrap();
    let reloaded = app.load_book(book_path).unwrap();
    assert_eq!(reloaded.recommendation(&board.key()), Some(pos(8)));
}

#[test]
fn test_tutored_game_can_end_in_apprentice_win() {
    // The tutor teaches O the replies that complete the left column while
    // the human ignores the threat.
    let mut book = MoveBook::new();
    let mut game = Game::new();
    let mut tutor = ScriptedTutor::new([pos(0), pos(3), pos(6)]);

    for human_move in [4, 8, 5] {
        game.play(pos(human_move)).unwrap();
        let advice = Advisor::resolve(&mut book, game.current_state(), &mut tutor).unwrap();
        game.play(advice.position()).unwrap();
    }

    assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::O)));
    assert_eq!(book.len(), 3, "each consulted position becomes a lesson");
}
