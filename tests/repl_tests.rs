mod common;

use common::{board_with_secret, parse};
use mastermind::repl::{describe, execute, parse_combination, Command, Outcome};
use mastermind::{BoardConfig, CommandError, GameError, GameState, PinColor};

#[test]
fn test_parse_guess() {
    assert_eq!(
        Command::parse("guess r G b y").unwrap(),
        Command::Guess(vec![PinColor::Red, PinColor::Green, PinColor::Blue, PinColor::Yellow])
    );
    assert_eq!(
        Command::parse("  GUESS   k  d ").unwrap(),
        Command::Guess(vec![PinColor::Black, PinColor::Gold])
    );
}

#[test]
fn test_parse_guess_errors() {
    assert_eq!(
        Command::parse("guess r x b y"),
        Err(CommandError::Game(GameError::UnknownSymbol('x')))
    );
    assert_eq!(
        Command::parse("guess red green"),
        Err(CommandError::InvalidToken("red".to_string()))
    );
}

#[test]
fn test_parse_combination_empty() {
    assert_eq!(parse_combination("").unwrap(), Vec::<PinColor>::new());
}

#[test]
fn test_parse_reset() {
    assert_eq!(Command::parse("reset").unwrap(), Command::Reset(None));
    assert_eq!(
        Command::parse("reset 5 8 10").unwrap(),
        Command::Reset(Some(BoardConfig::new(5, 8, 10)))
    );
    assert_eq!(
        Command::parse("reset 5 8"),
        Err(CommandError::InvalidGeometry(2))
    );
    assert_eq!(
        Command::parse("reset 5 -8 10"),
        Err(CommandError::InvalidNumber("-8".to_string()))
    );
}

#[test]
fn test_parse_other_commands() {
    assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
    assert_eq!(Command::parse("EXIT").unwrap(), Command::Quit);
    assert_eq!(Command::parse("colors").unwrap(), Command::Colors);
    assert_eq!(Command::parse("help").unwrap(), Command::Help);
    assert_eq!(Command::parse("").unwrap(), Command::Help);
    assert_eq!(Command::parse("dance now").unwrap(), Command::Help);
}

#[test]
fn test_execute_guess_until_won() {
    let mut board = board_with_secret(&parse("RGBY"), 12);

    let outcome = execute(&mut board, Command::parse("guess o o o o").unwrap()).unwrap();
    assert_eq!(outcome, Outcome::Guessed(GameState::InProgress));
    assert_eq!(describe(&outcome), None);

    let outcome = execute(&mut board, Command::parse("guess r g b y").unwrap()).unwrap();
    assert_eq!(outcome, Outcome::Guessed(GameState::Won));
    assert!(describe(&outcome).is_some());

    let err = execute(&mut board, Command::parse("guess r g b y").unwrap()).unwrap_err();
    assert_eq!(err, CommandError::Game(GameError::GameOver(GameState::Won)));
    assert_eq!(board.guesses().len(), 2);
}

#[test]
fn test_execute_guess_wrong_length() {
    let mut board = board_with_secret(&parse("RGBY"), 12);
    let err = execute(&mut board, Command::parse("guess r g").unwrap()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "must specify 4 pin symbols, got 2"
    );
}

#[test]
fn test_execute_reset() {
    let mut board = board_with_secret(&parse("RGBY"), 12);
    board.guess(parse("OOOO")).unwrap();

    let outcome = execute(&mut board, Command::Reset(None)).unwrap();
    assert_eq!(outcome, Outcome::Reset(BoardConfig::new(4, 6, 12)));
    assert!(board.guesses().is_empty());

    let outcome = execute(&mut board, Command::parse("reset 3 4 5").unwrap()).unwrap();
    assert_eq!(outcome, Outcome::Reset(BoardConfig::new(3, 4, 5)));
    assert_eq!(
        describe(&outcome).unwrap(),
        "New game: 3 pins, 4 colors, 5 guesses."
    );

    let err = execute(&mut board, Command::parse("reset 3 13 5").unwrap()).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Game(GameError::InvalidConfiguration { .. })
    ));
    assert_eq!(board.config(), BoardConfig::new(3, 4, 5));
}

#[test]
fn test_execute_colors() {
    let mut board = board_with_secret(&parse("RGB"), 12);
    let outcome = execute(&mut board, Command::Colors).unwrap();
    assert_eq!(outcome, Outcome::Colors(PinColor::palette(6).to_vec()));
    assert_eq!(
        describe(&outcome).unwrap(),
        "Colors in play: Y=yellow, O=orange, R=red, G=green, B=blue, C=cyan"
    );
}
