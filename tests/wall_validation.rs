use quoridor::{
    path_to_goal_exists, Board, Move, Orientation, Player, RulesError, RulesGovernor, Settings,
    Vertex, Wall,
};

fn set_up(settings: &Settings) -> (Board, RulesGovernor) {
    let mut board = Board::create_from_settings(settings);
    let governor = RulesGovernor::create_and_set_up_pawns(&mut board, settings);
    (board, governor)
}

fn horizontal(column: char, row: i32, length: usize) -> Wall {
    Wall::horizontal(column, row).with_length(length).unwrap()
}

fn vertical(column: char, row: i32, length: usize) -> Wall {
    Wall::vertical(column, row).with_length(length).unwrap()
}

fn is_valid(board: &Board, governor: &RulesGovernor, player: Player, wall: Wall) -> bool {
    governor
        .is_valid_wall_move(board, &Move::wall_move(player, wall))
        .unwrap()
}

/// Validates then places, the way a game master would.
fn play(board: &mut Board, governor: &RulesGovernor, player: Player, wall: Wall) {
    assert!(is_valid(board, governor, player, wall), "{} rejected", wall);
    board.place_wall(&wall, player);
}

#[test]
fn full_width_wall_is_rejected() {
    let (board, governor) = set_up(&Settings::default_two_player());
    assert!(!is_valid(&board, &governor, Player::Player1, horizontal('a', 4, 9)));
    assert!(is_valid(&board, &governor, Player::Player1, horizontal('a', 4, 8)));
}

#[test]
fn overlapping_grooves_are_rejected() {
    let (mut board, governor) = set_up(&Settings::default_two_player());
    play(&mut board, &governor, Player::Player1, horizontal('c', 3, 2));

    assert!(!is_valid(&board, &governor, Player::Player2, horizontal('c', 3, 2)));
    assert!(!is_valid(&board, &governor, Player::Player2, horizontal('d', 3, 2)));
    assert!(!is_valid(&board, &governor, Player::Player2, horizontal('b', 3, 2)));
    assert!(is_valid(&board, &governor, Player::Player2, horizontal('e', 3, 2)));
    assert!(is_valid(&board, &governor, Player::Player2, horizontal('a', 3, 2)));
}

#[test]
fn crossing_walls_are_rejected() {
    let (mut board, governor) = set_up(&Settings::default_two_player());
    play(&mut board, &governor, Player::Player1, horizontal('c', 3, 2));

    assert!(!is_valid(&board, &governor, Player::Player2, vertical('c', 3, 2)));
    assert!(is_valid(&board, &governor, Player::Player2, vertical('c', 2, 2)));
    assert!(is_valid(&board, &governor, Player::Player2, vertical('d', 3, 2)));
    assert!(is_valid(&board, &governor, Player::Player2, vertical('b', 3, 2)));
}

#[test]
fn crossing_is_checked_even_without_shared_grooves() {
    let (mut board, governor) = set_up(&Settings::default_two_player());
    let first = vertical('e', 4, 2);
    play(&mut board, &governor, Player::Player1, first);

    let second = horizontal('e', 4, 2);
    assert!(first
        .covered_grooves()
        .iter()
        .all(|g| !second.covered_grooves().contains(g)));
    assert_eq!(first.covered_vertices(), vec![Vertex::at('e', 4)]);
    assert!(!is_valid(&board, &governor, Player::Player2, second));
}

#[test]
fn last_opening_cannot_be_closed() {
    let (mut board, governor) = set_up(&Settings::default_two_player());
    play(&mut board, &governor, Player::Player2, horizontal('d', 8, 3));
    play(&mut board, &governor, Player::Player2, vertical('c', 9, 1));

    assert!(!is_valid(&board, &governor, Player::Player2, vertical('f', 9, 1)));
    assert!(is_valid(&board, &governor, Player::Player2, vertical('g', 9, 1)));
}

#[test]
fn every_player_on_the_board_is_protected() {
    let (mut board, governor) = set_up(&Settings::default_four_player());
    play(&mut board, &governor, Player::Player1, horizontal('a', 4, 1));
    play(&mut board, &governor, Player::Player2, horizontal('a', 5, 1));

    // Player three starts on a5; closing its right side would trap it.
    assert!(!is_valid(&board, &governor, Player::Player1, vertical('a', 5, 1)));
    assert!(is_valid(&board, &governor, Player::Player1, vertical('a', 6, 1)));
}

#[test]
fn walls_run_out() {
    let settings = Settings::builder().walls_per_player(1).build().unwrap();
    let (mut board, governor) = set_up(&settings);
    play(&mut board, &governor, Player::Player1, horizontal('a', 4, 2));

    assert!(!is_valid(&board, &governor, Player::Player1, horizontal('e', 4, 2)));
    assert!(is_valid(&board, &governor, Player::Player2, horizontal('e', 4, 2)));
}

#[test]
fn validation_leaves_board_untouched() {
    let (mut board, governor) = set_up(&Settings::default_two_player());
    play(&mut board, &governor, Player::Player2, horizontal('d', 8, 3));
    let before = board.snapshot();

    for wall in [vertical('c', 9, 1), vertical('f', 9, 1), horizontal('a', 4, 9)] {
        is_valid(&board, &governor, Player::Player1, wall);
        assert_eq!(*board.snapshot(), *before);
    }
    for player in [Player::Player1, Player::Player2] {
        assert_eq!(path_to_goal_exists(player, &mut board, &governor), Ok(true));
        assert_eq!(*board.snapshot(), *before);
    }
}

#[test]
fn pawn_move_is_not_a_wall_move() {
    let (board, governor) = set_up(&Settings::default_two_player());
    let mv = Move::parse(Player::Player1, "e8", 2).unwrap();
    assert!(matches!(
        governor.is_valid_wall_move(&board, &mv),
        Err(RulesError::InvalidArgument { .. })
    ));
}

#[test]
fn parsed_walls_use_the_configured_length() {
    let settings = Settings::builder().wall_length(3).build().unwrap();
    let (board, governor) = set_up(&settings);
    let mv = Move::parse(Player::Player1, "g4h", settings.wall_length()).unwrap();
    let wall = mv.wall().unwrap();
    assert_eq!(wall.orientation(), Orientation::Horizontal);
    assert_eq!(wall.length(), 3);
    // g4, h4, i4
    assert_eq!(governor.is_valid_wall_move(&board, &mv), Ok(true));
    let mv = Move::parse(Player::Player1, "h4h", settings.wall_length()).unwrap();
    assert_eq!(governor.is_valid_wall_move(&board, &mv), Ok(false));
}
