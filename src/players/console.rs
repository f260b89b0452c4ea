use std::collections::HashSet;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::{Arc, Mutex};

use itertools::Itertools;

use crate::actions::Move;
use crate::board::Snapshot;
use crate::enums::Player;
use crate::errors::{QuoridorError, QuoridorResult};
use crate::player_system::PlayerStrategy;
use crate::settings::{Settings, DEFAULT_WALL_LENGTH};

/// Takes its moves from a human at a terminal.
///
/// Moves are entered in Glendenning notation: `e8` moves the pawn, `c3h` or
/// `c3v` places a wall. Unparseable input is reported and the prompt repeats.
/// Whether a parsed move is legal is left to the game master.
///
/// Several seats at one terminal must read through the same buffered input,
/// see [`ConsolePlayer::shared`].
pub struct ConsolePlayer<R, W> {
    input: Arc<Mutex<R>>,
    output: W,
    wall_length: usize,
}

/// Buffered standard input that console seats can share
pub type SharedStdin = Arc<Mutex<BufReader<Stdin>>>;

pub fn shared_stdin() -> SharedStdin {
    Arc::new(Mutex::new(BufReader::new(io::stdin())))
}

impl ConsolePlayer<BufReader<Stdin>, Stdout> {
    pub fn stdio(stdin: &SharedStdin) -> Self {
        Self::shared(Arc::clone(stdin), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::shared(Arc::new(Mutex::new(input)), output)
    }

    /// A player reading its moves from `input`, which other players may also
    /// hold. Each move is one line taken from the shared buffer.
    pub fn shared(input: Arc<Mutex<R>>, output: W) -> Self {
        ConsolePlayer {
            input,
            output,
            wall_length: DEFAULT_WALL_LENGTH,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, board: &Snapshot, me: Player, hint: &str) -> io::Result<()> {
        let walls = board.walls_available().get(&me).copied().unwrap_or(0);
        writeln!(self.output, "{} ({} walls left), pawn moves: {}", me, walls, hint)?;
        write!(self.output, "Enter move for {} --> ", me)?;
        self.output.flush()
    }
}

impl<R: BufRead + Send, W: Write + Send> PlayerStrategy for ConsolePlayer<R, W> {
    fn set_up(&mut self, settings: &Settings) {
        self.wall_length = settings.wall_length();
    }

    fn get_move(
        &mut self,
        board: &Snapshot,
        me: Player,
        valid_pawn_moves: &HashSet<Move>,
    ) -> QuoridorResult<Move> {
        let hint = valid_pawn_moves.iter().sorted().join(" ");
        loop {
            self.prompt(board, me, &hint)?;
            let mut line = String::new();
            let read = self
                .input
                .lock()
                .map_err(|_| QuoridorError::Io("input lock poisoned".to_string()))?
                .read_line(&mut line)?;
            if read == 0 {
                return Err(QuoridorError::Io("input closed".to_string()));
            }
            match Move::parse(me, &line, self.wall_length) {
                Ok(mv) => return Ok(mv),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::geometry::{Square, Wall};
    use std::io::Cursor;

    fn snapshot() -> std::sync::Arc<Snapshot> {
        let mut board = Board::create_empty(9, &[Player::Player1, Player::Player2], 8);
        board.move_pawn(Player::Player1, Square::at('e', 9));
        board.move_pawn(Player::Player2, Square::at('e', 1));
        board.snapshot()
    }

    fn moves() -> HashSet<Move> {
        [('e', 8), ('d', 9), ('f', 9)]
            .into_iter()
            .map(|(c, r)| Move::pawn_move(Player::Player1, Square::at(c, r)))
            .collect()
    }

    #[test]
    fn test_reads_pawn_move() {
        let mut player = ConsolePlayer::new(Cursor::new("e8\n"), Vec::new());
        let mv = player
            .get_move(&snapshot(), Player::Player1, &moves())
            .unwrap();
        assert_eq!(mv, Move::pawn_move(Player::Player1, Square::at('e', 8)));

        let output = String::from_utf8(player.into_output()).unwrap();
        assert!(output.contains("PLAYER1 (8 walls left), pawn moves: d9 e8 f9"));
        assert!(output.contains("Enter move for PLAYER1 --> "));
    }

    #[test]
    fn test_reads_wall_with_configured_length() {
        let settings = Settings::builder().wall_length(3).build().unwrap();
        let mut player = ConsolePlayer::new(Cursor::new("c3h\n"), Vec::new());
        player.set_up(&settings);
        let mv = player
            .get_move(&snapshot(), Player::Player2, &HashSet::new())
            .unwrap();
        let wall = Wall::horizontal('c', 3).with_length(3).unwrap();
        assert_eq!(mv, Move::wall_move(Player::Player2, wall));
    }

    #[test]
    fn test_reprompts_after_bad_input() {
        let mut player = ConsolePlayer::new(Cursor::new("\nE5\ne5x\nf9\n"), Vec::new());
        let mv = player
            .get_move(&snapshot(), Player::Player1, &moves())
            .unwrap();
        assert_eq!(mv, Move::pawn_move(Player::Player1, Square::at('f', 9)));

        let output = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(output.matches("Enter move for PLAYER1").count(), 4);
        assert!(output.contains("Empty move"));
        assert!(output.contains("Invalid column 'E'"));
        assert!(output.contains("Invalid wall orientation 'x'"));
    }

    #[test]
    fn test_seats_share_one_input() {
        let input = Arc::new(Mutex::new(Cursor::new("e8\ne2\nd8\n")));
        let mut first = ConsolePlayer::shared(Arc::clone(&input), Vec::new());
        let mut second = ConsolePlayer::shared(Arc::clone(&input), Vec::new());

        let board = snapshot();
        assert_eq!(
            first.get_move(&board, Player::Player1, &moves()),
            Ok(Move::pawn_move(Player::Player1, Square::at('e', 8)))
        );
        assert_eq!(
            second.get_move(&board, Player::Player2, &HashSet::new()),
            Ok(Move::pawn_move(Player::Player2, Square::at('e', 2)))
        );
        assert_eq!(
            first.get_move(&board, Player::Player1, &moves()),
            Ok(Move::pawn_move(Player::Player1, Square::at('d', 8)))
        );
        assert_eq!(
            second.get_move(&board, Player::Player2, &HashSet::new()),
            Err(QuoridorError::Io("input closed".to_string()))
        );
    }

    #[test]
    fn test_closed_input() {
        let mut player = ConsolePlayer::new(Cursor::new(""), Vec::new());
        assert_eq!(
            player.get_move(&snapshot(), Player::Player1, &moves()),
            Err(QuoridorError::Io("input closed".to_string()))
        );
    }
}
