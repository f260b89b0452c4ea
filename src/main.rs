use std::collections::HashMap;
use std::process;

use clap::Parser;

use quoridor::{
    shared_stdin, ConsolePlayer, GameMaster, GameOutcome, Player, PlayerStrategy, QuoridorResult,
    RandomPlayer, Settings,
};

/// Play Quoridor at the terminal.
///
/// Moves are entered in Glendenning notation: `e8` moves your pawn to e8,
/// `c3h` / `c3v` place a horizontal / vertical wall starting at c3.
#[derive(Parser, Debug)]
#[command(name = "quoridor", about = "Play Quoridor at the terminal")]
#[command(version)]
struct Cli {
    /// Play the four-player variant
    #[arg(long)]
    four_player: bool,

    /// Number of rows and columns (odd, 3 to 25)
    #[arg(long)]
    board_size: Option<usize>,

    /// Walls each player starts with
    #[arg(long)]
    walls: Option<u32>,

    /// Grooves covered by each wall
    #[arg(long)]
    wall_length: Option<usize>,

    /// Seat played by the computer (1-4); repeat for several
    #[arg(long = "random", value_name = "SEAT", value_parser = clap::value_parser!(u8).range(1..=4))]
    random: Vec<u8>,

    /// Seed for computer players
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> QuoridorResult<()> {
    let settings = build_settings(&cli)?;
    let stdin = shared_stdin();
    let mut strategies: HashMap<Player, Box<dyn PlayerStrategy>> = HashMap::new();
    for &player in settings.players() {
        let strategy: Box<dyn PlayerStrategy> = if cli.random.contains(&player.number()) {
            let random = match cli.seed {
                Some(seed) => RandomPlayer::with_seed(seed.wrapping_add(u64::from(player.number()))),
                None => RandomPlayer::new(),
            };
            Box::new(random)
        } else {
            Box::new(ConsolePlayer::stdio(&stdin))
        };
        strategies.insert(player, strategy);
    }

    let mut game = GameMaster::set_up_game(&settings, strategies)?;
    match game.play_game()? {
        GameOutcome::Won { winner, turns } => println!("{} wins after {} turns!", winner, turns),
        GameOutcome::TurnLimitReached { turns } => println!("No winner after {} turns", turns),
    }
    Ok(())
}

fn build_settings(cli: &Cli) -> QuoridorResult<Settings> {
    let defaults = if cli.four_player {
        Settings::default_four_player()
    } else {
        Settings::default_two_player()
    };
    let mut builder = defaults.to_builder();
    if let Some(size) = cli.board_size {
        builder = builder.board_size(size);
    }
    if let Some(walls) = cli.walls {
        builder = builder.walls_per_player(walls);
    }
    if let Some(length) = cli.wall_length {
        builder = builder.wall_length(length);
    }
    let settings = builder.build()?;

    for &seat in &cli.random {
        if !settings.players().iter().any(|p| p.number() == seat) {
            log::warn!("Ignoring --random {}: no such seat in this game", seat);
        }
    }
    Ok(settings)
}
