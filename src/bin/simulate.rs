use std::collections::{BTreeMap, HashMap};
use std::process;

use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use quoridor::{
    GameMaster, GameOutcome, Player, PlayerStrategy, QuoridorResult, RandomPlayer, Settings,
};

/// Play many games between random players and report the results.
#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Simulate Quoridor games between random players")]
struct Cli {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 100)]
    num_games: usize,

    /// Play the four-player variant
    #[arg(long)]
    four_player: bool,

    /// Number of rows and columns (odd, 3 to 25)
    #[arg(long)]
    board_size: Option<usize>,

    /// Moves after which a game is abandoned
    #[arg(long, default_value_t = 2000)]
    max_turns: usize,

    /// Base seed; game i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: usize,
    completed: usize,
    abandoned: usize,
    wins: BTreeMap<String, usize>,
    average_turns: f64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match build_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    log::info!(
        "Simulating {} games on a {}x{} board",
        cli.num_games,
        settings.board_size(),
        settings.board_size()
    );

    let results: Vec<QuoridorResult<GameOutcome>> = (0..cli.num_games)
        .into_par_iter()
        .map(|i| play_one(&settings, cli.seed.wrapping_add(i as u64), cli.max_turns))
        .collect();

    let mut outcomes = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                eprintln!("Game failed: {}", e);
                process::exit(1);
            }
        }
    }

    let summary = summarize(&settings, &outcomes);
    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_summary(&summary);
    }
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
    Ok(builder.build()?)
}

fn play_one(settings: &Settings, seed: u64, max_turns: usize) -> QuoridorResult<GameOutcome> {
    let strategies: HashMap<Player, Box<dyn PlayerStrategy>> = settings
        .players()
        .iter()
        .map(|&player| {
            let player_seed = seed.wrapping_mul(31).wrapping_add(u64::from(player.number()));
            let strategy = RandomPlayer::with_seed(player_seed);
            (player, Box::new(strategy) as Box<dyn PlayerStrategy>)
        })
        .collect();

    let mut game = GameMaster::set_up_game(settings, strategies)?.with_max_turns(max_turns);
    let outcome = game.play_game()?;
    log::debug!("Game with seed {}: {:?}", seed, outcome);
    Ok(outcome)
}

fn summarize(settings: &Settings, outcomes: &[GameOutcome]) -> Summary {
    let mut summary = Summary {
        games: outcomes.len(),
        wins: settings
            .players()
            .iter()
            .map(|player| (player.to_string(), 0))
            .collect(),
        ..Summary::default()
    };

    let mut total_turns = 0;
    for outcome in outcomes {
        match outcome {
            GameOutcome::Won { winner, turns } => {
                *summary.wins.entry(winner.to_string()).or_insert(0) += 1;
                summary.completed += 1;
                total_turns += turns;
            }
            GameOutcome::TurnLimitReached { .. } => summary.abandoned += 1,
        }
    }
    if summary.completed > 0 {
        summary.average_turns = total_turns as f64 / summary.completed as f64;
    }
    summary
}

fn print_summary(summary: &Summary) {
    println!("Quoridor Simulation");
    println!("===================");
    println!("Games played: {}", summary.games);
    println!("Completed: {}", summary.completed);
    println!("Abandoned at turn limit: {}", summary.abandoned);
    println!("Average turns per completed game: {:.1}", summary.average_turns);
    println!();
    for (player, &wins) in &summary.wins {
        let win_rate = if summary.completed > 0 {
            (wins as f64 / summary.completed as f64) * 100.0
        } else {
            0.0
        };
        println!("{}: {} wins ({:.1}%)", player, wins, win_rate);
    }
}
