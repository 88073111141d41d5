/*
  Draughtsman, a draughts rules engine.
  Copyright (C) 2022 The Draughtsman Authors.

  Draughtsman is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Draughtsman is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Plays random games against itself and prints a summary, or runs perft from
//! the starting position.
//!
//! Usage: `selfplay [--games N] [--seed S] [--max-plies P] [--perft D]
//! [--debug | --quiet]`

use std::{env, process::exit};

use draughtsman::{perft::perft, Game, GameResult, Rules, Side};
use log::{error, info};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

#[derive(Debug)]
/// Options from the command line.
struct Options {
    games: u32,
    seed: u64,
    max_plies: u32,
    perft: Option<u8>,
    log_level: LevelFilter,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            games: 100,
            seed: 2022,
            max_plies: 500,
            perft: None,
            log_level: LevelFilter::Info,
        }
    }
}

/// Parse the command line arguments, not counting the program name.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .ok_or_else(|| format!("{name} needs a value"))
                .cloned()
        };
        match arg.as_str() {
            "--games" => opts.games = parse_num(&value("--games")?)?,
            "--seed" => opts.seed = parse_num(&value("--seed")?)?,
            "--max-plies" => opts.max_plies = parse_num(&value("--max-plies")?)?,
            "--perft" => opts.perft = Some(parse_num(&value("--perft")?)?),
            "--debug" => opts.log_level = LevelFilter::Debug,
            "--quiet" => opts.log_level = LevelFilter::Warn,
            other => return Err(format!("unrecognized argument {other:?}")),
        }
    }
    Ok(opts)
}

fn parse_num<T: std::str::FromStr>(s: &str) -> Result<T, String> {
    s.parse().map_err(|_| format!("expected a number, got {s:?}"))
}

/// Play one random game with `rng` choosing the turns. Returns the result and
/// the number of turns played, or `None` for the result if the game was cut
/// off.
fn play_random(rng: &fastrand::Rng, rules: Rules, max_plies: u32) -> (Option<GameResult>, u32) {
    let mut game = Game::with_rules(rules);
    log::trace!("new game under {:?}", game.rules());
    let mut plies = 0;
    while plies < max_plies {
        let turns = game.legal_turns();
        if turns.is_empty() {
            break;
        }
        let turn = &turns[rng.usize(..turns.len())];
        if let Err(e) = game.play_turn(turn) {
            error!("legal turn {turn} was refused: {e}");
            break;
        }
        plies += 1;
    }
    (game.result(), plies)
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!(
                "usage: selfplay [--games N] [--seed S] [--max-plies P] [--perft D] [--debug | --quiet]"
            );
            exit(2);
        }
    };

    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .build();
    if TermLogger::init(
        opts.log_level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("could not start the logger");
    }
    log::debug!("options: {opts:?}");

    if let Some(depth) = opts.perft {
        println!("perft {depth}: {}", perft(&Game::new(), depth));
        return;
    }

    let rules = Rules {
        quiet_move_limit: Some(50),
        ..Rules::new()
    };
    let rng = fastrand::Rng::with_seed(opts.seed);
    let (mut light, mut dark, mut draws, mut unfinished) = (0, 0, 0, 0);
    let mut total_plies = 0u64;
    for i in 0..opts.games {
        let (result, plies) = play_random(&rng, rules, opts.max_plies);
        info!("game {i}: {result:?} after {plies} turns");
        total_plies += u64::from(plies);
        match result {
            Some(GameResult::Win(Side::Light)) => light += 1,
            Some(GameResult::Win(Side::Dark)) => dark += 1,
            Some(GameResult::Draw) => draws += 1,
            None => unfinished += 1,
        }
    }

    println!("games: {}", opts.games);
    println!("light wins: {light}");
    println!("dark wins: {dark}");
    println!("draws: {draws}");
    println!("unfinished: {unfinished}");
    if opts.games > 0 {
        println!(
            "average length: {:.1} turns",
            total_plies as f64 / f64::from(opts.games)
        );
    }
}
