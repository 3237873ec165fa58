// Wordsearch – A daily word search puzzle
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

mod grid;
mod build;
mod dictionary;
mod directions;
mod word_finder;
mod counts;
mod puzzle;
mod puzzle_data;
mod store;

use std::{process::ExitCode, ffi::OsString};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use build::GenerateConfig;
use directions::Directions;
use puzzle::Puzzle;
use store::{FileStore, Store};
use log::info;

// Builds one puzzle and saves it to the store. This is meant to be
// run once a day, for example from cron at five past midnight
// (“5 0 * * *”) so that the date is already correct.
#[derive(Parser)]
#[command(name = "Generate")]
struct Cli {
    #[arg(short, long, value_name = "FILE", required = true)]
    dictionary: Vec<OsString>,
    #[arg(short, long, value_name = "FILE", default_value = "wordsearch.json")]
    store: OsString,
    #[arg(short, long, value_name = "KEY")]
    key: Option<String>,
    #[arg(short = 'W', long, default_value_t = 10)]
    width: u32,
    #[arg(short = 'H', long, default_value_t = 10)]
    height: u32,
    #[arg(short, long, value_name = "LENGTH", default_value_t = 3)]
    minimum_length: usize,
    #[arg(short = 'M', long, value_name = "LENGTH", default_value_t = 10)]
    maximum_length: usize,
    #[arg(long)]
    no_diagonals: bool,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short = 'r', long)]
    human_readable: bool,
}

impl Cli {
    fn config(&self) -> GenerateConfig {
        GenerateConfig {
            width: self.width,
            height: self.height,
            min_length: self.minimum_length,
            max_length: self.maximum_length,
            diagonals: !self.no_diagonals,
        }
    }
}

fn print_grid(puzzle: &Puzzle, counts: &counts::GridCounts) {
    for y in 0..puzzle.height() {
        for x in 0..puzzle.width() {
            print!("  {}   ", puzzle.at(x, y));
        }

        println!();

        for x in 0..puzzle.width() {
            let counts = counts.at(x, y);
            print!("{:>2} {:<3}", counts.starts, counts.visits);
        }

        println!();
    }
}

fn print_human_readable(key: &str, puzzle: &Puzzle, diagonals: bool) {
    let counts = build::count_visits(
        puzzle.grid(),
        puzzle.words(),
        Directions::new(diagonals),
    );

    println!("{}\n", key);

    print_grid(puzzle, &counts);

    println!(
        "\n{} words, {} filler letters\n",
        puzzle.words().len(),
        counts.n_filler_cells(),
    );

    let mut x = 0;

    for word in puzzle.words() {
        let length = word.chars().count();

        if x > 0 && x + 1 + length > 80 {
            println!();
            x = 0;
        }

        if x != 0 {
            print!(" ");
            x += 1;
        }

        print!("{}", word);

        x += length;
    }

    println!();
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let dictionary = match dictionary::read_word_list(cli.dictionary.iter()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = cli.config();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let puzzle = match build::generate(&config, &dictionary, &mut rng) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut store = FileStore::new(&cli.store);

    let key = match cli.key {
        Some(ref key) => key.clone(),
        None => match store.fresh_key() {
            Ok(key) => key,
            Err(e) => {
                eprintln!("{}: {}", cli.store.to_string_lossy(), e);
                return ExitCode::FAILURE;
            },
        },
    };

    if let Err(e) = puzzle_data::save(&puzzle, &key, &mut store) {
        eprintln!("{}: {}", cli.store.to_string_lossy(), e);
        return ExitCode::FAILURE;
    }

    info!("saved puzzle with {} words as {}", puzzle.words().len(), key);

    if cli.human_readable {
        print_human_readable(&key, &puzzle, config.diagonals);
    } else {
        println!("{}", key);
    }

    ExitCode::SUCCESS
}
