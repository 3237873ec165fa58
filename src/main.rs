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
mod puzzle;
mod puzzle_data;
mod store;
mod selection;
mod game;

use std::{process::ExitCode, ffi::OsString};
use clap::Parser;
use game::Game;
use store::FileStore;

#[derive(Parser)]
#[command(name = "Show")]
struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = "wordsearch.json")]
    store: OsString,
    #[arg(short, long, value_name = "KEY")]
    key: Option<String>,
    // Cells to click on in order
    #[arg(long, value_name = "X,Y", value_parser = parse_position)]
    select: Vec<(i32, i32)>,
}

fn parse_position(s: &str) -> Result<(i32, i32), String> {
    let Some((x, y)) = s.split_once(',')
    else {
        return Err("expected X,Y".to_string());
    };

    let x = x.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<i32>().map_err(|e| e.to_string())?;

    Ok((x, y))
}

fn print_board(game: &Game) {
    for (y, row) in game.board().iter().enumerate() {
        for (x, letter) in row.iter().enumerate() {
            if game.is_selected(x as i32, y as i32) {
                print!("[{}]", letter);
            } else {
                print!(" {} ", letter);
            }
        }

        println!();
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let store = FileStore::new(&cli.store);

    let mut game = match Game::load(cli.key.as_deref(), &store) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}: {}", cli.store.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    for &(x, y) in cli.select.iter() {
        game.select(x, y);
    }

    print_board(&game);

    println!();

    for word in game.puzzle().words() {
        println!("{}", word);
    }

    ExitCode::SUCCESS
}
