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

use wasm_bindgen::prelude::*;
use web_sys::console;
use super::build::{self, GenerateConfig};
use super::dictionary;
use super::game::Game;
use super::puzzle_data;
use super::store::{self, Record, Store};

fn show_error(message: &str) -> JsValue {
    console::log_1(&message.into());
    JsValue::from_str(message)
}

fn get_local_storage() -> Result<web_sys::Storage, String> {
    let Some(window) = web_sys::window()
    else {
        return Err("failed to get window".to_string());
    };

    match window.local_storage() {
        Ok(Some(local_storage)) => Ok(local_storage),
        Ok(None) => Err("local storage is None".to_string()),
        Err(_) => Err("error getting local storage".to_string()),
    }
}

// Each record is stored as a JSON object under its key
struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    fn new() -> Result<LocalStore, String> {
        Ok(LocalStore { storage: get_local_storage()? })
    }
}

impl Store for LocalStore {
    fn hset(&mut self, key: &str, fields: &[(&str, String)])
            -> Result<usize, store::Error>
    {
        let mut record = self.hgetall(key)?.unwrap_or_default();
        let n_added = store::merge_fields(&mut record, fields);

        let json = serde_json::to_string(&record)?;

        self.storage.set_item(key, &json)
            .map_err(|_| {
                store::Error::Backend(format!("error saving {}", key))
            })?;

        Ok(n_added)
    }

    fn hgetall(&self, key: &str) -> Result<Option<Record>, store::Error> {
        let item = self.storage.get_item(key)
            .map_err(|_| {
                store::Error::Backend(format!("error loading {}", key))
            })?;

        match item {
            Some(json) => {
                Ok(Some(serde_json::from_str::<Record>(&json)?))
            },
            None => Ok(None),
        }
    }
}

#[wasm_bindgen]
pub struct WordSearchGame {
    game: Game,
}

#[wasm_bindgen]
impl WordSearchGame {
    #[wasm_bindgen(constructor)]
    pub fn new(key: Option<String>) -> Result<WordSearchGame, JsValue> {
        let store = LocalStore::new().map_err(|e| show_error(&e))?;

        match Game::load(key.as_deref(), &store) {
            Ok(game) => Ok(WordSearchGame { game }),
            Err(e) => Err(show_error(&e.to_string())),
        }
    }

    pub fn width(&self) -> u32 {
        self.game.puzzle().width()
    }

    pub fn height(&self) -> u32 {
        self.game.puzzle().height()
    }

    pub fn letter(&self, x: u32, y: u32) -> String {
        let puzzle = self.game.puzzle();

        if x < puzzle.width() && y < puzzle.height() {
            puzzle.at(x, y).to_string()
        } else {
            String::new()
        }
    }

    pub fn words(&self) -> js_sys::Array {
        self.game.puzzle().words().iter()
            .map(|word| JsValue::from_str(word))
            .collect()
    }

    pub fn select(&mut self, x: i32, y: i32) {
        self.game.select(x, y);
    }

    pub fn is_selected(&self, x: i32, y: i32) -> bool {
        self.game.is_selected(x, y)
    }
}

// Builds a puzzle from the given word list with the default settings
// and saves it under a new key, which is returned. This is what the
// daily job runs.
#[wasm_bindgen]
pub fn generate_puzzle(word_list: &str) -> Result<String, JsValue> {
    let dictionary = dictionary::parse_word_list(word_list);

    let puzzle = build::generate(
        &GenerateConfig::default(),
        &dictionary,
        &mut rand::thread_rng(),
    ).map_err(|e| show_error(&e.to_string()))?;

    let mut store = LocalStore::new().map_err(|e| show_error(&e))?;

    let key = store.fresh_key().map_err(|e| show_error(&e.to_string()))?;

    puzzle_data::save(&puzzle, &key, &mut store)
        .map_err(|e| show_error(&e.to_string()))?;

    Ok(key)
}

#[wasm_bindgen]
pub fn init_wordsearch() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
