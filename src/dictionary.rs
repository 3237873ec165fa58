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

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

// Returns the words whose length in characters is within
// min_length..=max_length. Case and duplicates are left alone.
pub fn filter_words<I, T>(
    words: I,
    min_length: usize,
    max_length: usize,
) -> Vec<String>
    where I: IntoIterator<Item = T>,
          T: AsRef<str>
{
    words.into_iter()
        .filter_map(|word| {
            let word = word.as_ref();
            let length = word.chars().count();

            (length >= min_length && length <= max_length)
                .then(|| word.to_string())
        })
        .collect()
}

pub fn parse_word_list(s: &str) -> Vec<String> {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_word_list_from_file<P: AsRef<Path>>(
    filename: P,
    words: &mut Vec<String>,
) -> Result<(), std::io::Error> {
    let contents = std::fs::read_to_string(filename)?;

    words.extend(parse_word_list(&contents));

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_word_list<I, P>(
    filenames: I,
) -> Result<Vec<String>, std::io::Error>
    where I: IntoIterator<Item = P>,
          P: AsRef<Path>,
{
    let mut words = Vec::new();

    for filename in filenames {
        read_word_list_from_file(&filename, &mut words)
            .map_err(|e| {
                let kind = e.kind();
                std::io::Error::new(
                    kind,
                    format!(
                        "{}: {}",
                        filename.as_ref().to_string_lossy(),
                        e,
                    ))
            })?;
    }

    Ok(words)
}
