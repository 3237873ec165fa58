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

use std::collections::BTreeMap;
use std::fmt;

pub type Record = BTreeMap<String, String>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    Backend(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}", e),
            Error::Json(e) => write!(f, "{}", e),
            Error::Backend(e) => write!(f, "{}", e),
        }
    }
}

// A key-value store where each key holds a set of named fields
pub trait Store {
    // Sets the given fields on the key in one go. Returns the number
    // of fields that didn’t exist before.
    fn hset(&mut self, key: &str, fields: &[(&str, String)])
            -> Result<usize, Error>;

    fn hgetall(&self, key: &str) -> Result<Option<Record>, Error>;

    // Returns a key that doesn’t have a record yet
    fn fresh_key(&self) -> Result<String, Error> {
        let mut n = 1u64;

        loop {
            let key = format!("puzzle-{}", n);

            if self.hgetall(&key)?.is_none() {
                return Ok(key);
            }

            n += 1;
        }
    }
}

// Copies the fields into the record and returns how many of them
// weren’t there before
pub fn merge_fields(
    record: &mut Record,
    fields: &[(&str, String)],
) -> usize {
    let mut n_added = 0;

    for (name, value) in fields.iter() {
        if record.insert(name.to_string(), value.clone()).is_none() {
            n_added += 1;
        }
    }

    n_added
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, Record>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl Store for MemoryStore {
    fn hset(&mut self, key: &str, fields: &[(&str, String)])
            -> Result<usize, Error>
    {
        let record = self.records.entry(key.to_string()).or_default();

        Ok(merge_fields(record, fields))
    }

    fn hgetall(&self, key: &str) -> Result<Option<Record>, Error> {
        Ok(self.records.get(key).cloned())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use super::{Error, Record, Store, merge_fields};
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;
    use std::io::{BufReader, BufWriter, ErrorKind, Write};
    use std::fs::File;
    use std::path::{Path, PathBuf};
    use log::debug;

    #[derive(Serialize, Deserialize, Default)]
    #[serde(transparent)]
    struct Records(BTreeMap<String, Record>);

    // Keeps all of the records in a single JSON file which is
    // rewritten on every change. The new contents go to a temporary
    // file next to it which then replaces the old one, so a failed
    // write leaves the previous records intact.
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new<P: AsRef<Path>>(path: P) -> FileStore {
            FileStore {
                path: path.as_ref().to_path_buf(),
            }
        }

        fn read_records(&self) -> Result<Records, Error> {
            match File::open(&self.path) {
                Ok(file) => {
                    Ok(serde_json::from_reader(BufReader::new(file))?)
                },
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("{} doesn’t exist yet", self.path.display());
                    Ok(Records::default())
                },
                Err(e) => Err(e.into()),
            }
        }

        pub(super) fn temp_path(&self) -> PathBuf {
            let mut path = self.path.clone().into_os_string();
            path.push(".tmp");
            PathBuf::from(path)
        }

        fn write_records(&self, records: &Records) -> Result<(), Error> {
            let temp_path = self.temp_path();

            {
                let mut writer = BufWriter::new(File::create(&temp_path)?);

                serde_json::to_writer_pretty(&mut writer, records)?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }

            std::fs::rename(&temp_path, &self.path)?;

            Ok(())
        }
    }

    impl Store for FileStore {
        fn hset(&mut self, key: &str, fields: &[(&str, String)])
                -> Result<usize, Error>
        {
            let mut records = self.read_records()?;

            let n_added = merge_fields(
                records.0.entry(key.to_string()).or_default(),
                fields,
            );

            self.write_records(&records)?;

            Ok(n_added)
        }

        fn hgetall(&self, key: &str) -> Result<Option<Record>, Error> {
            let mut records = self.read_records()?;

            Ok(records.0.remove(key))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;
