//! Player names from a Chadwick-style register CSV.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::TunnelError;
use crate::pipeline::PlayerDirectory;

#[derive(Debug, Deserialize)]
struct RegisterRow {
    key_mlbam: Option<i64>,
    name_first: Option<String>,
    name_last: Option<String>,
}

/// Capitalise the first letter of every word and lower-case the rest,
/// treating any non-letter as a word break ("o'neill" -> "O'Neill").
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = !ch.is_alphabetic();
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct PlayerRegister {
    names: HashMap<i64, String>,
}

impl PlayerRegister {
    pub fn from_path(path: &Path) -> Result<Self, TunnelError> {
        Self::from_reader(File::open(path)?)
    }

    /// Rows without an MLBAM id or without any name are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TunnelError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut names = HashMap::new();
        let mut skipped = 0usize;
        for row in reader.deserialize::<RegisterRow>() {
            let row = row?;
            let full = [row.name_first, row.name_last]
                .into_iter()
                .flatten()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            match row.key_mlbam {
                Some(id) if !full.is_empty() => {
                    names.insert(id, title_case(&full));
                }
                _ => skipped += 1,
            }
        }
        tracing::debug!(players = names.len(), skipped, "loaded player register");
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl PlayerDirectory for PlayerRegister {
    fn names_for(&self, ids: &[i64]) -> Result<HashMap<i64, String>, TunnelError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.names.get(id).map(|name| (*id, name.clone())))
            .collect())
    }
}
