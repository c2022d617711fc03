//! Statcast (Baseball Savant) CSV exports as a pitch source.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::TunnelError;
use crate::pipeline::PitchSource;
use crate::types::PitchRecord;

/// Columns that must exist in the header row, even if some cells are blank.
pub const REQUIRED_COLUMNS: [&str; 20] = [
    "pitcher",
    "batter",
    "game_date",
    "at_bat_number",
    "pitch_number",
    "inning",
    "inning_topbot",
    "balls",
    "strikes",
    "outs_when_up",
    "pitch_type",
    "pitch_name",
    "plate_x",
    "plate_z",
    "pfx_x",
    "pfx_z",
    "release_pos_x",
    "release_pos_z",
    "home_team",
    "away_team",
];

/// Identity columns; a row with any of these blank is dropped before parsing.
const IDENTITY_COLUMNS: [&str; 5] = [
    "pitcher",
    "batter",
    "game_date",
    "at_bat_number",
    "pitch_number",
];

/// Parse every row of a Statcast CSV export.
///
/// Columns are matched by header name and extra columns are ignored. A blank
/// cell becomes a missing value, and a row missing any identity cell is
/// skipped. A cell of the wrong type (say a non-numeric pitcher id) fails
/// the whole read.
pub fn read_pitches<R: Read>(reader: R) -> Result<Vec<PitchRecord>, TunnelError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(TunnelError::MalformedInput {
            reason: format!("missing column `{missing}`"),
        });
    }

    let identity: Vec<usize> = IDENTITY_COLUMNS
        .iter()
        .filter_map(|column| headers.iter().position(|h| h == *column))
        .collect();

    let mut pitches = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        let row = row?;
        if identity
            .iter()
            .any(|&idx| row.get(idx).map_or(true, str::is_empty))
        {
            skipped += 1;
            continue;
        }
        pitches.push(row.deserialize::<PitchRecord>(Some(&headers))?);
    }
    if skipped > 0 {
        tracing::debug!(skipped, "dropped rows with blank identity cells");
    }
    Ok(pitches)
}

/// A CSV export on disk, possibly spanning several days.
#[derive(Debug, Clone)]
pub struct StatcastCsv {
    path: PathBuf,
}

impl StatcastCsv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

}

impl PitchSource for StatcastCsv {
    fn pitches_for(&self, date: NaiveDate) -> Result<Vec<PitchRecord>, TunnelError> {
        let file = File::open(&self.path)?;
        let all = read_pitches(file)?;
        let total = all.len();

        let pitches: Vec<PitchRecord> = all.into_iter().filter(|p| p.game_date == date).collect();
        tracing::debug!(
            path = %self.path.display(),
            total,
            kept = pitches.len(),
            %date,
            "read statcast export"
        );
        Ok(pitches)
    }
}
