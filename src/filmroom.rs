use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::types::PitchSnapshot;

/// MLB Film Room searches for both pitches of a tunneled pair.
///
/// Film Room does not index every pitch, so a link can come back empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmRoomLinks {
    pub tunneled: String,
    pub previous: String,
}

impl FilmRoomLinks {
    pub fn for_pair(
        date: NaiveDate,
        pitcher_id: i64,
        tunneled: &PitchSnapshot,
        previous: &PitchSnapshot,
    ) -> Self {
        Self {
            tunneled: search_url(date, pitcher_id, tunneled),
            previous: search_url(date, pitcher_id, previous),
        }
    }
}

pub fn search_url(date: NaiveDate, pitcher_id: i64, pitch: &PitchSnapshot) -> String {
    format!(
        "https://www.mlb.com/video/?q=Season+%3D+%5B{year}%5D+AND+Date+%3D+%5B%22{date}%22%5D\
         +AND+PitcherId+%3D+%5B{pitcher_id}%5D+AND+TopBottom+%3D+%5B%22{half}%22%5D\
         +AND+Outs+%3D+%5B{outs}%5D+AND+Balls+%3D+%5B{balls}%5D+AND+Strikes+%3D+%5B{strikes}%5D\
         +AND+Inning+%3D+%5B{inning}%5D+AND+PlayerId+%3D+%5B{batter}%5D\
         +AND+PitchType+%3D+%5B%22{pitch_type}%22%5D+Order+By+Timestamp+DESC",
        year = date.year(),
        date = date.format("%Y-%m-%d"),
        half = pitch.half_inning.filmroom_code(),
        outs = pitch.outs,
        balls = pitch.balls,
        strikes = pitch.strikes,
        inning = pitch.inning,
        batter = pitch.batter_id,
        pitch_type = pitch.pitch_type,
    )
}
