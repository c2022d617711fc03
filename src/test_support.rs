use chrono::NaiveDate;

use crate::types::{HalfInning, PitchRecord};

pub fn game_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 27).unwrap()
}

/// A complete pitch whose geometry shifts with the at-bat and pitch number,
/// so any two pitches from the same pitcher produce a finite score.
pub fn pitch(pitcher_id: i64, at_bat_number: u32, pitch_number: u32) -> PitchRecord {
    let ab = at_bat_number as f64;
    let pn = pitch_number as f64;
    PitchRecord {
        pitcher_id,
        batter_id: 600_000 + at_bat_number as i64,
        game_date: game_date(),
        at_bat_number,
        pitch_number,
        inning: Some(1 + at_bat_number / 4),
        half_inning: Some(HalfInning::Top),
        balls: Some(0),
        strikes: Some((pitch_number.saturating_sub(1)).min(2) as u8),
        outs: Some((at_bat_number.saturating_sub(1) % 3) as u8),
        pitch_type: Some("FF".to_string()),
        pitch_name: Some("4-Seam Fastball".to_string()),
        plate_x: Some(0.2 * pn + 0.1 * ab),
        plate_z: Some(2.0 + 0.3 * pn),
        pfx_x: Some(0.1 * pn),
        pfx_z: Some(0.2 * pn),
        release_pos_x: Some(-2.0),
        release_pos_z: Some(6.0 - 0.01 * pn),
        home_team: Some("TOR".to_string()),
        away_team: Some("SEA".to_string()),
        description: Some("called_strike".to_string()),
        des: None,
        p_throws: Some("R".to_string()),
        stand: Some("L".to_string()),
    }
}
