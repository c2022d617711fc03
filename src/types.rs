use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filmroom::FilmRoomLinks;
use crate::scorer::ScoreScale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfInning {
    #[serde(alias = "Top", alias = "TOP")]
    Top,
    #[serde(alias = "Bot", alias = "BOT", alias = "bot", alias = "Bottom", alias = "BOTTOM")]
    Bottom,
}

impl HalfInning {
    /// Code used by the Film Room search (`TOP` / `BOT`).
    pub fn filmroom_code(self) -> &'static str {
        match self {
            HalfInning::Top => "TOP",
            HalfInning::Bottom => "BOT",
        }
    }
}

/// A location on a 2-D plane: the plate crossing plane or the release plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    fn from_parts(x: Option<f64>, z: Option<f64>) -> Option<Self> {
        Some(Self::new(x?, z?))
    }
}

/// One thrown pitch, read straight from a Statcast export row.
///
/// Identity columns are required. Everything else may be blank in the
/// source and is kept as `None` until the selector decides eligibility.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PitchRecord {
    #[serde(rename = "pitcher")]
    pub pitcher_id: i64,
    #[serde(rename = "batter")]
    pub batter_id: i64,
    pub game_date: NaiveDate,
    pub at_bat_number: u32,
    pub pitch_number: u32, // ordinal within the at-bat

    pub inning: Option<u32>,
    #[serde(rename = "inning_topbot")]
    pub half_inning: Option<HalfInning>,
    pub balls: Option<u8>,
    pub strikes: Option<u8>,
    #[serde(rename = "outs_when_up")]
    pub outs: Option<u8>,
    pub pitch_type: Option<String>, // e.g. "FF", "SL", "CH"
    pub pitch_name: Option<String>, // e.g. "4-Seam Fastball"

    pub plate_x: Option<f64>,
    pub plate_z: Option<f64>,
    pub pfx_x: Option<f64>,
    pub pfx_z: Option<f64>,
    pub release_pos_x: Option<f64>,
    pub release_pos_z: Option<f64>,

    pub home_team: Option<String>,
    pub away_team: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub des: Option<String>,
    #[serde(default)]
    pub p_throws: Option<String>,
    #[serde(default)]
    pub stand: Option<String>,
}

impl PitchRecord {
    pub fn plate_location(&self) -> Option<Point> {
        Point::from_parts(self.plate_x, self.plate_z)
    }

    pub fn movement(&self) -> Option<Point> {
        Point::from_parts(self.pfx_x, self.pfx_z)
    }

    pub fn release_point(&self) -> Option<Point> {
        Point::from_parts(self.release_pos_x, self.release_pos_z)
    }

    /// Name of the first required field that is missing or not finite.
    pub fn missing_field(&self) -> Option<&'static str> {
        let numeric = [
            ("plate_x", self.plate_x),
            ("plate_z", self.plate_z),
            ("pfx_x", self.pfx_x),
            ("pfx_z", self.pfx_z),
            ("release_pos_x", self.release_pos_x),
            ("release_pos_z", self.release_pos_z),
        ];
        if let Some((name, _)) = numeric
            .iter()
            .find(|(_, v)| !v.is_some_and(f64::is_finite))
        {
            return Some(*name);
        }
        if self.inning.is_none() {
            return Some("inning");
        }
        if self.half_inning.is_none() {
            return Some("inning_topbot");
        }
        if self.balls.is_none() {
            return Some("balls");
        }
        if self.strikes.is_none() {
            return Some("strikes");
        }
        if self.outs.is_none() {
            return Some("outs_when_up");
        }
        let text = [
            ("pitch_type", &self.pitch_type),
            ("pitch_name", &self.pitch_name),
            ("home_team", &self.home_team),
            ("away_team", &self.away_team),
        ];
        text.iter()
            .find(|(_, v)| v.as_deref().map_or(true, str::is_empty))
            .map(|(name, _)| *name)
    }
}

/// A pitch paired with the one its pitcher threw immediately before it.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedRecord {
    pub current: PitchRecord,
    pub previous: Option<PitchRecord>,
}

/// A paired pitch with its tunneling geometry.
///
/// Every derived value is `None` when an input was missing or the result
/// was not finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub pair: PairedRecord,
    pub current_no_movement: Option<Point>,
    pub previous_no_movement: Option<Point>,
    pub tunnel_distance: Option<f64>,
    pub actual_distance: Option<f64>,
    pub release_distance: Option<f64>,
    pub tunnel_score: Option<f64>,
}

/// Fully populated view of one side of a selected pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchSnapshot {
    pub batter_id: i64,
    pub at_bat_number: u32,
    pub pitch_number: u32,
    pub inning: u32,
    pub half_inning: HalfInning,
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub pitch_type: String,
    pub pitch_name: String,
    pub plate: Point,
    pub no_movement: Point,
    pub release: Point,
    pub description: Option<String>,
    pub des: Option<String>,
    pub p_throws: Option<String>,
    pub stand: Option<String>,
}

impl PitchSnapshot {
    /// Returns `None` unless every required field of `pitch` is present.
    pub fn capture(pitch: &PitchRecord, no_movement: Point) -> Option<Self> {
        if pitch.missing_field().is_some() {
            return None;
        }
        Some(Self {
            batter_id: pitch.batter_id,
            at_bat_number: pitch.at_bat_number,
            pitch_number: pitch.pitch_number,
            inning: pitch.inning?,
            half_inning: pitch.half_inning?,
            balls: pitch.balls?,
            strikes: pitch.strikes?,
            outs: pitch.outs?,
            pitch_type: pitch.pitch_type.clone()?,
            pitch_name: pitch.pitch_name.clone()?,
            plate: pitch.plate_location()?,
            no_movement,
            release: pitch.release_point()?,
            description: pitch.description.clone(),
            des: pitch.des.clone(),
            p_throws: pitch.p_throws.clone(),
            stand: pitch.stand.clone(),
        })
    }
}

/// The day's best tunneled pitch, ready for plotting and posting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TunnelResult {
    pub date: NaiveDate,
    pub pitcher_id: i64,
    pub pitcher_name: String,
    pub batter_id: i64,
    pub batter_name: String,
    pub pitch_type: String,
    pub pitch_name: String,
    pub home_team: String,
    pub away_team: String,
    pub tunnel_score: f64,     // as reported, see score_scale
    pub raw_tunnel_score: f64, // before any compression
    pub score_scale: ScoreScale,
    pub tunnel_distance: f64,
    pub actual_distance: f64,
    pub release_distance: f64,
    pub tunneled_pitch: PitchSnapshot,
    pub previous_pitch: PitchSnapshot,
    pub links: FilmRoomLinks,
}
