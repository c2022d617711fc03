use serde::{Deserialize, Serialize};

use crate::distance::euclidean;
use crate::types::{PairedRecord, PitchRecord, Point, ScoredRecord};

/// How the winning score is reported.
///
/// Ranking always uses the raw score; the scale only changes the magnitude
/// handed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    Raw,
    /// log2 of the raw score, to tame near-zero tunnel distances.
    #[default]
    Log2,
}

impl ScoreScale {
    /// Returns the reported score and the scale actually applied.
    ///
    /// log2 is undefined for non-positive scores; those are reported raw.
    pub fn report(self, raw: f64) -> (f64, ScoreScale) {
        match self {
            ScoreScale::Log2 if raw > 0.0 => (raw.log2(), ScoreScale::Log2),
            ScoreScale::Log2 => {
                tracing::warn!(raw, "tunnel score is not positive; reporting it uncompressed");
                (raw, ScoreScale::Raw)
            }
            ScoreScale::Raw => (raw, ScoreScale::Raw),
        }
    }
}

/// Where the pitch would have crossed the plate with no spin-induced movement.
pub fn no_movement_location(pitch: &PitchRecord) -> Option<Point> {
    let plate = pitch.plate_location()?;
    let pfx = pitch.movement()?;
    Some(Point::new(plate.x - pfx.x, plate.z - pfx.z))
}

/// Tunnel Score = (actual distance / tunnel distance) - release distance
pub fn tunnel_score(actual_distance: f64, tunnel_distance: f64, release_distance: f64) -> f64 {
    actual_distance / tunnel_distance - release_distance
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn distance_between(a: Option<Point>, b: Option<Point>) -> Option<f64> {
    finite(euclidean(a?, b?))
}

pub fn score(pair: PairedRecord) -> ScoredRecord {
    let current = &pair.current;
    let previous = pair.previous.as_ref();

    let current_no_movement = no_movement_location(current);
    let previous_no_movement = previous.and_then(no_movement_location);

    let tunnel_distance = distance_between(current_no_movement, previous_no_movement);
    let actual_distance = distance_between(
        current.plate_location(),
        previous.and_then(PitchRecord::plate_location),
    );
    let release_distance = distance_between(
        current.release_point(),
        previous.and_then(PitchRecord::release_point),
    );

    let tunnel_score = match (actual_distance, tunnel_distance, release_distance) {
        (Some(actual), Some(tunnel), Some(release)) => finite(tunnel_score(actual, tunnel, release)),
        _ => None,
    };

    ScoredRecord {
        pair,
        current_no_movement,
        previous_no_movement,
        tunnel_distance,
        actual_distance,
        release_distance,
        tunnel_score,
    }
}

pub fn score_all(pairs: Vec<PairedRecord>) -> Vec<ScoredRecord> {
    let scored: Vec<ScoredRecord> = pairs.into_iter().map(score).collect();
    tracing::debug!(
        scored = scored.len(),
        with_score = scored.iter().filter(|s| s.tunnel_score.is_some()).count(),
        "computed tunnel scores"
    );
    scored
}
