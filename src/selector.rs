use chrono::NaiveDate;

use crate::error::TunnelError;
use crate::types::{PitchSnapshot, ScoredRecord};

/// A scored pair where every required field is present on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct EligiblePair {
    pub game_date: NaiveDate,
    pub pitcher_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub current: PitchSnapshot,
    pub previous: PitchSnapshot,
    pub tunnel_distance: f64,
    pub actual_distance: f64,
    pub release_distance: f64,
    pub tunnel_score: f64,
}

impl EligiblePair {
    pub fn from_scored(record: &ScoredRecord) -> Option<Self> {
        let current = &record.pair.current;
        let previous = record.pair.previous.as_ref()?;

        Some(Self {
            game_date: current.game_date,
            pitcher_id: current.pitcher_id,
            home_team: current.home_team.clone()?,
            away_team: current.away_team.clone()?,
            current: PitchSnapshot::capture(current, record.current_no_movement?)?,
            previous: PitchSnapshot::capture(previous, record.previous_no_movement?)?,
            tunnel_distance: record.tunnel_distance?,
            actual_distance: record.actual_distance?,
            release_distance: record.release_distance?,
            tunnel_score: record.tunnel_score?,
        })
    }
}

pub fn is_eligible(record: &ScoredRecord) -> bool {
    EligiblePair::from_scored(record).is_some()
}

fn rejection_reason(record: &ScoredRecord) -> &'static str {
    let Some(previous) = record.pair.previous.as_ref() else {
        return "no previous pitch";
    };
    if record.pair.current.missing_field().is_some() {
        return "current pitch incomplete";
    }
    if previous.missing_field().is_some() {
        return "previous pitch incomplete";
    }
    "score not finite"
}

/// Pick the eligible pair with the highest tunnel score.
///
/// On an exact tie the first pair in input order wins.
pub fn select_best(records: &[ScoredRecord]) -> Result<EligiblePair, TunnelError> {
    let mut best: Option<EligiblePair> = None;
    let mut eligible = 0usize;

    for record in records {
        let Some(candidate) = EligiblePair::from_scored(record) else {
            tracing::trace!(
                pitcher = record.pair.current.pitcher_id,
                at_bat = record.pair.current.at_bat_number,
                pitch = record.pair.current.pitch_number,
                reason = rejection_reason(record),
                "pitch not eligible"
            );
            continue;
        };
        eligible += 1;
        if best
            .as_ref()
            .map_or(true, |b| candidate.tunnel_score > b.tunnel_score)
        {
            best = Some(candidate);
        }
    }

    tracing::info!(total = records.len(), eligible, "filtered scored pitches");
    best.ok_or(TunnelError::NoEligiblePitches {
        total: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::score;
    use crate::test_support::pitch;
    use crate::types::{PairedRecord, PitchRecord};

    fn scored_pair(current: PitchRecord, previous: PitchRecord) -> ScoredRecord {
        score(PairedRecord {
            current,
            previous: Some(previous),
        })
    }

    fn with_score(mut record: ScoredRecord, value: f64) -> ScoredRecord {
        record.tunnel_score = Some(value);
        record
    }

    #[test]
    fn complete_pair_is_eligible() {
        let record = scored_pair(pitch(1, 1, 2), pitch(1, 1, 1));
        assert!(is_eligible(&record));
    }

    #[test]
    fn missing_previous_release_x_is_excluded() {
        let mut previous = pitch(1, 1, 1);
        previous.release_pos_x = None;
        let record = scored_pair(pitch(1, 1, 2), previous);
        assert!(!is_eligible(&record));
    }

    #[test]
    fn missing_display_field_is_excluded_even_with_score() {
        let mut previous = pitch(1, 1, 1);
        previous.pitch_name = None;
        let record = scored_pair(pitch(1, 1, 2), previous);

        assert!(record.tunnel_score.is_some());
        assert!(!is_eligible(&record));
    }

    #[test]
    fn first_pitch_is_excluded() {
        let record = score(PairedRecord {
            current: pitch(1, 1, 1),
            previous: None,
        });
        assert!(!is_eligible(&record));
    }

    #[test]
    fn picks_maximum_score() {
        let base = scored_pair(pitch(1, 1, 2), pitch(1, 1, 1));
        let records = vec![
            with_score(base.clone(), 1.2),
            with_score(base.clone(), 5.7),
            with_score(base, 3.1),
        ];

        let best = select_best(&records).unwrap();
        assert_eq!(best.tunnel_score, 5.7);
    }

    #[test]
    fn ineligible_rows_never_win() {
        let base = scored_pair(pitch(1, 1, 2), pitch(1, 1, 1));
        let mut broken = with_score(base.clone(), 100.0);
        broken.pair.current.home_team = None;

        let records = vec![broken, with_score(base, 2.0)];
        let best = select_best(&records).unwrap();
        assert_eq!(best.tunnel_score, 2.0);
    }

    #[test]
    fn no_eligible_rows() {
        let records = vec![score(PairedRecord {
            current: pitch(1, 1, 1),
            previous: None,
        })];
        match select_best(&records) {
            Err(TunnelError::NoEligiblePitches { total }) => assert_eq!(total, 1),
            other => panic!("expected NoEligiblePitches, got {:?}", other),
        }
    }
}
