use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{PairedRecord, PitchRecord};

/// Which pitches count as "the previous pitch".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingScope {
    /// Any earlier pitch by the same pitcher, so the first pitch of an
    /// at-bat pairs with the last pitch of the one before it.
    #[default]
    Pitcher,
    /// Only earlier pitches within the same at-bat.
    AtBat,
}

impl PairingScope {
    fn group_key(self, pitch: &PitchRecord) -> (i64, Option<u32>) {
        match self {
            PairingScope::Pitcher => (pitch.pitcher_id, None),
            PairingScope::AtBat => (pitch.pitcher_id, Some(pitch.at_bat_number)),
        }
    }
}

fn throw_order(pitch: &PitchRecord) -> (NaiveDate, i64, u32, u32) {
    (
        pitch.game_date,
        pitch.pitcher_id,
        pitch.at_bat_number,
        pitch.pitch_number,
    )
}

/// Pair every pitch with the one thrown just before it.
///
/// Output is in working order: most recent pitch first, by date, pitcher,
/// at-bat and pitch number. The input slice is left untouched.
pub fn pair_with_previous(pitches: &[PitchRecord], scope: PairingScope) -> Vec<PairedRecord> {
    let mut working: Vec<&PitchRecord> = pitches.iter().collect();
    working.sort_by(|a, b| throw_order(b).cmp(&throw_order(a)));

    let mut groups: HashMap<(i64, Option<u32>), Vec<usize>> = HashMap::new();
    for (idx, pitch) in working.iter().enumerate() {
        groups.entry(scope.group_key(pitch)).or_default().push(idx);
    }

    let mut previous: Vec<Option<usize>> = vec![None; working.len()];
    for members in groups.values() {
        // members run newest first, so the next entry was thrown just before
        for window in members.windows(2) {
            previous[window[0]] = Some(window[1]);
        }
    }

    let paired: Vec<PairedRecord> = working
        .iter()
        .zip(previous)
        .map(|(current, prev)| PairedRecord {
            current: (*current).clone(),
            previous: prev.map(|idx| working[idx].clone()),
        })
        .collect();

    tracing::debug!(
        pitches = paired.len(),
        groups = groups.len(),
        ?scope,
        "paired pitches with predecessors"
    );
    paired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::pitch;

    fn key(p: &PitchRecord) -> (i64, u32, u32) {
        (p.pitcher_id, p.at_bat_number, p.pitch_number)
    }

    fn previous_of(paired: &[PairedRecord], at_bat: u32, pitch_number: u32) -> Option<(i64, u32, u32)> {
        paired
            .iter()
            .find(|p| p.current.at_bat_number == at_bat && p.current.pitch_number == pitch_number)
            .and_then(|p| p.previous.as_ref().map(key))
    }

    #[test]
    fn pairing_crosses_at_bats() {
        // shuffled on purpose; the sequencer owns ordering
        let pitches = vec![pitch(7, 2, 1), pitch(7, 1, 1), pitch(7, 1, 2)];
        let paired = pair_with_previous(&pitches, PairingScope::Pitcher);

        assert_eq!(paired.len(), 3);
        assert_eq!(previous_of(&paired, 2, 1), Some((7, 1, 2)));
        assert_eq!(previous_of(&paired, 1, 2), Some((7, 1, 1)));
        assert_eq!(previous_of(&paired, 1, 1), None);
    }

    #[test]
    fn at_bat_scope_stops_at_boundary() {
        let pitches = vec![pitch(7, 1, 1), pitch(7, 1, 2), pitch(7, 2, 1)];
        let paired = pair_with_previous(&pitches, PairingScope::AtBat);

        assert_eq!(previous_of(&paired, 2, 1), None);
        assert_eq!(previous_of(&paired, 1, 2), Some((7, 1, 1)));
    }

    #[test]
    fn pitchers_never_share_predecessors() {
        let pitches = vec![pitch(1, 1, 1), pitch(2, 2, 1), pitch(1, 3, 1), pitch(2, 4, 1)];
        let paired = pair_with_previous(&pitches, PairingScope::Pitcher);

        for p in &paired {
            if let Some(prev) = &p.previous {
                assert_eq!(prev.pitcher_id, p.current.pitcher_id);
            }
        }
        assert_eq!(paired.iter().filter(|p| p.previous.is_none()).count(), 2);
    }

    #[test]
    fn working_order_is_most_recent_first() {
        let pitches = vec![pitch(3, 1, 1), pitch(3, 1, 2), pitch(3, 2, 1)];
        let paired = pair_with_previous(&pitches, PairingScope::Pitcher);
        let order: Vec<_> = paired.iter().map(|p| key(&p.current)).collect();
        assert_eq!(order, vec![(3, 2, 1), (3, 1, 2), (3, 1, 1)]);
    }

    #[test]
    fn empty_input() {
        assert!(pair_with_previous(&[], PairingScope::Pitcher).is_empty());
    }
}
