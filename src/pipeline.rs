use std::collections::HashMap;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::TunnelConfig;
use crate::error::{PlayerRole, TunnelError};
use crate::filmroom::FilmRoomLinks;
use crate::types::{PitchRecord, TunnelResult};
use crate::{scorer, selector, sequencer};

/// Supplies the raw pitch-by-pitch data for a day.
pub trait PitchSource {
    /// An empty vec means no data for `date`, not a failure.
    fn pitches_for(&self, date: NaiveDate) -> Result<Vec<PitchRecord>, TunnelError>;
}

/// Resolves MLBAM player ids to display names.
pub trait PlayerDirectory {
    /// Unknown ids are simply absent from the returned map.
    fn names_for(&self, ids: &[i64]) -> Result<HashMap<i64, String>, TunnelError>;
}

/// What to do when a winning player id has no known name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Use the numeric id as the name and log a warning.
    #[default]
    Fallback,
    /// Fail the run with `UnresolvedIdentity`.
    Strict,
}

pub fn yesterday() -> NaiveDate {
    Local::now().date_naive() - Days::new(1)
}

pub struct Pipeline<S, D> {
    source: S,
    directory: D,
    config: TunnelConfig,
}

impl<S: PitchSource, D: PlayerDirectory> Pipeline<S, D> {
    pub fn new(source: S, directory: D, config: TunnelConfig) -> Self {
        Self {
            source,
            directory,
            config,
        }
    }

    /// Find the best tunneled pitch thrown on `date`.
    pub fn run(&self, date: NaiveDate) -> Result<TunnelResult, TunnelError> {
        let pitches = self.source.pitches_for(date)?;
        if pitches.is_empty() {
            return Err(TunnelError::EmptySourceData { date });
        }
        tracing::info!(%date, pitches = pitches.len(), "loaded pitch data");

        let paired = sequencer::pair_with_previous(&pitches, self.config.pairing);
        let scored = scorer::score_all(paired);
        let best = selector::select_best(&scored)?;

        tracing::info!(
            pitcher = best.pitcher_id,
            at_bat = best.current.at_bat_number,
            pitch = best.current.pitch_number,
            score = best.tunnel_score,
            "selected top tunneled pitch"
        );

        let pitcher_id = best.pitcher_id;
        let batter_id = best.current.batter_id;
        let names = self.directory.names_for(&[pitcher_id, batter_id])?;
        let pitcher_name = self.display_name(&names, PlayerRole::Pitcher, pitcher_id)?;
        let batter_name = self.display_name(&names, PlayerRole::Batter, batter_id)?;

        let (tunnel_score, score_scale) = self.config.score_scale.report(best.tunnel_score);
        let links = FilmRoomLinks::for_pair(date, pitcher_id, &best.current, &best.previous);

        Ok(TunnelResult {
            date,
            pitcher_id,
            pitcher_name,
            batter_id,
            batter_name,
            pitch_type: best.current.pitch_type.clone(),
            pitch_name: best.current.pitch_name.clone(),
            home_team: best.home_team,
            away_team: best.away_team,
            tunnel_score,
            raw_tunnel_score: best.tunnel_score,
            score_scale,
            tunnel_distance: best.tunnel_distance,
            actual_distance: best.actual_distance,
            release_distance: best.release_distance,
            tunneled_pitch: best.current,
            previous_pitch: best.previous,
            links,
        })
    }

    fn display_name(
        &self,
        names: &HashMap<i64, String>,
        role: PlayerRole,
        id: i64,
    ) -> Result<String, TunnelError> {
        if let Some(name) = names.get(&id) {
            return Ok(name.clone());
        }
        match self.config.identity {
            IdentityPolicy::Strict => Err(TunnelError::UnresolvedIdentity { role, id }),
            IdentityPolicy::Fallback => {
                tracing::warn!(%role, id, "no name for player; using id");
                Ok(id.to_string())
            }
        }
    }
}
