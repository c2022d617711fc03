//! Finds the best "tunneled" pitch of a day: the pitch whose flight looked
//! most like the previous one before the two ended up far apart at the plate.
//!
//! Pitches are paired with their predecessor ([`sequencer`]), measured
//! ([`distance`], [`scorer`]), filtered and ranked ([`selector`]), and the
//! whole run is driven by [`pipeline::Pipeline`].

pub mod config;
pub mod distance;
pub mod error;
pub mod filmroom;
pub mod pipeline;
pub mod players;
pub mod scorer;
pub mod selector;
pub mod sequencer;
pub mod server;
pub mod statcast;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::TunnelConfig;
pub use error::{PlayerRole, TunnelError};
pub use pipeline::{IdentityPolicy, Pipeline, PitchSource, PlayerDirectory};
pub use players::PlayerRegister;
pub use scorer::ScoreScale;
pub use sequencer::PairingScope;
pub use statcast::StatcastCsv;
pub use types::{HalfInning, PitchRecord, PitchSnapshot, Point, TunnelResult};
