//! Post-match statistics over a decoded demo.
//!
//! A [`Match`] is built once from the roster, the round log and the event log
//! handed over by the demo decoder. Every statistic is derived on demand from
//! those three immutable inputs.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod roster;
pub mod round;
pub mod summary;

pub use config::{Config, DeathlessRatio};
pub use error::{Error, Result};
pub use event::{Event, EventKind, EventLog};
pub use game::{Match, MatchInfo, PlayerTotals, RoundPlayer};
pub use roster::{Participant, PlayerId, Roster};
pub use round::{Round, RoundLog, Side, Team, WinReason, WARMUP_ROUND};
