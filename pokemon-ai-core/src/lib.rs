//! Expectiminimax decision engine for single Pokemon battles.
//!
//! The main entry point is [`search::Expectiminimax`]: given a [`sim::battle::Battle`]
//! and a [`weights::Weights`] table it returns the AI's best action and its
//! minimum expected score.

pub mod data;
pub mod evaluate;
pub mod parser;
pub mod search;
pub mod sim;
pub mod weights;

pub use parser::parse_showdown_team;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::evaluate::{confidence, evaluate, MAX_HEURISTIC, VICTORY};
    pub use crate::parser::parse_showdown_team;
    pub use crate::search::{
        Decision, Expectiminimax, SearchParams, SearchStats, TieBreak, UNLIMITED_DEPTH,
    };
    pub use crate::sim::battle::{Action, Battle, Side, Team};
    pub use crate::sim::field::{Field, Weather, WeatherState};
    pub use crate::sim::legal::legal_actions;
    pub use crate::sim::pokemon::Status;
    pub use crate::sim::random::{random_battle, RandomBattleConfig};
    pub use crate::sim::stats::Nature;
    pub use crate::sim::Pokemon;
    pub use crate::weights::{Weights, WeightsError};
}
