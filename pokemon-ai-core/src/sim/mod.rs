//! Battle state and its deterministic turn mechanics.

pub mod battle;
pub mod chance;
pub mod damage;
pub mod end_of_turn;
pub mod field;
pub mod legal;
pub mod order;
pub mod pokemon;
pub mod random;
pub mod resolve;
pub mod stats;
pub mod switching;

pub use pokemon::Pokemon;
