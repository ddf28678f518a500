pub mod error;
pub mod game;
pub mod grid;
pub mod mapgen;
mod rng;
pub mod rules;
pub mod state;
pub mod types;
pub mod view;

pub use error::{GenerationError, InvariantViolation};
pub use game::{Game, step_toward};
pub use grid::Grid;
pub use mapgen::{GeneratedDungeon, GenerationSummary, generate_dungeon};
pub use state::{Enemy, Player};
pub use types::*;
pub use view::{ActorView, GameView, PlayerView};
