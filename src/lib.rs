pub mod agent;
pub mod battle;
pub mod cli;
pub mod error;
pub mod price;
pub mod repl;
pub mod server;
pub mod tools;

pub use error::ArenaError;
pub use tools::{shared_rng, SharedRng};
