//! CLI commands for the apprentice game

pub mod book;
pub mod coverage;
pub mod export;
pub mod play;
