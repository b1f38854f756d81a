//! CLI infrastructure for the apprentice game
//!
//! This module provides the command-line interface: the interactive play
//! session, book inspection, coverage analysis, and CSV export.

pub mod commands;
pub mod input;
pub mod output;
pub mod tutor;
