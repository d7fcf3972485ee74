//! Core data structures for the Neurobit simulation.

pub mod cell;
pub mod maze;
pub mod pulse;
