//! Plain data records shared between the simulation core, the I/O layer and
//! whatever front end drives them.

pub mod data;

pub use data::cell::Cell;
pub use data::maze::{CellDescription, MazeDescription};
pub use data::pulse::{PatternSeed, PulseView, SpawnRequest};
