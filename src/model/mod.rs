pub use neurobit_core::{init_logging, Cell, PatternSeed, PulseView, SpawnRequest};

pub mod config {
    pub use neurobit_core::config::*;
}
pub mod error {
    pub use neurobit_core::error::*;
}
pub mod maze {
    pub use neurobit_core::maze::*;
}
pub mod metrics {
    pub use neurobit_core::metrics::*;
}
pub mod pattern {
    pub use neurobit_core::pattern::*;
}
pub mod pulse {
    pub use neurobit_core::pulse::*;
}
pub mod simulation {
    pub use neurobit_core::simulation::*;
}
pub mod io {
    pub use neurobit_io::*;
}
