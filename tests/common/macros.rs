/// Asserts that a pulse never visited the same cell twice.
#[macro_export]
macro_rules! assert_history_unique {
    ($pulse:expr) => {
        let history = $pulse.history();
        let unique: std::collections::HashSet<_> = history.iter().collect();
        assert_eq!(
            unique.len(),
            history.len(),
            "Pulse history has duplicates: {:?}",
            history
        );
    };
}

/// Asserts the number of live pulses in a simulation.
#[macro_export]
macro_rules! assert_pulse_count {
    ($sim:expr, $count:expr) => {
        assert_eq!($sim.pulse_count(), $count, "Pulse count mismatch");
    };
}
