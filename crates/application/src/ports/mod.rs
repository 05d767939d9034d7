//! Port definitions (interfaces for infrastructure adapters)

mod observation_port;

#[cfg(test)]
pub use observation_port::MockObservationPort;
pub use observation_port::{ObservationPort, ObservedValue, StationSeries};
