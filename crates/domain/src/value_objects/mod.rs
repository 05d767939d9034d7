//! Value Objects - Immutable, identity-less domain primitives

mod observation_parameter;
mod observation_period;
mod station_id;

pub use observation_parameter::ObservationParameter;
pub use observation_period::ObservationPeriod;
pub use station_id::StationId;
