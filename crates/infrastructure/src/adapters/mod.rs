//! Adapters implementing application ports

mod smhi_observation_adapter;

pub use smhi_observation_adapter::SmhiObservationAdapter;
