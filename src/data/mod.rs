pub mod data_lector;
pub mod filters;
pub mod stats;
pub mod trip_struct;
