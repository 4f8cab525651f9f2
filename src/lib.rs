pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod visual;

pub use app::Shell;
pub use config::CityFiles;
pub use data::filters::{City, FilterCriteria, Month, TripFilter};
pub use data::trip_struct::{Trip, TripRecord, TripTable};
pub use error::BikeshareError;
