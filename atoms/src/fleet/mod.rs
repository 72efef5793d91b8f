// Re-export model types and service functions
pub mod model;
pub mod service;

pub use model::{ImageBucket, Vessel, VesselImages, VesselRow, VesselSpecs};
pub use service::*;
