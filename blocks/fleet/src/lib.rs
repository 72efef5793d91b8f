pub mod types;
pub mod vessels;

pub use types::FleetResponse;
