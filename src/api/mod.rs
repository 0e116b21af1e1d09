//! API Module
//!
//! Endpoint mapping and request shaping for the RajaOngkir API.

pub mod cost;
pub mod endpoint;
pub mod location;

pub use cost::{CostQuery, Location, PackageDimensions};
pub use endpoint::{endpoint_path, endpoint_url};
pub use location::LocationQuery;
