// Service exports
pub mod generation;
pub mod geoip;

pub use generation::{GenerationClient, GenerationError};
pub use geoip::{GeoIpClient, GeoIpError};
