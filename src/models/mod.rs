// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{LocationInfo, PairingPreferences, PairingResult};
pub use requests::PairingForm;
pub use responses::HealthResponse;
