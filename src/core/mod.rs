// Core logic exports
pub mod prompt;
pub mod resolver;
pub mod season;

pub use prompt::build_pairing_prompt;
pub use resolver::{LookupPlan, Resolution, Resolver};
pub use season::{Hemisphere, Season};
