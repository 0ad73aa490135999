use crate::models::PairingPreferences;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form body submitted from the pairing page
///
/// Every field is optional; browsers submit blank strings for untouched
/// inputs, so accessors normalize those to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PairingForm {
    #[validate(length(max = 32))]
    #[serde(default)]
    pub season: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub location: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub wine_style: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub cheese_type: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub budget: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub dietary: Option<String>,
}

impl PairingForm {
    /// Season input with blanks normalized away
    pub fn season_input(&self) -> Option<&str> {
        normalized(&self.season)
    }

    /// Location input with blanks normalized away
    pub fn location_input(&self) -> Option<&str> {
        normalized(&self.location)
    }

    /// The free-text preference fields
    pub fn preferences(&self) -> PairingPreferences {
        PairingPreferences {
            wine_style: normalized(&self.wine_style).map(str::to_string),
            cheese_type: normalized(&self.cheese_type).map(str::to_string),
            budget: normalized(&self.budget).map(str::to_string),
            dietary: normalized(&self.dietary).map(str::to_string),
        }
    }
}

/// Trim a form field and map blank submissions to `None`
fn normalized(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
