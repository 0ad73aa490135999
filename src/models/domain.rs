use serde::{Deserialize, Serialize};

/// Location details returned by the IP lookup service
///
/// Fetched fresh per request and discarded after the response is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub country_code: String,
    pub latitude: f64,
}

/// Free-text preference fields collected from the form
///
/// Collected and logged per submission; the prompt template does not use
/// them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairingPreferences {
    pub wine_style: Option<String>,
    pub cheese_type: Option<String>,
    pub budget: Option<String>,
    pub dietary: Option<String>,
}

impl PairingPreferences {
    pub fn is_empty(&self) -> bool {
        self.wine_style.is_none()
            && self.cheese_type.is_none()
            && self.budget.is_none()
            && self.dietary.is_none()
    }
}

/// Text produced by one generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingResult {
    pub response_text: String,
}
