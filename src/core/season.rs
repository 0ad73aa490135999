use serde::{Deserialize, Serialize};

/// Calendar season label used throughout the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Derive the season for a month (1-12) in the given hemisphere
    ///
    /// Northern mapping: {12,1,2 -> winter; 3,4,5 -> spring; 6,7,8 -> summer;
    /// 9,10,11 -> autumn}. The southern hemisphere uses the same month groups
    /// shifted by two seasons. Out-of-range months are clamped into 1-12.
    pub fn for_month(month: u32, hemisphere: Hemisphere) -> Season {
        let month = month.clamp(1, 12);

        let northern = match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        };

        match hemisphere {
            Hemisphere::Northern => northern,
            Hemisphere::Southern => northern.opposite(),
        }
    }

    /// The season two steps away (winter <-> summer, spring <-> autumn)
    pub fn opposite(self) -> Season {
        match self {
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
            Season::Winter => Season::Summer,
        }
    }

    /// Parse a user-supplied season label, ignoring case and surrounding
    /// whitespace. Returns `None` for anything that is not one of the four
    /// labels.
    pub fn parse(value: &str) -> Option<Season> {
        match value.trim().to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" => Some(Season::Autumn),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Hemisphere of the caller, derived from latitude sign or configured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

impl Hemisphere {
    /// Hemisphere from a latitude in degrees; the equator counts as northern
    pub fn from_latitude(latitude: f64) -> Hemisphere {
        if latitude < 0.0 {
            Hemisphere::Southern
        } else {
            Hemisphere::Northern
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Hemisphere::Northern => "northern",
            Hemisphere::Southern => "southern",
        }
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
