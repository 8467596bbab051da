use serde::Serialize;
use std::fmt;

/// Sport categories known to the schedule.
/// `Other` is the fallback bucket for any tag not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Sport {
    CrossCountry,  // cross-country
    Biathlon,      // biathlon
    Alpine,        // alpine
    SkiJumping,    // ski-jumping
    IceHockey,     // ice-hockey
    FigureSkating, // figure-skating
    SpeedSkating,  // speed-skating
    Curling,       // curling
    Other,         // other
}

impl Sport {
    pub const ALL: [Sport; 9] = [
        Sport::CrossCountry,
        Sport::Biathlon,
        Sport::Alpine,
        Sport::SkiJumping,
        Sport::IceHockey,
        Sport::FigureSkating,
        Sport::SpeedSkating,
        Sport::Curling,
        Sport::Other,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Sport::CrossCountry => "cross-country",
            Sport::Biathlon => "biathlon",
            Sport::Alpine => "alpine",
            Sport::SkiJumping => "ski-jumping",
            Sport::IceHockey => "ice-hockey",
            Sport::FigureSkating => "figure-skating",
            Sport::SpeedSkating => "speed-skating",
            Sport::Curling => "curling",
            Sport::Other => "other",
        }
    }

    /// Exact tag lookup. `None` for anything outside the closed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Sport::ALL.into_iter().find(|s| s.tag() == tag)
    }

    /// Category used for display and filtering: unknown tags land in `Other`.
    pub fn categorize(tag: &str) -> Self {
        Sport::from_tag(tag).unwrap_or(Sport::Other)
    }

    /// Lenient lookup for command-line input ("Ice_Hockey", "icehockey", ...).
    pub fn from_input(input: &str) -> Option<Self> {
        let wanted: String = input
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        Sport::ALL.into_iter().find(|s| {
            let tag: String = s.tag().chars().filter(|c| c.is_alphanumeric()).collect();
            tag == wanted
        })
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
