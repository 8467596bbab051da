use super::sport::Sport;
use std::collections::BTreeMap;

/// Display attributes and startup default of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub icon: &'static str,
    pub name: &'static str,
    pub default_enabled: bool,
}

impl CategoryInfo {
    /// "🥌 Curling"
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

fn display_attrs(sport: Sport) -> (&'static str, &'static str) {
    match sport {
        Sport::CrossCountry => ("⛷️", "Längdskidor"),
        Sport::Biathlon => ("🎯", "Skidskytte"),
        Sport::Alpine => ("🎿", "Alpint"),
        Sport::SkiJumping => ("🪂", "Backhoppning"),
        Sport::IceHockey => ("🏒", "Ishockey"),
        Sport::FigureSkating => ("⛸️", "Konståkning"),
        Sport::SpeedSkating => ("⏱️", "Skridsko"),
        Sport::Curling => ("🥌", "Curling"),
        Sport::Other => ("🏆", "Övrigt"),
    }
}

/// Category configuration: one entry per known sport, fallback included.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: BTreeMap<Sport, CategoryInfo>,
}

impl CategoryTable {
    /// Build the table; only the sports in `enabled` start switched on.
    pub fn with_defaults(enabled: &[Sport]) -> Self {
        let entries = Sport::ALL
            .into_iter()
            .map(|sport| {
                let (icon, name) = display_attrs(sport);
                let info = CategoryInfo {
                    icon,
                    name,
                    default_enabled: enabled.contains(&sport),
                };
                (sport, info)
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, sport: Sport) -> &CategoryInfo {
        // `Sport::ALL` is always fully populated, `Other` included.
        &self.entries[&sport]
    }

    /// Entry for a raw event tag, falling back to `other`.
    pub fn lookup(&self, tag: &str) -> &CategoryInfo {
        self.get(Sport::categorize(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sport, &CategoryInfo)> {
        self.entries.iter().map(|(s, i)| (*s, i))
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::with_defaults(&[Sport::CrossCountry, Sport::Biathlon])
    }
}
