use serde::{Deserialize, Serialize};

/// The closed set of languages the support backend understands.
///
/// Language *detection* is server-side; the client only tracks which locale
/// the user selected for display and sample seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Marathi,
    Bengali,
    Gujarati,
}

impl Locale {
    /// All supported locales, in selector order.
    pub const ALL: [Locale; 7] = [
        Locale::English,
        Locale::Hindi,
        Locale::Tamil,
        Locale::Telugu,
        Locale::Marathi,
        Locale::Bengali,
        Locale::Gujarati,
    ];

    /// Human-readable name, as shown in the language selector.
    pub fn name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Hindi => "Hindi",
            Locale::Tamil => "Tamil",
            Locale::Telugu => "Telugu",
            Locale::Marathi => "Marathi",
            Locale::Bengali => "Bengali",
            Locale::Gujarati => "Gujarati",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Locale::default()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::error::Error;

    /// Case-insensitive parse of the human-readable name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .iter()
            .find(|l| l.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                crate::error::Error::Other(format!("unknown locale: {s:?}"))
            })
    }
}
