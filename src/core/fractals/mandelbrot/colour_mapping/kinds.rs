use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColourScheme {
    #[default]
    Classic,
    Fire,
    Ocean,
    Purple,
    Matrix,
    Sunset,
    Psychedelic,
}

impl ColourScheme {
    pub const ALL: &'static [Self] = &[
        Self::Classic,
        Self::Fire,
        Self::Ocean,
        Self::Purple,
        Self::Matrix,
        Self::Sunset,
        Self::Psychedelic,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Purple => "Purple",
            Self::Matrix => "Matrix",
            Self::Sunset => "Sunset",
            Self::Psychedelic => "Psychedelic",
        }
    }

    /// Starting hue in degrees for the hue-rotating ramps.
    #[must_use]
    pub const fn base_hue(self) -> f64 {
        match self {
            Self::Classic => 240.0,
            Self::Fire => 0.0,
            Self::Ocean => 190.0,
            Self::Purple => 280.0,
            Self::Matrix => 120.0,
            Self::Sunset => 20.0,
            Self::Psychedelic => 300.0,
        }
    }

    /// Whether the scheme samples the wall clock.
    #[must_use]
    pub const fn is_time_varying(self) -> bool {
        matches!(self, Self::Psychedelic)
    }

    /// Looks a scheme up by its serialised name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.display_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourScheme::ALL.first(), Some(&ColourScheme::default()));
        assert_eq!(ColourScheme::ALL.len(), 7);
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourScheme::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn only_psychedelic_is_time_varying() {
        for &scheme in ColourScheme::ALL {
            assert_eq!(scheme.is_time_varying(), scheme == ColourScheme::Psychedelic);
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ColourScheme::from_name("ocean"), Some(ColourScheme::Ocean));
        assert_eq!(ColourScheme::from_name("MATRIX"), Some(ColourScheme::Matrix));
        assert_eq!(ColourScheme::from_name("plaid"), None);
    }

    #[test]
    fn serialises_as_snake_case_name() {
        let json = serde_json::to_string(&ColourScheme::Sunset).unwrap();

        assert_eq!(json, "\"sunset\"");
        assert_eq!(
            serde_json::from_str::<ColourScheme>("\"psychedelic\"").unwrap(),
            ColourScheme::Psychedelic
        );
    }
}
