use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::actions::render_viewport::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::factory::colour_map_factory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourSchemeKind {
    #[default]
    PrimarySecondary,
    Ocean,
    Psychedelic,
    FireGradient,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[
        Self::PrimarySecondary,
        Self::Ocean,
        Self::Psychedelic,
        Self::FireGradient,
    ];

    /// Stable identifier used on the command line and in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PrimarySecondary => "primary-secondary",
            Self::Ocean => "ocean",
            Self::Psychedelic => "psychedelic",
            Self::FireGradient => "fire-gradient",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PrimarySecondary => "Primary & secondary",
            Self::Ocean => "Ocean",
            Self::Psychedelic => "Psychedelic",
            Self::FireGradient => "Fire gradient",
        }
    }

    /// Case-insensitive lookup by identifier or display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();

        Self::ALL.iter().copied().find(|kind| {
            kind.name().eq_ignore_ascii_case(name) || kind.display_name().eq_ignore_ascii_case(name)
        })
    }

    /// Colour of a single point under this scheme. Renders should build the
    /// map once with `colour_map_factory` instead.
    #[must_use]
    pub fn colour(self, iteration: u32, max_iterations: u32) -> Colour {
        colour_map_factory(self).map(iteration, max_iterations)
    }
}

impl fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourScheme(pub String);

impl fmt::Display for UnknownColourScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = ColourSchemeKind::ALL.iter().map(|kind| kind.name()).collect();

        write!(f, "unknown colour scheme '{}', expected one of: {}", self.0, known.join(", "))
    }
}

impl Error for UnknownColourScheme {}

impl FromStr for ColourSchemeKind {
    type Err = UnknownColourScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownColourScheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourSchemeKind::ALL.first(), Some(&ColourSchemeKind::default()));
    }

    #[test]
    fn default_is_primary_secondary() {
        assert_eq!(ColourSchemeKind::default(), ColourSchemeKind::PrimarySecondary);
    }

    #[test]
    fn colour_lookup_blacks_out_interior_points() {
        for &kind in ColourSchemeKind::ALL {
            assert_eq!(kind.colour(250, 250), Colour::BLACK, "{kind}");
            assert_eq!(kind.colour(300, 250), Colour::BLACK, "{kind}");
        }
    }

    #[test]
    fn colour_lookup_matches_the_built_map() {
        for &kind in ColourSchemeKind::ALL {
            let map = colour_map_factory(kind);

            for iteration in [0, 3, 42, 99] {
                assert_eq!(kind.colour(iteration, 100), map.map(iteration, 100));
            }
        }
        assert_eq!(ColourSchemeKind::Ocean.colour(50, 100), Colour::new(128, 0, 255));
    }

    #[test]
    fn from_name_accepts_identifier_and_display_name() {
        for &kind in ColourSchemeKind::ALL {
            assert_eq!(ColourSchemeKind::from_name(kind.name()), Some(kind));
            assert_eq!(ColourSchemeKind::from_name(kind.display_name()), Some(kind));
        }
    }

    #[test]
    fn from_name_ignores_case_and_surrounding_whitespace() {
        assert_eq!(ColourSchemeKind::from_name("OCEAN"), Some(ColourSchemeKind::Ocean));
        assert_eq!(
            ColourSchemeKind::from_name("  Psychedelic "),
            Some(ColourSchemeKind::Psychedelic)
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(ColourSchemeKind::from_name("sepia"), None);

        let err = "sepia".parse::<ColourSchemeKind>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
        assert!(err.to_string().contains("ocean"));
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in ColourSchemeKind::ALL.iter().enumerate() {
            for b in &ColourSchemeKind::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.display_name(), b.display_name());
            }
        }
    }
}
