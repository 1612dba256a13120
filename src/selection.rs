//! The user's filter choice

use crate::data::Category;
use crate::error::{GridError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Either no filter, or one highlighted category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Only(Category),
}

impl Selection {
    /// Selector options in the order the sidebar lists them
    pub fn options() -> [Selection; 6] {
        [
            Selection::All,
            Selection::Only(Category::Parade),
            Selection::Only(Category::Awards),
            Selection::Only(Category::SixtyMinutes),
            Selection::Only(Category::Ncis),
            Selection::Only(Category::Other),
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Only(c) => c.key(),
        }
    }

    /// Label shown in the selector
    pub fn label(self) -> &'static str {
        match self {
            Selection::All => "All",
            Selection::Only(c) => c.display_name(),
        }
    }

    /// Whether a cell of this category keeps its own color
    pub fn highlights(self, category: Category) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Accepts a key (`all`, `ncis`, `60m`, ...) or a selector label
/// (`All`, `“NCIS”`, `Macy’s Parade`, ...).
impl FromStr for Selection {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        if let Ok(category) = trimmed.parse::<Category>() {
            return Ok(Selection::Only(category));
        }
        Category::from_display_name(trimmed)
            .map(Selection::Only)
            .ok_or_else(|| GridError::UnknownSelection(s.to_string()))
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(Selection::default(), Selection::All);
    }

    #[test]
    fn test_options_start_with_all_then_legend_order() {
        let options = Selection::options();
        assert_eq!(options[0], Selection::All);
        let rest: Vec<Category> = options[1..]
            .iter()
            .map(|s| match s {
                Selection::Only(c) => *c,
                Selection::All => panic!("All listed twice"),
            })
            .collect();
        assert_eq!(rest, Category::ALL.to_vec());
    }

    #[test]
    fn test_labels_match_selector() {
        let labels: Vec<&str> = Selection::options().iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Macy’s Parade", "Academy Awards", "“60 Minutes”", "“NCIS”", "Other"]
        );
    }

    #[test]
    fn test_parse_keys_and_labels() {
        assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!("All".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!("ncis".parse::<Selection>().unwrap(), Selection::Only(Category::Ncis));
        assert_eq!("“NCIS”".parse::<Selection>().unwrap(), Selection::Only(Category::Ncis));
        assert_eq!(
            "Macy’s Parade".parse::<Selection>().unwrap(),
            Selection::Only(Category::Parade)
        );
    }

    #[test]
    fn test_every_option_parses_from_its_key_and_label() {
        for option in Selection::options() {
            assert_eq!(option.key().parse::<Selection>().unwrap(), option);
            assert_eq!(option.label().parse::<Selection>().unwrap(), option);
        }
    }

    #[test]
    fn test_unknown_selection() {
        let err = "football".parse::<Selection>().unwrap_err();
        assert!(matches!(err, GridError::UnknownSelection(ref s) if s == "football"));
    }

    #[test]
    fn test_highlights() {
        assert!(Selection::All.highlights(Category::Other));
        assert!(Selection::Only(Category::Ncis).highlights(Category::Ncis));
        assert!(!Selection::Only(Category::Ncis).highlights(Category::Awards));
    }

    #[test]
    fn test_serializes_as_key() {
        assert_eq!(serde_json::to_string(&Selection::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::to_string(&Selection::Only(Category::SixtyMinutes)).unwrap(),
            "\"60m\""
        );
    }
}
