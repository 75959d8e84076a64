//! Yacht configuration choices: hull color, interior package and deck layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_INTERIOR: &str = "luxury";
pub const DEFAULT_LAYOUT: &str = "standard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HullColor {
    #[default]
    VmgBronze,
    MidnightBlack,
    Platinum,
}

impl HullColor {
    pub const ALL: [HullColor; 3] = [
        HullColor::VmgBronze,
        HullColor::MidnightBlack,
        HullColor::Platinum,
    ];

    /// Token used in markup (`data-color`).
    pub fn token(self) -> &'static str {
        match self {
            HullColor::VmgBronze => "vmg-bronze",
            HullColor::MidnightBlack => "midnight-black",
            HullColor::Platinum => "platinum",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HullColor::VmgBronze => "VMG Bronze",
            HullColor::MidnightBlack => "Midnight Black",
            HullColor::Platinum => "Platinum Silver",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown hull color: {:?}", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for HullColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HullColor::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// The customer's current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub color: HullColor,
    pub interior: String,
    pub layout: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            color: HullColor::default(),
            interior: DEFAULT_INTERIOR.to_string(),
            layout: DEFAULT_LAYOUT.to_string(),
        }
    }
}

impl Configuration {
    /// "luxury" -> "Luxury Package"
    pub fn interior_label(&self) -> String {
        format!("{} Package", capitalize(&self.interior))
    }

    /// "standard" -> "Standard Layout"
    pub fn layout_label(&self) -> String {
        format!("{} Layout", capitalize(&self.layout))
    }
}

/// Upper-case the first character only; the rest is left untouched.
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_showroom_selection() {
        let config = Configuration::default();
        assert_eq!(config.color, HullColor::VmgBronze);
        assert_eq!(config.interior_label(), "Luxury Package");
        assert_eq!(config.layout_label(), "Standard Layout");
    }

    #[test]
    fn color_tokens_parse_back() {
        for color in HullColor::ALL {
            assert_eq!(color.token().parse::<HullColor>(), Ok(color));
        }
        assert_eq!(
            "chartreuse".parse::<HullColor>(),
            Err(UnknownColor("chartreuse".to_string()))
        );
        assert_eq!(HullColor::Platinum.label(), "Platinum Silver");
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("racing"), "Racing");
        assert_eq!(capitalize("open-plan"), "Open-plan");
        assert_eq!(capitalize("eCO"), "ECO");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn empty_interior_still_gets_suffix() {
        let config = Configuration {
            interior: String::new(),
            ..Configuration::default()
        };
        assert_eq!(config.interior_label(), " Package");
    }
}
