//! Application-level configuration constants.

use log::Level;

// Logging
pub const LOG_LEVEL: Level = Level::Info;

// Host page
pub const MOUNT_ELEMENT_ID: &str = "configurator-app";
pub const CONFIGURATION_SECTION_ID: &str = "configuration";

// Min/Max limits for the performance sliders
pub const MIN_WIND_SPEED_KNOTS: i64 = 5;
pub const MAX_WIND_SPEED_KNOTS: i64 = 35;
pub const MIN_WIND_ANGLE_DEG: i64 = 0;
pub const MAX_WIND_ANGLE_DEG: i64 = 180;

/// Hull weight classes offered in the dropdown: (token, label).
pub const HULL_WEIGHT_CLASSES: [(&str, &str); 3] = [
    ("16", "16 t (Light)"),
    ("17", "17 t (Medium)"),
    ("18", "18 t (Standard)"),
];

/// Interior packages: (token, label).
pub const INTERIORS: [(&str, &str); 3] = [
    ("luxury", "Luxury"),
    ("sport", "Sport"),
    ("classic", "Classic"),
];

/// Deck layouts: (token, label).
pub const LAYOUTS: [(&str, &str); 3] = [
    ("standard", "Standard"),
    ("racing", "Racing"),
    ("cruising", "Cruising"),
];

/// Gallery tabs: (panel id, label). The first one is active on load.
pub const GALLERY_TABS: [(&str, &str); 4] = [
    ("exterior", "Exterior"),
    ("interior", "Interior"),
    ("deck", "Deck"),
    ("sailing", "Sailing"),
];

/// In-page navigation: (section id, label).
pub const NAV_SECTIONS: [(&str, &str); 4] = [
    ("overview", "Overview"),
    ("configuration", "Configure"),
    ("performance", "Performance"),
    ("gallery", "Gallery"),
];

// UI behavior
pub const NAVBAR_SOLID_AFTER_PX: f64 = 100.0;
