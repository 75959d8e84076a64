use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;
use std::fmt;
use vmg_configurator::configuration::HullColor;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

// Leading integer, the way range inputs and `parseInt` read their value
static LEADING_INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

/// Errors raised while reading raw control values.
#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    EmptyInput(&'static str),
    NotANumber { field: &'static str, input: String },
    OutOfRange(&'static str, i64),
    UnknownColor(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyInput(field) => write!(f, "{} cannot be empty", field),
            InputError::NotANumber { field, input } => {
                write!(f, "{} must start with a whole number, got {:?}", field, input)
            }
            InputError::OutOfRange(field, value) => {
                write!(f, "{} value {} does not fit", field, value)
            }
            InputError::UnknownColor(token) => write!(f, "Unknown hull color {:?}", token),
        }
    }
}

impl std::error::Error for InputError {}

/// Read the leading integer of a control value: "15" -> 15, " 20kn" -> 20.
/// Trailing garbage is ignored; a value with no leading digits is an error.
pub fn parse_leading_int(input: &str, field: &'static str) -> Result<i64, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::EmptyInput(field));
    }

    let captures = LEADING_INT_REGEX
        .captures(input)
        .ok_or_else(|| InputError::NotANumber {
            field,
            input: input.to_string(),
        })?;
    let digits = &captures[1];

    digits.parse::<i64>().map_err(|_| {
        let sign = if digits.starts_with('-') { i64::MIN } else { i64::MAX };
        InputError::OutOfRange(field, sign)
    })
}

/// Slider value as a wind speed in knots.
pub fn parse_wind_speed(input: &str) -> Result<f64, InputError> {
    parse_leading_int(input, "Wind speed").map(|v| v as f64)
}

/// Slider value as a wind angle in degrees.
pub fn parse_wind_angle(input: &str) -> Result<f64, InputError> {
    parse_leading_int(input, "Wind angle").map(|v| v as f64)
}

/// `data-color` attribute value as a hull color.
pub fn parse_hull_color(token: &str) -> Result<HullColor, InputError> {
    token
        .parse::<HullColor>()
        .map_err(|e| InputError::UnknownColor(e.0))
}

/// Smoothly scroll the section with the given id to the top of the viewport.
/// Returns `false` (and does nothing) if there is no such section.
pub fn scroll_to_section(section_id: &str) -> bool {
    let Some(section) = gloo_utils::document().get_element_by_id(section_id) else {
        debug!("No section #{} to scroll to", section_id);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
