use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod configuration;
pub mod render;

/// Default performance parameters
pub mod defaults {
    pub const WIND_SPEED_KNOTS: f64 = 15.0;
    pub const WIND_ANGLE_DEG: f64 = 45.0;
    pub const HULL_WEIGHT_CLASS: &str = "18";

    /// Boat speed in knots at 10 knots of wind on a beam reach.
    pub const BASE_SPEED_KNOTS: f64 = 8.0;
}

/// Discrete hull weight category. Kept as the raw token so that it can be
/// echoed back exactly as the control supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HullWeightClass(String);

impl HullWeightClass {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Multiplier applied to the estimated speed.
    ///
    /// Any class other than "16" and "17" (including unknown tokens) gets the
    /// neutral factor of 1.0.
    pub fn weight_factor(&self) -> f64 {
        match self.as_str() {
            "16" => 1.1,
            "17" => 1.05,
            _ => 1.0,
        }
    }
}

impl Default for HullWeightClass {
    fn default() -> Self {
        Self::new(defaults::HULL_WEIGHT_CLASS)
    }
}

impl fmt::Display for HullWeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HullWeightClass {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Sailing conditions and hull choice the estimate is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceInputs {
    /// Knots.
    pub wind_speed: f64,
    /// Degrees off the bow.
    pub wind_angle: f64,
    pub hull_weight_class: HullWeightClass,
}

impl Default for PerformanceInputs {
    fn default() -> Self {
        Self {
            wind_speed: defaults::WIND_SPEED_KNOTS,
            wind_angle: defaults::WIND_ANGLE_DEG,
            hull_weight_class: HullWeightClass::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceOutputs {
    /// Knots, unrounded.
    pub estimated_speed: f64,
    /// Whole degrees.
    pub heel_angle: i32,
}

/// Estimated boat speed in knots.
///
/// Inputs are not validated: a negative wind speed, or a wind angle past 180
/// degrees, yields a zero or negative speed.
pub fn compute_speed(inputs: &PerformanceInputs) -> f64 {
    let wind_factor = inputs.wind_speed / 10.0;
    let angle_factor = (inputs.wind_angle * PI / 180.0).sin();
    let weight_factor = inputs.hull_weight_class.weight_factor();

    defaults::BASE_SPEED_KNOTS * wind_factor * angle_factor * weight_factor
}

/// Heel angle in whole degrees, one degree per ten degrees of wind angle.
pub fn compute_heel_angle(wind_angle: f64) -> i32 {
    round_half_up(wind_angle / 10.0) as i32
}

/// Round to nearest, ties toward positive infinity (4.5 -> 5, -4.5 -> -4).
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Recompute every output from scratch.
pub fn estimate(inputs: &PerformanceInputs) -> PerformanceOutputs {
    let outputs = PerformanceOutputs {
        estimated_speed: compute_speed(inputs),
        heel_angle: compute_heel_angle(inputs.wind_angle),
    };
    debug!(
        "Estimate for wind {} kn @ {}°, hull class {}: {:.3} kn, heel {}°",
        inputs.wind_speed,
        inputs.wind_angle,
        inputs.hull_weight_class,
        outputs.estimated_speed,
        outputs.heel_angle
    );
    outputs
}

/// JavaScript entry point for the estimator.
///
/// Accepts `{ windSpeed, windAngle, hullWeightClass }` (missing fields take
/// their defaults) and returns `{ estimatedSpeed, heelAngle }`.
#[wasm_bindgen(js_name = estimatePerformance)]
pub fn estimate_performance(inputs_js: JsValue) -> Result<JsValue, JsError> {
    let inputs: PerformanceInputs = if inputs_js.is_undefined() || inputs_js.is_null() {
        PerformanceInputs::default()
    } else {
        serde_wasm_bindgen::from_value(inputs_js)
            .map_err(|e| JsError::new(&format!("Invalid performance inputs: {}", e)))?
    };

    serde_wasm_bindgen::to_value(&estimate(&inputs))
        .map_err(|e| JsError::new(&format!("Failed to serialize estimate: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn inputs(wind_speed: f64, wind_angle: f64, class: &str) -> PerformanceInputs {
        PerformanceInputs {
            wind_speed,
            wind_angle,
            hull_weight_class: HullWeightClass::from(class),
        }
    }

    #[test]
    fn default_conditions_estimate() {
        let speed = compute_speed(&PerformanceInputs::default());
        let expected = 8.0 * 1.5 * (PI / 4.0).sin();
        assert!((speed - expected).abs() < EPS);
        assert!((speed - 8.485).abs() < 1e-3);
    }

    #[test]
    fn lighter_hulls_are_faster() {
        let heavy = compute_speed(&inputs(15.0, 45.0, "18"));
        let medium = compute_speed(&inputs(15.0, 45.0, "17"));
        let light = compute_speed(&inputs(15.0, 45.0, "16"));
        assert!((light - heavy * 1.1).abs() < EPS);
        assert!((medium - heavy * 1.05).abs() < EPS);
    }

    #[test]
    fn unknown_class_uses_neutral_factor() {
        let heavy = compute_speed(&inputs(20.0, 60.0, "18"));
        let unknown = compute_speed(&inputs(20.0, 60.0, "42"));
        let empty = compute_speed(&inputs(20.0, 60.0, ""));
        assert_eq!(heavy, unknown);
        assert_eq!(heavy, empty);
    }

    #[test]
    fn heel_angle_rounds_ties_up() {
        assert_eq!(compute_heel_angle(45.0), 5);
        assert_eq!(compute_heel_angle(44.0), 4);
        assert_eq!(compute_heel_angle(0.0), 0);
        assert_eq!(compute_heel_angle(180.0), 18);
        assert_eq!(compute_heel_angle(-45.0), -4);
    }

    #[test]
    fn speed_follows_sine_of_angle() {
        assert_eq!(compute_speed(&inputs(15.0, 0.0, "18")), 0.0);
        assert!(compute_speed(&inputs(15.0, 180.0, "18")).abs() < 1e-12);

        let beam_reach = compute_speed(&inputs(15.0, 90.0, "18"));
        assert!((beam_reach - 12.0).abs() < EPS);
        for angle in 0..=180 {
            let speed = compute_speed(&inputs(15.0, angle as f64, "18"));
            assert!(speed <= beam_reach + EPS, "angle {} beat beam reach", angle);
        }
    }

    #[test]
    fn speed_is_non_negative_in_normal_range() {
        for wind in 0..=40 {
            for angle in (0..=180).step_by(5) {
                for class in ["16", "17", "18"] {
                    let speed = compute_speed(&inputs(wind as f64, angle as f64, class));
                    assert!(speed >= 0.0, "{} kn @ {}° class {} gave {}", wind, angle, class, speed);
                }
            }
        }
    }

    #[test]
    fn out_of_range_inputs_are_not_rejected() {
        assert!(compute_speed(&inputs(-10.0, 90.0, "18")) < 0.0);
        assert!(compute_speed(&inputs(15.0, 270.0, "18")) < 0.0);
    }

    #[test]
    fn switching_class_back_restores_speed() {
        let mut current = inputs(17.0, 73.0, "18");
        let original = estimate(&current);

        current.hull_weight_class = HullWeightClass::from("16");
        assert_ne!(estimate(&current), original);

        current.hull_weight_class = HullWeightClass::from("18");
        assert_eq!(estimate(&current), original);
    }

    #[test]
    fn inputs_use_camel_case_and_defaults() {
        let parsed: PerformanceInputs =
            serde_json::from_str(r#"{"windSpeed": 20, "hullWeightClass": "16"}"#).unwrap();
        assert_eq!(parsed.wind_speed, 20.0);
        assert_eq!(parsed.wind_angle, defaults::WIND_ANGLE_DEG);
        assert_eq!(parsed.hull_weight_class.as_str(), "16");

        let outputs = serde_json::to_value(estimate(&parsed)).unwrap();
        assert!(outputs.get("estimatedSpeed").is_some());
        assert_eq!(outputs["heelAngle"], 5);
    }
}
