//! Formatting of estimator and configuration state into display strings, and
//! the single render step that pushes them into display targets.

use crate::configuration::Configuration;
use crate::{PerformanceInputs, PerformanceOutputs};
use log::trace;

/// Element ids of the performance display targets.
pub mod targets {
    pub const CALCULATED_SPEED: &str = "calculated-speed";
    pub const SAILING_SPEED: &str = "sailing-speed";
    pub const HEEL_ANGLE: &str = "heel-angle";
    pub const DISPLAY_WIND_SPEED: &str = "display-wind-speed";
    pub const DISPLAY_WIND_ANGLE: &str = "display-wind-angle";
    pub const DISPLAY_WEIGHT: &str = "display-weight";
    pub const WIND_SPEED_VALUE: &str = "wind-speed-value";
    pub const WIND_ANGLE_VALUE: &str = "wind-angle-value";

    pub const COLOR_BADGE: &str = "color-badge";
    pub const HULL_DISPLAY: &str = "hull-display";
    pub const INTERIOR_DISPLAY: &str = "interior-display";
    pub const LAYOUT_DISPLAY: &str = "layout-display";
}

/// Somewhere text can be written by target id.
pub trait DisplaySink {
    /// Returns `false` if the target does not exist. Absence is not an error.
    fn set_text(&mut self, target: &str, text: &str) -> bool;
}

/// Pre-formatted performance display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceReadout {
    pub estimated_speed: String,
    pub heel_angle: String,
    pub wind_speed: String,
    pub wind_angle: String,
    pub hull_weight_class: String,
}

impl PerformanceReadout {
    pub fn new(inputs: &PerformanceInputs, outputs: &PerformanceOutputs) -> Self {
        Self {
            estimated_speed: format!("{:.1}", outputs.estimated_speed),
            heel_angle: format!("{}°", outputs.heel_angle),
            wind_speed: inputs.wind_speed.to_string(),
            wind_angle: inputs.wind_angle.to_string(),
            hull_weight_class: inputs.hull_weight_class.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationReadout {
    pub color: String,
    pub interior: String,
    pub layout: String,
}

impl ConfigurationReadout {
    pub fn new(config: &Configuration) -> Self {
        Self {
            color: config.color.label().to_string(),
            interior: config.interior_label(),
            layout: config.layout_label(),
        }
    }
}

/// Write every performance target. Returns how many targets were present.
pub fn render_performance(readout: &PerformanceReadout, sink: &mut impl DisplaySink) -> usize {
    let writes = [
        (targets::CALCULATED_SPEED, &readout.estimated_speed),
        (targets::SAILING_SPEED, &readout.estimated_speed),
        (targets::HEEL_ANGLE, &readout.heel_angle),
        (targets::DISPLAY_WIND_SPEED, &readout.wind_speed),
        (targets::DISPLAY_WIND_ANGLE, &readout.wind_angle),
        (targets::DISPLAY_WEIGHT, &readout.hull_weight_class),
        (targets::WIND_SPEED_VALUE, &readout.wind_speed),
        (targets::WIND_ANGLE_VALUE, &readout.wind_angle),
    ];
    write_all(sink, &writes)
}

pub fn render_configuration(readout: &ConfigurationReadout, sink: &mut impl DisplaySink) -> usize {
    let writes = [
        (targets::COLOR_BADGE, &readout.color),
        (targets::HULL_DISPLAY, &readout.color),
        (targets::INTERIOR_DISPLAY, &readout.interior),
        (targets::LAYOUT_DISPLAY, &readout.layout),
    ];
    write_all(sink, &writes)
}

fn write_all(sink: &mut impl DisplaySink, writes: &[(&str, &String)]) -> usize {
    let mut written = 0;
    for &(target, text) in writes {
        if sink.set_text(target, text) {
            written += 1;
        } else {
            trace!("Display target #{} not present, skipping", target);
        }
    }
    written
}

/// Writes into elements of the current document, looked up by id.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentSink;

impl DisplaySink for DocumentSink {
    fn set_text(&mut self, target: &str, text: &str) -> bool {
        match gloo_utils::document().get_element_by_id(target) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::HullColor;
    use crate::{estimate, HullWeightClass};
    use std::collections::HashMap;

    /// Only ids registered up front accept text.
    #[derive(Default)]
    struct MapSink(HashMap<String, String>);

    impl MapSink {
        fn with_targets(ids: &[&str]) -> Self {
            Self(ids.iter().map(|id| (id.to_string(), String::new())).collect())
        }

        fn text(&self, id: &str) -> Option<&str> {
            self.0.get(id).map(String::as_str)
        }
    }

    impl DisplaySink for MapSink {
        fn set_text(&mut self, target: &str, text: &str) -> bool {
            match self.0.get_mut(target) {
                Some(slot) => {
                    *slot = text.to_string();
                    true
                }
                None => false,
            }
        }
    }

    fn default_readout() -> PerformanceReadout {
        let inputs = PerformanceInputs::default();
        PerformanceReadout::new(&inputs, &estimate(&inputs))
    }

    #[test]
    fn readout_formats_defaults() {
        let readout = default_readout();
        assert_eq!(readout.estimated_speed, "8.5");
        assert_eq!(readout.heel_angle, "5°");
        assert_eq!(readout.wind_speed, "15");
        assert_eq!(readout.wind_angle, "45");
        assert_eq!(readout.hull_weight_class, "18");
    }

    #[test]
    fn readout_echoes_unknown_class_verbatim() {
        let inputs = PerformanceInputs {
            wind_speed: 22.0,
            wind_angle: 90.0,
            hull_weight_class: HullWeightClass::from("19"),
        };
        let readout = PerformanceReadout::new(&inputs, &estimate(&inputs));
        assert_eq!(readout.estimated_speed, "17.6");
        assert_eq!(readout.heel_angle, "9°");
        assert_eq!(readout.hull_weight_class, "19");
    }

    #[test]
    fn straight_upwind_shows_zero() {
        let inputs = PerformanceInputs {
            wind_angle: 180.0,
            ..PerformanceInputs::default()
        };
        let readout = PerformanceReadout::new(&inputs, &estimate(&inputs));
        assert_eq!(readout.estimated_speed, "0.0");
        assert_eq!(readout.heel_angle, "18°");
    }

    #[test]
    fn render_fills_every_present_target() {
        let mut sink = MapSink::with_targets(&[
            targets::CALCULATED_SPEED,
            targets::SAILING_SPEED,
            targets::HEEL_ANGLE,
            targets::DISPLAY_WIND_SPEED,
            targets::DISPLAY_WIND_ANGLE,
            targets::DISPLAY_WEIGHT,
            targets::WIND_SPEED_VALUE,
            targets::WIND_ANGLE_VALUE,
        ]);
        assert_eq!(render_performance(&default_readout(), &mut sink), 8);
        assert_eq!(sink.text(targets::SAILING_SPEED), Some("8.5"));
        assert_eq!(sink.text(targets::CALCULATED_SPEED), Some("8.5"));
        assert_eq!(sink.text(targets::DISPLAY_WEIGHT), Some("18"));
    }

    #[test]
    fn missing_targets_are_skipped() {
        let mut sink = MapSink::with_targets(&[targets::HEEL_ANGLE]);
        assert_eq!(render_performance(&default_readout(), &mut sink), 1);
        assert_eq!(sink.text(targets::HEEL_ANGLE), Some("5°"));
        assert_eq!(sink.text(targets::SAILING_SPEED), None);

        let mut empty = MapSink::default();
        assert_eq!(render_performance(&default_readout(), &mut empty), 0);
    }

    #[test]
    fn configuration_render_duplicates_color() {
        let config = Configuration {
            color: HullColor::MidnightBlack,
            interior: "sport".to_string(),
            layout: "racing".to_string(),
        };
        let mut sink = MapSink::with_targets(&[
            targets::COLOR_BADGE,
            targets::HULL_DISPLAY,
            targets::LAYOUT_DISPLAY,
        ]);
        assert_eq!(render_configuration(&ConfigurationReadout::new(&config), &mut sink), 3);
        assert_eq!(sink.text(targets::COLOR_BADGE), Some("Midnight Black"));
        assert_eq!(sink.text(targets::HULL_DISPLAY), Some("Midnight Black"));
        assert_eq!(sink.text(targets::LAYOUT_DISPLAY), Some("Racing Layout"));
        assert_eq!(sink.text(targets::INTERIOR_DISPLAY), None);
    }
}
