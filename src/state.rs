//! The single state object owned by the top-level component.
//!
//! Every user interaction becomes a [`ConfiguratorAction`]; reducing it yields
//! a fresh [`ConfiguratorState`]. Derived values (estimate, readouts) are
//! recomputed from the state on every render, never stored.

use crate::config::GALLERY_TABS;
use log::debug;
use std::rc::Rc;
use vmg_configurator::configuration::{Configuration, HullColor};
use vmg_configurator::render::{ConfigurationReadout, PerformanceReadout};
use vmg_configurator::{estimate, HullWeightClass, PerformanceInputs, PerformanceOutputs};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguratorState {
    pub configuration: Configuration,
    pub performance: PerformanceInputs,
    pub active_tab: String,
    pub menu_open: bool,
}

impl Default for ConfiguratorState {
    fn default() -> Self {
        Self {
            configuration: Configuration::default(),
            performance: PerformanceInputs::default(),
            active_tab: GALLERY_TABS[0].0.to_string(),
            menu_open: false,
        }
    }
}

impl ConfiguratorState {
    pub fn outputs(&self) -> PerformanceOutputs {
        estimate(&self.performance)
    }

    pub fn performance_readout(&self) -> PerformanceReadout {
        PerformanceReadout::new(&self.performance, &self.outputs())
    }

    pub fn configuration_readout(&self) -> ConfigurationReadout {
        ConfigurationReadout::new(&self.configuration)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfiguratorAction {
    SetWindSpeed(f64),
    SetWindAngle(f64),
    SetHullWeightClass(HullWeightClass),
    SelectColor(HullColor),
    SelectInterior(String),
    SelectLayout(String),
    SelectTab(String),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for ConfiguratorState {
    type Action = ConfiguratorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!("Applying {:?}", action);
        let mut next = (*self).clone();
        match action {
            ConfiguratorAction::SetWindSpeed(knots) => next.performance.wind_speed = knots,
            ConfiguratorAction::SetWindAngle(degrees) => next.performance.wind_angle = degrees,
            ConfiguratorAction::SetHullWeightClass(class) => {
                next.performance.hull_weight_class = class
            }
            ConfiguratorAction::SelectColor(color) => next.configuration.color = color,
            ConfiguratorAction::SelectInterior(interior) => next.configuration.interior = interior,
            ConfiguratorAction::SelectLayout(layout) => next.configuration.layout = layout,
            ConfiguratorAction::SelectTab(tab) => next.active_tab = tab,
            ConfiguratorAction::ToggleMenu => next.menu_open = !next.menu_open,
            ConfiguratorAction::CloseMenu => next.menu_open = false,
        }
        Rc::new(next)
    }
}
