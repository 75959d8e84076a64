//! Main module for the VMG yacht configurator using Yew.
//! Owns the application state and wires UI events to state actions.

use log::{info, warn};
use vmg_configurator::HullWeightClass;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod state;
mod utils;

use components::{ConfigurationPanel, Gallery, NavBar, PerformancePanel};
use config::*;
use hooks::{use_host_mirror, use_scroll_lock, use_scrolled_past};
use state::{ConfiguratorAction, ConfiguratorState};
use utils::{parse_hull_color, parse_wind_angle, parse_wind_speed, scroll_to_section};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Build an `oninput` callback for a range slider: parse the raw value and
/// dispatch the resulting action. Unparsable values leave the state as is.
fn slider_callback<P, E>(
    state: &UseReducerHandle<ConfiguratorState>,
    parse: P,
    action: fn(f64) -> ConfiguratorAction,
) -> Callback<InputEvent>
where
    P: Fn(&str) -> Result<f64, E> + 'static,
    E: std::fmt::Display,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match parse(&input.value()) {
            Ok(value) => state.dispatch(action(value)),
            Err(err) => warn!("Ignoring slider value: {}", err),
        }
    })
}

/// Build an `onchange` callback for a `<select>` that dispatches its value.
fn select_callback(
    state: &UseReducerHandle<ConfiguratorState>,
    action: fn(String) -> ConfiguratorAction,
) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        state.dispatch(action(select.value()));
    })
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component]
pub fn App() -> Html {
    let state = use_reducer(ConfiguratorState::default);

    let performance_readout = state.performance_readout();
    let configuration_readout = state.configuration_readout();

    // Re-render host page targets after every mutation
    use_host_mirror(performance_readout.clone(), configuration_readout.clone());

    let navbar_solid = use_scrolled_past(NAVBAR_SOLID_AFTER_PX);
    let (lock_scroll, unlock_scroll) = use_scroll_lock();

    let on_navigate = {
        let state = state.clone();
        Callback::from(move |section_id: String| {
            scroll_to_section(&section_id);
            state.dispatch(ConfiguratorAction::CloseMenu);
        })
    };

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Mobile menu toggled");
            state.dispatch(ConfiguratorAction::ToggleMenu);
        })
    };

    let on_color_click = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(swatch) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let token = swatch.get_attribute("data-color").unwrap_or_default();
            match parse_hull_color(&token) {
                Ok(color) => state.dispatch(ConfiguratorAction::SelectColor(color)),
                Err(err) => warn!("{}", err),
            }
        })
    };

    let on_interior_change = select_callback(&state, ConfiguratorAction::SelectInterior);
    let on_layout_change = select_callback(&state, ConfiguratorAction::SelectLayout);
    let on_weight_change = select_callback(&state, |token| {
        ConfiguratorAction::SetHullWeightClass(HullWeightClass::new(token))
    });

    let on_wind_speed_input = slider_callback(&state, parse_wind_speed, ConfiguratorAction::SetWindSpeed);
    let on_wind_angle_input = slider_callback(&state, parse_wind_angle, ConfiguratorAction::SetWindAngle);

    let on_select_tab = {
        let state = state.clone();
        Callback::from(move |tab: String| state.dispatch(ConfiguratorAction::SelectTab(tab)))
    };

    html! {
        <div class="app-container">
            <NavBar solid={navbar_solid}
                menu_open={state.menu_open}
                {on_navigate}
                {on_toggle_menu} />

            <main>
                <ConfigurationPanel selected_color={state.configuration.color}
                    interior={state.configuration.interior.clone()}
                    layout={state.configuration.layout.clone()}
                    readout={configuration_readout}
                    {on_color_click}
                    {on_interior_change}
                    {on_layout_change}
                    on_mouse_enter={lock_scroll}
                    on_mouse_leave={unlock_scroll} />

                <PerformancePanel readout={performance_readout}
                    {on_wind_speed_input}
                    {on_wind_angle_input}
                    {on_weight_change} />

                <Gallery active_tab={state.active_tab.clone()} on_select={on_select_tab} />
            </main>
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then mounts the App.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        warn!("Keeping the existing logger: {}", e);
    }

    match gloo_utils::document().get_element_by_id(MOUNT_ELEMENT_ID) {
        Some(root) => {
            info!("Mounting configurator into #{}", MOUNT_ELEMENT_ID);
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            info!("No #{} element, mounting configurator into <body>", MOUNT_ELEMENT_ID);
            yew::Renderer::<App>::new().render();
        }
    }
}
