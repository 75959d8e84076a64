//! Pure Yew view components for the configurator page.
//!
//! This module contains stateless components that render based on props;
//! all state lives in the top-level component.

use crate::config::{
    CONFIGURATION_SECTION_ID, GALLERY_TABS, HULL_WEIGHT_CLASSES, INTERIORS, LAYOUTS,
    MAX_WIND_ANGLE_DEG, MAX_WIND_SPEED_KNOTS, MIN_WIND_ANGLE_DEG, MIN_WIND_SPEED_KNOTS,
    NAV_SECTIONS,
};
use vmg_configurator::configuration::HullColor;
use vmg_configurator::render::{ConfigurationReadout, PerformanceReadout};
use yew::prelude::*;

/// Render a `<select>` from (token, label) pairs with `selected` preselected.
fn render_options(options: &[(&'static str, &'static str)], selected: &str) -> Html {
    options
        .iter()
        .map(|&(token, label)| {
            html! { <option value={token} selected={token == selected}>{ label }</option> }
        })
        .collect::<Html>()
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub solid: bool,
    pub menu_open: bool,
    pub on_navigate: Callback<String>,
    pub on_toggle_menu: Callback<MouseEvent>,
}

/// Fixed top navigation with in-page links and the mobile menu button.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let nav_class = classes!(
        "navbar",
        if props.solid { "navbar-solid" } else { "navbar-translucent" }
    );

    html! {
        <nav class={nav_class}>
            <span class="brand">{ "VMG Yachts" }</span>
            <button id="mobile-menu-btn"
                class="mobile-menu-btn"
                aria-expanded={props.menu_open.to_string()}
                onclick={props.on_toggle_menu.clone()}>
                { "☰" }
            </button>
            <ul class={classes!("nav-links", props.menu_open.then_some("open"))}>
                { NAV_SECTIONS.iter().map(|&(id, label)| {
                    let on_navigate = props.on_navigate.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_navigate.emit(id.to_string());
                    });
                    html! {
                        <li><a href={format!("#{}", id)} {onclick}>{ label }</a></li>
                    }
                }).collect::<Html>() }
            </ul>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigurationPanelProps {
    pub selected_color: HullColor,
    pub interior: String,
    pub layout: String,
    pub readout: ConfigurationReadout,
    pub on_color_click: Callback<MouseEvent>,
    pub on_interior_change: Callback<Event>,
    pub on_layout_change: Callback<Event>,
    pub on_mouse_enter: Callback<MouseEvent>,
    pub on_mouse_leave: Callback<MouseEvent>,
}

#[function_component(ConfigurationPanel)]
pub fn configuration_panel(props: &ConfigurationPanelProps) -> Html {
    html! {
        <section id={CONFIGURATION_SECTION_ID}
            class="configuration"
            onmouseenter={props.on_mouse_enter.clone()}
            onmouseleave={props.on_mouse_leave.clone()}>
            <h2>{ "Configure Your Yacht" }</h2>

            <div class="form-group">
                <label>{ "Hull Color:" }</label>
                <div class="color-options">
                    { HullColor::ALL.iter().map(|&color| {
                        let class = if color == props.selected_color {
                            classes!("color-option", "selected")
                        } else {
                            classes!("color-option")
                        };
                        html! {
                            <button {class}
                                data-color={color.token()}
                                onclick={props.on_color_click.clone()}>
                                <span class={classes!("swatch", color.token())}></span>
                                { color.label() }
                            </button>
                        }
                    }).collect::<Html>() }
                </div>
            </div>

            <div class="form-group">
                <label for="interior-select">{ "Interior:" }</label>
                <select id="interior-select" onchange={props.on_interior_change.clone()}>
                    { render_options(&INTERIORS, &props.interior) }
                </select>
            </div>

            <div class="form-group">
                <label for="layout-select">{ "Layout:" }</label>
                <select id="layout-select" onchange={props.on_layout_change.clone()}>
                    { render_options(&LAYOUTS, &props.layout) }
                </select>
            </div>

            <dl class="configuration-summary">
                <dt>{ "Hull" }</dt><dd class="summary-hull">{ &props.readout.color }</dd>
                <dt>{ "Interior" }</dt><dd class="summary-interior">{ &props.readout.interior }</dd>
                <dt>{ "Layout" }</dt><dd class="summary-layout">{ &props.readout.layout }</dd>
            </dl>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PerformancePanelProps {
    pub readout: PerformanceReadout,
    pub on_wind_speed_input: Callback<InputEvent>,
    pub on_wind_angle_input: Callback<InputEvent>,
    pub on_weight_change: Callback<Event>,
}

/// Sliders for the sailing conditions and the live estimate.
#[function_component(PerformancePanel)]
pub fn performance_panel(props: &PerformancePanelProps) -> Html {
    let readout = &props.readout;

    html! {
        <section id="performance" class="performance">
            <h2>{ "Performance Calculator" }</h2>

            <div class="form-group">
                <label for="wind-speed">{ "Wind Speed (knots):" }</label>
                <div class="slider-with-value">
                    <input type="range"
                        id="wind-speed"
                        min={MIN_WIND_SPEED_KNOTS.to_string()}
                        max={MAX_WIND_SPEED_KNOTS.to_string()}
                        step="1"
                        value={readout.wind_speed.clone()}
                        oninput={props.on_wind_speed_input.clone()}
                    />
                    <span class="slider-value">{ &readout.wind_speed }</span>
                </div>
            </div>

            <div class="form-group">
                <label for="wind-angle">{ "Wind Angle (°):" }</label>
                <div class="slider-with-value">
                    <input type="range"
                        id="wind-angle"
                        min={MIN_WIND_ANGLE_DEG.to_string()}
                        max={MAX_WIND_ANGLE_DEG.to_string()}
                        step="1"
                        value={readout.wind_angle.clone()}
                        oninput={props.on_wind_angle_input.clone()}
                    />
                    <span class="slider-value">{ &readout.wind_angle }</span>
                </div>
            </div>

            <div class="form-group">
                <label for="yacht-weight">{ "Hull Weight Class:" }</label>
                <select id="yacht-weight" onchange={props.on_weight_change.clone()}>
                    { render_options(&HULL_WEIGHT_CLASSES, &readout.hull_weight_class) }
                </select>
            </div>

            <div class="performance-results">
                <div class="stat">
                    <span class="stat-value speed">{ &readout.estimated_speed }</span>
                    <span class="stat-unit">{ "knots" }</span>
                </div>
                <div class="stat">
                    <span class="stat-value heel">{ &readout.heel_angle }</span>
                    <span class="stat-unit">{ "heel" }</span>
                </div>
                <p class="conditions">
                    { format!("{} kn of wind at {}°, hull class {}",
                              readout.wind_speed, readout.wind_angle, readout.hull_weight_class) }
                </p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub active_tab: String,
    pub on_select: Callback<String>,
}

/// Tabbed gallery. Only the panel whose id matches the active tab is shown.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <section id="gallery" class="gallery">
            <h2>{ "Gallery" }</h2>
            <div class="tab-buttons">
                { GALLERY_TABS.iter().map(|&(id, label)| {
                    let on_select = props.on_select.clone();
                    let class = if props.active_tab == id {
                        classes!("tab-btn", "active")
                    } else {
                        classes!("tab-btn")
                    };
                    html! {
                        <button {class} data-tab={id}
                            onclick={Callback::from(move |_| on_select.emit(id.to_string()))}>
                            { label }
                        </button>
                    }
                }).collect::<Html>() }
            </div>
            { GALLERY_TABS.iter().map(|&(id, label)| {
                let class = classes!("tab-content", (props.active_tab == id).then_some("active"));
                html! {
                    <div {id} {class} hidden={props.active_tab != id}>
                        <img src={format!("images/gallery-{}.jpg", id)} alt={label} />
                    </div>
                }
            }).collect::<Html>() }
        </section>
    }
}
