use leptos::logging::warn;
use leptos::*;
use rivet_core::color::{columns_for_width, navigate, GridKey, PickerColor};

use crate::utils::unique_id;

const SWATCH_WIDTH: u32 = 58;

fn parse_colors(colors: &[String]) -> Vec<PickerColor> {
    colors
        .iter()
        .filter_map(|color| match color.parse::<PickerColor>() {
            Ok(color) => Some(color),
            Err(err) => {
                warn!("SimpleColorPicker: {}", err);
                None
            }
        })
        .collect()
}

fn sample_style(color: &PickerColor) -> String {
    match color {
        PickerColor::Transparent => {
            "background-color: #eeeeee; background-size: 14px 14px; background-position: -2px -2px;"
                .to_string()
        }
        PickerColor::Hex(hex) => format!("background-color: {};", hex),
    }
}

/// Coloured square with a tick when checked. Anything but `#rrggbb` or
/// `transparent` is rejected and not rendered.
#[component]
pub fn ColorSampleBox(
    #[prop(into)] color: String,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
) -> impl IntoView {
    let color = match color.parse::<PickerColor>() {
        Ok(color) => color,
        Err(err) => {
            warn!("ColorSampleBox: {}", err);
            return None;
        }
    };
    let tick_class = if color.needs_dark_tick() {
        "color-sample-tick tick-dark"
    } else {
        "color-sample-tick tick-light"
    };
    let transparent_class = if color.is_transparent() {
        "color-sample-box is-transparent"
    } else {
        "color-sample-box"
    };

    Some(view! {
        <div class=transparent_class data-component="color-sample-box" style=sample_style(&color)>
            <Show when=move || checked.get()>
                <span class=tick_class data-element="tick" aria-hidden="true">"✓"</span>
            </Show>
        </div>
    })
}

/// One radio input of the colour picker.
#[component]
pub fn SimpleColorInput(
    color: PickerColor,
    #[prop(into)] name: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] input_ref: Option<NodeRef<html::Input>>,
    #[prop(into)] on_select: Callback<PickerColor>,
) -> impl IntoView {
    let input_ref = input_ref.unwrap_or_else(create_node_ref);
    let input_id = unique_id("simple-color");
    let value = color.to_string();
    let selected_color = color.clone();

    view! {
        <div class="simple-color" data-component="simple-color">
            <input
                type="radio"
                class="simple-color-input"
                id=input_id.clone()
                name=name
                value=value.clone()
                aria-label=value.clone()
                node_ref=input_ref
                prop:checked=move || checked.get()
                on:change=move |_| on_select.call(selected_color.clone())
            />
            <label for=input_id>
                <ColorSampleBox color=value checked=checked />
            </label>
        </div>
    }
}

/// Small palette of preset colours, navigable with the arrow keys.
#[component]
pub fn SimpleColorPicker(
    available_colors: Vec<String>,
    #[prop(into)] selected_color: RwSignal<String>,
    #[prop(into)] name: String,
    #[prop(optional, into)] legend: Option<String>,
    /// Container width in pixels, decides the number of columns
    #[prop(default = 300)] max_width: u32,
    #[prop(optional)] on_change: Option<Callback<PickerColor>>,
) -> impl IntoView {
    let colors = parse_colors(&available_colors);
    let count = colors.len();
    let columns = columns_for_width(max_width, SWATCH_WIDTH);
    let input_refs: Vec<NodeRef<html::Input>> = (0..count).map(|_| create_node_ref()).collect();
    let colors_stored = store_value(colors.clone());
    let refs_stored = store_value(input_refs.clone());

    let select = Callback::new(move |color: PickerColor| {
        selected_color.set(color.to_string());
        if let Some(callback) = on_change {
            callback.call(color);
        }
    });

    let on_key_down = move |ev: ev::KeyboardEvent| {
        let Some(key) = GridKey::from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let current = colors_stored.with_value(|colors| {
            let selected = selected_color.get_untracked();
            colors
                .iter()
                .position(|c| c.as_str().eq_ignore_ascii_case(&selected))
                .unwrap_or(0)
        });
        let next = navigate(current, key, count, columns);
        if let Some(color) = colors_stored.with_value(|colors| colors.get(next).cloned()) {
            select.call(color);
        }
        if let Some(input) = refs_stored.with_value(|refs| refs.get(next).and_then(|r| r.get_untracked())) {
            let _ = input.focus();
        }
    };

    let inputs = colors
        .into_iter()
        .zip(input_refs)
        .map(|(color, input_ref)| {
            let value = color.to_string();
            let checked = Signal::derive(move || selected_color.get().eq_ignore_ascii_case(&value));
            view! {
                <SimpleColorInput
                    color=color
                    name=name.clone()
                    checked=checked
                    input_ref=input_ref
                    on_select=select
                />
            }
        })
        .collect_view();

    view! {
        <fieldset class="simple-color-picker" data-component="simple-color-picker">
            {legend.map(|text| view! { <legend>{text}</legend> })}
            <div
                class="simple-color-picker-grid"
                role="radiogroup"
                style=format!("max-width: {}px;", max_width)
                on:keydown=on_key_down
            >
                {inputs}
            </div>
        </fieldset>
    }
}
