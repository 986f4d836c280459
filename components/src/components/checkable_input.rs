use leptos::*;

use crate::style::{class_list, Align};
use crate::utils::unique_id;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CheckableType {
    #[default]
    Checkbox,
    Radio,
}

impl CheckableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckableType::Checkbox => "checkbox",
            CheckableType::Radio => "radio",
        }
    }
}

/// Checkbox or radio input with its label.
///
/// The label follows the input unless `reverse` is set.
#[component]
pub fn CheckableInput(
    #[prop(into)] checked: RwSignal<bool>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] input_type: CheckableType,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional, into)] field_help: Option<String>,
    #[prop(optional)] label_inline: bool,
    #[prop(optional)] label_align: Align,
    #[prop(optional)] reverse: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| unique_id(input_type.as_str()));
    let class = class_list(&[
        "checkable-input",
        if reverse { "checkable-input-reverse" } else { "" },
        if label_inline { "checkable-input-inline" } else { "" },
    ]);

    let input = view! {
        <input
            type=input_type.as_str()
            class="checkable-input-field"
            id=input_id.clone()
            name=name
            value=value
            disabled=disabled
            prop:checked=move || checked.get()
            on:change=move |ev| {
                let now = event_target_checked(&ev);
                checked.set(now);
                if let Some(callback) = on_change {
                    callback.call(now);
                }
            }
        />
    };
    let label = label.filter(|text| !text.is_empty()).map(|text| {
        view! {
            <label
                class="checkable-input-label"
                for=input_id.clone()
                style=format!("text-align: {};", label_align.as_str())
            >
                {text}
            </label>
        }
    });

    let row = if reverse {
        view! { {label} {input} }.into_view()
    } else {
        view! { {input} {label} }.into_view()
    };

    view! {
        <div class=class data-component=input_type.as_str()>
            <div class="checkable-input-row">{row}</div>
            {field_help.map(|help| view! { <span class="form-hint">{help}</span> })}
        </div>
    }
}
