use leptos::*;

use crate::style::{class_list, Align, InputSize};
use crate::utils::unique_id;

/// Single line text input with optional label, help text and trailing icon.
#[component]
pub fn Textbox(
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] label_inline: bool,
    #[prop(optional)] label_align: Align,
    /// Label width as a percentage when inline
    #[prop(optional)] label_width: Option<u8>,
    #[prop(optional, into)] field_help: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] read_only: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] size: InputSize,
    #[prop(optional)] input_ref: Option<NodeRef<html::Input>>,
    /// Icon name, rendered as a button after the input
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] icon_label: Option<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_focus: Option<Callback<ev::FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<ev::FocusEvent>>,
    #[prop(optional)] on_key_down: Option<Callback<ev::KeyboardEvent>>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(optional)] on_icon_click: Option<Callback<ev::MouseEvent>>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| unique_id("textbox"));
    let label = label.filter(|text| !text.is_empty());
    let field_help = field_help.filter(|text| !text.is_empty());
    let input_ref = input_ref.unwrap_or_else(create_node_ref);
    let input_class = class_list(&["form-input", size.class(), class.as_deref().unwrap_or("")]);
    let group_class = if label_inline {
        "form-group form-group-inline"
    } else {
        "form-group"
    };
    let icon_disabled = disabled.clone();
    let label_style = label_inline.then(|| {
        let mut style = format!("text-align: {};", label_align.as_str());
        if let Some(width) = label_width {
            style.push_str(&format!(" width: {}%;", width));
        }
        style
    });

    view! {
        <div class=group_class data-component="textbox">
            {label.map(|text| view! {
                <label class="form-label" for=input_id.clone() style=label_style>
                    {text}
                    {required.then(|| view! { <span class="form-required">" *"</span> })}
                </label>
            })}
            <div class="form-input-wrapper">
                <input
                    type="text"
                    class=input_class
                    id=input_id.clone()
                    name=name
                    placeholder=placeholder
                    required=required
                    disabled=disabled
                    readonly=read_only
                    autocomplete="off"
                    node_ref=input_ref
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        if let Some(callback) = on_input {
                            callback.call(event_target_value(&ev));
                        }
                    }
                    on:focus=move |ev| {
                        if let Some(callback) = on_focus {
                            callback.call(ev);
                        }
                    }
                    on:blur=move |ev| {
                        if let Some(callback) = on_blur {
                            callback.call(ev);
                        }
                    }
                    on:keydown=move |ev| {
                        if let Some(callback) = on_key_down {
                            callback.call(ev);
                        }
                    }
                    on:click=move |ev| {
                        if let Some(callback) = on_click {
                            callback.call(ev);
                        }
                    }
                />
                {icon.map(|icon| view! {
                    <button
                        type="button"
                        class=format!("form-input-icon icon-{}", icon)
                        data-element="input-icon-toggle"
                        aria-label=icon_label
                        tabindex="-1"
                        disabled=icon_disabled
                        on:mousedown=|ev| ev.prevent_default()
                        on:click=move |ev| {
                            if let Some(callback) = on_icon_click {
                                callback.call(ev);
                            }
                        }
                    ></button>
                })}
            </div>
            {field_help.map(|help| view! { <span class="form-hint">{help}</span> })}
        </div>
    }
}
