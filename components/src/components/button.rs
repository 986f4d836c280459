use leptos::*;

use crate::style::class_list;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Tertiary => "btn-tertiary",
            ButtonVariant::Destructive => "btn-destructive",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Button with variants and sizes.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeSignal<ButtonVariant>,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    /// Marker for tests and styling hooks
    #[prop(optional, into)] data_element: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let full_class = move || {
        class_list(&[
            "btn",
            variant.get().class(),
            size.class(),
            class.as_deref().unwrap_or(""),
        ])
    };

    view! {
        <button
            type="button"
            class=full_class
            data-element=data_element
            disabled=disabled
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
