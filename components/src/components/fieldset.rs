use leptos::*;

use crate::components::validation_icon::{ValidationIcon, ValidationValue, Validations};
use crate::style::{class_list, Align};

/// Groups related inputs under an optional legend.
#[component]
pub fn Fieldset(
    #[prop(optional, into)] legend: Option<String>,
    /// Legend in line with the children
    #[prop(optional)] inline: bool,
    /// Legend width as a percentage, inline only
    #[prop(optional)] legend_width: Option<u8>,
    #[prop(default = Align::Right)] legend_align: Align,
    /// Spacing after an inline legend in units of 8px, 1 or 2
    #[prop(default = 2)] legend_spacing: u8,
    #[prop(optional, into)] error: Option<ValidationValue>,
    #[prop(optional, into)] warning: Option<ValidationValue>,
    #[prop(optional, into)] info: Option<ValidationValue>,
    #[prop(optional)] is_required: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let validations = Validations { error, warning, info };
    let border_class = validations
        .border()
        .map(|kind| format!("fieldset-{}", kind.as_str()))
        .unwrap_or_default();
    let full_class = class_list(&["fieldset", &border_class, class.as_deref().unwrap_or("")]);
    let content_class = if inline {
        "fieldset-content fieldset-content-inline"
    } else {
        "fieldset-content"
    };
    let legend_style = inline.then(|| legend_style(legend_width, legend_align, legend_spacing));

    view! {
        <fieldset class=full_class data-component="fieldset">
            <div class=content_class>
                {legend.map(|text| view! {
                    <div class="fieldset-legend" style=legend_style>
                        <legend>
                            {text}
                            {is_required.then(|| view! { <span class="form-required">" *"</span> })}
                        </legend>
                        <ValidationIcon validations=validations />
                    </div>
                })}
                {children()}
            </div>
        </fieldset>
    }
}

fn legend_style(width: Option<u8>, align: Align, spacing: u8) -> String {
    let spacing = spacing.clamp(1, 2) as u32 * 8;
    let mut style = format!("text-align: {}; padding-right: {}px;", align.as_str(), spacing);
    if let Some(width) = width {
        style.push_str(&format!(" width: {}%;", width));
    }
    style
}
