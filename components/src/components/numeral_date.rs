use leptos::*;
use rivet_core::numeral_date::{
    empty_value, validate, NumeralDateEvent, NumeralDateFormat, NumeralDateValue, Segment,
};
use wasm_bindgen::JsCast;

use crate::components::validation_icon::{ValidationIcon, Validations};
use crate::i18n::use_i18n;
use crate::utils::unique_id;

fn error_key(segment: Segment) -> &'static str {
    match segment {
        Segment::Dd => "numeral_date.invalid_day",
        Segment::Mm => "numeral_date.invalid_month",
        Segment::Yyyy => "numeral_date.invalid_year",
    }
}

/// Value with exactly the segments of `format`, keeping what `value` already has.
fn normalize(format: NumeralDateFormat, value: Option<NumeralDateValue>) -> NumeralDateValue {
    let mut normalized = empty_value(format);
    if let Some(value) = value {
        for (segment, text) in normalized.iter_mut() {
            if let Some(given) = value.get(segment) {
                text.clone_from(given);
            }
        }
    }
    normalized
}

/// Date entered as separate day, month and year boxes.
///
/// Boxes only accept digits up to their length. With `enable_internal_error`
/// the component validates itself when focus leaves it.
#[component]
pub fn NumeralDate(
    #[prop(optional)] date_format: NumeralDateFormat,
    #[prop(optional)] default_value: Option<NumeralDateValue>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] field_help: Option<String>,
    #[prop(optional)] enable_internal_error: bool,
    /// Error supplied by the caller, shown instead of the internal one
    #[prop(optional, into)] error: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<NumeralDateEvent>>,
    #[prop(optional)] on_blur: Option<Callback<NumeralDateEvent>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let i18n_stored = store_value(i18n);
    let id = id.unwrap_or_else(|| unique_id("numeral-date"));
    let value = create_rw_signal(normalize(date_format, default_value));
    let internal_error = create_rw_signal(Vec::<Segment>::new());
    let container_ref = create_node_ref::<html::Div>();
    let error = store_value(error);

    let make_event = {
        let name = name.clone().unwrap_or_default();
        let id = id.clone();
        store_value(move || NumeralDateEvent {
            name: name.clone(),
            id: id.clone(),
            value: value.get_untracked(),
        })
    };

    let on_focus_out = move |ev: ev::FocusEvent| {
        let container = container_ref.get_untracked();
        let inside = match (container, ev.related_target()) {
            (Some(container), Some(target)) => container.contains(target.dyn_ref::<web_sys::Node>()),
            _ => false,
        };
        if inside {
            return;
        }
        if enable_internal_error {
            internal_error.set(value.with_untracked(|v| validate(date_format, v)));
        }
        if let Some(callback) = on_blur {
            callback.call(make_event.with_value(|event| event()));
        }
    };

    let segments = date_format
        .segments()
        .iter()
        .copied()
        .map(|segment| {
            let input_id = format!("{}-{}", id, segment.as_str());
            let text = move || value.with(|v| v.get(&segment).cloned().unwrap_or_default());
            view! {
                <div class="numeral-date-segment" data-element=segment.as_str()>
                    <input
                        type="text"
                        inputmode="numeric"
                        class="form-input numeral-date-input"
                        id=input_id
                        maxlength=segment.max_len()
                        placeholder=move || i18n_stored.get_value().t(&format!("numeral_date.{}", segment.as_str()))
                        disabled=disabled
                        prop:value=text
                        on:input=move |ev| {
                            let typed = event_target_value(&ev);
                            if !segment.accepts_partial(&typed) {
                                let previous = value.with_untracked(|v| v.get(&segment).cloned().unwrap_or_default());
                                event_target::<web_sys::HtmlInputElement>(&ev).set_value(&previous);
                                return;
                            }
                            value.update(|v| {
                                v.insert(segment, typed);
                            });
                            if let Some(callback) = on_change {
                                callback.call(make_event.with_value(|event| event()));
                            }
                        }
                    />
                </div>
            }
        })
        .collect_view();

    let validations = move || {
        let message = error.get_value().or_else(|| {
            internal_error.with(|invalid| {
                invalid
                    .first()
                    .map(|segment| i18n_stored.get_value().t(error_key(*segment)))
            })
        });
        Validations {
            error: message.map(Into::into),
            ..Default::default()
        }
    };
    let has_error = move || validations().border().is_some();

    view! {
        <div
            class="form-group numeral-date"
            class:has-error=has_error
            data-component="numeral-date"
            id=id.clone()
            node_ref=container_ref
            on:focusout=on_focus_out
        >
            {label.map(|text| view! { <label class="form-label" for=format!("{}-{}", id, date_format.segments()[0].as_str())>{text}</label> })}
            <div class="numeral-date-segments">
                {segments}
                {move || view! { <ValidationIcon validations=validations() /> }}
            </div>
            {field_help.map(|help| view! { <span class="form-hint">{help}</span> })}
        </div>
    }
}
