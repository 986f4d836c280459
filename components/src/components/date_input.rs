use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use leptos::*;
use rivet_core::date::parse_iso;
use rivet_core::date_input::{DateChangeEvent, DateInputConfig, DateInputState, Effect};

use crate::components::date_picker::DatePicker;
use crate::components::outside_click::OutsideClickSubscription;
use crate::components::textbox::Textbox;
use crate::i18n::use_i18n;
use crate::style::InputSize;
use crate::utils::{is_active_element, today, unique_id};

/// Everything needed to feed events into the state machine and carry out its
/// effects. All fields are arena handles, so the host is `Copy`.
#[derive(Clone, Copy)]
struct DateInputHost {
    state: RwSignal<DateInputState>,
    input_ref: NodeRef<html::Input>,
    subscription: StoredValue<Option<OutsideClickSubscription>>,
    on_change: Option<Callback<DateChangeEvent>>,
    on_blur: Option<Callback<DateChangeEvent>>,
    on_focus: Option<Callback<()>>,
}

impl DateInputHost {
    fn input_active(&self) -> bool {
        self.input_ref
            .get_untracked()
            .map_or(false, |input| is_active_element(&input))
    }

    /// Feed one event. The widget may already be gone when deferred work arrives.
    fn apply(&self, event: impl FnOnce(&mut DateInputState, bool) -> Vec<Effect>) {
        if self.state.try_with_untracked(|_| ()).is_none() {
            return;
        }
        let active = self.input_active();
        let mut effects = Vec::new();
        self.state.update(|state| effects = event(state, active));
        self.run(effects);
    }

    /// Feed a click handled by the widget itself. A subscription taken while
    /// that click is dispatched never hears it, so it is delivered here.
    fn click(&self, event: impl FnOnce(&mut DateInputState, bool) -> Vec<Effect>) {
        let was_subscribed = self.subscription.try_with_value(Option::is_some) == Some(true);
        self.apply(event);
        if !was_subscribed && self.subscription.try_with_value(Option::is_some) == Some(true) {
            self.apply(|state, active| state.outside_click(active));
        }
    }

    fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Change(event) => {
                    if let Some(callback) = self.on_change {
                        callback.call(event);
                    }
                }
                Effect::Blur(event) => {
                    if let Some(callback) = self.on_blur {
                        callback.call(event);
                    }
                }
                Effect::Focus => {
                    if let Some(callback) = self.on_focus {
                        callback.call(());
                    }
                }
                Effect::FocusInput => {
                    if let Some(input) = self.input_ref.get_untracked() {
                        let _ = input.focus();
                    }
                }
                Effect::ScheduleBlur => {
                    let host = *self;
                    Timeout::new(0, move || host.apply(|state, active| state.process_blur(active)))
                        .forget();
                }
                Effect::SubscribeOutsideClick => {
                    let host = *self;
                    let subscription = OutsideClickSubscription::new(move |_| {
                        host.apply(|state, active| state.outside_click(active))
                    });
                    self.subscription.set_value(subscription);
                }
                Effect::UnsubscribeOutsideClick => self.subscription.set_value(None),
            }
        }
    }
}

fn popup_position(anchor: &web_sys::Element) -> String {
    let rect = anchor.get_bounding_client_rect();
    let window = window();
    format!(
        "position: absolute; top: {}px; left: {}px;",
        rect.bottom() + window.scroll_y().unwrap_or(0.0),
        rect.left() + window.scroll_x().unwrap_or(0.0)
    )
}

/// Date input with a popup calendar.
///
/// `value` makes the input controlled for its whole lifetime; without it the
/// input starts from `default_value`. Values are ISO `YYYY-MM-DD`, the visible
/// text follows the current language's date locale. Events carry both forms.
///
/// # Panics
///
/// When seeded with a non ISO value, with an empty `value` while
/// `allow_empty_value` is unset, or when `value` switches between set and unset.
#[component]
pub fn DateInput(
    #[prop(optional, into)] value: MaybeProp<String>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional)] allow_empty_value: bool,
    #[prop(optional)] auto_focus: bool,
    /// Render the calendar next to the input instead of at body level
    #[prop(optional)] disable_portal: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] read_only: MaybeSignal<bool>,
    #[prop(optional, into)] min_date: Option<String>,
    #[prop(optional, into)] max_date: Option<String>,
    /// IANA zone that decides which day is today
    #[prop(optional_no_strip, into)] timezone: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] field_help: Option<String>,
    #[prop(optional)] size: InputSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_change: Option<Callback<DateChangeEvent>>,
    #[prop(optional)] on_blur: Option<Callback<DateChangeEvent>>,
    #[prop(optional)] on_focus: Option<Callback<()>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let helper = i18n.date_helper();
    let today = today(timezone.as_deref());
    let input_id = id.clone().unwrap_or_else(|| unique_id("date"));

    let config = DateInputConfig {
        value: value.get_untracked(),
        default_value,
        allow_empty_value,
        auto_focus,
        disabled: disabled.get_untracked(),
        read_only: read_only.get_untracked(),
        name: name.clone(),
        id,
    };
    let machine = DateInputState::new(config, helper, today).unwrap_or_else(|err| panic!("{}", err));

    let host = DateInputHost {
        state: create_rw_signal(machine),
        input_ref: create_node_ref::<html::Input>(),
        subscription: store_value(None),
        on_change,
        on_blur,
        on_focus,
    };
    let state = host.state;
    let wrapper_ref = create_node_ref::<html::Div>();
    let min_date = min_date.as_deref().and_then(parse_iso);
    let max_date = max_date.as_deref().and_then(parse_iso);

    create_effect(move |_| {
        let value = value.get();
        if let Some(Err(err)) = state.try_update(|s| s.sync_value(value.as_deref())) {
            panic!("{}", err);
        }
    });

    create_effect(move |_| {
        let (disabled, read_only) = (disabled.get(), read_only.get());
        host.apply(move |s, _| s.set_interactivity(disabled, read_only));
    });

    request_animation_frame(move || host.apply(|s, _| s.mount()));
    on_cleanup(move || host.apply(|s, _| s.unmount()));

    let visible = Signal::derive(move || state.with(|s| s.visible_value().to_string()));
    let hidden = move || state.with(|s| s.hidden_value());
    let is_open = create_memo(move |_| state.with(|s| s.is_picker_open()));
    let selected = Signal::derive(move || state.with(|s| s.selected_date()));

    let on_select = Callback::new(move |day: NaiveDate| host.apply(move |s, active| s.select_date(day, active)));
    let on_picker_click = Callback::new(move |_: ev::MouseEvent| host.click(|s, _| s.picker_click()));

    let picker = move || {
        if !is_open.get() {
            return None;
        }
        let anchor = state.with_untracked(|s| s.picker_month_anchor());
        let popup = if disable_portal {
            view! {
                <DatePicker
                    selected=selected
                    anchor=anchor
                    today=today
                    min_date=min_date
                    max_date=max_date
                    on_select=on_select
                    on_click=on_picker_click
                />
            }
            .into_view()
        } else {
            let style = wrapper_ref.get_untracked().map(|el| popup_position(&el));
            view! {
                <Portal>
                    <DatePicker
                        selected=selected
                        anchor=anchor
                        today=today
                        min_date=min_date
                        max_date=max_date
                        on_select=on_select
                        on_click=on_picker_click
                        style=style.clone().unwrap_or_default()
                    />
                </Portal>
            }
            .into_view()
        };
        Some(popup)
    };

    let full_class = if let Some(extra) = class {
        format!("date-input {}", extra)
    } else {
        "date-input".to_string()
    };

    view! {
        <div class=full_class data-component="date" node_ref=wrapper_ref>
            <Textbox
                value=visible
                id=input_id
                label=label.unwrap_or_default()
                field_help=field_help.unwrap_or_default()
                placeholder=helper.locale().pattern()
                disabled=disabled
                read_only=read_only
                required=required
                size=size
                input_ref=host.input_ref
                icon="calendar"
                icon_label=i18n.t("date.open_calendar")
                on_input=Callback::new(move |text: String| host.apply(move |s, _| s.input(&text)))
                on_focus=Callback::new(move |_| host.apply(|s, _| s.focus()))
                on_blur=Callback::new(move |_| host.apply(|s, _| s.blur()))
                on_key_down=Callback::new(move |ev: ev::KeyboardEvent| {
                    let key = ev.key();
                    host.apply(move |s, _| s.key_down(&key));
                })
                on_click=Callback::new(move |_| host.click(|s, active| s.icon_click(active)))
                on_icon_click=Callback::new(move |_| host.click(|s, active| s.icon_click(active)))
            />
            <input type="hidden" name=name prop:value=hidden data-element="hidden-input" />
            {picker}
        </div>
    }
}
