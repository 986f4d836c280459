//! Event driven state of the date input.
//!
//! The widget is a text field with a popup calendar. All of its focus, blur and
//! popup choreography lives here, free of any DOM access: the host feeds UI events
//! in and executes the returned [`Effect`]s in order. Anything the machine needs to
//! know about the document (whether the text field currently holds focus) is passed
//! in as an argument.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{format_iso, is_valid_iso, parse_iso, DateHelper};
use crate::error::DateInputError;

/// Value pair carried by change and blur events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateValue {
    /// Locale display text, e.g. `15/03/2021`.
    pub formatted_value: String,
    /// ISO value, e.g. `2021-03-15`, or empty.
    pub raw_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateChangeEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub value: DateValue,
}

/// Props that seed a date input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateInputConfig {
    /// Controlled value. `Some` for the whole lifetime of a controlled input.
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub allow_empty_value: bool,
    pub auto_focus: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub name: Option<String>,
    pub id: Option<String>,
}

/// Visibility of the popup calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    #[default]
    Closed,
    Open,
    /// Visible, and the click that opened it has not reached the document yet.
    /// The next outside click is that same click and only settles the phase.
    Opening,
}

/// What a blur of the text field currently means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurGuard {
    /// A blur is the user leaving the field.
    #[default]
    None,
    /// The user is working with the icon or the popup; blurs are expected.
    Blocked,
    /// Focus is being handed back to the field after a popup selection.
    PickerFocus,
}

/// Work the host has to carry out after feeding an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Change(DateChangeEvent),
    Blur(DateChangeEvent),
    Focus,
    /// Move DOM focus to the text field.
    FocusInput,
    /// Call [`DateInputState::process_blur`] once the current UI event turn is over.
    ScheduleBlur,
    SubscribeOutsideClick,
    UnsubscribeOutsideClick,
}

#[derive(Debug, Clone)]
pub struct DateInputState {
    helper: DateHelper,
    today: NaiveDate,
    name: Option<String>,
    id: Option<String>,
    allow_empty_value: bool,
    auto_focus: bool,
    disabled: bool,
    read_only: bool,
    controlled: bool,
    prop_value: Option<String>,
    visible_value: String,
    selected_date: Option<NaiveDate>,
    last_valid: DateValue,
    phase: PickerPhase,
    should_open: bool,
    guard: BlurGuard,
    focused: bool,
    auto_focus_pending: bool,
    mounted: bool,
    subscribed: bool,
}

impl DateInputState {
    /// Build the state from its props.
    ///
    /// Fails when a non-empty seed is not ISO formatted, or when an empty
    /// controlled value is given without `allow_empty_value`.
    pub fn new(
        config: DateInputConfig,
        helper: DateHelper,
        today: NaiveDate,
    ) -> Result<Self, DateInputError> {
        let visible_value = initial_visible_value(&config, &helper, today)?;
        let selected_date = helper.parse(&visible_value);
        let last_valid = DateValue {
            formatted_value: visible_value.clone(),
            raw_value: selected_date.map(format_iso).unwrap_or_default(),
        };

        Ok(Self {
            helper,
            today,
            controlled: config.value.is_some(),
            prop_value: config.value,
            name: config.name,
            id: config.id,
            allow_empty_value: config.allow_empty_value,
            auto_focus: config.auto_focus,
            disabled: config.disabled,
            read_only: config.read_only,
            visible_value,
            selected_date,
            last_valid,
            phase: PickerPhase::Closed,
            should_open: false,
            guard: BlurGuard::None,
            focused: config.auto_focus,
            auto_focus_pending: false,
            mounted: false,
            subscribed: false,
        })
    }

    pub fn visible_value(&self) -> &str {
        &self.visible_value
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Month the popup should show first.
    pub fn picker_month_anchor(&self) -> NaiveDate {
        self.selected_date.unwrap_or(self.today)
    }

    pub fn last_valid(&self) -> &DateValue {
        &self.last_valid
    }

    /// ISO value submitted with the form.
    pub fn hidden_value(&self) -> String {
        self.helper
            .to_iso(&self.visible_value)
            .unwrap_or_else(|| self.last_valid.raw_value.clone())
    }

    /// Visible text when it is a valid date, empty otherwise.
    pub fn input_date(&self) -> &str {
        if self.helper.is_valid(&self.visible_value) {
            &self.visible_value
        } else {
            ""
        }
    }

    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    pub fn is_picker_open(&self) -> bool {
        self.phase != PickerPhase::Closed && !self.is_inert()
    }

    pub fn should_open(&self) -> bool {
        self.should_open
    }

    pub fn guard(&self) -> BlurGuard {
        self.guard
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn helper(&self) -> DateHelper {
        self.helper
    }

    fn is_inert(&self) -> bool {
        self.disabled || self.read_only
    }

    fn can_be_empty(&self, value: &str) -> bool {
        self.allow_empty_value && value.is_empty()
    }

    fn event(&self, value: DateValue) -> DateChangeEvent {
        DateChangeEvent {
            name: self.name.clone(),
            id: self.id.clone(),
            value,
        }
    }

    /// The widget is in the document.
    pub fn mount(&mut self) -> Vec<Effect> {
        self.mounted = true;
        let mut effects = Vec::new();
        if self.auto_focus && !self.is_inert() {
            self.auto_focus_pending = true;
            self.should_open = true;
            self.open_picker(&mut effects);
            effects.push(Effect::FocusInput);
        }
        effects
    }

    /// The widget is leaving the document. Deferred blur work becomes a no-op.
    pub fn unmount(&mut self) -> Vec<Effect> {
        self.mounted = false;
        let mut effects = Vec::new();
        self.release_subscription(&mut effects);
        self.phase = PickerPhase::Closed;
        self.should_open = false;
        self.guard = BlurGuard::None;
        effects
    }

    pub fn focus(&mut self) -> Vec<Effect> {
        self.focused = true;
        if self.is_inert() {
            return Vec::new();
        }
        if self.auto_focus_pending {
            self.auto_focus_pending = false;
            return Vec::new();
        }

        let mut effects = Vec::new();
        if self.guard == BlurGuard::PickerFocus {
            self.guard = BlurGuard::None;
        } else {
            self.open_picker(&mut effects);
        }
        effects.push(Effect::Focus);
        effects
    }

    /// Native blur of the text field. The real work is deferred so the newly
    /// focused element can be observed.
    pub fn blur(&mut self) -> Vec<Effect> {
        vec![Effect::ScheduleBlur]
    }

    /// Deferred half of a blur.
    pub fn process_blur(&mut self, input_active: bool) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        self.focused = input_active;
        if self.should_block_blur(input_active) {
            log::trace!("date input blur blocked ({:?})", self.guard);
            return Vec::new();
        }

        self.reformat_visible_value();

        if self.phase == PickerPhase::Closed {
            vec![Effect::Blur(self.event(self.last_valid.clone()))]
        } else {
            Vec::new()
        }
    }

    fn should_block_blur(&mut self, input_active: bool) -> bool {
        if self.is_inert() {
            return true;
        }
        match self.guard {
            BlurGuard::Blocked => true,
            BlurGuard::PickerFocus => {
                if !input_active {
                    self.guard = BlurGuard::None;
                }
                true
            }
            BlurGuard::None => input_active,
        }
    }

    /// Text typed into the visible field.
    pub fn input(&mut self, text: &str) -> Vec<Effect> {
        if self.is_inert() {
            return Vec::new();
        }
        if self.guard == BlurGuard::Blocked {
            self.guard = BlurGuard::None;
        }

        let mut effects = Vec::new();
        if let Some(date) = self.helper.parse(text) {
            self.commit_valid(Some(date));
            effects.push(Effect::Change(self.event(self.last_valid.clone())));
        } else if self.can_be_empty(text) {
            self.commit_valid(None);
            effects.push(Effect::Change(self.event(DateValue::default())));
        } else {
            log::trace!("date input holds invalid text '{}'", text);
        }

        self.visible_value = text.to_string();
        effects
    }

    pub fn key_down(&mut self, key: &str) -> Vec<Effect> {
        if key != "Tab" {
            return Vec::new();
        }
        if self.guard == BlurGuard::Blocked {
            self.guard = BlurGuard::None;
        }
        let mut effects = Vec::new();
        if self.phase == PickerPhase::Closed {
            self.should_open = false;
        } else {
            // Focus is still on the field; the native blur follows.
            self.close_picker(true, &mut effects);
        }
        effects
    }

    /// Click on the calendar icon or on the text field itself.
    pub fn icon_click(&mut self, input_active: bool) -> Vec<Effect> {
        if self.is_inert() {
            return Vec::new();
        }
        self.should_open = !self.should_open;

        let mut effects = Vec::new();
        if self.should_open {
            self.guard = BlurGuard::Blocked;
            self.open_picker(&mut effects);
            self.phase = PickerPhase::Opening;
        } else {
            if self.guard == BlurGuard::Blocked {
                self.guard = BlurGuard::None;
            }
            self.close_picker(input_active, &mut effects);
        }
        effects
    }

    /// Click anywhere inside the popup that is not a date selection.
    pub fn picker_click(&mut self) -> Vec<Effect> {
        if self.is_inert() || self.phase == PickerPhase::Closed {
            return Vec::new();
        }
        self.guard = BlurGuard::Blocked;
        let mut effects = Vec::new();
        self.open_picker(&mut effects);
        self.phase = PickerPhase::Opening;
        effects
    }

    /// Click that reached the document while the outside-click subscription is held.
    pub fn outside_click(&mut self, input_active: bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        match self.phase {
            PickerPhase::Closed => {}
            PickerPhase::Opening => self.phase = PickerPhase::Open,
            PickerPhase::Open => {
                if self.guard == BlurGuard::Blocked {
                    self.guard = BlurGuard::None;
                }
                self.close_picker(input_active, &mut effects);
            }
        }
        effects
    }

    /// A day was picked in the popup.
    pub fn select_date(&mut self, date: NaiveDate, input_active: bool) -> Vec<Effect> {
        if self.is_inert() {
            return Vec::new();
        }
        self.commit_valid(Some(date));
        let mut effects = vec![Effect::Change(self.event(self.last_valid.clone()))];

        // An already focused field gets no focus event to consume the guard.
        self.guard = if input_active {
            BlurGuard::None
        } else {
            BlurGuard::PickerFocus
        };
        self.close_picker(true, &mut effects);
        effects.push(Effect::FocusInput);
        effects
    }

    /// New `value` prop for an already mounted widget.
    pub fn sync_value(&mut self, value: Option<&str>) -> Result<(), DateInputError> {
        if value.is_some() != self.controlled {
            return Err(DateInputError::ControlModeChanged);
        }
        if self.prop_value.as_deref() == value {
            return Ok(());
        }
        self.prop_value = value.map(str::to_string);
        if !self.controlled || self.focused {
            return Ok(());
        }

        let value = value.unwrap_or_default();
        if value.is_empty() {
            if self.allow_empty_value {
                self.commit_valid(None);
            }
        } else if let Some(date) = self.helper.parse(value) {
            self.commit_valid(Some(date));
        } else {
            log::warn!("ignoring invalid controlled date value '{}'", value);
        }
        Ok(())
    }

    /// Update the interactive flags. Becoming disabled or read-only closes the popup.
    pub fn set_interactivity(&mut self, disabled: bool, read_only: bool) -> Vec<Effect> {
        self.disabled = disabled;
        self.read_only = read_only;
        let mut effects = Vec::new();
        if self.is_inert() && self.phase != PickerPhase::Closed {
            self.release_subscription(&mut effects);
            self.phase = PickerPhase::Closed;
            self.should_open = false;
            self.guard = BlurGuard::None;
        }
        effects
    }

    fn open_picker(&mut self, effects: &mut Vec<Effect>) {
        if !self.subscribed {
            self.subscribed = true;
            effects.push(Effect::SubscribeOutsideClick);
        }
        if self.phase == PickerPhase::Closed {
            log::debug!("date picker opened");
            self.phase = PickerPhase::Open;
        }
    }

    fn close_picker(&mut self, input_active: bool, effects: &mut Vec<Effect>) {
        self.release_subscription(effects);
        if self.phase != PickerPhase::Closed {
            log::debug!("date picker closed");
        }
        self.phase = PickerPhase::Closed;
        self.should_open = false;
        if !input_active {
            effects.push(Effect::ScheduleBlur);
        }
    }

    fn release_subscription(&mut self, effects: &mut Vec<Effect>) {
        if self.subscribed {
            self.subscribed = false;
            effects.push(Effect::UnsubscribeOutsideClick);
        }
    }

    fn commit_valid(&mut self, date: Option<NaiveDate>) {
        match date {
            Some(date) => {
                let formatted = self.helper.format_display(date);
                self.visible_value = formatted.clone();
                self.selected_date = Some(date);
                self.last_valid = DateValue {
                    formatted_value: formatted,
                    raw_value: format_iso(date),
                };
            }
            None => {
                self.visible_value.clear();
                self.selected_date = None;
                self.last_valid = DateValue::default();
            }
        }
    }

    fn reformat_visible_value(&mut self) {
        if let Some(date) = self.helper.parse(&self.visible_value) {
            self.commit_valid(Some(date));
        } else if self.can_be_empty(&self.visible_value) {
            self.commit_valid(None);
        } else {
            log::debug!(
                "restoring last valid date '{}' over '{}'",
                self.last_valid.formatted_value,
                self.visible_value
            );
            self.visible_value = self.last_valid.formatted_value.clone();
            self.selected_date = parse_iso(&self.last_valid.raw_value);
        }
    }
}

fn seed(
    value: &str,
    allow_empty: bool,
    helper: &DateHelper,
) -> Result<Option<String>, DateInputError> {
    if value.is_empty() {
        return Ok(allow_empty.then(String::new));
    }
    if !is_valid_iso(value) {
        if allow_empty {
            return Ok(None);
        }
        return Err(DateInputError::InvalidInitialValue(value.to_string()));
    }
    Ok(helper.to_display(value))
}

fn initial_visible_value(
    config: &DateInputConfig,
    helper: &DateHelper,
    today: NaiveDate,
) -> Result<String, DateInputError> {
    let allow_empty = config.allow_empty_value;

    if let Some(value) = config.value.as_deref() {
        if value.is_empty() && !allow_empty {
            return Err(DateInputError::EmptyValueNotAllowed);
        }
        if let Some(visible) = seed(value, allow_empty, helper)? {
            return Ok(visible);
        }
    }

    match config.default_value.as_deref() {
        Some(default) => {
            if let Some(visible) = seed(default, allow_empty, helper)? {
                return Ok(visible);
            }
        }
        None if allow_empty => return Ok(String::new()),
        None => {}
    }

    Ok(helper.format_display(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn controlled(value: &str) -> DateInputConfig {
        DateInputConfig {
            value: Some(value.to_string()),
            name: Some("due".to_string()),
            id: Some("due-id".to_string()),
            ..Default::default()
        }
    }

    fn mounted(config: DateInputConfig) -> DateInputState {
        let mut state = DateInputState::new(config, DateHelper::default(), today()).unwrap();
        state.mount();
        state
    }

    fn changes(effects: &[Effect]) -> Vec<&DateChangeEvent> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Change(ev) => Some(ev),
                _ => None,
            })
            .collect()
    }

    fn blurs(effects: &[Effect]) -> Vec<&DateChangeEvent> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Blur(ev) => Some(ev),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_value_is_displayed_in_locale() {
        let state = mounted(controlled("2021-03-15"));
        assert_eq!(state.visible_value(), "15/03/2021");
        assert_eq!(state.hidden_value(), "2021-03-15");
        assert_eq!(state.selected_date(), NaiveDate::from_ymd_opt(2021, 3, 15));
        assert!(state.is_controlled());
    }

    #[test]
    fn test_invalid_initial_value_fails() {
        let result = DateInputState::new(controlled("15/03/2021"), DateHelper::default(), today());
        assert_eq!(
            result.unwrap_err(),
            DateInputError::InvalidInitialValue("15/03/2021".to_string())
        );
    }

    #[test]
    fn test_empty_value_without_allow_empty_fails() {
        let result = DateInputState::new(controlled(""), DateHelper::default(), today());
        assert_eq!(result.unwrap_err(), DateInputError::EmptyValueNotAllowed);
    }

    #[test]
    fn test_allow_empty_accepts_empty_and_invalid_seed() {
        let mut config = controlled("");
        config.allow_empty_value = true;
        let state = mounted(config);
        assert_eq!(state.visible_value(), "");
        assert_eq!(state.hidden_value(), "");
        assert_eq!(state.selected_date(), None);

        let config = DateInputConfig {
            value: Some("nonsense".to_string()),
            default_value: Some("2020-01-02".to_string()),
            allow_empty_value: true,
            ..Default::default()
        };
        assert_eq!(mounted(config).visible_value(), "02/01/2020");
    }

    #[test]
    fn test_no_value_defaults_to_today() {
        let state = mounted(DateInputConfig::default());
        assert_eq!(state.visible_value(), "01/06/2024");
        assert_eq!(state.last_valid().raw_value, "2024-06-01");

        let state = mounted(DateInputConfig {
            allow_empty_value: true,
            ..Default::default()
        });
        assert_eq!(state.visible_value(), "");
    }

    #[test]
    fn test_default_value_seeds_uncontrolled() {
        let state = mounted(DateInputConfig {
            default_value: Some("2022-12-24".to_string()),
            ..Default::default()
        });
        assert_eq!(state.visible_value(), "24/12/2022");
        assert!(!state.is_controlled());
    }

    #[test]
    fn test_valid_typing_emits_change() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        let effects = state.input("16/03/2021");
        let events = changes(&effects);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].value.formatted_value, "16/03/2021");
        assert_eq!(events[0].value.raw_value, "2021-03-16");
        assert_eq!(events[0].name.as_deref(), Some("due"));
        assert_eq!(events[0].id.as_deref(), Some("due-id"));
        assert_eq!(state.hidden_value(), "2021-03-16");
    }

    #[test]
    fn test_scenario_invalid_text_reverts_on_blur() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        // Leave through Tab so the popup does not swallow the blur event.
        state.key_down("Tab");

        let effects = state.input("31/02/2021");
        assert!(changes(&effects).is_empty());
        assert_eq!(state.visible_value(), "31/02/2021");
        assert_eq!(state.hidden_value(), "2021-03-15");
        assert_eq!(state.input_date(), "");

        assert_eq!(state.blur(), vec![Effect::ScheduleBlur]);
        let effects = state.process_blur(false);
        assert_eq!(state.visible_value(), "15/03/2021");
        let events = blurs(&effects);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].value.formatted_value, "15/03/2021");
        assert_eq!(events[0].value.raw_value, "2021-03-15");
    }

    #[test]
    fn test_blur_reformats_loose_text() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        state.key_down("Tab");
        state.input("1.4.21");
        state.process_blur(false);
        assert_eq!(state.visible_value(), "01/04/2021");
        assert_eq!(state.last_valid().raw_value, "2021-04-01");
    }

    #[test]
    fn test_clearing_allowed_empty_emits_empty_values() {
        let mut state = mounted(DateInputConfig {
            default_value: Some("2021-03-15".to_string()),
            allow_empty_value: true,
            ..Default::default()
        });
        state.focus();
        let effects = state.input("");
        let events = changes(&effects);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].value, DateValue::default());
        state.key_down("Tab");
        state.process_blur(false);
        assert_eq!(state.visible_value(), "");
        assert_eq!(state.hidden_value(), "");
    }

    #[test]
    fn test_clearing_without_allow_empty_restores_on_blur() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        assert!(changes(&state.input("")).is_empty());
        state.key_down("Tab");
        state.process_blur(false);
        assert_eq!(state.visible_value(), "15/03/2021");
    }

    #[test]
    fn test_focus_opens_and_emits() {
        let mut state = mounted(controlled("2021-03-15"));
        let effects = state.focus();
        assert_eq!(effects, vec![Effect::SubscribeOutsideClick, Effect::Focus]);
        assert_eq!(state.phase(), PickerPhase::Open);
        assert!(state.is_picker_open());
    }

    #[test]
    fn test_blur_while_open_is_not_emitted() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        let effects = state.process_blur(false);
        assert!(blurs(&effects).is_empty());
        assert!(!state.is_focused());
    }

    #[test]
    fn test_icon_toggles_popup() {
        let mut state = mounted(controlled("2021-03-15"));

        let effects = state.icon_click(false);
        assert_eq!(effects, vec![Effect::SubscribeOutsideClick]);
        assert_eq!(state.phase(), PickerPhase::Opening);
        assert_eq!(state.guard(), BlurGuard::Blocked);
        // The opening click reaches the document and is consumed.
        assert!(state.outside_click(false).is_empty());
        assert_eq!(state.phase(), PickerPhase::Open);

        let effects = state.icon_click(false);
        assert_eq!(
            effects,
            vec![Effect::UnsubscribeOutsideClick, Effect::ScheduleBlur]
        );
        assert_eq!(state.phase(), PickerPhase::Closed);
        assert!(!state.should_open());
        assert!(!state.is_subscribed());
    }

    #[test]
    fn test_outside_click_closes_and_triggers_blur_pass() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        state.input("15/3/2021");
        state.process_blur(false);

        let effects = state.outside_click(false);
        assert_eq!(
            effects,
            vec![Effect::UnsubscribeOutsideClick, Effect::ScheduleBlur]
        );
        assert!(!state.is_picker_open());

        let effects = state.process_blur(false);
        assert_eq!(blurs(&effects).len(), 1);
        assert_eq!(state.visible_value(), "15/03/2021");
    }

    #[test]
    fn test_outside_click_with_focused_input_skips_blur_pass() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        let effects = state.outside_click(true);
        assert_eq!(effects, vec![Effect::UnsubscribeOutsideClick]);
    }

    #[test]
    fn test_click_inside_popup_keeps_it_open() {
        let mut state = mounted(controlled("2021-03-15"));
        state.icon_click(false);
        state.outside_click(false);

        assert!(state.picker_click().is_empty());
        assert_eq!(state.phase(), PickerPhase::Opening);
        assert!(state.outside_click(false).is_empty());
        assert!(state.is_picker_open());
    }

    #[test]
    fn test_select_date_closes_updates_and_refocuses() {
        let mut state = mounted(controlled("2021-03-15"));
        state.icon_click(false);
        state.outside_click(false);

        // Mousedown inside the popup blurs nothing while the icon guard is up.
        assert!(state.process_blur(false).is_empty());

        let date = NaiveDate::from_ymd_opt(2021, 3, 20).unwrap();
        let effects = state.select_date(date, false);
        let events = changes(&effects);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].value.formatted_value, "20/03/2021");
        assert_eq!(events[0].value.raw_value, "2021-03-20");
        assert!(effects.contains(&Effect::UnsubscribeOutsideClick));
        assert_eq!(effects.last(), Some(&Effect::FocusInput));
        assert!(!effects.contains(&Effect::ScheduleBlur));
        assert!(!state.is_picker_open());
        assert_eq!(state.visible_value(), "20/03/2021");
        assert_eq!(state.guard(), BlurGuard::PickerFocus);

        // The returned focus neither reopens the popup nor leaves a guard behind.
        let effects = state.focus();
        assert_eq!(effects, vec![Effect::Focus]);
        assert!(!state.is_picker_open());
        assert_eq!(state.guard(), BlurGuard::None);

        // Leaving the field afterwards is a normal blur.
        let effects = state.process_blur(false);
        assert_eq!(blurs(&effects).len(), 1);
    }

    #[test]
    fn test_select_date_with_focused_input() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        let date = NaiveDate::from_ymd_opt(2021, 4, 1).unwrap();
        state.select_date(date, true);
        assert_eq!(state.guard(), BlurGuard::None);
        assert_eq!(state.hidden_value(), "2021-04-01");
    }

    #[test]
    fn test_tab_closes_popup() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        let effects = state.key_down("Tab");
        assert_eq!(effects, vec![Effect::UnsubscribeOutsideClick]);
        assert!(!state.is_picker_open());
        assert!(state.key_down("Enter").is_empty());
    }

    #[test]
    fn test_disabled_produces_nothing() {
        let mut config = controlled("2021-03-15");
        config.disabled = true;
        let mut state = mounted(config);

        assert!(state.focus().is_empty());
        assert!(state.icon_click(false).is_empty());
        assert!(state.input("16/03/2021").is_empty());
        assert!(state.process_blur(false).is_empty());
        assert!(!state.is_picker_open());
        assert_eq!(state.visible_value(), "15/03/2021");
    }

    #[test]
    fn test_read_only_produces_nothing() {
        let mut config = controlled("2021-03-15");
        config.read_only = true;
        let mut state = mounted(config);
        assert!(state.focus().is_empty());
        assert!(state.icon_click(true).is_empty());
        assert!(!state.is_picker_open());
    }

    #[test]
    fn test_becoming_disabled_closes_popup() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        let effects = state.set_interactivity(true, false);
        assert_eq!(effects, vec![Effect::UnsubscribeOutsideClick]);
        assert!(!state.is_picker_open());
    }

    #[test]
    fn test_auto_focus_opens_on_mount_and_swallows_first_focus() {
        let mut config = controlled("2021-03-15");
        config.auto_focus = true;
        let mut state = DateInputState::new(config, DateHelper::default(), today()).unwrap();
        assert_eq!(
            state.mount(),
            vec![Effect::SubscribeOutsideClick, Effect::FocusInput]
        );
        assert!(state.is_picker_open());
        assert!(state.should_open());
        assert!(state.focus().is_empty());
        assert_eq!(state.focus(), vec![Effect::Focus]);
    }

    #[test]
    fn test_control_mode_switch_fails() {
        let mut state = mounted(controlled("2021-03-15"));
        assert_eq!(state.sync_value(None), Err(DateInputError::ControlModeChanged));

        let mut state = mounted(DateInputConfig::default());
        assert_eq!(
            state.sync_value(Some("2021-03-15")),
            Err(DateInputError::ControlModeChanged)
        );
        assert_eq!(state.sync_value(None), Ok(()));
    }

    #[test]
    fn test_controlled_update_applies_when_unfocused() {
        let mut state = mounted(controlled("2021-03-15"));
        state.sync_value(Some("2022-01-31")).unwrap();
        assert_eq!(state.visible_value(), "31/01/2022");
        assert_eq!(state.hidden_value(), "2022-01-31");
    }

    #[test]
    fn test_controlled_update_ignored_while_focused() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        state.input("16/03/2021");
        state.sync_value(Some("2021-03-16")).unwrap();
        state.input("16/03/20");
        assert_eq!(state.visible_value(), "16/03/20");
    }

    #[test]
    fn test_controlled_empty_update_requires_allow_empty() {
        let mut state = mounted(controlled("2021-03-15"));
        state.sync_value(Some("")).unwrap();
        assert_eq!(state.visible_value(), "15/03/2021");

        let mut config = controlled("2021-03-15");
        config.allow_empty_value = true;
        let mut state = mounted(config);
        state.sync_value(Some("")).unwrap();
        assert_eq!(state.visible_value(), "");
    }

    #[test]
    fn test_unmount_releases_and_cancels_pending_blur() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        state.input("nope");
        let effects = state.unmount();
        assert_eq!(effects, vec![Effect::UnsubscribeOutsideClick]);
        assert!(state.process_blur(false).is_empty());
        assert_eq!(state.visible_value(), "nope");
    }

    #[test]
    fn test_subscription_pairs_with_visibility() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        state.icon_click(true);
        assert!(state.is_subscribed());
        state.outside_click(true);
        // Still open: the icon re-armed an already visible popup.
        assert!(state.is_picker_open());
        assert!(state.is_subscribed());
        state.outside_click(true);
        assert!(!state.is_picker_open());
        assert!(!state.is_subscribed());
    }

    #[test]
    fn test_multibyte_typing_is_held_as_invalid_text() {
        let mut state = mounted(controlled("2021-03-15"));
        state.focus();
        assert!(state.input("a€€b").is_empty());
        assert_eq!(state.visible_value(), "a€€b");
        assert_eq!(state.hidden_value(), "2021-03-15");
    }

    #[test]
    fn test_whitespace_is_not_an_empty_value() {
        let mut state = mounted(DateInputConfig {
            value: Some("2021-03-15".to_string()),
            allow_empty_value: true,
            ..Default::default()
        });
        state.focus();
        assert!(changes(&state.input("   ")).is_empty());
        assert_eq!(state.hidden_value(), "2021-03-15");

        let effects = state.input("");
        assert_eq!(changes(&effects).len(), 1);
        assert_eq!(state.hidden_value(), "");
    }

    #[test]
    fn test_typing_clears_blur_block() {
        let mut state = mounted(controlled("2021-03-15"));
        state.icon_click(false);
        state.input("1");
        assert_eq!(state.guard(), BlurGuard::None);
    }

    #[test]
    fn test_event_serializes_camel_case() {
        let event = DateChangeEvent {
            name: Some("due".to_string()),
            id: None,
            value: DateValue {
                formatted_value: "15/03/2021".to_string(),
                raw_value: "2021-03-15".to_string(),
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["name"], "due");
        assert!(json.get("id").is_none());
        assert_eq!(json["value"]["formattedValue"], "15/03/2021");
        assert_eq!(json["value"]["rawValue"], "2021-03-15");
    }
}
