use leptos::*;

use crate::i18n::use_i18n;

/// A validation prop: `Flag(true)` only marks the border, a message also shows an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationValue {
    Flag(bool),
    Message(String),
}

impl ValidationValue {
    pub fn is_set(&self) -> bool {
        match self {
            ValidationValue::Flag(flag) => *flag,
            ValidationValue::Message(message) => !message.is_empty(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationValue::Message(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<bool> for ValidationValue {
    fn from(flag: bool) -> Self {
        ValidationValue::Flag(flag)
    }
}

impl From<&str> for ValidationValue {
    fn from(message: &str) -> Self {
        ValidationValue::Message(message.to_string())
    }
}

impl From<String> for ValidationValue {
    fn from(message: String) -> Self {
        ValidationValue::Message(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Error,
    Warning,
    Info,
}

impl ValidationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::Error => "error",
            ValidationKind::Warning => "warning",
            ValidationKind::Info => "info",
        }
    }
}

/// Validation states of a field, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validations {
    pub error: Option<ValidationValue>,
    pub warning: Option<ValidationValue>,
    pub info: Option<ValidationValue>,
}

impl Validations {
    fn ordered(&self) -> [(ValidationKind, Option<&ValidationValue>); 3] {
        [
            (ValidationKind::Error, self.error.as_ref()),
            (ValidationKind::Warning, self.warning.as_ref()),
            (ValidationKind::Info, self.info.as_ref()),
        ]
    }

    /// Kind used for the border colour.
    pub fn border(&self) -> Option<ValidationKind> {
        self.ordered()
            .into_iter()
            .find(|(_, value)| value.map_or(false, ValidationValue::is_set))
            .map(|(kind, _)| kind)
    }

    /// Kind and message shown by the icon.
    pub fn icon(&self) -> Option<(ValidationKind, String)> {
        self.ordered().into_iter().find_map(|(kind, value)| {
            value
                .and_then(ValidationValue::message)
                .map(|message| (kind, message.to_string()))
        })
    }
}

/// Icon with a tooltip for the most important validation message.
#[component]
pub fn ValidationIcon(validations: Validations) -> impl IntoView {
    let i18n = use_i18n();

    validations.icon().map(|(kind, message)| {
        let label = i18n.t(&format!("validation.{}", kind.as_str()));
        view! {
            <span
                class=format!("validation-icon validation-icon-{}", kind.as_str())
                data-element=kind.as_str()
                role="img"
                aria-label=label
                title=message.clone()
            >
                <span class="validation-tooltip">{message}</span>
            </span>
        }
    })
}
