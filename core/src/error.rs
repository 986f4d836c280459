use thiserror::Error;

/// Misuse of the date input detected while building or updating it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateInputError {
    #[error("The Date component must be initialised with a value in the iso (YYYY-MM-DD) format, got '{0}'")]
    InvalidInitialValue(String),
    #[error("The Date component was given an empty value but allow_empty_value is not set")]
    EmptyValueNotAllowed,
    #[error(
        "Input elements should not switch from uncontrolled to controlled (or vice versa). \
         Decide between using a controlled or uncontrolled input element for the lifetime of the component"
    )]
    ControlModeChanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("'{0}' is not a 6 digit hex color")]
    InvalidHex(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralDateError {
    #[error("Unsupported date format {0:?}")]
    UnsupportedFormat(Vec<String>),
}
