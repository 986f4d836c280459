pub mod api;
pub mod calendar;
pub mod color;
pub mod date;
pub mod date_input;
pub mod definition;
pub mod error;
pub mod numeral_date;
pub mod portrait;

pub use api::*;
pub use date::{DateHelper, DateLocale};
pub use date_input::{DateInputConfig, DateInputState, DateValue, Effect};
pub use error::*;
