pub mod button;
pub mod checkable_input;
pub mod date_input;
pub mod date_picker;
pub mod definition_list;
pub mod dialog;
pub mod duelling_picklist;
pub mod fieldset;
pub mod flat_table;
pub mod markdown;
pub mod numeral_date;
pub mod outside_click;
pub mod portrait;
pub mod simple_color_picker;
pub mod textbox;
pub mod validation_icon;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use checkable_input::{CheckableInput, CheckableType};
pub use date_input::DateInput;
pub use date_picker::DatePicker;
pub use definition_list::{Dd, Dl, Dt};
pub use dialog::{Confirm, Dialog, DialogSize};
pub use duelling_picklist::DuellingPicklist;
pub use fieldset::Fieldset;
pub use flat_table::{
    FlatTable, FlatTableBody, FlatTableCell, FlatTableCheckbox, FlatTableHead, FlatTableHeader,
    FlatTableRow, FlatTableRowHeader,
};
pub use markdown::MarkdownView;
pub use numeral_date::NumeralDate;
pub use portrait::Portrait;
pub use simple_color_picker::{ColorSampleBox, SimpleColorInput, SimpleColorPicker};
pub use textbox::Textbox;
pub use validation_icon::{ValidationIcon, ValidationValue, Validations};
