//! Component catalogue used by the demo pages and the docs server.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropType {
    String,
    Boolean,
    Number,
    Function,
    Array,
    Node,
}

/// A child rendered inside a component's demo, seeded from another definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildDefinition {
    pub key: String,
    pub props: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub key: String,
    pub name: String,
    pub description: String,
    /// Markdown.
    pub designer_notes: String,
    pub prop_types: BTreeMap<String, PropType>,
    pub prop_descriptions: BTreeMap<String, String>,
    pub prop_options: BTreeMap<String, Vec<String>>,
    pub prop_values: BTreeMap<String, Value>,
    pub hidden_props: Vec<String>,
    /// Prop -> prop it only makes sense together with.
    pub prop_requires: BTreeMap<String, String>,
    pub children: Vec<ChildDefinition>,
}

/// Short form returned by catalogue listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub key: String,
    pub name: String,
    pub description: String,
}

impl ComponentDefinition {
    pub fn new(key: &str, name: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    pub fn designer_notes(mut self, notes: &str) -> Self {
        self.designer_notes = notes.trim().to_string();
        self
    }

    pub fn prop(mut self, name: &str, prop_type: PropType, description: &str) -> Self {
        self.prop_types.insert(name.to_string(), prop_type);
        self.prop_descriptions
            .insert(name.to_string(), description.to_string());
        self
    }

    pub fn options(mut self, name: &str, options: Vec<String>) -> Self {
        self.prop_options.insert(name.to_string(), options);
        self
    }

    pub fn value(mut self, name: &str, value: Value) -> Self {
        self.prop_values.insert(name.to_string(), value);
        self
    }

    pub fn hidden(mut self, name: &str) -> Self {
        if !self.hidden_props.iter().any(|p| p == name) {
            self.hidden_props.push(name.to_string());
        }
        self
    }

    pub fn requires(mut self, name: &str, required: &str) -> Self {
        self.prop_requires
            .insert(name.to_string(), required.to_string());
        self
    }

    /// Add a demo child based on `child`, its prop values overridden by `props`.
    pub fn add_child_by_definition(&mut self, child: &ComponentDefinition, props: Value) {
        let mut merged = child.prop_values.clone();
        if let Value::Object(overrides) = props {
            for (name, value) in overrides {
                if value.is_null() {
                    merged.remove(&name);
                } else {
                    merged.insert(name, value);
                }
            }
        }
        self.children.push(ChildDefinition {
            key: child.key.clone(),
            props: merged,
        });
    }

    /// Defaults shared by every form input definition.
    pub fn apply_input_defaults(self) -> Self {
        let label = format!("Example {}", self.name);
        self.value("field_help", json!("This text provides help for the input."))
            .value("label", json!(label))
            .value(
                "label_help",
                json!("This text provides more information for the label."),
            )
            .options("label_align", options::align_binary())
            .hidden("warnings")
            .hidden("validations")
            .requires("label_width", "label_inline")
            .requires("label_align", "label_inline")
    }

    pub fn summary(&self) -> ComponentSummary {
        ComponentSummary {
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Option lists shared across definitions.
pub mod options {
    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    pub fn align_binary() -> Vec<String> {
        owned(&["left", "right"])
    }

    pub fn align_full() -> Vec<String> {
        owned(&["left", "center", "right"])
    }

    pub fn sizes_full() -> Vec<String> {
        owned(&[
            "extra-small",
            "small",
            "medium-small",
            "medium",
            "large",
            "extra-large",
        ])
    }

    pub fn sizes_restricted() -> Vec<String> {
        owned(&["small", "medium", "large"])
    }

    pub fn shapes_varied() -> Vec<String> {
        owned(&["square", "circle", "leaf"])
    }

    pub fn legend_spacing() -> Vec<String> {
        owned(&["1", "2"])
    }
}

fn textbox() -> ComponentDefinition {
    ComponentDefinition::new("textbox", "Textbox", "Captures a single line of text.")
        .prop("value", PropType::String, "The value of the input.")
        .prop("placeholder", PropType::String, "Placeholder text.")
        .prop("label", PropType::String, "Label shown for the input.")
        .prop("label_inline", PropType::Boolean, "Places the label in line with the input.")
        .prop("label_width", PropType::Number, "Label width as a percentage.")
        .prop("label_align", PropType::String, "Label alignment when inline.")
        .apply_input_defaults()
}

fn date() -> ComponentDefinition {
    ComponentDefinition::new(
        "date",
        "DateInput",
        "Captures a single date, typed or picked from a calendar.",
    )
    .designer_notes(
        r#"
* Type a date in the local format or pick one from the calendar.
* Invalid text is kept while typing and replaced by the last valid date when leaving the field.
* Use `min_date` and `max_date` to restrict the selectable range.
"#,
    )
    .prop("value", PropType::String, "Controlled value in ISO (YYYY-MM-DD) format.")
    .prop("default_value", PropType::String, "Initial value in ISO format for uncontrolled use.")
    .prop("allow_empty_value", PropType::Boolean, "Allows the input to be left empty.")
    .prop("auto_focus", PropType::Boolean, "Focuses the input and opens the calendar on mount.")
    .prop("disable_portal", PropType::Boolean, "Renders the calendar next to the input instead of at body level.")
    .prop("disabled", PropType::Boolean, "Disables the input.")
    .prop("read_only", PropType::Boolean, "Makes the input read only.")
    .prop("min_date", PropType::String, "Earliest selectable date, ISO format.")
    .prop("max_date", PropType::String, "Latest selectable date, ISO format.")
    .prop("timezone", PropType::String, "IANA time zone deciding which day is today. Defaults to the browser's zone.")
    .prop("name", PropType::String, "Name submitted with the hidden ISO value.")
    .prop("required", PropType::Boolean, "Marks the input as mandatory.")
    .prop("on_change", PropType::Function, "Called with formatted and raw values when the date changes.")
    .prop("on_blur", PropType::Function, "Called with formatted and raw values when the input is left.")
    .prop("size", PropType::String, "Input size.")
    .options("size", options::sizes_restricted())
    .value("value", json!("2021-03-15"))
    .apply_input_defaults()
}

fn fieldset() -> ComponentDefinition {
    let mut definition = ComponentDefinition::new(
        "fieldset",
        "Fieldset",
        "Groups a set of closely related inputs under a legend.",
    )
    .designer_notes(
        r#"
* Any input of the library can be nested.
* Useful for a series of related inputs inside a wider form, such as an address.
* Mark mandatory or optional fields, whichever is the minority.
"#,
    )
    .prop("legend", PropType::String, "Adds a legend to the fieldset.")
    .prop("inline", PropType::Boolean, "Places the legend in line with the children.")
    .prop("legend_width", PropType::Number, "Legend width as a percentage when inline.")
    .prop("legend_align", PropType::String, "Legend text alignment when inline.")
    .prop("legend_spacing", PropType::Number, "Spacing between an inline legend and the fields.")
    .prop("error", PropType::String, "Error message, or true to only show the border.")
    .prop("warning", PropType::String, "Warning message, or true to only show the border.")
    .prop("info", PropType::String, "Info message, or true to only show the border.")
    .prop("is_required", PropType::Boolean, "Adds an asterisk to the legend.")
    .options("legend_align", options::align_binary())
    .options("legend_spacing", options::legend_spacing())
    .requires("legend_width", "inline")
    .requires("legend_align", "inline")
    .value("legend", json!("Contact details"));

    let text = textbox();
    for label in ["First Name", "Last Name", "Address", "City", "Country", "Telephone"] {
        definition.add_child_by_definition(
            &text,
            json!({
                "field_help": null,
                "label_help": null,
                "label_inline": true,
                "label": label,
                "label_align": "right",
            }),
        );
    }
    definition
}

fn flat_table() -> ComponentDefinition {
    ComponentDefinition::new(
        "flat-table",
        "FlatTable",
        "Displays rows of data with optional row headers and checkbox cells.",
    )
    .prop("align", PropType::String, "Header cell content alignment.")
    .prop("alternative_bg", PropType::Boolean, "Uses the alternative header background.")
    .prop("colspan", PropType::Number, "Columns a header cell spans.")
    .prop("rowspan", PropType::Number, "Rows a header cell spans.")
    .prop("width", PropType::Number, "Column width in pixels.")
    .options("align", options::align_full())
}

fn simple_color_picker() -> ComponentDefinition {
    ComponentDefinition::new(
        "simple-color-picker",
        "SimpleColorPicker",
        "Lets the user choose from a small number of preset colours.",
    )
    .designer_notes("* Choose from a small palette, with the current colour marked.")
    .prop("available_colors", PropType::Array, "Colour choices to display.")
    .prop("selected_color", PropType::String, "The currently selected colour.")
    .prop("name", PropType::String, "Name applied to the inputs.")
    .prop("on_change", PropType::Function, "Called when a colour is selected.")
    .value("available_colors", json!(["#00DC00", "#255BC7", "#ED1C5F"]))
    .value("selected_color", json!("#00DC00"))
    .value("name", json!("color"))
    .hidden("available_colors")
}

fn confirm() -> ComponentDefinition {
    ComponentDefinition::new(
        "confirm",
        "Confirm",
        "Asks the user to confirm or cancel an action in a dialog.",
    )
    .prop("title", PropType::String, "Dialog title.")
    .prop("subtitle", PropType::String, "Text under the title.")
    .prop("size", PropType::String, "Dialog width.")
    .prop("confirm_label", PropType::String, "Confirm button text.")
    .prop("cancel_label", PropType::String, "Cancel button text.")
    .prop("on_confirm", PropType::Function, "Called when the action is confirmed.")
    .prop("on_cancel", PropType::Function, "Called when the dialog is dismissed.")
    .options("size", options::sizes_full())
    .value("title", json!("Are you sure?"))
}

fn portrait() -> ComponentDefinition {
    ComponentDefinition::new(
        "portrait",
        "Portrait",
        "Represents a person with their initials or an avatar.",
    )
    .designer_notes(
        r#"
* Represents a person, user or organisation, like an avatar.
* Initials can be used instead of an image.
"#,
    )
    .prop("size", PropType::String, "Size of the portrait.")
    .prop("src", PropType::String, "Image source.")
    .prop("gravatar", PropType::String, "E-mail address registered with Gravatar.")
    .prop("alt", PropType::String, "Alternative text.")
    .prop("shape", PropType::String, "Shape of the portrait.")
    .prop("initials", PropType::String, "Initials rendered in the portrait.")
    .prop("dark_background", PropType::Boolean, "Uses a dark background.")
    .options("size", options::sizes_full())
    .options("shape", options::shapes_varied())
    .value("initials", json!("AB"))
}

fn definition_list() -> ComponentDefinition {
    ComponentDefinition::new(
        "definition-list",
        "Dl",
        "Lays out term and description pairs in two columns.",
    )
    .prop("w", PropType::Number, "Width of the term column as a percentage.")
    .prop("dt_text_align", PropType::String, "Term text alignment.")
    .prop("dd_text_align", PropType::String, "Description text alignment.")
    .options("dt_text_align", options::align_full())
    .options("dd_text_align", options::align_full())
}

fn duelling_picklist() -> ComponentDefinition {
    ComponentDefinition::new(
        "duelling-picklist",
        "DuellingPicklist",
        "Moves items between two lists.",
    )
    .prop("disabled", PropType::Boolean, "Disables both lists.")
    .prop("left_label", PropType::String, "Label of the left list.")
    .prop("right_label", PropType::String, "Label of the right list.")
    .prop("left_controls", PropType::Node, "Controls above the left list.")
    .prop("right_controls", PropType::Node, "Controls above the right list.")
}

fn numeral_date() -> ComponentDefinition {
    ComponentDefinition::new(
        "numeral-date",
        "NumeralDate",
        "Captures a date as separate day, month and year boxes.",
    )
    .prop("date_format", PropType::Array, "Order of the boxes.")
    .prop("default_value", PropType::String, "Initial value for uncontrolled use.")
    .prop("enable_internal_error", PropType::Boolean, "Shows validation errors found by the component.")
    .prop("name", PropType::String, "Name for events.")
    .prop("on_change", PropType::Function, "Called when a box changes.")
    .prop("on_blur", PropType::Function, "Called when the component is left.")
    .options(
        "date_format",
        vec![
            "dd,mm,yyyy".to_string(),
            "mm,dd,yyyy".to_string(),
            "dd,mm".to_string(),
            "mm,dd".to_string(),
            "mm,yyyy".to_string(),
        ],
    )
    .apply_input_defaults()
}

fn checkable_input() -> ComponentDefinition {
    ComponentDefinition::new(
        "checkable-input",
        "CheckableInput",
        "Checkbox or radio input with a label.",
    )
    .prop("checked", PropType::Boolean, "Whether the input is checked.")
    .prop("reverse", PropType::Boolean, "Places the label before the input.")
    .prop("disabled", PropType::Boolean, "Disables the input.")
    .apply_input_defaults()
}

/// Every component documented by the demo harness, in display order.
pub fn catalogue() -> Vec<ComponentDefinition> {
    vec![
        checkable_input(),
        confirm(),
        date(),
        definition_list(),
        duelling_picklist(),
        fieldset(),
        flat_table(),
        numeral_date(),
        portrait(),
        simple_color_picker(),
        textbox(),
    ]
}

pub fn find(key: &str) -> Option<ComponentDefinition> {
    catalogue().into_iter().find(|d| d.key == key)
}
