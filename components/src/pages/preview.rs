use std::collections::BTreeMap;

use leptos::*;
use rivet_core::color::PickerColor;
use rivet_core::date_input::DateChangeEvent;
use rivet_core::definition::ComponentDefinition;
use rivet_core::numeral_date::NumeralDateEvent;
use rivet_core::portrait::PortraitSize;
use serde::Serialize;
use serde_json::Value;

use crate::components::{
    Button, ButtonVariant, CheckableInput, Confirm, DateInput, Dd, Dl, Dt, DuellingPicklist,
    Fieldset, FlatTable, FlatTableBody, FlatTableCell, FlatTableCheckbox, FlatTableHead,
    FlatTableHeader, FlatTableRow, FlatTableRowHeader, NumeralDate, Portrait, SimpleColorPicker,
    Textbox,
};
use crate::i18n::use_i18n;
use crate::style::Align;

type Props = BTreeMap<String, Value>;

fn text(props: &Props, name: &str) -> Option<String> {
    props.get(name).and_then(Value::as_str).map(str::to_string)
}

fn flag(props: &Props, name: &str) -> bool {
    props.get(name).and_then(Value::as_bool).unwrap_or(false)
}

fn align(props: &Props, name: &str) -> Align {
    props
        .get(name)
        .and_then(Value::as_str)
        .and_then(Align::from_name)
        .unwrap_or_default()
}

fn strings(props: &Props, name: &str) -> Vec<String> {
    props
        .get(name)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}

fn record<T: Serialize>(on_event: Callback<String>, event: &T) {
    on_event.call(serde_json::to_string(event).unwrap_or_default());
}

fn textbox_preview(props: &Props) -> View {
    let value = create_rw_signal(String::new());
    view! {
        <Textbox
            value=value
            label=text(props, "label").unwrap_or_default()
            field_help=text(props, "field_help").unwrap_or_default()
            on_input=Callback::new(move |typed| value.set(typed))
        />
    }
    .into_view()
}

fn date_preview(props: &Props, on_event: Callback<String>) -> View {
    let value = create_rw_signal(text(props, "value").unwrap_or_default());
    view! {
        <DateInput
            value=value
            name="date"
            timezone=text(props, "timezone")
            label=text(props, "label").unwrap_or_default()
            field_help=text(props, "field_help").unwrap_or_default()
            on_change=Callback::new(move |event: DateChangeEvent| {
                value.set(event.value.raw_value.clone());
                record(on_event, &event);
            })
            on_blur=Callback::new(move |event: DateChangeEvent| record(on_event, &event))
        />
    }
    .into_view()
}

fn fieldset_preview(definition: &ComponentDefinition) -> View {
    let props = &definition.prop_values;
    let children = definition
        .children
        .iter()
        .map(|child| {
            let value = create_rw_signal(String::new());
            view! {
                <Textbox
                    value=value
                    label=text(&child.props, "label").unwrap_or_default()
                    label_inline=flag(&child.props, "label_inline")
                    label_align=align(&child.props, "label_align")
                    on_input=Callback::new(move |typed| value.set(typed))
                />
            }
        })
        .collect_view();

    view! {
        <Fieldset legend=text(props, "legend").unwrap_or_default()>
            {children}
        </Fieldset>
    }
    .into_view()
}

fn flat_table_preview() -> View {
    let rows = [("Ada Lovelace", "London"), ("Grace Hopper", "New York"), ("Alan Turing", "Manchester")];
    let selected = create_rw_signal(vec![false; rows.len()]);
    let body = rows
        .into_iter()
        .enumerate()
        .map(|(index, (name, city))| {
            let is_selected = move || selected.with(|s| s[index]);
            view! {
                <FlatTableRow selected=MaybeSignal::derive(is_selected)>
                    <FlatTableCheckbox
                        checked=Signal::derive(is_selected)
                        aria_label=name
                        on_change=Callback::new(move |checked| selected.update(|s| s[index] = checked))
                    />
                    <FlatTableRowHeader>{name}</FlatTableRowHeader>
                    <FlatTableCell align=Align::Right>{city}</FlatTableCell>
                </FlatTableRow>
            }
        })
        .collect_view();

    view! {
        <FlatTable caption="Pioneers">
            <FlatTableHead>
                <FlatTableRow>
                    <FlatTableCheckbox as_header=true selectable=false />
                    <FlatTableHeader>"Name"</FlatTableHeader>
                    <FlatTableHeader align=Align::Right alternative_bg=true>"City"</FlatTableHeader>
                </FlatTableRow>
            </FlatTableHead>
            <FlatTableBody>{body}</FlatTableBody>
        </FlatTable>
    }
    .into_view()
}

fn color_picker_preview(props: &Props, on_event: Callback<String>) -> View {
    let selected = create_rw_signal(text(props, "selected_color").unwrap_or_default());
    view! {
        <SimpleColorPicker
            available_colors=strings(props, "available_colors")
            selected_color=selected
            name=text(props, "name").unwrap_or_else(|| "color".to_string())
            on_change=Callback::new(move |color: PickerColor| on_event.call(color.to_string()))
        />
    }
    .into_view()
}

fn confirm_preview(props: &Props, on_event: Callback<String>) -> View {
    let i18n = use_i18n();
    let open = create_rw_signal(false);
    view! {
        <Button data_element="open-dialog" on_click=Callback::new(move |_| open.set(true))>
            {i18n.t("demo.open_dialog")}
        </Button>
        <Confirm
            open=open
            title=text(props, "title").unwrap_or_default()
            on_confirm=Callback::new(move |_| {
                open.set(false);
                on_event.call("confirm".to_string());
            })
            on_cancel=Callback::new(move |_| {
                open.set(false);
                on_event.call("cancel".to_string());
            })
        />
    }
    .into_view()
}

fn portrait_preview(props: &Props) -> View {
    view! {
        <div class="portrait-row">
            {PortraitSize::all()
                .iter()
                .map(|size| view! { <Portrait initials=text(props, "initials").unwrap_or_default() size=*size /> })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn definition_list_preview() -> View {
    view! {
        <Dl w=30>
            <Dt>"Name"</Dt>
            <Dd>"Ada Lovelace"</Dd>
            <Dt>"Role"</Dt>
            <Dd>"Analyst"</Dd>
        </Dl>
    }
    .into_view()
}

fn picklist_preview() -> View {
    let left = create_rw_signal(vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()]);
    let right = create_rw_signal(Vec::<String>::new());

    let list = move |from: RwSignal<Vec<String>>, to: RwSignal<Vec<String>>| {
        move || {
            from.get()
                .into_iter()
                .map(|item| {
                    let moved = item.clone();
                    view! {
                        <li>
                            <Button
                                variant=ButtonVariant::Tertiary
                                on_click=Callback::new(move |_| {
                                    from.update(|items| items.retain(|i| i != &moved));
                                    to.update(|items| items.push(moved.clone()));
                                })
                            >
                                {item}
                            </Button>
                        </li>
                    }
                })
                .collect_view()
        }
    };

    view! {
        <DuellingPicklist left_label="Available" right_label="Assigned">
            <ul class="picklist-list" data-element="picklist-left">{list(left, right)}</ul>
            <ul class="picklist-list" data-element="picklist-right">{list(right, left)}</ul>
        </DuellingPicklist>
    }
    .into_view()
}

fn numeral_date_preview(props: &Props, on_event: Callback<String>) -> View {
    view! {
        <NumeralDate
            name="numeral"
            label=text(props, "label").unwrap_or_default()
            field_help=text(props, "field_help").unwrap_or_default()
            enable_internal_error=true
            on_change=Callback::new(move |event: NumeralDateEvent| record(on_event, &event))
            on_blur=Callback::new(move |event: NumeralDateEvent| record(on_event, &event))
        />
    }
    .into_view()
}

fn checkable_preview(props: &Props, on_event: Callback<String>) -> View {
    let checked = create_rw_signal(flag(props, "checked"));
    view! {
        <CheckableInput
            checked=checked
            label=text(props, "label").unwrap_or_default()
            field_help=text(props, "field_help").unwrap_or_default()
            on_change=Callback::new(move |now: bool| on_event.call(now.to_string()))
        />
    }
    .into_view()
}

/// Live example of a catalogue entry, seeded from its prop values.
/// Events are reported to `on_event` as JSON.
#[component]
pub fn ComponentPreview(
    definition: ComponentDefinition,
    #[prop(into)] on_event: Callback<String>,
) -> impl IntoView {
    let props = &definition.prop_values;
    match definition.key.as_str() {
        "textbox" => textbox_preview(props),
        "date" => date_preview(props, on_event),
        "fieldset" => fieldset_preview(&definition),
        "flat-table" => flat_table_preview(),
        "simple-color-picker" => color_picker_preview(props, on_event),
        "confirm" => confirm_preview(props, on_event),
        "portrait" => portrait_preview(props),
        "definition-list" => definition_list_preview(),
        "duelling-picklist" => picklist_preview(),
        "numeral-date" => numeral_date_preview(props, on_event),
        "checkable-input" => checkable_preview(props, on_event),
        _ => ().into_view(),
    }
}
