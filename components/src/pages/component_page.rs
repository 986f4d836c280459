use leptos::*;
use leptos_router::{use_params_map, A};
use rivet_core::definition::{find, ComponentDefinition, PropType};

use crate::api::DocsClient;
use crate::components::{
    FlatTable, FlatTableBody, FlatTableCell, FlatTableHead, FlatTableHeader, FlatTableRow,
    FlatTableRowHeader, MarkdownView,
};
use crate::i18n::use_i18n;
use crate::pages::preview::ComponentPreview;

fn type_name(prop_type: PropType) -> &'static str {
    match prop_type {
        PropType::String => "string",
        PropType::Boolean => "boolean",
        PropType::Number => "number",
        PropType::Function => "function",
        PropType::Array => "array",
        PropType::Node => "node",
    }
}

/// One row of the props table.
#[derive(Debug, Clone, PartialEq)]
struct PropRow {
    name: String,
    prop_type: &'static str,
    description: String,
    options: String,
    default: String,
    requires: String,
}

/// Visible props in name order.
fn prop_rows(definition: &ComponentDefinition) -> Vec<PropRow> {
    definition
        .prop_types
        .iter()
        .filter(|(name, _)| !definition.hidden_props.contains(name))
        .map(|(name, prop_type)| PropRow {
            name: name.clone(),
            prop_type: type_name(*prop_type),
            description: definition.prop_descriptions.get(name).cloned().unwrap_or_default(),
            options: definition
                .prop_options
                .get(name)
                .map(|options| options.join(", "))
                .unwrap_or_default(),
            default: definition
                .prop_values
                .get(name)
                .map(|value| value.to_string())
                .unwrap_or_default(),
            requires: definition.prop_requires.get(name).cloned().unwrap_or_default(),
        })
        .collect()
}

/// Server definition to show instead of `current`, if it is for `key` and differs.
fn served_definition(
    current: Option<&ComponentDefinition>,
    served: ComponentDefinition,
    key: &str,
) -> Option<ComponentDefinition> {
    (served.key == key && current != Some(&served)).then_some(served)
}

#[component]
fn ComponentDoc(definition: ComponentDefinition) -> impl IntoView {
    let i18n = use_i18n();
    let (last_event, set_last_event) = create_signal(String::new());
    let on_event = Callback::new(move |event: String| set_last_event.set(event));
    let rows = prop_rows(&definition);
    let notes = definition.designer_notes.clone();
    let name = definition.name.clone();
    let description = definition.description.clone();
    let stored = store_value(definition);
    let i18n_stored = store_value(i18n);

    // Rebuilt on language change, date formats are fixed when a widget is created.
    let preview = move || {
        i18n_stored.with_value(|i18n| i18n.current_language());
        view! { <ComponentPreview definition=stored.get_value() on_event=on_event /> }
    };

    let t = move |key: &'static str| move || i18n_stored.with_value(|i18n| i18n.t(key));

    view! {
        <div class="dashboard-header">
            <A href="/" class="back-link">"←"</A>
            <h1 class="dashboard-title">{name}</h1>
        </div>
        <p class="component-description">{description}</p>

        <div class="card">
            <h3 class="card-title">{t("demo.preview")}</h3>
            <div class="component-preview" data-element="preview">{preview}</div>
            <p class="last-event">
                {t("demo.last_event")} ": "
                <code data-element="last-event">{last_event}</code>
            </p>
        </div>

        {(!notes.is_empty()).then(|| view! {
            <div class="card">
                <h3 class="card-title">{t("demo.designer_notes")}</h3>
                <MarkdownView content=notes />
            </div>
        })}

        <div class="card">
            <h3 class="card-title">{t("demo.props")}</h3>
            <FlatTable>
                <FlatTableHead>
                    <FlatTableRow>
                        <FlatTableHeader>"Name"</FlatTableHeader>
                        <FlatTableHeader>"Type"</FlatTableHeader>
                        <FlatTableHeader>"Description"</FlatTableHeader>
                        <FlatTableHeader>"Options"</FlatTableHeader>
                        <FlatTableHeader>"Default"</FlatTableHeader>
                        <FlatTableHeader>"Requires"</FlatTableHeader>
                    </FlatTableRow>
                </FlatTableHead>
                <FlatTableBody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <FlatTableRow>
                                <FlatTableRowHeader>{row.name}</FlatTableRowHeader>
                                <FlatTableCell>{row.prop_type}</FlatTableCell>
                                <FlatTableCell>{row.description}</FlatTableCell>
                                <FlatTableCell>{row.options}</FlatTableCell>
                                <FlatTableCell>{row.default}</FlatTableCell>
                                <FlatTableCell>{row.requires}</FlatTableCell>
                            </FlatTableRow>
                        })
                        .collect_view()}
                </FlatTableBody>
            </FlatTable>
        </div>
    }
}

/// Documentation page of one component, `/components/:key`.
///
/// Starts from the bundled catalogue and switches to the docs server's
/// definition once it arrives.
#[component]
pub fn ComponentPage() -> impl IntoView {
    let i18n = use_i18n();
    let params = use_params_map();
    let key = move || params.with(|p| p.get("key").cloned().unwrap_or_default());
    let definition = create_rw_signal(Option::<ComponentDefinition>::None);

    create_effect(move |_| {
        let key = key();
        definition.set(find(&key));
        wasm_bindgen_futures::spawn_local(async move {
            match DocsClient::get_component(&key).await {
                Ok(served) => {
                    // The page may have moved on or gone while the request ran.
                    let update = params
                        .try_with_untracked(|p| p.get("key").cloned().unwrap_or_default())
                        .and_then(|current_key| {
                            definition
                                .try_with_untracked(|current| {
                                    served_definition(current.as_ref(), served, &current_key)
                                })
                                .flatten()
                        });
                    if let Some(served) = update {
                        definition.set(Some(served));
                    }
                }
                Err(e) => logging::log!("using bundled definition of '{}': {}", key, e),
            }
        });
    });

    move || match definition.get() {
        Some(definition) => view! { <ComponentDoc definition=definition /> }.into_view(),
        None => view! {
            <div class="empty-state" data-element="not-found">{i18n.t("demo.not_found")}</div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rivet_core::definition::catalogue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_prop_rows_skip_hidden_props() {
        let picker = find("simple-color-picker").unwrap();
        let rows = prop_rows(&picker);
        assert!(rows.iter().all(|row| row.name != "available_colors"));
        let selected = rows.iter().find(|row| row.name == "selected_color").unwrap();
        assert_eq!(selected.prop_type, "string");
        assert_eq!(selected.default, "\"#00DC00\"");
    }

    #[wasm_bindgen_test]
    fn test_prop_rows_show_requirements_and_options() {
        let fieldset = find("fieldset").unwrap();
        let rows = prop_rows(&fieldset);
        let align = rows.iter().find(|row| row.name == "legend_align").unwrap();
        assert_eq!(align.requires, "inline");
        assert!(!align.options.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_served_definition_replaces_only_when_different() {
        let bundled = find("portrait").unwrap();
        assert_eq!(served_definition(Some(&bundled), bundled.clone(), "portrait"), None);

        let mut served = bundled.clone();
        served.description = "Served description".to_string();
        assert_eq!(
            served_definition(Some(&bundled), served.clone(), "portrait"),
            Some(served.clone())
        );
        assert_eq!(served_definition(None, served.clone(), "portrait"), Some(served.clone()));
    }

    #[wasm_bindgen_test]
    fn test_served_definition_for_previous_route_is_dropped() {
        let served = find("portrait").unwrap();
        assert_eq!(served_definition(None, served, "date"), None);
    }

    #[wasm_bindgen_test]
    fn test_every_definition_has_rows() {
        for definition in catalogue() {
            assert!(!prop_rows(&definition).is_empty(), "{} has no props", definition.key);
        }
    }
}
