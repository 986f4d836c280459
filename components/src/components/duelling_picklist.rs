use leptos::*;

/// Two lists side by side with items moved between them.
#[component]
pub fn DuellingPicklist(
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] left_label: Option<String>,
    #[prop(optional, into)] right_label: Option<String>,
    #[prop(optional)] left_controls: Option<ViewFn>,
    #[prop(optional)] right_controls: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let show_labels = left_label.is_some() || right_label.is_some();
    let show_controls = left_controls.is_some() || right_controls.is_some();
    let overlay_class = move || {
        if disabled.get() {
            "duelling-picklist-overlay is-disabled"
        } else {
            "duelling-picklist-overlay"
        }
    };

    view! {
        <div class=overlay_class data-component="duelling-picklist" aria-disabled=move || disabled.get().to_string()>
            {show_labels.then(|| view! {
                <div class="duelling-picklist-labels">
                    <span class="duelling-picklist-label" data-element="picklist-left-label">{left_label}</span>
                    <span class="duelling-picklist-label" data-element="picklist-right-label">{right_label}</span>
                </div>
            })}
            {show_controls.then(|| view! {
                <div class="duelling-picklist-controls">
                    <div class="duelling-picklist-control" data-element="picklist-left-control">
                        {left_controls.map(|controls| controls.run())}
                    </div>
                    <div class="duelling-picklist-control" data-element="picklist-right-control">
                        {right_controls.map(|controls| controls.run())}
                    </div>
                </div>
            })}
            <div class="duelling-picklist">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let div = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&div).unwrap();
        div.unchecked_into()
    }

    #[wasm_bindgen_test]
    fn test_labels_only_when_given() {
        let parent = container();
        mount_to(parent.clone(), || {
            view! { <DuellingPicklist left_label="Available">"lists"</DuellingPicklist> }
        });
        assert!(parent.query_selector(".duelling-picklist-labels").unwrap().is_some());
        assert!(parent.query_selector(".duelling-picklist-controls").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_disabled_overlay() {
        let parent = container();
        mount_to(parent.clone(), || {
            view! {
                <DuellingPicklist disabled=true right_controls=ViewFn::from(|| view! { <input /> })>
                    "lists"
                </DuellingPicklist>
            }
        });
        let overlay = parent.query_selector("[data-component='duelling-picklist']").unwrap().unwrap();
        assert!(overlay.class_name().contains("is-disabled"));
        assert!(parent
            .query_selector("[data-element='picklist-right-control'] input")
            .unwrap()
            .is_some());
    }
}
