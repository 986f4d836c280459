use leptos::*;

use crate::components::button::{Button, ButtonVariant};
use crate::i18n::use_i18n;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DialogSize {
    ExtraSmall,
    Small,
    #[default]
    MediumSmall,
    Medium,
    MediumLarge,
    Large,
    ExtraLarge,
}

impl DialogSize {
    /// Dialog width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            DialogSize::ExtraSmall => 300,
            DialogSize::Small => 380,
            DialogSize::MediumSmall => 540,
            DialogSize::Medium => 750,
            DialogSize::MediumLarge => 850,
            DialogSize::Large => 960,
            DialogSize::ExtraLarge => 1080,
        }
    }
}

/// Modal dialog over a backdrop. Clicking the backdrop or the close icon calls `on_cancel`.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] size: DialogSize,
    #[prop(default = true)] show_close_icon: bool,
    #[prop(into)] on_cancel: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let i18n = use_i18n();
    let close = move |_| on_cancel.call(());
    let title = store_value(title);
    let subtitle = store_value(subtitle.filter(|text| !text.is_empty()));
    let close_label = i18n.t("common.close");

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" data-element="backdrop" on:click=close>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    data-component="dialog"
                    style=format!("width: {}px;", size.width())
                    on:click=|e| e.stop_propagation()
                >
                    <div class="modal-header">
                        <h3 class="modal-title">{title.get_value()}</h3>
                        {subtitle.get_value().map(|text| view! { <p class="modal-subtitle">{text}</p> })}
                        {show_close_icon.then(|| view! {
                            <button
                                class="modal-close"
                                data-element="close"
                                aria-label=close_label.clone()
                                on:click=close
                            >
                                "×"
                            </button>
                        })}
                    </div>
                    <div class="modal-content">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

/// Dialog asking to confirm or cancel. Button labels default to the current language.
#[component]
pub fn Confirm(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] size: DialogSize,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
    #[prop(optional)] destructive: bool,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let i18n = use_i18n();
    let confirm_label = store_value(confirm_label.unwrap_or_else(|| i18n.t("confirm.yes")));
    let cancel_label = store_value(cancel_label.unwrap_or_else(|| i18n.t("confirm.no")));
    let children = store_value(children);
    let confirm_variant = if destructive {
        ButtonVariant::Destructive
    } else {
        ButtonVariant::Primary
    };

    view! {
        <Dialog
            open=open
            title=title
            subtitle=subtitle.unwrap_or_default()
            size=size
            show_close_icon=false
            on_cancel=on_cancel
        >
            {children.with_value(|children| children.as_ref().map(|children| children()))}
            <div class="modal-actions">
                <Button
                    variant=ButtonVariant::Tertiary
                    data_element="confirm-cancel"
                    on_click=Callback::new(move |_| on_cancel.call(()))
                >
                    {cancel_label.get_value()}
                </Button>
                <Button
                    variant=confirm_variant
                    data_element="confirm-button"
                    on_click=Callback::new(move |_| on_confirm.call(()))
                >
                    {confirm_label.get_value()}
                </Button>
            </div>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::provide_i18n;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let div = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&div).unwrap();
        div.unchecked_into()
    }

    fn click(parent: &web_sys::HtmlElement, selector: &str) {
        parent
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>()
            .click();
    }

    #[wasm_bindgen_test]
    fn test_dialog_sizes_grow() {
        assert!(DialogSize::ExtraSmall.width() < DialogSize::default().width());
        assert!(DialogSize::Large.width() < DialogSize::ExtraLarge.width());
    }

    #[wasm_bindgen_test]
    fn test_dialog_hidden_until_open() {
        let parent = container();
        let open = create_rw_signal(false);
        mount_to(parent.clone(), move || {
            provide_i18n("en".to_string());
            view! {
                <Dialog open=open title="Hello" on_cancel=|_| {}>
                    <p>"Body"</p>
                </Dialog>
            }
        });
        assert!(parent.query_selector("[role='dialog']").unwrap().is_none());
        open.set(true);
        assert!(parent.query_selector("[role='dialog']").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn test_backdrop_and_close_icon_cancel() {
        let parent = container();
        let cancels = Rc::new(Cell::new(0));
        let cancels_in = cancels.clone();
        mount_to(parent.clone(), move || {
            provide_i18n("en".to_string());
            view! {
                <Dialog
                    open=Signal::derive(|| true)
                    title="Hello"
                    on_cancel=move |_| cancels_in.set(cancels_in.get() + 1)
                >
                    <p class="body">"Body"</p>
                </Dialog>
            }
        });

        click(&parent, ".body");
        assert_eq!(cancels.get(), 0);
        click(&parent, "[data-element='close']");
        click(&parent, "[data-element='backdrop']");
        assert_eq!(cancels.get(), 2);
    }

    #[wasm_bindgen_test]
    fn test_confirm_default_labels_and_callbacks() {
        let parent = container();
        let confirmed = Rc::new(Cell::new(false));
        let confirmed_in = confirmed.clone();
        mount_to(parent.clone(), move || {
            provide_i18n("en".to_string());
            view! {
                <Confirm
                    open=Signal::derive(|| true)
                    title="Delete?"
                    on_confirm=move |_| confirmed_in.set(true)
                    on_cancel=|_| {}
                />
            }
        });

        let confirm = parent.query_selector("[data-element='confirm-button']").unwrap().unwrap();
        assert_eq!(confirm.text_content().as_deref(), Some("Yes"));
        let cancel = parent.query_selector("[data-element='confirm-cancel']").unwrap().unwrap();
        assert_eq!(cancel.text_content().as_deref(), Some("No"));
        assert!(parent.query_selector("[data-element='close']").unwrap().is_none());

        click(&parent, "[data-element='confirm-button']");
        assert!(confirmed.get());
    }
}
