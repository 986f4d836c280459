use leptos::*;
use rivet_core::portrait::{gravatar_url, normalize_initials, PortraitShape, PortraitSize};

use crate::style::class_list;

/// Image source for the portrait, `src` wins over `gravatar`.
fn image_source(src: Option<String>, gravatar: Option<&str>, size: PortraitSize) -> Option<String> {
    src.filter(|s| !s.is_empty())
        .or_else(|| gravatar.filter(|g| !g.trim().is_empty()).map(|g| gravatar_url(g, size)))
}

/// Picture of a person: an image, a gravatar, initials or a generic icon.
/// Falls back to initials when the image cannot be loaded.
#[component]
pub fn Portrait(
    #[prop(optional, into)] initials: Option<String>,
    #[prop(optional, into)] src: Option<String>,
    /// E-mail address registered with Gravatar
    #[prop(optional, into)] gravatar: Option<String>,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional)] size: PortraitSize,
    #[prop(optional)] shape: PortraitShape,
    #[prop(optional)] dark_background: bool,
) -> impl IntoView {
    let image = image_source(src, gravatar.as_deref(), size);
    let initials = initials.map(|i| normalize_initials(&i)).unwrap_or_default();
    let alt = alt.unwrap_or_else(|| initials.clone());
    let image_failed = create_rw_signal(false);
    let pixels = size.pixels();
    let class = class_list(&[
        "portrait",
        &format!("portrait-{}", size.as_str()),
        &format!("portrait-{}", shape.as_str()),
        if dark_background { "portrait-dark" } else { "" },
    ]);
    let initials = store_value(initials);

    let fallback = move || {
        let text = initials.get_value();
        if text.is_empty() {
            view! { <span class="portrait-icon icon-individual" data-element="icon"></span> }.into_view()
        } else {
            view! { <span class="portrait-initials" data-element="initials">{text}</span> }.into_view()
        }
    };

    let content = move || match image.clone() {
        Some(source) if !image_failed.get() => view! {
            <img
                class="portrait-image"
                src=source
                alt=alt.clone()
                width=pixels
                height=pixels
                on:error=move |_| image_failed.set(true)
            />
        }
        .into_view(),
        _ => fallback(),
    };

    view! {
        <div
            class=class
            data-component="portrait"
            style=format!("width: {0}px; height: {0}px;", pixels)
        >
            {content}
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
    fn test_image_source_priority() {
        assert_eq!(
            image_source(Some("me.png".to_string()), Some("a@b.c"), PortraitSize::Small),
            Some("me.png".to_string())
        );
        let gravatar = image_source(None, Some("a@b.c"), PortraitSize::Small).unwrap();
        assert!(gravatar.starts_with("https://www.gravatar.com/avatar/"));
        assert_eq!(image_source(Some(String::new()), Some(" "), PortraitSize::Small), None);
    }

    #[wasm_bindgen_test]
    fn test_initials_are_normalized() {
        let parent = container();
        mount_to(parent.clone(), || {
            view! { <Portrait initials="abcd" shape=PortraitShape::Circle dark_background=true /> }
        });
        let initials = parent.query_selector("[data-element='initials']").unwrap().unwrap();
        assert_eq!(initials.text_content().as_deref(), Some("ABC"));
        let root = parent.query_selector("[data-component='portrait']").unwrap().unwrap();
        assert_eq!(
            root.get_attribute("class").as_deref(),
            Some("portrait portrait-medium-small portrait-circle portrait-dark")
        );
    }

    #[wasm_bindgen_test]
    fn test_icon_without_initials_or_image() {
        let parent = container();
        mount_to(parent.clone(), || view! { <Portrait size=PortraitSize::Large /> });
        assert!(parent.query_selector("[data-element='icon']").unwrap().is_some());
    }
}
