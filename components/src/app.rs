use leptos::*;
use leptos_router::*;

use crate::i18n::{provide_i18n, supported_languages, use_i18n};
use crate::pages::{catalogue::CataloguePage, component_page::ComponentPage};

#[component]
pub fn App() -> impl IntoView {
    provide_i18n("en".to_string());

    view! {
        <Router>
            <Header />
            <main class="container">
                <Routes>
                    <Route path="/" view=CataloguePage />
                    <Route path="/components/:key" view=ComponentPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let current = i18n.language;
    let i18n_title = i18n.clone();
    let i18n_select = i18n.clone();

    view! {
        <nav class="navbar">
            <A href="/" class="navbar-brand">{move || i18n_title.t("demo.title")}</A>
            <label class="navbar-language">
                {move || i18n.t("demo.language")}
                <select
                    data-element="language-select"
                    on:change=move |ev| i18n_select.set_language(&event_target_value(&ev))
                >
                    {supported_languages()
                        .into_iter()
                        .map(|(code, name)| view! {
                            <option value=code prop:selected=move || current.get() == code>{name}</option>
                        })
                        .collect_view()}
                </select>
            </label>
        </nav>
    }
}
