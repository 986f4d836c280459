use leptos::*;
use leptos_router::A;
use rivet_core::HealthStatus;
use rivet_core::definition::catalogue;

use crate::api::DocsClient;
use crate::i18n::use_i18n;

/// Index of every documented component.
#[component]
pub fn CataloguePage() -> impl IntoView {
    let i18n = use_i18n();
    let summaries = create_rw_signal(catalogue().iter().map(|d| d.summary()).collect::<Vec<_>>());

    let health = create_rw_signal(Option::<HealthStatus>::None);

    // Only shown when the page is served by the docs server.
    create_effect(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match DocsClient::health().await {
                Ok(status) => health.set(Some(status)),
                Err(e) => {
                    logging::log!("docs server unavailable: {}", e);
                    return;
                }
            }
            match DocsClient::list_components().await {
                Ok(served) => summaries.set(served),
                Err(e) => logging::warn!("keeping bundled component list: {}", e),
            }
        });
    });

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">{move || i18n.t("demo.title")}</h1>
            {move || health.get().map(|status| view! {
                <span class="server-status" data-element="server-status">
                    {format!("{} {} ({})", status.status, status.version, status.components)}
                </span>
            })}
        </div>

        <ul class="component-list">
            {move || summaries
                .get()
                .into_iter()
                .map(|summary| view! {
                    <li class="card">
                        <A href=format!("/components/{}", summary.key) class="card-title">
                            {summary.name}
                        </A>
                        <p>{summary.description}</p>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}
