use leptos::*;

use crate::style::Align;

#[derive(Clone, Copy)]
struct DlContext {
    dt_text_align: Align,
    dd_text_align: Align,
}

fn grid_style(w: u8) -> String {
    let w = w.min(100);
    format!(
        "display: grid; grid-template-columns: {}% {}%;",
        w,
        100 - w
    )
}

/// Two column list of terms and descriptions. Children are `Dt`/`Dd` pairs.
#[component]
pub fn Dl(
    /// Width of the term column as a percentage
    #[prop(default = 50)] w: u8,
    #[prop(default = Align::Right)] dt_text_align: Align,
    #[prop(default = Align::Left)] dd_text_align: Align,
    children: Children,
) -> impl IntoView {
    provide_context(DlContext {
        dt_text_align,
        dd_text_align,
    });

    view! {
        <dl class="dl" data-component="dl" style=grid_style(w)>
            {children()}
        </dl>
    }
}

#[component]
pub fn Dt(children: Children) -> impl IntoView {
    let align = use_context::<DlContext>().map_or(Align::Right, |ctx| ctx.dt_text_align);
    view! {
        <div class="dl-dt" style=format!("text-align: {};", align.as_str())>
            <dt>{children()}</dt>
        </div>
    }
}

#[component]
pub fn Dd(children: Children) -> impl IntoView {
    let align = use_context::<DlContext>().map_or(Align::Left, |ctx| ctx.dd_text_align);
    view! {
        <div class="dl-dd" style=format!("text-align: {};", align.as_str())>
            <dd>{children()}</dd>
        </div>
    }
}
