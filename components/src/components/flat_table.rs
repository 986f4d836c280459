use leptos::*;

use crate::style::{class_list, Align};
use crate::utils::unique_id;

#[component]
pub fn FlatTable(
    #[prop(optional, into)] caption: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = class_list(&["flat-table", class.as_deref().unwrap_or("")]);

    view! {
        <div class="flat-table-wrapper" data-component="flat-table">
            <table class=full_class>
                {caption.map(|text| view! { <caption>{text}</caption> })}
                {children()}
            </table>
        </div>
    }
}

#[component]
pub fn FlatTableHead(children: Children) -> impl IntoView {
    view! { <thead class="flat-table-head">{children()}</thead> }
}

#[component]
pub fn FlatTableBody(children: Children) -> impl IntoView {
    view! { <tbody class="flat-table-body">{children()}</tbody> }
}

#[component]
pub fn FlatTableRow(
    #[prop(optional)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let row_class = move || {
        let mut class = String::from("flat-table-row");
        if on_click.is_some() {
            class.push_str(" is-clickable");
        }
        if selected.get() {
            class.push_str(" is-selected");
        }
        class
    };

    view! {
        <tr
            class=row_class
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            {children()}
        </tr>
    }
}

fn cell_style(align: Align, width: Option<u32>) -> String {
    let mut style = format!("text-align: {};", align.as_str());
    if let Some(width) = width {
        style.push_str(&format!(" width: {0}px; min-width: {0}px;", width));
    }
    style
}

#[component]
pub fn FlatTableCell(
    #[prop(optional)] align: Align,
    #[prop(optional)] colspan: Option<u32>,
    #[prop(optional)] rowspan: Option<u32>,
    #[prop(optional)] width: Option<u32>,
    children: Children,
) -> impl IntoView {
    view! {
        <td class="flat-table-cell" colspan=colspan rowspan=rowspan style=cell_style(align, width)>
            {children()}
        </td>
    }
}

/// Column header cell.
#[component]
pub fn FlatTableHeader(
    #[prop(optional)] align: Align,
    /// Use the alternative background colour
    #[prop(optional)] alternative_bg: bool,
    #[prop(optional)] colspan: Option<u32>,
    #[prop(optional)] rowspan: Option<u32>,
    /// Fixed width in pixels
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = if alternative_bg {
        "flat-table-header flat-table-header-alt"
    } else {
        "flat-table-header"
    };

    view! {
        <th
            class=class
            data-element="flat-table-header"
            scope="col"
            colspan=colspan
            rowspan=rowspan
            style=cell_style(align, width)
        >
            {children.map(|children| children())}
        </th>
    }
}

/// Header cell at the start of a row, kept in view when scrolling sideways.
#[component]
pub fn FlatTableRowHeader(
    #[prop(optional)] align: Align,
    #[prop(optional)] width: Option<u32>,
    children: Children,
) -> impl IntoView {
    view! {
        <th
            class="flat-table-row-header"
            data-element="flat-table-row-header"
            scope="row"
            style=cell_style(align, width)
        >
            {children()}
        </th>
    }
}

/// Cell holding a row selection checkbox. Clicks never reach the row.
#[component]
pub fn FlatTableCheckbox(
    /// Render as `th` inside a header row
    #[prop(optional)] as_header: bool,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(default = true)] selectable: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let checkbox = selectable.then(|| {
        view! {
            <input
                type="checkbox"
                class="flat-table-checkbox"
                id=unique_id("flat-table-checkbox")
                aria-label=aria_label
                prop:checked=move || checked.get()
                on:click=|ev| ev.stop_propagation()
                on:change=move |ev| {
                    if let Some(callback) = on_change {
                        callback.call(event_target_checked(&ev));
                    }
                }
            />
        }
    });

    if as_header {
        view! {
            <th class="flat-table-checkbox-cell" data-element="flat-table-checkbox-header">
                {checkbox}
            </th>
        }
        .into_view()
    } else {
        view! {
            <td class="flat-table-checkbox-cell" data-element="flat-table-checkbox-cell">
                {checkbox}
            </td>
        }
        .into_view()
    }
}
