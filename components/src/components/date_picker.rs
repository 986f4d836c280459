use chrono::{Datelike, NaiveDate};
use leptos::*;
use rivet_core::calendar::{is_selectable, month_grid, shift_month};

use crate::i18n::use_i18n;

fn day_class(day: NaiveDate, selected: Option<NaiveDate>, today: NaiveDate, enabled: bool) -> String {
    let mut class = String::from("date-picker-day");
    if day == today {
        class.push_str(" is-today");
    }
    if Some(day) == selected {
        class.push_str(" is-selected");
    }
    if !enabled {
        class.push_str(" is-disabled");
    }
    class
}

/// Month calendar shown under the date input.
///
/// Clicks on a day call `on_select` and stop there; every other click inside
/// the calendar is reported through `on_click` and keeps bubbling. Pressing
/// the mouse inside the calendar never moves focus.
#[component]
pub fn DatePicker(
    #[prop(into)] selected: Signal<Option<NaiveDate>>,
    /// First month shown
    anchor: NaiveDate,
    today: NaiveDate,
    #[prop(optional_no_strip)] min_date: Option<NaiveDate>,
    #[prop(optional_no_strip)] max_date: Option<NaiveDate>,
    #[prop(into)] on_select: Callback<NaiveDate>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(optional, into)] style: Option<String>,
) -> impl IntoView {
    let i18n = use_i18n();
    let i18n_stored = store_value(i18n);
    let shown = create_rw_signal((anchor.year(), anchor.month()));

    let move_month = move |delta: i32| {
        shown.update(|(year, month)| {
            let (y, m) = shift_month(*year, *month, delta);
            *year = y;
            *month = m;
        });
    };

    let title = move || {
        let (year, month) = shown.get();
        format!("{} {}", i18n_stored.get_value().month_name(month), year)
    };

    let weekdays = (1..=7)
        .map(|weekday| view! { <th class="date-picker-weekday">{move || i18n_stored.get_value().weekday_name(weekday)}</th> })
        .collect_view();

    let weeks = move || {
        let (year, month) = shown.get();
        let selected = selected.get();
        month_grid(year, month)
            .into_iter()
            .map(|week| {
                week.into_iter()
                    .map(|slot| match slot {
                        Some(day) => {
                            let enabled = is_selectable(day, min_date, max_date);
                            view! {
                                <td>
                                    <button
                                        type="button"
                                        class=day_class(day, selected, today, enabled)
                                        data-date=day.format("%Y-%m-%d").to_string()
                                        disabled=!enabled
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            on_select.call(day);
                                        }
                                    >
                                        {day.day()}
                                    </button>
                                </td>
                            }
                            .into_view()
                        }
                        None => view! { <td class="date-picker-blank"></td> }.into_view(),
                    })
                    .collect_view()
            })
            .map(|cells| view! { <tr>{cells}</tr> })
            .collect_view()
    };

    view! {
        <div
            class="date-picker"
            data-component="date-picker"
            style=style
            on:mousedown=|ev| ev.prevent_default()
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            <div class="date-picker-header">
                <button
                    type="button"
                    class="date-picker-nav"
                    data-element="previous-month"
                    aria-label=move || i18n_stored.get_value().t("date.previous_month")
                    on:click=move |_| move_month(-1)
                >
                    "‹"
                </button>
                <span class="date-picker-title">{title}</span>
                <button
                    type="button"
                    class="date-picker-nav"
                    data-element="next-month"
                    aria-label=move || i18n_stored.get_value().t("date.next_month")
                    on:click=move |_| move_month(1)
                >
                    "›"
                </button>
            </div>
            <table class="date-picker-grid">
                <thead>
                    <tr>{weekdays}</tr>
                </thead>
                <tbody>{weeks}</tbody>
            </table>
        </div>
    }
}
