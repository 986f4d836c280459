use chrono::NaiveDate;
use rivet_core::date::today_in_tz;
use uuid::Uuid;

/// Id for an element that was not given one.
pub fn unique_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Today in `timezone`, or in the browser's zone when none is given.
pub fn today(timezone: Option<&str>) -> NaiveDate {
    match timezone {
        Some(tz) => today_in_tz(tz),
        None => chrono::Local::now().date_naive(),
    }
}

/// Whether `element` currently holds focus in its document.
pub fn is_active_element(element: &web_sys::Element) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map_or(false, |active| &active == element)
}
