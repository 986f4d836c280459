use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Window level click listener, removed again when dropped.
///
/// Registered after the framework's delegated handlers, so widget handlers
/// see a click before this listener does.
pub struct OutsideClickSubscription {
    handler: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl OutsideClickSubscription {
    /// Listen for clicks reaching the window. `None` outside a browser.
    pub fn new(on_click: impl FnMut(web_sys::MouseEvent) + 'static) -> Option<Self> {
        let handler = Closure::wrap(Box::new(on_click) as Box<dyn FnMut(web_sys::MouseEvent)>);
        web_sys::window()?
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { handler })
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("click", self.handler.as_ref().unchecked_ref());
        }
    }
}
