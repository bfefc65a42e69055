//! Small DOM-facing hooks.

use dioxus::prelude::*;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Close-on-outside-click for the location dropdown.
///
/// Installs one document-level `mousedown` listener for the component's
/// lifetime and removes it on unmount; `on_outside` fires whenever the event
/// target lies outside the element with id `container_id`.
pub fn use_outside_click(container_id: &'static str, on_outside: impl FnMut() + 'static) {
    let listener: Rc<Closure<dyn FnMut(web_sys::Event)>> = use_hook(move || {
        let mut on_outside = on_outside;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(document) = document() else { return };
            let Some(container) = document.get_element_by_id(container_id) else {
                return;
            };
            let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = matches!(&target, Some(node) if container.contains(Some(node)));
            if !inside {
                on_outside();
            }
        });
        if let Some(document) = document() {
            if let Err(e) = document
                .add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to install outside-click listener: {:?}", e);
            }
        }
        Rc::new(callback)
    });

    use_drop(move || {
        if let Some(document) = document() {
            let _ = document.remove_event_listener_with_callback(
                "mousedown",
                (*listener).as_ref().unchecked_ref(),
            );
        }
    });
}
