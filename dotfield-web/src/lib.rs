//! Browser host for dotfield.
//!
//! Compiled to WebAssembly, this crate runs the portfolio page's client-side
//! behavior: the particle hero background on `#hero-canvas` plus the theme
//! toggle, mobile menu, reveal-on-scroll, navbar and contact-form handlers.
//!
//! The pure decision logic lives in [`chrome`] and builds on every target;
//! the DOM wiring is wasm-only.

pub mod chrome;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod hero;
#[cfg(target_arch = "wasm32")]
mod page;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Module entry point. Wires the page once the DOM is ready.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    // Redirect panic messages to console.error
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    if document.ready_state() == "loading" {
        let win = window.clone();
        let doc = document.clone();
        let closure = Closure::once(move || init(&win, &doc));
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    } else {
        init(&window, &document);
    }

    Ok(())
}

/// Run every page behavior. One failing does not stop the others.
#[cfg(target_arch = "wasm32")]
fn init(window: &web_sys::Window, document: &web_sys::Document) {
    let steps: [(&str, Result<(), JsValue>); 6] = [
        ("theme toggle", page::init_theme_toggle(window, document)),
        ("mobile menu", page::init_mobile_menu(document)),
        ("reveal on scroll", page::init_reveal(document)),
        ("navbar", page::init_navbar(window, document)),
        ("contact form", page::init_contact_form(window, document)),
        ("particle field", hero::start(window, document)),
    ];

    for (name, result) in steps {
        if let Err(e) = result {
            log::error!("{} setup failed: {:?}", name, e);
        }
    }
}
