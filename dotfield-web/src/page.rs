//! Page behaviors: theme toggle, mobile menu, reveal on scroll, navbar
//! style, contact form.
//!
//! Every behavior is optional. A missing element disables it quietly.

use dotfield::Theme;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::chrome::{
    bar_style, navbar_style, usable_storage, CONTACT_PLACEHOLDER, LIGHT_MODE_CLASS,
    REVEAL_SELECTORS, REVEAL_THRESHOLD, THEME_KEY,
};

/// Restore the stored theme and wire `#theme-toggle`.
pub fn init_theme_toggle(window: &Window, document: &Document) -> Result<(), JsValue> {
    let body = document.body().ok_or("document has no body")?;
    let storage = usable_storage(window.local_storage());

    let stored = storage
        .as_ref()
        .and_then(|s| s.get_item(THEME_KEY).ok().flatten());
    if Theme::from_preference(stored.as_deref()).is_light() {
        body.class_list().add_1(LIGHT_MODE_CLASS)?;
    }

    let Some(toggle) = document.query_selector("#theme-toggle")? else {
        return Ok(());
    };

    let closure = Closure::wrap(Box::new(move || {
        let classes = body.class_list();
        let _ = classes.toggle(LIGHT_MODE_CLASS);

        let theme = if classes.contains(LIGHT_MODE_CLASS) {
            Theme::Light
        } else {
            Theme::Dark
        };
        if let Some(storage) = &storage {
            if let Err(e) = storage.set_item(THEME_KEY, theme.as_str()) {
                log::warn!("failed to store theme preference: {:?}", e);
            }
        }
        log::info!("theme switched to {}", theme);
    }) as Box<dyn FnMut()>);
    toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

/// Apply hamburger bar styles for an open or closed menu.
fn style_bars(document: &Document, menu_open: bool) {
    let Ok(bars) = document.query_selector_all(".bar") else {
        return;
    };
    for index in 0..bars.length() {
        let Some(bar) = bars.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let style = bar_style(index as usize, menu_open);
        let css = bar.style();
        if let Some(transform) = style.transform {
            let _ = css.set_property("transform", transform);
        }
        if let Some(opacity) = style.opacity {
            let _ = css.set_property("opacity", opacity);
        }
    }
}

/// Wire `#mobile-menu` and close the menu when a nav link is followed.
pub fn init_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let menu = document.query_selector("#mobile-menu")?;
    let nav_links = document.query_selector(".nav-links")?;

    if let Some(menu_el) = &menu {
        let menu_el = menu_el.clone();
        let target = menu_el.clone();
        let nav_links = nav_links.clone();
        let document = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            let open = menu_el.class_list().toggle("is-active").unwrap_or(false);
            if let Some(links) = &nav_links {
                let _ = links.class_list().toggle("active");
            }
            style_bars(&document, open);
        }) as Box<dyn FnMut()>);
        target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let links = document.query_selector_all(".nav-links a")?;
    for index in 0..links.length() {
        let Some(link) = links.item(index) else {
            continue;
        };
        let menu = menu.clone();
        let nav_links = nav_links.clone();
        let document = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(links) = &nav_links {
                let _ = links.class_list().remove_1("active");
            }
            if let Some(menu) = &menu {
                let _ = menu.class_list().remove_1("is-active");
            }
            style_bars(&document, false);
        }) as Box<dyn FnMut()>);
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Fade sections in the first time they scroll into view.
pub fn init_reveal(document: &Document) -> Result<(), JsValue> {
    let targets = document.query_selector_all(REVEAL_SELECTORS)?;
    if targets.length() == 0 {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("active");
                    // Revealed once, never hidden again
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for index in 0..targets.length() {
        let Some(element) = targets.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        element.class_list().add_1("reveal")?;
        observer.observe(&element);
    }

    Ok(())
}

/// Compact, shadowed `.header` once the page is scrolled.
pub fn init_navbar(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(header) = document.query_selector(".header")? else {
        return Ok(());
    };
    let header: HtmlElement = header.dyn_into()?;

    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let style = navbar_style(win.scroll_y().unwrap_or(0.0));
        let css = header.style();
        let _ = css.set_property("box-shadow", style.box_shadow);
        let _ = css.set_property("padding", style.padding);
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

/// Placeholder submit handler for `#contact-form`.
pub fn init_contact_form(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(form) = document.query_selector("#contact-form")? else {
        return Ok(());
    };
    let form: HtmlFormElement = form.dyn_into()?;

    let win = window.clone();
    let target = form.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        if let Err(e) = win.alert_with_message(CONTACT_PLACEHOLDER) {
            log::warn!("alert failed: {:?}", e);
        }
        form.reset();
    }) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}
