//! Thin helpers over `web_sys` used by the page components.
//!
//! Everything here is best effort: callers log the returned error and carry
//! on, so one missing element never takes the rest of the page down.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::UiError;
use crate::widgets::navigation::{scroll_offset, SectionBounds, NAV_SECTIONS};

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::MissingWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::MissingWindow)
}

pub fn body() -> Result<HtmlElement, UiError> {
    document()?
        .body()
        .ok_or_else(|| UiError::MissingElement("body".to_string()))
}

pub fn html_element_by_id(id: &str) -> Result<HtmlElement, UiError> {
    document()?
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| UiError::MissingElement(format!("#{}", id)))
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, UiError> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn set_body_overflow(value: &str) -> Result<(), UiError> {
    body()?.style().set_property("overflow", value)?;
    Ok(())
}

pub fn add_body_class(class: &str) -> Result<(), UiError> {
    body()?.class_list().add_1(class)?;
    Ok(())
}

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn header_height() -> f64 {
    document()
        .ok()
        .and_then(|doc| doc.query_selector(".cyber-header").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

/// Smooth-scroll so section `id` sits right below the fixed header.
pub fn scroll_to_section(id: &str, adjust: f64) -> Result<(), UiError> {
    let section = html_element_by_id(id)?;
    let top = scroll_offset(f64::from(section.offset_top()), header_height(), adjust);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Bounds of the navigable sections currently in the document.
pub fn section_bounds() -> Vec<SectionBounds> {
    NAV_SECTIONS
        .iter()
        .filter_map(|id| html_element_by_id(id).ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

/// Intersection observer that disconnects when dropped.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// Call `on_enter` when an observed element becomes visible at
    /// `threshold`. With `once`, each element is unobserved after its first
    /// entry.
    pub fn new(
        threshold: f64,
        once: bool,
        mut on_enter: impl FnMut(Element) + 'static,
    ) -> Result<Self, UiError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if once {
                        observer.unobserve(&target);
                    }
                    on_enter(target);
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

pub fn supports_lazy_loading() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("HTMLImageElement"))
        .and_then(|class| js_sys::Reflect::get(&class, &JsValue::from_str("prototype")))
        .map(|prototype| has_property(&prototype, "loading"))
        .unwrap_or(false)
}

/// Mark every image lazy when the browser understands the attribute.
pub fn apply_lazy_loading() -> Result<(), UiError> {
    if !supports_lazy_loading() {
        log::debug!("Lazy image loading not supported");
        return Ok(());
    }
    for image in query_all("img")? {
        image.set_attribute("loading", "lazy")?;
    }
    Ok(())
}

/// Swap `data-src` into `src` for images deferred until window load.
pub fn promote_deferred_images() -> Result<(), UiError> {
    for image in query_all("img[data-src]")? {
        if let Some(src) = image.get_attribute("data-src") {
            image.set_attribute("src", &src)?;
            image.remove_attribute("data-src")?;
        }
    }
    Ok(())
}

pub fn hide_preloader() {
    if let Ok(preloader) = html_element_by_id("preloader") {
        let _ = preloader.style().set_property("display", "none");
    }
}

/// Fire-and-forget service worker registration.
pub fn register_service_worker(path: &'static str) {
    let Ok(window) = window() else {
        return;
    };
    let navigator = window.navigator();
    if !has_property(&navigator, "serviceWorker") {
        log::debug!("Service workers not supported");
        return;
    }
    let promise = navigator.service_worker().register(path);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("Service worker registered at {}", path),
            Err(e) => log::error!("Service worker registration failed: {:?}", e),
        }
    });
}

/// Log how long the document took to become interactive.
pub fn log_navigation_timing() {
    let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
        return;
    };
    let entry = performance.get_entries_by_type("navigation").get(0);
    if let Ok(timing) = entry.dyn_into::<web_sys::PerformanceNavigationTiming>() {
        gloo_console::log!(format!(
            "Page loaded in {}ms",
            timing.dom_content_loaded_event_end().round()
        ));
    }
}

/// Whether `target` lies inside `container`.
pub fn contains(container: Option<Element>, target: Option<&EventTarget>) -> bool {
    match (container, target.and_then(|t| t.dyn_ref::<web_sys::Node>())) {
        (Some(container), Some(node)) => container.contains(Some(node)),
        _ => false,
    }
}
