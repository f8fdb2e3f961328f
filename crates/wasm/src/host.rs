//! The browser as a [`Host`]: window scroll, timers, animation frames and
//! location history.

use crate::error::{GeneratocError, js_message};
use crate::heading::DomHeading;
use crate::renderer::DomRenderer;
use generatoc_traits::{
    Binding, FrameId, FrameScheduler, Host, HostError, TimerId, TimerScheduler,
};
use generatoc_types::LevelSet;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

#[derive(Debug, Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new() -> Result<Self, GeneratocError> {
        let window = web_sys::window().ok_or_else(|| GeneratocError::host("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| GeneratocError::host("No document"))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl TimerScheduler for DomHost {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let callback = Closure::once_into_js(move || callback());
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            Ok(handle) => Some(TimerId(handle as u64)),
            Err(e) => {
                log::warn!("setTimeout failed: {}", js_message(&e));
                None
            }
        }
    }

    fn clear_timeout(&self, id: TimerId) {
        self.window.clear_timeout_with_handle(id.0 as i32);
    }
}

impl FrameScheduler for DomHost {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId> {
        let callback = Closure::once_into_js(move |_timestamp: f64| callback());
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(handle) => Some(FrameId(handle as u64)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {}", js_message(&e));
                None
            }
        }
    }

    fn cancel_frame(&self, id: FrameId) {
        if let Err(e) = self.window.cancel_animation_frame(id.0 as i32) {
            log::warn!("cancelAnimationFrame failed: {}", js_message(&e));
        }
    }
}

impl Host for DomHost {
    type Marker = DomHeading;
    type Renderer = DomRenderer;

    fn find_headings(&self, content: &str, levels: &LevelSet) -> Option<Vec<DomHeading>> {
        let root = self.document.query_selector(content).ok().flatten()?;
        if levels.is_empty() {
            return Some(Vec::new());
        }
        let nodes = match root.query_selector_all(&levels.selector()) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("Heading query '{}' failed: {}", levels, js_message(&e));
                return Some(Vec::new());
            }
        };
        let headings = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomHeading::new)
            .collect();
        Some(headings)
    }

    fn mount(&self, selector: &str) -> Option<DomRenderer> {
        let element = self.document.query_selector(selector).ok().flatten()?;
        Some(DomRenderer::new(self.document.clone(), element))
    }

    fn scroll_offset(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn listen_scroll(&self, handler: Box<dyn FnMut()>) -> Result<Binding, HostError> {
        let mut handler = handler;
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        self.window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(|e| HostError::Listen {
                event: "scroll",
                message: js_message(&e),
            })?;

        let window = self.window.clone();
        Ok(Binding::new(move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }))
    }

    fn scroll_to(&self, marker: &DomHeading) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        marker
            .element()
            .scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn fragment(&self) -> Option<String> {
        let hash = self.window.location().hash().ok()?;
        let raw = hash.strip_prefix('#').unwrap_or(&hash);
        if raw.is_empty() {
            return None;
        }
        let decoded = js_sys::decode_uri_component(raw)
            .map(String::from)
            .unwrap_or_else(|_| raw.to_string());
        Some(decoded)
    }

    fn replace_fragment(&self, fragment: &str) -> Result<(), HostError> {
        self.window
            .location()
            .replace(&format!("#{}", fragment))
            .map_err(|e| HostError::History(js_message(&e)))
    }
}
