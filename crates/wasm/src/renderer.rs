//! Draws the panel as nested lists.
//!
//! ```text
//! <ul data-toc-container="0">
//!   <li><a data-toc-index="0">Intro</a></li>
//!   <ul data-toc-container="1"> ... </ul>
//! </ul>
//! ```
//!
//! Expanding a container shows its child lists; collapsing hides them through
//! an inline `scaleY` transform so stylesheets can animate the change.

use crate::error::js_message;
use generatoc_traits::{Binding, PanelRenderer, RenderError};
use generatoc_types::{ContainerId, PanelCommand};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

const ACTIVE_CLASS: &str = "active";
const EXPANDED_HEIGHT: &str = "200px";

#[derive(Debug)]
pub struct DomRenderer {
    document: Document,
    mount: Element,
    containers: HashMap<ContainerId, HtmlElement>,
    children: HashMap<ContainerId, Vec<ContainerId>>,
    top_level: Vec<ContainerId>,
    leaves: HashMap<usize, Element>,
}

impl DomRenderer {
    pub fn new(document: Document, mount: Element) -> Self {
        Self {
            document,
            mount,
            containers: HashMap::new(),
            children: HashMap::new(),
            top_level: Vec::new(),
            leaves: HashMap::new(),
        }
    }

    pub fn mount(&self) -> &Element {
        &self.mount
    }

    fn create(&self, tag: &str, what: &'static str) -> Result<Element, RenderError> {
        self.document
            .create_element(tag)
            .map_err(|e| RenderError::Create {
                what,
                message: js_message(&e),
            })
    }

    fn container(&self, id: ContainerId) -> Result<&HtmlElement, RenderError> {
        self.containers
            .get(&id)
            .ok_or(RenderError::UnknownContainer(id))
    }

    fn set_children_visible(&self, id: ContainerId, visible: bool) {
        let (transform, height) = if visible {
            ("scaleY(1)", EXPANDED_HEIGHT)
        } else {
            ("scaleY(0)", "0px")
        };
        for child in self.children.get(&id).into_iter().flatten() {
            if let Some(list) = self.containers.get(child) {
                let style = list.style();
                let result = style
                    .set_property("transform", transform)
                    .and_then(|_| style.set_property("max-height", height));
                if let Err(e) = result {
                    log::warn!("Could not style {}: {}", child, js_message(&e));
                }
            }
        }
    }

    fn set_active(&self, index: usize, active: bool) {
        let Some(leaf) = self.leaves.get(&index) else {
            log::warn!("No panel leaf for heading {}", index);
            return;
        };
        let classes = leaf.class_list();
        let result = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Could not update leaf {}: {}", index, js_message(&e));
        }
    }
}

/// Adds a click listener that stops propagation, so a leaf click does not also
/// count as a click on the lists around it.
fn listen_click(target: EventTarget, handler: Box<dyn FnMut()>) -> Result<Binding, RenderError> {
    let mut handler = handler;
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.stop_propagation();
        handler();
    });
    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|e| RenderError::Bind {
            event: "click",
            message: js_message(&e),
        })?;

    Ok(Binding::new(move || {
        let _ = target.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }))
}

impl PanelRenderer for DomRenderer {
    fn create_container(
        &mut self,
        id: ContainerId,
        parent: Option<ContainerId>,
    ) -> Result<(), RenderError> {
        let list = self
            .create("ul", "container")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| RenderError::Create {
                what: "container",
                message: "not an HTML element".to_string(),
            })?;
        list.set_attribute("data-toc-container", &id.get().to_string())
            .map_err(|e| RenderError::Create {
                what: "container",
                message: js_message(&e),
            })?;

        let appended = match parent {
            Some(parent) => self.container(parent)?.append_child(&list),
            None => self.mount.append_child(&list),
        };
        appended.map_err(|e| RenderError::Create {
            what: "container",
            message: js_message(&e),
        })?;

        match parent {
            Some(parent) => self.children.entry(parent).or_default().push(id),
            None => self.top_level.push(id),
        }
        self.containers.insert(id, list);
        Ok(())
    }

    fn create_leaf(
        &mut self,
        container: ContainerId,
        index: usize,
        label: &str,
    ) -> Result<(), RenderError> {
        let to_error = |e: JsValue| RenderError::Create {
            what: "leaf",
            message: js_message(&e),
        };
        let item = self.create("li", "leaf")?;
        item.set_attribute("style", "cursor: pointer;").map_err(to_error)?;
        let anchor = self.create("a", "leaf")?;
        anchor
            .set_attribute("data-toc-index", &index.to_string())
            .map_err(to_error)?;
        anchor.set_text_content(Some(label));
        item.append_child(&anchor).map_err(to_error)?;

        let list = self.container(container)?;
        list.insert_before(&item, list.first_child().as_ref())
            .map_err(to_error)?;
        self.leaves.insert(index, item);
        Ok(())
    }

    fn on_leaf_click(
        &mut self,
        index: usize,
        handler: Box<dyn FnMut()>,
    ) -> Result<Binding, RenderError> {
        let leaf = self
            .leaves
            .get(&index)
            .ok_or(RenderError::UnknownLeaf(index))?;
        listen_click(leaf.clone().into(), handler)
    }

    fn on_container_click(
        &mut self,
        id: ContainerId,
        handler: Box<dyn FnMut()>,
    ) -> Result<Binding, RenderError> {
        let list = self.container(id)?;
        listen_click(list.clone().into(), handler)
    }

    fn apply(&mut self, command: PanelCommand) {
        match command {
            PanelCommand::Expand(id) => self.set_children_visible(id, true),
            PanelCommand::Collapse(id) => self.set_children_visible(id, false),
            PanelCommand::Highlight(index) => self.set_active(index, true),
            PanelCommand::Unhighlight(index) => self.set_active(index, false),
        }
    }

    fn clear(&mut self) {
        for id in self.top_level.drain(..) {
            if let Some(list) = self.containers.get(&id) {
                list.remove();
            }
        }
        self.containers.clear();
        self.children.clear();
        self.leaves.clear();
    }
}
