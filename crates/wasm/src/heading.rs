//! Heading elements located in the page.

use generatoc_traits::{AnchorPosition, HeadingMarker};
use web_sys::Element;

/// A heading element and its scroll anchor.
///
/// The anchor is the first element after the heading (usually the section's
/// first paragraph), or the heading itself when it is the last child.
#[derive(Debug, Clone)]
pub struct DomHeading {
    element: Element,
}

impl DomHeading {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn anchor(&self) -> Element {
        self.element
            .next_element_sibling()
            .unwrap_or_else(|| self.element.clone())
    }
}

impl AnchorPosition for DomHeading {
    fn anchor_offset(&self) -> f64 {
        document_offset(&self.anchor())
    }
}

impl HeadingMarker for DomHeading {
    fn tag(&self) -> String {
        self.element.local_name()
    }

    fn label(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }
}

/// Top of `element` relative to the document. Elements that are not rendered report 0.
pub(crate) fn document_offset(element: &Element) -> f64 {
    if element.get_client_rects().length() == 0 {
        return 0.0;
    }
    let top = element.get_bounding_client_rect().top();
    let Some(window) = web_sys::window() else {
        return top;
    };
    let scroll = window.page_y_offset().unwrap_or(0.0);
    let client_top = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0, |root| root.client_top());
    top + scroll - f64::from(client_top)
}
