//! The JavaScript entry point.

use crate::error::GeneratocError;
use crate::host::DomHost;
use generatoc_core::{TocConfig, TocSession};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// A table of contents bound to the current page.
///
/// # Example
///
/// ```javascript
/// const toc = new Generatoc({ content: '#article', heading: ['h2', 'h3'], scrollHistory: true });
/// // after the article changes
/// toc.refresh();
/// // when leaving the page
/// toc.destroy();
/// ```
///
/// A missing content root or panel element is logged, not thrown: the
/// instance simply stays inactive. Only an invalid options object throws.
#[wasm_bindgen]
pub struct Generatoc {
    session: TocSession<DomHost>,
}

#[wasm_bindgen]
impl Generatoc {
    /// Builds and renders the panel.
    #[wasm_bindgen(constructor)]
    pub fn init(options: JsValue) -> Result<Generatoc, JsValue> {
        let config = parse_options(options)?;
        let host = Rc::new(DomHost::new()?);
        Ok(Self {
            session: TocSession::init(host, config),
        })
    }

    /// Removes the panel and every listener it registered.
    pub fn destroy(&mut self) {
        self.session.destroy();
    }

    /// Rebuilds the panel with the options it was created with.
    pub fn refresh(&mut self) {
        self.session.refresh();
    }

    /// Whether a panel is currently rendered.
    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Index of the highlighted heading, if any.
    #[wasm_bindgen(getter, js_name = activeIndex)]
    pub fn active_index(&self) -> Option<usize> {
        self.session.panel().and_then(|panel| panel.active())
    }

    /// Number of headings in the panel.
    #[wasm_bindgen(getter, js_name = headingCount)]
    pub fn heading_count(&self) -> usize {
        self.session.panel().map_or(0, |panel| panel.records().len())
    }
}

fn parse_options(options: JsValue) -> Result<TocConfig, GeneratocError> {
    if options.is_undefined() || options.is_null() {
        return Ok(TocConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}
