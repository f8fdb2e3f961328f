//! WebAssembly bindings for generatoc.
//!
//! Renders a table of contents for the headings of a page and keeps it in step
//! with scrolling, in the browser.
//!
//! ## Module Structure
//!
//! - [`host`] - `DomHost`: the window and document as a generatoc host
//! - [`heading`] - heading elements and their scroll anchors
//! - [`renderer`] - nested-list panel renderer
//! - [`session`] - the `Generatoc` JavaScript class
//! - [`error`] - error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { Generatoc } from '@generatoc/wasm';
//!
//! await init();
//!
//! const toc = new Generatoc({ content: '#article', selector: '#toc' });
//! ```
//!
//! # Styling
//!
//! The active leaf gets the `active` class. Collapsed lists are hidden with an
//! inline `transform: scaleY(0); max-height: 0px`, so a transition on those
//! properties animates expanding and collapsing.

pub mod error;
pub mod heading;
pub mod host;
pub mod renderer;
pub mod session;

pub use error::{ErrorCode, GeneratocError};
pub use heading::DomHeading;
pub use host::DomHost;
pub use renderer::DomRenderer;
pub use session::Generatoc;

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the generatoc-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
