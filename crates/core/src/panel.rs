//! A live panel: the outline, its rendered tree and the scroll-spy wiring
//! between host and renderer.
//!
//! Data flow on scroll:
//!
//! ```text
//! scroll event -> Throttle -> animation frame -> resolve_active
//!              -> ExpandState::activate -> PanelRenderer::apply -> fragment sync
//! ```
//!
//! Every callback handed to the host holds a weak reference to the panel, so
//! nothing runs once the panel is gone.

use crate::config::TocConfig;
use crate::error::TocError;
use generatoc_outline::{Outline, PanelTree, build, materialize};
use generatoc_spy::{ExpandState, Throttle, resolve_active};
use generatoc_traits::{Binding, FrameId, HeadingMarker, Host, PanelRenderer, RenderError};
use generatoc_types::{ContainerId, HeadingRecord, PanelCommand, parse_level};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Converts located markers into heading records, numbering them in document order.
pub fn heading_records<M: HeadingMarker>(markers: &[M]) -> Result<Vec<HeadingRecord>, TocError> {
    markers
        .iter()
        .enumerate()
        .map(|(index, marker)| {
            let level = parse_level(&marker.tag())?;
            Ok(HeadingRecord::new(index, level, marker.label()))
        })
        .collect()
}

struct Shared<H: Host> {
    host: Rc<H>,
    config: TocConfig,
    markers: Vec<H::Marker>,
    records: Vec<HeadingRecord>,
    outline: Outline,
    tree: PanelTree,
    renderer: RefCell<H::Renderer>,
    state: RefCell<ExpandState>,
    pending_frame: Cell<Option<FrameId>>,
}

impl<H: Host> Shared<H> {
    fn apply(&self, commands: Vec<PanelCommand>) {
        let mut renderer = self.renderer.borrow_mut();
        for command in commands {
            renderer.apply(command);
        }
    }

    /// Defers one resolution to the next frame. A frame already pending covers it.
    fn request_sync(self: &Rc<Self>) {
        if self.pending_frame.get().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let requested = self.host.request_frame(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.pending_frame.set(None);
                shared.sync();
            }
        }));
        match requested {
            Some(id) => self.pending_frame.set(Some(id)),
            None => {
                log::warn!("Animation frame refused; resolving now");
                self.sync();
            }
        }
    }

    fn sync(&self) -> Option<usize> {
        let offset = self.host.scroll_offset();
        let index = resolve_active(offset, &self.markers)?;
        log::trace!("Scroll offset {} resolves to heading {}", offset, index);

        let commands = self.state.borrow_mut().activate(&self.tree, index);
        self.apply(commands);
        if self.config.scroll_history {
            self.sync_fragment(index);
        }
        Some(index)
    }

    fn sync_fragment(&self, index: usize) {
        let Some(record) = self.records.get(index) else {
            return;
        };
        if record.label.is_empty() {
            return;
        }
        if self.host.fragment().as_deref() == Some(record.label.as_str()) {
            return;
        }
        if let Err(e) = self.host.replace_fragment(&record.label) {
            log::warn!("Could not update the URL fragment: {}", e);
        }
    }

    fn navigate(&self, index: usize) {
        match self.markers.get(index) {
            Some(marker) => self.host.scroll_to(marker),
            None => log::warn!("No heading {} to scroll to", index),
        }
    }

    fn reveal(&self, id: ContainerId) {
        let commands = self.state.borrow_mut().reveal(&self.tree, id);
        self.apply(commands);
    }
}

/// Creates containers and leaves top-down.
fn render<R: PanelRenderer>(renderer: &mut R, tree: &PanelTree) -> Result<(), RenderError> {
    tree.try_for_each(|entry, parent| {
        renderer.create_container(entry.id, parent)?;
        if let Some(leaf) = &entry.leaf {
            renderer.create_leaf(entry.id, leaf.index, &leaf.label)?;
        }
        Ok(())
    })
}

/// A rendered, interactive panel bound to a host.
///
/// Dropping the panel tears it down: listeners are released, pending timers
/// and frames are cancelled, and the renderer is cleared.
pub struct Panel<H: Host> {
    shared: Rc<Shared<H>>,
    throttle: Throttle,
    bindings: Vec<Binding>,
    released: bool,
}

impl<H: Host> Panel<H> {
    /// Locates the headings, builds the outline and renders it into the mount point.
    ///
    /// Nothing is left behind on failure: a partially drawn panel is cleared.
    pub fn build(host: Rc<H>, config: TocConfig) -> Result<Self, TocError> {
        let markers = host
            .find_headings(&config.content, &config.heading)
            .ok_or_else(|| TocError::ContentNotFound(config.content.clone()))?;
        let records = heading_records(&markers)?;
        if records.is_empty() {
            return Err(TocError::NoHeadings {
                content: config.content.clone(),
                levels: config.heading.clone(),
            });
        }

        let outline = build(&records);
        let tree = materialize(&outline);

        let mut renderer = host
            .mount(&config.selector)
            .ok_or_else(|| TocError::ContainerNotFound(config.selector.clone()))?;
        if let Err(e) = render(&mut renderer, &tree) {
            renderer.clear();
            return Err(e.into());
        }
        for command in ExpandState::initial_commands(&tree) {
            renderer.apply(command);
        }

        let interval = config.throttle_interval();
        let shared = Rc::new(Shared {
            host: host.clone(),
            config,
            markers,
            records,
            outline,
            tree,
            renderer: RefCell::new(renderer),
            state: RefCell::new(ExpandState::new()),
            pending_frame: Cell::new(None),
        });

        let weak = Rc::downgrade(&shared);
        let throttle = Throttle::new(host, interval, move || {
            if let Some(shared) = weak.upgrade() {
                shared.request_sync();
            }
        });

        let mut panel = Panel {
            shared,
            throttle,
            bindings: Vec::new(),
            released: false,
        };
        if let Err(e) = panel.bind() {
            panel.release();
            return Err(e);
        }

        log::debug!(
            "Built panel in '{}': {} headings, {} containers",
            panel.shared.config.selector,
            panel.shared.records.len(),
            panel.shared.tree.container_count()
        );
        Ok(panel)
    }

    fn bind(&mut self) -> Result<(), TocError> {
        let shared = &self.shared;
        let mut renderer = shared.renderer.borrow_mut();

        for leaf in shared.tree.leaves() {
            let index = leaf.index;
            let weak = Rc::downgrade(shared);
            let binding = renderer.on_leaf_click(
                index,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.navigate(index);
                    }
                }),
            )?;
            self.bindings.push(binding);
        }

        for id in shared.tree.container_ids() {
            let weak = Rc::downgrade(shared);
            let binding = renderer.on_container_click(
                id,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.reveal(id);
                    }
                }),
            )?;
            self.bindings.push(binding);
        }
        drop(renderer);

        let throttle = self.throttle.clone();
        let scroll = shared
            .host
            .listen_scroll(Box::new(move || throttle.trigger()))?;
        self.bindings.push(scroll);
        Ok(())
    }

    fn release(&mut self) {
        if std::mem::replace(&mut self.released, true) {
            return;
        }
        for binding in self.bindings.drain(..) {
            binding.release();
        }
        self.throttle.cancel();
        if let Some(id) = self.shared.pending_frame.take() {
            self.shared.host.cancel_frame(id);
        }
        self.shared.renderer.borrow_mut().clear();
        log::debug!("Tore down panel in '{}'", self.shared.config.selector);
    }

    /// Removes the panel and releases everything it holds.
    pub fn teardown(mut self) {
        self.release();
    }

    /// Tears the panel down and builds a fresh one from the same host and configuration.
    pub fn rebuild(self) -> Result<Self, TocError> {
        let host = self.shared.host.clone();
        let config = self.shared.config.clone();
        self.teardown();
        Self::build(host, config)
    }

    /// Resolves the active heading immediately, bypassing throttle and frame.
    pub fn sync(&self) -> Option<usize> {
        self.shared.sync()
    }

    /// Scrolls heading `index` into view, as a click on its leaf does.
    pub fn navigate(&self, index: usize) {
        self.shared.navigate(index);
    }

    /// Opens the panel down to container `id`, as a click on it does.
    pub fn reveal(&self, id: ContainerId) {
        self.shared.reveal(id);
    }

    /// The highlighted heading, if any.
    pub fn active(&self) -> Option<usize> {
        self.shared.state.borrow().highlighted()
    }

    pub fn is_expanded(&self, id: ContainerId) -> bool {
        self.shared.state.borrow().is_expanded(id)
    }

    pub fn config(&self) -> &TocConfig {
        &self.shared.config
    }

    pub fn host(&self) -> &Rc<H> {
        &self.shared.host
    }

    pub fn records(&self) -> &[HeadingRecord] {
        &self.shared.records
    }

    pub fn outline(&self) -> &Outline {
        &self.shared.outline
    }

    pub fn tree(&self) -> &PanelTree {
        &self.shared.tree
    }
}

impl<H: Host> Drop for Panel<H> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<H: Host> fmt::Debug for Panel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("config", &self.shared.config)
            .field("headings", &self.shared.records.len())
            .field("containers", &self.shared.tree.container_count())
            .field("active", &self.active())
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
