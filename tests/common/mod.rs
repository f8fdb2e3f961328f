#![allow(dead_code)]

pub mod fixtures;

use generatoc::traits::{
    AnchorPosition, Binding, FrameId, FrameScheduler, HeadingMarker, Host, HostError,
    ManualScheduler, PanelRenderer, RenderError, TimerId, TimerScheduler,
};
use generatoc::{ContainerId, LevelSet, PanelCommand, parse_level};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A heading in the fake document.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeHeading {
    pub tag: String,
    pub label: String,
    pub offset: f64,
}

impl AnchorPosition for FakeHeading {
    fn anchor_offset(&self) -> f64 {
        self.offset
    }
}

impl HeadingMarker for FakeHeading {
    fn tag(&self) -> String {
        self.tag.clone()
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Everything the fake renderer was asked to do, shared with the test.
#[derive(Default)]
pub struct PanelLog {
    pub containers: Vec<(ContainerId, Option<ContainerId>)>,
    pub leaves: Vec<(ContainerId, usize, String)>,
    pub commands: Vec<PanelCommand>,
    pub leaf_handlers: BTreeMap<usize, Box<dyn FnMut()>>,
    pub container_handlers: BTreeMap<ContainerId, Box<dyn FnMut()>>,
    pub clears: usize,
    /// Makes `create_leaf` fail for this heading index.
    pub fail_leaf: Option<usize>,
}

impl PanelLog {
    pub fn is_drawn(&self) -> bool {
        !self.containers.is_empty()
    }

    pub fn take_commands(&mut self) -> Vec<PanelCommand> {
        std::mem::take(&mut self.commands)
    }
}

pub struct FakeRenderer {
    log: Rc<RefCell<PanelLog>>,
}

impl PanelRenderer for FakeRenderer {
    fn create_container(
        &mut self,
        id: ContainerId,
        parent: Option<ContainerId>,
    ) -> Result<(), RenderError> {
        let mut log = self.log.borrow_mut();
        if let Some(parent) = parent {
            if !log.containers.iter().any(|(c, _)| *c == parent) {
                return Err(RenderError::UnknownContainer(parent));
            }
        }
        log.containers.push((id, parent));
        Ok(())
    }

    fn create_leaf(
        &mut self,
        container: ContainerId,
        index: usize,
        label: &str,
    ) -> Result<(), RenderError> {
        let mut log = self.log.borrow_mut();
        if log.fail_leaf == Some(index) {
            return Err(RenderError::Create {
                what: "leaf",
                message: "injected failure".to_string(),
            });
        }
        log.leaves.push((container, index, label.to_string()));
        Ok(())
    }

    fn on_leaf_click(
        &mut self,
        index: usize,
        handler: Box<dyn FnMut()>,
    ) -> Result<Binding, RenderError> {
        self.log.borrow_mut().leaf_handlers.insert(index, handler);
        let log = self.log.clone();
        Ok(Binding::new(move || {
            log.borrow_mut().leaf_handlers.remove(&index);
        }))
    }

    fn on_container_click(
        &mut self,
        id: ContainerId,
        handler: Box<dyn FnMut()>,
    ) -> Result<Binding, RenderError> {
        self.log.borrow_mut().container_handlers.insert(id, handler);
        let log = self.log.clone();
        Ok(Binding::new(move || {
            log.borrow_mut().container_handlers.remove(&id);
        }))
    }

    fn apply(&mut self, command: PanelCommand) {
        self.log.borrow_mut().commands.push(command);
    }

    fn clear(&mut self) {
        let mut log = self.log.borrow_mut();
        log.containers.clear();
        log.leaves.clear();
        log.clears += 1;
    }
}

type Listeners = Rc<RefCell<BTreeMap<u64, Box<dyn FnMut()>>>>;

/// An in-memory document with a scrollable viewport and a manual clock.
pub struct FakeHost {
    pub scheduler: ManualScheduler,
    /// `None` means the content root is missing.
    pub headings: RefCell<Option<Vec<FakeHeading>>>,
    pub has_mount: Cell<bool>,
    pub panel: Rc<RefCell<PanelLog>>,
    offset: Cell<f64>,
    listeners: Listeners,
    next_listener: Cell<u64>,
    pub scrolled_to: RefCell<Vec<String>>,
    pub fragment: RefCell<Option<String>>,
    pub fragment_writes: Cell<usize>,
    pub fail_history: Cell<bool>,
    /// Makes `request_frame` refuse, as a browser without frames would.
    pub refuse_frames: Cell<bool>,
}

impl FakeHost {
    /// A document with headings given as `(tag, label, anchor offset)`.
    pub fn new(headings: &[(&str, &str, f64)]) -> Rc<Self> {
        let headings = headings
            .iter()
            .map(|&(tag, label, offset)| FakeHeading {
                tag: tag.to_string(),
                label: label.to_string(),
                offset,
            })
            .collect();
        Rc::new(Self {
            scheduler: ManualScheduler::new(),
            headings: RefCell::new(Some(headings)),
            has_mount: Cell::new(true),
            panel: Rc::new(RefCell::new(PanelLog::default())),
            offset: Cell::new(0.0),
            listeners: Rc::new(RefCell::new(BTreeMap::new())),
            next_listener: Cell::new(0),
            scrolled_to: RefCell::new(Vec::new()),
            fragment: RefCell::new(None),
            fragment_writes: Cell::new(0),
            fail_history: Cell::new(false),
            refuse_frames: Cell::new(false),
        })
    }

    /// Moves the viewport and fires the scroll listeners.
    pub fn scroll(&self, offset: f64) {
        self.offset.set(offset);
        let mut taken = std::mem::take(&mut *self.listeners.borrow_mut());
        for listener in taken.values_mut() {
            listener();
        }
        self.listeners.borrow_mut().extend(taken);
    }

    pub fn advance(&self, millis: u64) {
        self.scheduler.advance(Duration::from_millis(millis));
    }

    pub fn run_frames(&self) -> usize {
        self.scheduler.run_frames()
    }

    pub fn scroll_listeners(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn click_leaf(&self, index: usize) -> bool {
        let handler = self.panel.borrow_mut().leaf_handlers.remove(&index);
        let Some(mut handler) = handler else {
            return false;
        };
        handler();
        self.panel.borrow_mut().leaf_handlers.insert(index, handler);
        true
    }

    pub fn click_container(&self, id: usize) -> bool {
        let id = ContainerId::new(id);
        let handler = self.panel.borrow_mut().container_handlers.remove(&id);
        let Some(mut handler) = handler else {
            return false;
        };
        handler();
        self.panel.borrow_mut().container_handlers.insert(id, handler);
        true
    }

    pub fn take_commands(&self) -> Vec<PanelCommand> {
        self.panel.borrow_mut().take_commands()
    }
}

impl TimerScheduler for FakeHost {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
        self.scheduler.set_timeout(delay, callback)
    }

    fn clear_timeout(&self, id: TimerId) {
        self.scheduler.clear_timeout(id);
    }
}

impl FrameScheduler for FakeHost {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId> {
        if self.refuse_frames.get() {
            return None;
        }
        self.scheduler.request_frame(callback)
    }

    fn cancel_frame(&self, id: FrameId) {
        self.scheduler.cancel_frame(id);
    }
}

impl Host for FakeHost {
    type Marker = FakeHeading;
    type Renderer = FakeRenderer;

    fn find_headings(&self, _content: &str, levels: &LevelSet) -> Option<Vec<FakeHeading>> {
        let headings = self.headings.borrow();
        let headings = headings.as_ref()?;
        Some(
            headings
                .iter()
                .filter(|h| parse_level(&h.tag).map_or(true, |level| levels.contains(level)))
                .cloned()
                .collect(),
        )
    }

    fn mount(&self, _selector: &str) -> Option<FakeRenderer> {
        self.has_mount.get().then(|| FakeRenderer {
            log: self.panel.clone(),
        })
    }

    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn listen_scroll(&self, handler: Box<dyn FnMut()>) -> Result<Binding, HostError> {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().insert(id, handler);
        let listeners = self.listeners.clone();
        Ok(Binding::new(move || {
            listeners.borrow_mut().remove(&id);
        }))
    }

    fn scroll_to(&self, marker: &FakeHeading) {
        self.scrolled_to.borrow_mut().push(marker.label.clone());
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.borrow().clone()
    }

    fn replace_fragment(&self, fragment: &str) -> Result<(), HostError> {
        if self.fail_history.get() {
            return Err(HostError::History("blocked".to_string()));
        }
        *self.fragment.borrow_mut() = Some(fragment.to_string());
        self.fragment_writes.set(self.fragment_writes.get() + 1);
        Ok(())
    }
}
