//! Deferred callbacks: timers and animation frames.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Handle of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Handle of a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Runs a callback once after a delay.
pub trait TimerScheduler {
    /// Returns `None` when the timer could not be scheduled; the callback is then dropped.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimerId>;

    /// Cancels a pending timer. Unknown or already fired ids are ignored.
    fn clear_timeout(&self, id: TimerId);
}

/// Runs a callback at the next animation-frame boundary.
pub trait FrameScheduler {
    /// Returns `None` when the frame could not be requested; the callback is then dropped.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId>;

    /// Cancels a pending frame callback. Unknown or already run ids are ignored.
    fn cancel_frame(&self, id: FrameId);
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<(Duration, u64), Box<dyn FnOnce()>>,
    frames: Vec<(u64, Box<dyn FnOnce()>)>,
}

/// A scheduler whose clock only moves when told to.
///
/// Timers fire in due order during [`advance`](Self::advance) /
/// [`advance_to`](Self::advance_to); frames run on [`run_frames`](Self::run_frames).
/// Callbacks may schedule further work while running.
///
/// # Example
///
/// ```
/// use generatoc_traits::{ManualScheduler, TimerScheduler};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let f = fired.clone();
/// scheduler.set_timeout(Duration::from_millis(10), Box::new(move || f.set(true)));
///
/// scheduler.advance(Duration::from_millis(9));
/// assert!(!fired.get());
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Moves the clock forward by `by`, firing every timer that becomes due.
    ///
    /// Returns the number of timers fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        self.advance_to(target)
    }

    /// Moves the clock to `target`, firing every timer due at or before it.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .first_key_value()
                    .map(|(key, _)| *key)
                    .filter(|(due, _)| *due <= target);
                match due {
                    Some(key) => {
                        state.now = state.now.max(key.0);
                        state.timers.remove(&key)
                    }
                    None => None,
                }
            };
            match next {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }
        let mut state = self.state.borrow_mut();
        state.now = state.now.max(target);
        fired
    }

    /// Runs the frame callbacks queued so far.
    ///
    /// Frames requested while running are left for the next call.
    pub fn run_frames(&self) -> usize {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        let count = frames.len();
        for (_, callback) in frames {
            callback();
        }
        count
    }

    fn next_id(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_id
    }
}

impl TimerScheduler for ManualScheduler {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
        let id = self.next_id();
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        state.timers.insert((due, id), callback);
        Some(TimerId(id))
    }

    fn clear_timeout(&self, id: TimerId) {
        self.state
            .borrow_mut()
            .timers
            .retain(|(_, timer), _| *timer != id.0);
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId> {
        let id = self.next_id();
        self.state.borrow_mut().frames.push((id, callback));
        Some(FrameId(id))
    }

    fn cancel_frame(&self, id: FrameId) {
        self.state
            .borrow_mut()
            .frames
            .retain(|(frame, _)| *frame != id.0);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending_timers", &state.timers.len())
            .field("pending_frames", &state.frames.len())
            .finish()
    }
}
