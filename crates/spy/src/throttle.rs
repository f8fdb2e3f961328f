//! Leading-edge throttle over a [`TimerScheduler`].
//!
//! The first trigger runs the action immediately. After that, a trigger
//! schedules one deferred run `interval` later unless one is already pending,
//! in which case it is dropped. Triggers carry no payload: the action reads
//! whatever live state it needs when it finally runs.

use generatoc_traits::{TimerId, TimerScheduler};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
struct ThrottleState {
    fired_once: bool,
    pending: Option<TimerId>,
}

struct ThrottleInner {
    scheduler: Rc<dyn TimerScheduler>,
    interval: Duration,
    action: Box<dyn Fn()>,
    state: RefCell<ThrottleState>,
}

/// A cloneable handle; clones share the same pending timer.
#[derive(Clone)]
pub struct Throttle {
    inner: Rc<ThrottleInner>,
}

impl Throttle {
    pub fn new(
        scheduler: Rc<dyn TimerScheduler>,
        interval: Duration,
        action: impl Fn() + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(ThrottleInner {
                scheduler,
                interval,
                action: Box::new(action),
                state: RefCell::new(ThrottleState::default()),
            }),
        }
    }

    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    pub fn trigger(&self) {
        let first = {
            let mut state = self.inner.state.borrow_mut();
            if state.pending.is_some() {
                return;
            }
            !std::mem::replace(&mut state.fired_once, true)
        };
        if first {
            (self.inner.action)();
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let scheduled = self.inner.scheduler.set_timeout(
            self.inner.interval,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.state.borrow_mut().pending = None;
                    (inner.action)();
                }
            }),
        );
        match scheduled {
            Some(id) => self.inner.state.borrow_mut().pending = Some(id),
            None => {
                log::warn!("Timer refused; running throttled action now");
                (self.inner.action)();
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.state.borrow().pending.is_some()
    }

    /// Cancels the pending run, if any. The action will not run for it.
    pub fn cancel(&self) {
        let pending = self.inner.state.borrow_mut().pending.take();
        if let Some(id) = pending {
            log::trace!("Cancelling pending throttle timer {:?}", id);
            self.inner.scheduler.clear_timeout(id);
        }
    }
}

impl fmt::Debug for Throttle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Throttle")
            .field("interval", &self.inner.interval)
            .field("fired_once", &state.fired_once)
            .field("pending", &state.pending)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generatoc_traits::ManualScheduler;
    use std::cell::Cell;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn counting(scheduler: &Rc<ManualScheduler>) -> (Throttle, Rc<RefCell<Vec<Duration>>>) {
        let runs = Rc::new(RefCell::new(Vec::new()));
        let r = runs.clone();
        let clock = scheduler.clone();
        let throttle = Throttle::new(scheduler.clone(), ms(500), move || {
            r.borrow_mut().push(clock.now())
        });
        (throttle, runs)
    }

    #[test]
    fn test_first_trigger_runs_immediately() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (throttle, runs) = counting(&scheduler);

        throttle.trigger();
        assert_eq!(*runs.borrow(), vec![ms(0)]);
        assert!(!throttle.is_pending());
    }

    #[test]
    fn test_rapid_triggers_coalesce_to_two_runs() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (throttle, runs) = counting(&scheduler);

        throttle.trigger();
        scheduler.advance_to(ms(10));
        throttle.trigger();
        scheduler.advance_to(ms(20));
        throttle.trigger();
        assert!(throttle.is_pending());
        assert_eq!(scheduler.pending_timers(), 1);

        scheduler.advance_to(ms(2000));
        assert_eq!(*runs.borrow(), vec![ms(0), ms(510)]);
        assert!(!throttle.is_pending());
    }

    #[test]
    fn test_trigger_after_deferred_run_schedules_again() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (throttle, runs) = counting(&scheduler);

        throttle.trigger();
        throttle.trigger();
        scheduler.advance_to(ms(600));
        throttle.trigger();
        scheduler.advance_to(ms(1200));
        assert_eq!(*runs.borrow(), vec![ms(0), ms(500), ms(1100)]);
    }

    #[test]
    fn test_cancel_prevents_pending_run() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (throttle, runs) = counting(&scheduler);

        throttle.trigger();
        throttle.trigger();
        throttle.cancel();
        assert_eq!(scheduler.pending_timers(), 0);

        scheduler.advance_to(ms(1000));
        assert_eq!(runs.borrow().len(), 1);
    }

    #[test]
    fn test_dropped_throttle_does_not_run() {
        let scheduler = Rc::new(ManualScheduler::new());
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let throttle = Throttle::new(scheduler.clone(), ms(100), move || c.set(c.get() + 1));

        throttle.trigger();
        throttle.trigger();
        drop(throttle);

        scheduler.advance_to(ms(500));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_clones_share_pending_timer() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (throttle, runs) = counting(&scheduler);
        let other = throttle.clone();

        throttle.trigger();
        other.trigger();
        throttle.trigger();
        assert_eq!(scheduler.pending_timers(), 1);
        scheduler.advance_to(ms(500));
        assert_eq!(runs.borrow().len(), 2);
    }

    struct RefusingScheduler;

    impl TimerScheduler for RefusingScheduler {
        fn set_timeout(&self, _delay: Duration, _callback: Box<dyn FnOnce()>) -> Option<TimerId> {
            None
        }

        fn clear_timeout(&self, _id: TimerId) {}
    }

    #[test]
    fn test_refused_timer_runs_action_and_stays_idle() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let throttle = Throttle::new(Rc::new(RefusingScheduler), ms(100), move || {
            c.set(c.get() + 1)
        });

        throttle.trigger();
        throttle.trigger();
        assert!(!throttle.is_pending());
        throttle.trigger();
        assert_eq!(count.get(), 3);
    }
}
