//! Timer abstraction shared by every animated widget.
//!
//! Widgets never call `setTimeout`/`setInterval` directly. They receive a
//! [`Scheduler`] and keep the returned task handle alive for as long as the
//! timer should run; dropping the handle cancels it. In the browser this is
//! backed by `gloo_timers`, in tests by [`ManualScheduler`], a virtual clock
//! advanced explicitly.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler: Clone + 'static {
    type Task: 'static;

    /// Run `callback` every `period_ms` until the task is dropped.
    fn repeat(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Task;

    /// Run `callback` once after `delay_ms` unless the task is dropped first.
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Task;
}

/// A slot a timer callback can replace or clear from inside itself.
pub type TaskSlot<T> = Rc<RefCell<Option<T>>>;

pub fn task_slot<T>() -> TaskSlot<T> {
    Rc::new(RefCell::new(None))
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

pub enum BrowserTask {
    Repeating(Interval),
    OneShot(Timeout),
}

impl BrowserTask {
    pub fn cancel(self) {
        match self {
            BrowserTask::Repeating(interval) => drop(interval.cancel()),
            BrowserTask::OneShot(timeout) => drop(timeout.cancel()),
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Task = BrowserTask;

    fn repeat(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> BrowserTask {
        BrowserTask::Repeating(Interval::new(period_ms, callback))
    }

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> BrowserTask {
        BrowserTask::OneShot(Timeout::new(delay_ms, callback))
    }
}

enum ManualCallback {
    Repeating(Box<dyn FnMut()>),
    OneShot(Box<dyn FnOnce()>),
}

struct ManualEntry {
    due: u64,
    period: u64,
    callback: Option<ManualCallback>,
}

#[derive(Default)]
struct ManualClock {
    now: u64,
    next_id: u64,
    entries: BTreeMap<u64, ManualEntry>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Due callbacks fire in `(due time, registration order)` order. Callbacks may
/// schedule or cancel other tasks, including themselves.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

pub struct ManualTask {
    id: u64,
    clock: Weak<RefCell<ManualClock>>,
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        let Some(clock) = self.clock.upgrade() else {
            return;
        };
        let removed = match clock.try_borrow_mut() {
            Ok(mut clock) => clock.entries.remove(&self.id),
            Err(_) => None,
        };
        drop(removed);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Number of live tasks, fired one-shots excluded.
    pub fn pending(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    pub fn advance(&self, millis: u64) {
        let target = self.clock.borrow().now + millis;
        loop {
            let next = {
                let clock = self.clock.borrow();
                clock
                    .entries
                    .iter()
                    .filter(|(_, entry)| entry.due <= target && entry.callback.is_some())
                    .min_by_key(|(id, entry)| (entry.due, **id))
                    .map(|(id, entry)| (*id, entry.due))
            };
            let Some((id, due)) = next else {
                break;
            };

            let callback = {
                let mut clock = self.clock.borrow_mut();
                clock.now = due;
                clock.entries.get_mut(&id).and_then(|entry| entry.callback.take())
            };

            match callback {
                Some(ManualCallback::Repeating(mut callback)) => {
                    callback();
                    let mut clock = self.clock.borrow_mut();
                    if let Some(entry) = clock.entries.get_mut(&id) {
                        entry.due += entry.period;
                        entry.callback = Some(ManualCallback::Repeating(callback));
                    }
                }
                Some(ManualCallback::OneShot(callback)) => {
                    let removed = self.clock.borrow_mut().entries.remove(&id);
                    drop(removed);
                    callback();
                }
                None => {}
            }
        }
        self.clock.borrow_mut().now = target;
    }

    fn insert(&self, delay: u64, period: u64, callback: ManualCallback) -> ManualTask {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.entries.insert(
            id,
            ManualEntry {
                due,
                period,
                callback: Some(callback),
            },
        );
        ManualTask {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl Scheduler for ManualScheduler {
    type Task = ManualTask;

    fn repeat(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualTask {
        let period = u64::from(period_ms.max(1));
        self.insert(period, period, ManualCallback::Repeating(callback))
    }

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualTask {
        self.insert(u64::from(delay_ms), 0, ManualCallback::OneShot(callback))
    }
}
