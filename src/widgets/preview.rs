use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::scheduler::{task_slot, Scheduler, TaskSlot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationTiming {
    pub interval_ms: u32,
    pub cooldown_ms: u32,
}

impl Default for RotationTiming {
    fn default() -> Self {
        Self {
            interval_ms: 5_000,
            cooldown_ms: 10_000,
        }
    }
}

/// Index and suspension flags of the preview showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRotation {
    len: usize,
    index: usize,
    hovered: bool,
    hidden: bool,
    cooling_down: bool,
}

impl PreviewRotation {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            hovered: false,
            hidden: false,
            cooling_down: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn tick(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Jump to `index`. Out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    pub fn is_suspended(&self) -> bool {
        self.hovered || self.hidden || self.cooling_down
    }
}

/// Drives a [`PreviewRotation`] from a scheduler.
///
/// The rotation ticks while nothing suspends it: a manual selection suspends
/// it for the cooldown, hovering or touching suspends it until release, and
/// a hidden page suspends it until visible again. Resuming restarts the
/// interval, so the first automatic advance comes one full interval later.
pub struct PreviewRotator<S: Scheduler> {
    scheduler: S,
    timing: RotationTiming,
    state: Rc<RefCell<PreviewRotation>>,
    ticker: TaskSlot<S::Task>,
    cooldown: TaskSlot<S::Task>,
    on_change: Rc<dyn Fn(usize)>,
}

impl<S: Scheduler> Clone for PreviewRotator<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            timing: self.timing,
            state: self.state.clone(),
            ticker: self.ticker.clone(),
            cooldown: self.cooldown.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<S: Scheduler> PreviewRotator<S> {
    pub fn new(
        scheduler: S,
        timing: RotationTiming,
        len: usize,
        on_change: impl Fn(usize) + 'static,
    ) -> Self {
        Self {
            scheduler,
            timing,
            state: Rc::new(RefCell::new(PreviewRotation::new(len))),
            ticker: task_slot(),
            cooldown: task_slot(),
            on_change: Rc::new(on_change),
        }
    }

    pub fn index(&self) -> usize {
        self.state.borrow().index()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.borrow().is_some()
    }

    pub fn start(&self) {
        self.sync();
    }

    /// Cancel every timer. The rotator can be restarted with [`start`](Self::start).
    pub fn stop(&self) {
        self.ticker.borrow_mut().take();
        self.cooldown.borrow_mut().take();
        self.state.borrow_mut().cooling_down = false;
    }

    pub fn select(&self, index: usize) {
        if !self.state.borrow_mut().select(index) {
            return;
        }
        (self.on_change)(index);
        self.state.borrow_mut().cooling_down = true;
        let task = self.scheduler.once(self.timing.cooldown_ms, {
            let rotator = self.clone();
            Box::new(move || {
                rotator.state.borrow_mut().cooling_down = false;
                rotator.sync();
            })
        });
        *self.cooldown.borrow_mut() = Some(task);
        self.sync();
    }

    pub fn set_hovered(&self, hovered: bool) {
        self.state.borrow_mut().hovered = hovered;
        self.sync();
    }

    pub fn set_visible(&self, visible: bool) {
        self.state.borrow_mut().hidden = !visible;
        self.sync();
    }

    fn sync(&self) {
        let suspended = self.state.borrow().is_suspended();
        let running = self.is_running();
        if suspended && running {
            self.ticker.borrow_mut().take();
        } else if !suspended && !running && self.state.borrow().len() > 1 {
            let task = self.scheduler.repeat(self.timing.interval_ms, {
                let state = self.state.clone();
                let on_change = self.on_change.clone();
                Box::new(move || {
                    let index = state.borrow_mut().tick();
                    on_change(index);
                })
            });
            *self.ticker.borrow_mut() = Some(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scheduler::ManualScheduler;

    fn rotator(len: usize) -> (ManualScheduler, PreviewRotator<ManualScheduler>, Rc<RefCell<Vec<usize>>>) {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let rotator = PreviewRotator::new(scheduler.clone(), RotationTiming::default(), len, {
            let seen = seen.clone();
            move |index| seen.borrow_mut().push(index)
        });
        (scheduler, rotator, seen)
    }

    #[test]
    fn tick_wraps_and_stays_in_range() {
        let mut rotation = PreviewRotation::new(3);
        let indices: Vec<usize> = (0..7).map(|_| rotation.tick()).collect();
        assert_eq!(indices, vec![1, 2, 0, 1, 2, 0, 1]);
        assert!(!rotation.select(3));
        assert_eq!(rotation.index(), 1);
    }

    #[test]
    fn empty_rotation_never_moves() {
        let mut rotation = PreviewRotation::new(0);
        assert_eq!(rotation.tick(), 0);
        assert!(!rotation.select(0));
    }

    #[test]
    fn auto_advances_every_interval() {
        let (scheduler, rotator, seen) = rotator(4);
        rotator.start();
        scheduler.advance(4_999);
        assert_eq!(rotator.index(), 0);
        scheduler.advance(1);
        assert_eq!(rotator.index(), 1);
        scheduler.advance(15_000);
        assert_eq!(*seen.borrow(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn manual_selection_suspends_for_exactly_the_cooldown() {
        let (scheduler, rotator, seen) = rotator(4);
        rotator.start();
        scheduler.advance(2_000);
        rotator.select(3);
        assert_eq!(rotator.index(), 3);
        assert!(!rotator.is_running());

        scheduler.advance(9_999);
        assert!(!rotator.is_running());
        assert_eq!(rotator.index(), 3);

        scheduler.advance(1);
        assert!(rotator.is_running());

        scheduler.advance(5_000);
        assert_eq!(rotator.index(), 0);
        assert_eq!(*seen.borrow(), vec![3, 0]);
    }

    #[test]
    fn reselecting_restarts_the_cooldown() {
        let (scheduler, rotator, _) = rotator(4);
        rotator.start();
        rotator.select(1);
        scheduler.advance(8_000);
        rotator.select(2);
        scheduler.advance(8_000);
        assert!(!rotator.is_running());
        scheduler.advance(2_000);
        assert!(rotator.is_running());
    }

    #[test]
    fn hover_and_visibility_suspend_until_released() {
        let (scheduler, rotator, _) = rotator(3);
        rotator.start();
        rotator.set_hovered(true);
        scheduler.advance(20_000);
        assert_eq!(rotator.index(), 0);

        rotator.set_hovered(false);
        rotator.set_visible(false);
        scheduler.advance(20_000);
        assert_eq!(rotator.index(), 0);

        rotator.set_visible(true);
        scheduler.advance(5_000);
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn cooldown_expiry_does_not_override_hover() {
        let (scheduler, rotator, _) = rotator(3);
        rotator.start();
        rotator.select(2);
        rotator.set_hovered(true);
        scheduler.advance(30_000);
        assert!(!rotator.is_running());
        assert_eq!(rotator.index(), 2);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let (scheduler, rotator, seen) = rotator(2);
        rotator.start();
        rotator.select(5);
        assert!(rotator.is_running());
        scheduler.advance(5_000);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn stop_cancels_everything() {
        let (scheduler, rotator, _) = rotator(3);
        rotator.start();
        rotator.select(1);
        rotator.stop();
        scheduler.advance(60_000);
        assert_eq!(rotator.index(), 1);
        assert_eq!(scheduler.pending(), 0);
    }
}
