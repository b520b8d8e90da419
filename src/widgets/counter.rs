use std::collections::HashSet;
use std::rc::Rc;

use crate::utils::scheduler::{task_slot, Scheduler, TaskSlot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTiming {
    pub steps: u32,
    pub step_ms: u32,
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            steps: 50,
            step_ms: 30,
        }
    }
}

/// Suffix shown after a finished counter. Only the literal `99` is a
/// percentage on this page.
pub fn counter_suffix(declared: &str) -> &'static str {
    if declared == "99" {
        "%"
    } else {
        "+"
    }
}

/// Leading-digit parse of a `data-count` attribute. `None` when it has no
/// leading digits.
pub fn parse_count(declared: &str) -> Option<u64> {
    let digits: String = declared
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    increment: f64,
    suffix: &'static str,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(declared: &str, timing: CounterTiming) -> Option<Self> {
        let target = parse_count(declared)?;
        Some(Self {
            target,
            current: 0.0,
            increment: target as f64 / f64::from(timing.steps.max(1)),
            suffix: counter_suffix(declared),
            finished: false,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one step and return the text to display.
    pub fn step(&mut self) -> String {
        if self.finished {
            return self.final_text();
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            self.final_text()
        } else {
            (self.current.floor() as u64).to_string()
        }
    }

    fn final_text(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }
}

/// Start a counter on `scheduler`. Returns the slot holding the running
/// task; it empties itself when the counter finishes. Returns `None` for an
/// unparseable `declared` value.
pub fn run_counter<S: Scheduler>(
    scheduler: &S,
    timing: CounterTiming,
    declared: &str,
    on_frame: impl Fn(String) + 'static,
) -> Option<TaskSlot<S::Task>> {
    let mut animation = CounterAnimation::new(declared, timing)?;
    let slot = task_slot();
    let task = scheduler.repeat(timing.step_ms, {
        let slot = slot.clone();
        Box::new(move || {
            on_frame(animation.step());
            if animation.is_finished() {
                slot.borrow_mut().take();
            }
        })
    });
    *slot.borrow_mut() = Some(task);
    Some(slot)
}

/// Remembers which counter elements have already fired.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    fired: HashSet<Rc<str>>,
}

impl CounterRegistry {
    /// True the first time `id` is seen.
    pub fn claim(&mut self, id: &str) -> bool {
        if self.fired.contains(id) {
            return false;
        }
        self.fired.insert(Rc::from(id));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scheduler::ManualScheduler;
    use std::cell::RefCell;

    fn drain(declared: &str) -> Vec<String> {
        let mut animation = CounterAnimation::new(declared, CounterTiming::default()).unwrap();
        let mut frames = Vec::new();
        while !animation.is_finished() {
            frames.push(animation.step());
        }
        frames
    }

    #[test]
    fn suffix_is_percent_only_for_ninety_nine() {
        assert_eq!(counter_suffix("99"), "%");
        assert_eq!(counter_suffix("100"), "+");
        assert_eq!(counter_suffix("500"), "+");
        assert_eq!(counter_suffix("098"), "+");
    }

    #[test]
    fn counts_up_monotonically_and_snaps_to_target() {
        for declared in ["99", "500", "7", "1", "2500"] {
            let frames = drain(declared);
            let target = parse_count(declared).unwrap();
            let (last, body) = frames.split_last().unwrap();
            assert_eq!(*last, format!("{}{}", target, counter_suffix(declared)));

            let values: Vec<u64> = body.iter().map(|f| f.parse().unwrap()).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{declared}: {values:?}");
            assert!(values.iter().all(|v| *v < target));
        }
    }

    #[test]
    fn finishes_within_the_configured_step_count() {
        let frames = drain("500");
        assert!(frames.len() <= 51);
        assert!(frames.len() >= 50);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert_eq!(drain("0"), vec!["0+".to_string()]);
    }

    #[test]
    fn parse_count_reads_leading_digits() {
        assert_eq!(parse_count("250"), Some(250));
        assert_eq!(parse_count(" 12abc"), Some(12));
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn run_counter_drives_frames_and_stops() {
        let scheduler = ManualScheduler::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let slot = run_counter(&scheduler, CounterTiming::default(), "99", {
            let frames = frames.clone();
            move |text| frames.borrow_mut().push(text)
        })
        .unwrap();

        scheduler.advance(30);
        assert_eq!(frames.borrow().len(), 1);

        scheduler.advance(30 * 60);
        assert_eq!(frames.borrow().last().unwrap(), "99%");
        assert!(slot.borrow().is_none());
        assert_eq!(scheduler.pending(), 0);

        let count = frames.borrow().len();
        scheduler.advance(1_000);
        assert_eq!(frames.borrow().len(), count);
    }

    #[test]
    fn unparseable_count_does_not_start() {
        let scheduler = ManualScheduler::new();
        assert!(run_counter(&scheduler, CounterTiming::default(), "n/a", |_| {}).is_none());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn registry_fires_once_per_element() {
        let mut registry = CounterRegistry::default();
        assert!(registry.claim("stat-bots"));
        assert!(!registry.claim("stat-bots"));
        assert!(registry.claim("stat-users"));
    }
}
