use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::scheduler::{task_slot, Scheduler, TaskSlot};

pub const TERMINAL_COMMANDS: &[&str] = &[
    "status --system",
    "scan --bots",
    "monitor --apps",
    "security --check",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    pub start_delay_ms: u32,
    pub type_ms: u32,
    pub hold_ms: u32,
    pub erase_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            start_delay_ms: 1_000,
            type_ms: 50,
            hold_ms: 2_000,
            erase_ms: 30,
            pause_ms: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Erasing,
}

/// One frame of the terminal: what to show and how long until the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

/// Types and erases a fixed list of commands, cycling forever.
#[derive(Debug, Clone)]
pub struct TypingTerminal {
    commands: Vec<Vec<char>>,
    command_index: usize,
    shown: usize,
    phase: Phase,
    timing: TypingTiming,
}

impl TypingTerminal {
    pub fn new(commands: &[&str], timing: TypingTiming) -> Self {
        Self {
            commands: commands.iter().map(|c| c.chars().collect()).collect(),
            command_index: 0,
            shown: 0,
            phase: Phase::Typing,
            timing,
        }
    }

    pub fn command_index(&self) -> usize {
        self.command_index
    }

    /// Produce the next frame. `None` when there are no commands.
    pub fn advance(&mut self) -> Option<TerminalFrame> {
        let command = self.commands.get(self.command_index)?;
        let next_delay_ms = match self.phase {
            Phase::Typing => {
                if self.shown < command.len() {
                    self.shown += 1;
                    if self.shown == command.len() {
                        self.phase = Phase::Erasing;
                        self.timing.hold_ms
                    } else {
                        self.timing.type_ms
                    }
                } else {
                    self.phase = Phase::Erasing;
                    self.timing.hold_ms
                }
            }
            Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.command_index = (self.command_index + 1) % self.commands.len();
                    self.timing.pause_ms
                } else {
                    self.timing.erase_ms
                }
            }
        };
        Some(TerminalFrame {
            text: command[..self.shown].iter().collect(),
            next_delay_ms,
        })
    }
}

/// Run `terminal` on `scheduler`, starting after the configured start delay.
/// Dropping the returned slot's task (or calling `take` on it) stops the loop.
pub fn run_terminal<S: Scheduler>(
    scheduler: &S,
    terminal: TypingTerminal,
    on_frame: impl Fn(String) + 'static,
) -> TaskSlot<S::Task> {
    let slot = task_slot();
    let start_delay = terminal.timing.start_delay_ms;
    let terminal = Rc::new(RefCell::new(terminal));
    let on_frame: Rc<dyn Fn(String)> = Rc::new(on_frame);
    arm(scheduler.clone(), slot.clone(), terminal, on_frame, start_delay);
    slot
}

fn arm<S: Scheduler>(
    scheduler: S,
    slot: TaskSlot<S::Task>,
    terminal: Rc<RefCell<TypingTerminal>>,
    on_frame: Rc<dyn Fn(String)>,
    delay_ms: u32,
) {
    let task = scheduler.once(delay_ms, {
        let scheduler = scheduler.clone();
        let slot = slot.clone();
        Box::new(move || {
            let frame = terminal.borrow_mut().advance();
            if let Some(frame) = frame {
                on_frame(frame.text);
                arm(scheduler, slot, terminal, on_frame, frame.next_delay_ms);
            }
        })
    });
    *slot.borrow_mut() = Some(task);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scheduler::ManualScheduler;

    #[test]
    fn types_holds_erases_and_moves_on() {
        let timing = TypingTiming::default();
        let mut terminal = TypingTerminal::new(&["ab", "xyz"], timing);

        let frames: Vec<TerminalFrame> = (0..4).filter_map(|_| terminal.advance()).collect();
        let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
        let delays: Vec<u32> = frames.iter().map(|f| f.next_delay_ms).collect();
        assert_eq!(texts, vec!["a", "ab", "a", ""]);
        assert_eq!(delays, vec![50, 2_000, 30, 500]);
        assert_eq!(terminal.command_index(), 1);

        assert_eq!(terminal.advance().unwrap().text, "x");
    }

    #[test]
    fn cycles_back_to_the_first_command() {
        let mut terminal = TypingTerminal::new(&["a"], TypingTiming::default());
        for _ in 0..3 {
            assert_eq!(terminal.advance().unwrap().text, "a");
            assert_eq!(terminal.advance().unwrap().text, "");
            assert_eq!(terminal.command_index(), 0);
        }
    }

    #[test]
    fn empty_command_list_produces_nothing() {
        let mut terminal = TypingTerminal::new(&[], TypingTiming::default());
        assert!(terminal.advance().is_none());
    }

    #[test]
    fn run_terminal_follows_the_timing() {
        let scheduler = ManualScheduler::new();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let slot = run_terminal(
            &scheduler,
            TypingTerminal::new(TERMINAL_COMMANDS, TypingTiming::default()),
            {
                let shown = shown.clone();
                move |text| shown.borrow_mut().push(text)
            },
        );

        scheduler.advance(999);
        assert!(shown.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(shown.borrow().last().unwrap(), "s");

        // "status --system" is 15 chars: 14 more at 50ms each.
        scheduler.advance(14 * 50);
        assert_eq!(shown.borrow().last().unwrap(), "status --system");

        scheduler.advance(2_000 + 13 * 30);
        assert_eq!(shown.borrow().last().unwrap(), "s");
        scheduler.advance(30);
        assert_eq!(shown.borrow().last().unwrap(), "");

        scheduler.advance(500);
        assert_eq!(shown.borrow().last().unwrap(), "s");
        scheduler.advance(50);
        assert_eq!(shown.borrow().last().unwrap(), "sc");

        slot.borrow_mut().take();
        let count = shown.borrow().len();
        scheduler.advance(10_000);
        assert_eq!(shown.borrow().len(), count);
    }
}
