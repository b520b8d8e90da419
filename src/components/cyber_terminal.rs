use yew::prelude::*;

use crate::utils::scheduler::BrowserScheduler;
use crate::widgets::terminal::{run_terminal, TypingTerminal, TypingTiming, TERMINAL_COMMANDS};

#[derive(Properties, PartialEq, Clone)]
pub struct CyberTerminalProps {
    pub timing: TypingTiming,
}

#[function_component]
pub fn CyberTerminal(props: &CyberTerminalProps) -> Html {
    let command = use_state(String::new);

    {
        let command = command.clone();
        let timing = props.timing;
        use_effect_with_deps(
            move |_| {
                let slot = run_terminal(
                    &BrowserScheduler,
                    TypingTerminal::new(TERMINAL_COMMANDS, timing),
                    move |text| command.set(text),
                );
                move || {
                    slot.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div class="cyber-terminal">
            <div class="terminal-bar">
                <span class="dot red"></span>
                <span class="dot yellow"></span>
                <span class="dot green"></span>
                <span class="terminal-title">{"root@cyberdark:~"}</span>
            </div>
            <div class="terminal-body">
                <p class="terminal-line muted">{"[ok] uplink established"}</p>
                <p class="terminal-line muted">{"[ok] 2 bots online"}</p>
                <p class="terminal-line">
                    <span class="prompt">{"$ "}</span>
                    <span class="command">{(*command).clone()}</span>
                    <span class="cursor">{"_"}</span>
                </p>
            </div>
        </div>
    }
}
