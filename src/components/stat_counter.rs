use yew::prelude::*;

use crate::utils::dom::ViewportObserver;
use crate::utils::scheduler::{BrowserScheduler, BrowserTask, TaskSlot};
use crate::widgets::counter::{run_counter, CounterTiming};

#[derive(Properties, PartialEq, Clone)]
pub struct StatCounterProps {
    pub id: AttrValue,
    /// Raw `data-count` value.
    pub count: AttrValue,
    pub label: AttrValue,
    pub threshold: f64,
    pub timing: CounterTiming,
    /// Returns `false` if this counter already ran.
    pub on_claim: Callback<String, bool>,
}

#[function_component]
pub fn StatCounter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let text = use_state(|| "0".to_string());
    let running = use_mut_ref(|| None::<TaskSlot<BrowserTask>>);

    {
        let node = node.clone();
        let text = text.clone();
        let running = running.clone();
        let props = props.clone();
        use_effect_with_deps(
            move |_| {
                let observer = ViewportObserver::new(props.threshold, true, {
                    let running = running.clone();
                    move |_| {
                        if !props.on_claim.emit(props.id.to_string()) {
                            return;
                        }
                        let text = text.clone();
                        let slot = run_counter(&BrowserScheduler, props.timing, &props.count, move |frame| {
                            text.set(frame)
                        });
                        if slot.is_none() {
                            log::warn!("Counter {} has no numeric target: {:?}", props.id, props.count);
                        }
                        *running.borrow_mut() = slot;
                    }
                });
                let observer = match observer {
                    Ok(observer) => {
                        if let Some(element) = node.cast::<web_sys::Element>() {
                            observer.observe(&element);
                        }
                        Some(observer)
                    }
                    Err(e) => {
                        log::error!("Counter observer unavailable: {}", e);
                        None
                    }
                };
                move || {
                    drop(observer);
                    if let Some(slot) = running.borrow_mut().take() {
                        slot.borrow_mut().take();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="stat-item">
            <div id={props.id.clone()} class="stat-number" data-count={props.count.clone()} ref={node}>
                {(*text).clone()}
            </div>
            <div class="stat-label">{props.label.clone()}</div>
        </div>
    }
}
