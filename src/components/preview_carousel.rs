use gloo_events::EventListener;
use yew::prelude::*;

use crate::utils::dom;
use crate::utils::scheduler::BrowserScheduler;
use crate::widgets::preview::{PreviewRotator, RotationTiming};

struct PreviewPanel {
    title: &'static str,
    icon: &'static str,
    lines: &'static [&'static str],
}

const PANELS: &[PreviewPanel] = &[
    PreviewPanel {
        title: "Message Feed",
        icon: "fa-solid fa-comment-sms",
        lines: &["+254 7** *** 112  |  10:42", "+254 7** *** 908  |  10:47", "Safaricom  |  11:03"],
    },
    PreviewPanel {
        title: "Live Location",
        icon: "fa-solid fa-location-crosshairs",
        lines: &["lat -1.2864  lon 36.8172", "accuracy 8 m", "updated 12 s ago"],
    },
    PreviewPanel {
        title: "Media Vault",
        icon: "fa-solid fa-photo-film",
        lines: &["IMG_2041.jpg  2.1 MB", "VID_0193.mp4  18.4 MB", "IMG_2042.jpg  1.7 MB"],
    },
    PreviewPanel {
        title: "Device Report",
        icon: "fa-solid fa-microchip",
        lines: &["Android 14  |  battery 76%", "contacts 412  |  apps 88", "last call 09:15"],
    },
];

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewCarouselProps {
    pub timing: RotationTiming,
}

/// Showcase panels that rotate on their own until the visitor takes over.
#[function_component]
pub fn PreviewCarousel(props: &PreviewCarouselProps) -> Html {
    let index = use_state(|| 0usize);
    let rotator = use_mut_ref(|| None::<PreviewRotator<BrowserScheduler>>);

    {
        let index = index.clone();
        let rotator = rotator.clone();
        let timing = props.timing;
        use_effect_with_deps(
            move |_| {
                let active = PreviewRotator::new(BrowserScheduler, timing, PANELS.len(), move |i| index.set(i));
                active.start();

                let visibility = dom::document().map(|document| {
                    let active = active.clone();
                    let watched = document.clone();
                    EventListener::new(&document, "visibilitychange", move |_| {
                        active.set_visible(!watched.hidden());
                    })
                });
                if let Err(e) = &visibility {
                    log::warn!("Preview rotation ignores page visibility: {}", e);
                }

                *rotator.borrow_mut() = Some(active);
                move || {
                    drop(visibility);
                    if let Some(active) = rotator.borrow_mut().take() {
                        active.stop();
                    }
                }
            },
            (),
        );
    }

    let set_hovered = |hovered: bool| {
        let rotator = rotator.clone();
        move || {
            if let Some(active) = rotator.borrow().as_ref() {
                active.set_hovered(hovered);
            }
        }
    };
    let onmouseenter = {
        let hover = set_hovered(true);
        Callback::from(move |_: MouseEvent| hover())
    };
    let onmouseleave = {
        let release = set_hovered(false);
        Callback::from(move |_: MouseEvent| release())
    };
    let ontouchstart = {
        let hover = set_hovered(true);
        Callback::from(move |_: TouchEvent| hover())
    };
    let ontouchend = {
        let release = set_hovered(false);
        Callback::from(move |_: TouchEvent| release())
    };

    html! {
        <div class="preview-showcase" {onmouseenter} {onmouseleave} {ontouchstart} {ontouchend}>
            <div class="preview-track">
                { for PANELS.iter().enumerate().map(|(i, panel)| html! {
                    <div class={classes!("preview-panel", (i == *index).then_some("active"))} aria-hidden={(i != *index).to_string()}>
                        <div class="preview-title">
                            <i class={panel.icon}></i>
                            {panel.title}
                        </div>
                        <ul class="preview-lines">
                            { for panel.lines.iter().map(|line| html! { <li>{*line}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="preview-dots" role="tablist">
                { for (0..PANELS.len()).map(|i| {
                    let onclick = {
                        let rotator = rotator.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(active) = rotator.borrow().as_ref() {
                                active.select(i);
                            }
                        })
                    };
                    html! {
                        <button
                            class={classes!("preview-dot", (i == *index).then_some("active"))}
                            role="tab"
                            aria-selected={(i == *index).to_string()}
                            aria-label={format!("Show preview {}", i + 1)}
                            {onclick}
                        ></button>
                    }
                }) }
            </div>
        </div>
    }
}
