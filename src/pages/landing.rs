use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::cyber_terminal::CyberTerminal;
use crate::components::fallback_image::FallbackImage;
use crate::components::header::Header;
use crate::components::matrix_canvas::MatrixCanvas;
use crate::components::preview_carousel::PreviewCarousel;
use crate::components::purchase_modal::PurchaseModal;
use crate::components::stat_counter::StatCounter;
use crate::config::{self, UiProfile};
use crate::controller::UiController;
use crate::utils::dom::{self, ViewportObserver};
use crate::widgets::effects::{
    boosted_duration, parallax_transform, parse_duration_secs, particle_delay, CARD_GLOW,
    FOCUS_OUTLINE, FOCUS_OUTLINE_OFFSET, LINE_BOOST_MS,
};
use crate::widgets::navigation::{active_section, anchor_target, quick_nav_section};

const PARTICLE_COUNT: usize = 6;
const LINE_COUNT: usize = 4;

const STATS: &[(&str, &str, &str)] = &[
    ("stat-clients", "500", "Happy Clients"),
    ("stat-uptime", "99", "Uptime"),
    ("stat-bots", "2", "Live Bots"),
    ("stat-reports", "1000", "Reports Delivered"),
];

struct Bot {
    name: &'static str,
    image: &'static str,
    tagline: &'static str,
    features: &'static [&'static str],
    link: &'static str,
}

const BOTS: &[Bot] = &[
    Bot {
        name: "404XMD",
        image: "https://files.catbox.moe/9k5pq0.jpg",
        tagline: "Multi-device WhatsApp bot with 300+ commands.",
        features: &["Auto status view", "Anti-delete", "Group management", "Media downloader"],
        link: "https://github.com/404unkown",
    },
    Bot {
        name: "MADMAX",
        image: "https://files.catbox.moe/dgx6oa.jpg",
        tagline: "Lightweight WhatsApp bot built for speed.",
        features: &["Sticker maker", "AI chat", "Anti-link", "Always online"],
        link: "https://github.com/404unkown",
    },
];

const TOOLS: &[(&str, &str, &str)] = &[
    ("fa-solid fa-qrcode", "Pairing Code", "Link a bot session to WhatsApp in under a minute."),
    ("fa-solid fa-server", "Free Hosting", "Deploy guides for panels and free cloud tiers."),
    ("fa-solid fa-shield-halved", "Session Guard", "Keep bot sessions alive through restarts."),
    ("fa-solid fa-gauge-high", "Bot Monitor", "Status pings when a bot goes offline."),
];

type Rerender = Rc<dyn Fn()>;

/// Run `action` against the controller and, if it changed anything,
/// re-apply the scroll lock and re-render.
fn update(ui: &Rc<RefCell<UiController>>, rerender: &Rerender, action: impl FnOnce(&mut UiController) -> bool) {
    let (changed, overflow) = {
        let mut ui = ui.borrow_mut();
        let changed = action(&mut ui);
        (changed, ui.body_overflow())
    };
    if changed {
        if let Err(e) = dom::set_body_overflow(overflow) {
            log::warn!("Could not update scroll lock: {}", e);
        }
        rerender();
    }
}

fn navigate(ui: &Rc<RefCell<UiController>>, rerender: &Rerender, id: &str) {
    let target_exists = dom::html_element_by_id(id).is_ok();
    update(ui, rerender, |ui| ui.begin_navigation(target_exists));
    if !target_exists {
        return;
    }
    let adjust = ui.borrow().config().header_offset_adjust;
    if let Err(e) = dom::scroll_to_section(id, adjust) {
        log::warn!("Scroll to #{} failed: {}", id, e);
    }
}

fn card_glow(on: bool) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if let Some(card) = e.target_dyn_into::<HtmlElement>() {
            let _ = card
                .style()
                .set_property("box-shadow", if on { CARD_GLOW } else { "" });
        }
    })
}

fn outline_focused_card() {
    let focused = dom::document().ok().and_then(|doc| doc.active_element());
    if let Some(card) = focused.and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        if card.class_list().contains("cyber-card") {
            let style = card.style();
            let _ = style.set_property("outline", FOCUS_OUTLINE);
            let _ = style.set_property("outline-offset", FOCUS_OUTLINE_OFFSET);
        }
    }
}

fn on_window_load() {
    dom::hide_preloader();
    if let Err(e) = dom::promote_deferred_images() {
        log::warn!("Deferred images not loaded: {}", e);
    }
    dom::register_service_worker(config::get_service_worker_path());
}

fn print_banner() {
    gloo_console::log!(
        "\n  CYBERDARK 2026\n  WhatsApp Bots & Monitoring Solutions\n  Telegram: @",
        config::get_telegram_handle(),
        " | GitHub: 404unkown\n"
    );
}

fn move_particles(particles: &[HtmlElement], x: f64, y: f64) {
    for (index, particle) in particles.iter().enumerate() {
        let _ = particle
            .style()
            .set_property("transform", &parallax_transform(index, x, y));
    }
}

fn boost_lines(lines: &[HtmlElement], pointer_y: f64) {
    let Ok(window) = dom::window() else {
        return;
    };
    for line in lines {
        let duration = window
            .get_computed_style(line)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("animation-duration").ok())
            .and_then(|value| parse_duration_secs(&value));
        let Some(boosted) = duration.and_then(|d| boosted_duration(pointer_y, f64::from(line.offset_top()), d)) else {
            continue;
        };
        let _ = line
            .style()
            .set_property("animation-duration", &format!("{}s", boosted));
        let line = line.clone();
        Timeout::new(LINE_BOOST_MS, move || {
            let _ = line.style().set_property("animation-duration", "");
        })
        .forget();
    }
}

fn html_elements(selector: &str) -> Vec<HtmlElement> {
    dom::query_all(selector)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let profile = use_memo(|_| UiProfile::detect(), ());
    let ui = use_mut_ref(|| {
        let catalog = match Catalog::embedded() {
            Ok(catalog) => Some(Rc::new(catalog)),
            Err(e) => {
                log::error!("Product catalog unavailable: {}", e);
                None
            }
        };
        UiController::new(profile.config(), catalog, config::get_telegram_handle())
    });
    let force_update = use_force_update();
    let rerender: Rerender = Rc::new(move || force_update.force_update());
    let toggle_ref = use_node_ref();
    let panel_ref = use_node_ref();
    let ui_config = ui.borrow().config().clone();

    // One-time page setup and window lifecycle hooks
    {
        use_effect_with_deps(
            move |_| {
                print_banner();
                for (index, particle) in html_elements(".glow-particle").iter().enumerate() {
                    let _ = particle
                        .style()
                        .set_property("animation-delay", &particle_delay(index));
                }
                if let Err(e) = dom::apply_lazy_loading() {
                    log::warn!("Lazy loading not applied: {}", e);
                }
                let loaded = Timeout::new(100, || {
                    if let Err(e) = dom::add_body_class("loaded") {
                        log::warn!("Could not mark page loaded: {}", e);
                    }
                });

                let mut listeners = Vec::new();
                if let Ok(window) = dom::window() {
                    let complete = window
                        .document()
                        .map(|doc| doc.ready_state() == "complete")
                        .unwrap_or(false);
                    if complete {
                        on_window_load();
                    } else {
                        listeners.push(EventListener::new(&window, "load", |_| on_window_load()));
                    }
                    listeners.push(EventListener::new(&window, "pageshow", |_| dom::log_navigation_timing()));
                }
                move || {
                    drop(loaded);
                    drop(listeners);
                }
            },
            (),
        );
    }

    // Keyboard: Escape, number-key navigation, card focus outline
    {
        let ui = ui.clone();
        let rerender = rerender.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::document().map(|document| {
                    let options = EventListenerOptions::enable_prevent_default();
                    EventListener::new_with_options(&document, "keydown", options, move |e| {
                        let Some(key_event) = e.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let key = key_event.key();
                        match key.as_str() {
                            "Escape" => update(&ui, &rerender, |ui| ui.escape()),
                            "Tab" => outline_focused_card(),
                            _ => {
                                let section = quick_nav_section(&key, key_event.ctrl_key(), key_event.alt_key());
                                if let Some(id) = section {
                                    if dom::html_element_by_id(id).is_ok() {
                                        e.prevent_default();
                                        let adjust = ui.borrow().config().header_offset_adjust;
                                        if let Err(err) = dom::scroll_to_section(id, adjust) {
                                            log::warn!("Quick navigation to #{} failed: {}", id, err);
                                        }
                                    }
                                }
                            }
                        }
                    })
                });
                if let Err(e) = &listener {
                    log::error!("Keyboard shortcuts unavailable: {}", e);
                }
                move || drop(listener)
            },
            (),
        );
    }

    // Clicks outside the open menu close it
    {
        let ui = ui.clone();
        let rerender = rerender.clone();
        let toggle_ref = toggle_ref.clone();
        let panel_ref = panel_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::document().map(|document| {
                    EventListener::new(&document, "click", move |e| {
                        let target = e.target();
                        let inside_panel = dom::contains(panel_ref.cast::<Element>(), target.as_ref());
                        let inside_toggle = dom::contains(toggle_ref.cast::<Element>(), target.as_ref());
                        update(&ui, &rerender, |ui| ui.click_anywhere(inside_panel, inside_toggle));
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Active section highlighting on scroll
    {
        let ui = ui.clone();
        let rerender = rerender.clone();
        use_effect_with_deps(
            move |_| {
                let refresh = {
                    let ui = ui.clone();
                    let rerender = rerender.clone();
                    move || {
                        let bounds = dom::section_bounds();
                        let section = active_section(dom::scroll_y(), &bounds);
                        update(&ui, &rerender, |ui| ui.set_active_section(section));
                    }
                };
                refresh();
                let listener = dom::window().map(|window| {
                    EventListener::new(&window, "scroll", move |_| {
                        if ui.borrow_mut().scroll_tick(dom::now_ms()) {
                            refresh();
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Pointer-driven background: particle parallax and line speed-up
    {
        let parallax = ui_config.parallax;
        use_effect_with_deps(
            move |_| {
                let particles = if parallax { html_elements(".glow-particle") } else { Vec::new() };
                let lines = html_elements(".cyber-line");
                let listener = dom::document().map(|document| {
                    EventListener::new(&document, "mousemove", move |e| {
                        let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let Ok(window) = dom::window() else {
                            return;
                        };
                        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0);
                        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0);
                        let (x, y) = (f64::from(mouse.client_x()), f64::from(mouse.client_y()));
                        move_particles(&particles, x / width, y / height);
                        boost_lines(&lines, y);
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Reveal cards and section headers as they scroll into view
    {
        let threshold = ui_config.reveal_threshold;
        use_effect_with_deps(
            move |_| {
                let observer = ViewportObserver::new(threshold, false, |element| {
                    let _ = element.class_list().add_1("animated");
                });
                match &observer {
                    Ok(observer) => {
                        for element in dom::query_all(".cyber-card, .section-header").unwrap_or_default() {
                            observer.observe(&element);
                        }
                    }
                    Err(e) => log::warn!("Scroll reveal unavailable: {}", e),
                }
                move || drop(observer)
            },
            (),
        );
    }

    let on_toggle = {
        let ui = ui.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| update(&ui, &rerender, |ui| ui.toggle_menu()))
    };
    let on_navigate = {
        let ui = ui.clone();
        let rerender = rerender.clone();
        Callback::from(move |href: String| {
            if let Some(id) = anchor_target(&href) {
                navigate(&ui, &rerender, id);
            }
        })
    };
    let on_close_modal = {
        let ui = ui.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| update(&ui, &rerender, |ui| ui.close_purchase()))
    };
    let on_claim = {
        let ui = ui.clone();
        Callback::from(move |id: String| ui.borrow_mut().claim_counter(&id))
    };
    let purchase = |key: String| {
        let ui = ui.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            let key = key.clone();
            update(&ui, &rerender, move |ui| ui.open_purchase(&key));
        })
    };
    let cta = |href: &'static str| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(href.to_string());
        })
    };

    let (menu, active, modal, products) = {
        let ui = ui.borrow();
        (
            ui.menu_view(),
            ui.active_section().map(str::to_string),
            ui.modal().cloned(),
            ui.catalog().map(|c| c.products().to_vec()).unwrap_or_default(),
        )
    };

    html! {
        <div class="cyber-page">
            if ui_config.matrix_rain {
                <MatrixCanvas tick_ms={ui_config.matrix_tick_ms} font_size={ui_config.matrix_font_size} />
            }
            <div class="cyber-background" aria-hidden="true">
                { for (0..PARTICLE_COUNT).map(|i| html! { <div class={format!("glow-particle p{}", i + 1)}></div> }) }
                { for (0..LINE_COUNT).map(|i| html! { <div class={format!("cyber-line l{}", i + 1)}></div> }) }
            </div>

            <Header
                {menu}
                active_section={active}
                touch_events={ui_config.touch_events}
                {on_toggle}
                on_navigate={on_navigate.clone()}
                toggle_ref={toggle_ref.clone()}
                panel_ref={panel_ref.clone()}
            />

            <main>
                <section id="home" class="hero-section">
                    <div class="hero-text">
                        <span class="hero-tag">{"// CYBERDARK 2026"}</span>
                        <h1 class="glitch" data-text="WhatsApp Bots & Monitoring">{"WhatsApp Bots & Monitoring"}</h1>
                        <p class="hero-subtitle">
                            {"Bots that never sleep and monitoring services delivered straight to your Telegram."}
                        </p>
                        <div class="hero-actions">
                            <a href="#apps" class="cyber-btn primary" onclick={cta("#apps")}>{"Explore Services"}</a>
                            <a href="#bots" class="cyber-btn ghost" onclick={cta("#bots")}>{"Get a Bot"}</a>
                        </div>
                    </div>
                    <CyberTerminal timing={ui_config.typing} />
                </section>

                <section class="stats-section">
                    { for STATS.iter().map(|(id, count, label)| html! {
                        <StatCounter
                            id={*id}
                            count={*count}
                            label={*label}
                            threshold={ui_config.counter_threshold}
                            timing={ui_config.counter}
                            on_claim={on_claim.clone()}
                        />
                    }) }
                </section>

                <section id="bots" class="bots-section">
                    <div class="section-header">
                        <h2>{"WhatsApp Bots"}</h2>
                        <p>{"Free, open-source and deployable in minutes."}</p>
                    </div>
                    <div class="card-grid">
                        { for BOTS.iter().map(|bot| html! {
                            <div class="cyber-card bot-card" tabindex="0" onmouseenter={card_glow(true)} onmouseleave={card_glow(false)}>
                                <div class="bot-icon">
                                    <FallbackImage src={bot.image} alt={bot.name} in_bot_icon=true />
                                </div>
                                <h3>{bot.name}</h3>
                                <p>{bot.tagline}</p>
                                <ul class="feature-list">
                                    { for bot.features.iter().map(|f| html! { <li><i class="fa-solid fa-check"></i>{*f}</li> }) }
                                </ul>
                                <a href={bot.link} class="cyber-btn ghost" target="_blank" rel="noopener noreferrer">
                                    <i class="fa-brands fa-github"></i>{" Deploy"}
                                </a>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="apps" class="apps-section">
                    <div class="section-header">
                        <h2>{"Spy Services"}</h2>
                        <p>{"Pick a service, confirm on Telegram, get access."}</p>
                    </div>
                    <div class="card-grid">
                        { for products.into_iter().map(|product| html! {
                            <div class="cyber-card app-card" tabindex="0" onmouseenter={card_glow(true)} onmouseleave={card_glow(false)}>
                                <div class="app-icon"><i class={product.icon.clone()}></i></div>
                                <h3>{product.title.clone()}</h3>
                                <p>{product.description.clone()}</p>
                                <div class="app-footer">
                                    <span class="app-price">{product.price.clone()}</span>
                                    <button class="cyber-btn primary btn-purchase" data-app={product.key.clone()} onclick={purchase(product.key.clone())}>
                                        {"Purchase"}
                                    </button>
                                </div>
                            </div>
                        }) }
                    </div>
                    <PreviewCarousel timing={ui_config.rotation} />
                </section>

                <section id="tools" class="tools-section">
                    <div class="section-header">
                        <h2>{"Tools"}</h2>
                        <p>{"Everything you need to keep your bots running."}</p>
                    </div>
                    <div class="card-grid">
                        { for TOOLS.iter().map(|(icon, title, text)| html! {
                            <div class="cyber-card tool-card" tabindex="0" onmouseenter={card_glow(true)} onmouseleave={card_glow(false)}>
                                <i class={*icon}></i>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="contact" class="contact-section">
                    <div class="section-header">
                        <h2>{"Contact"}</h2>
                        <p>{"Orders, support and custom bots."}</p>
                    </div>
                    <div class="contact-links">
                        <a href={format!("https://t.me/{}", config::get_telegram_handle())} class="cyber-btn primary" target="_blank" rel="noopener noreferrer">
                            <i class="fa-brands fa-telegram"></i>{format!(" @{}", config::get_telegram_handle())}
                        </a>
                        <a href="https://github.com/404unkown" class="cyber-btn ghost" target="_blank" rel="noopener noreferrer">
                            <i class="fa-brands fa-github"></i>{" 404unkown"}
                        </a>
                    </div>
                </section>
            </main>

            <footer class="cyber-footer">
                <p>{"© 2026 CYBERDARK. All systems operational."}</p>
                <a href="#">{"Back to top"}</a>
            </footer>

            <PurchaseModal content={modal} on_close={on_close_modal} />
        </div>
    }
}
