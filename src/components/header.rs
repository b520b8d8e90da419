use web_sys::TouchEvent;
use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::config;
use crate::widgets::menu::MenuView;
use crate::widgets::navigation::anchor_target;

const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("#home", "Home", "fa-solid fa-house"),
    ("#bots", "Bots", "fa-solid fa-robot"),
    ("#apps", "Spy Apps", "fa-solid fa-user-secret"),
    ("#tools", "Tools", "fa-solid fa-toolbox"),
    ("#contact", "Contact", "fa-solid fa-paper-plane"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub menu: MenuView,
    pub active_section: Option<String>,
    pub touch_events: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<String>,
    pub toggle_ref: NodeRef,
    pub panel_ref: NodeRef,
}

const BRAND_HREF: &str = "#home";

/// Click handler for an in-page link: suppresses the browser jump and hands
/// the href to `on_navigate`. A bare `#` keeps its default behavior.
fn anchor_click(href: &str, on_navigate: &Callback<String>) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    let href = href.to_string();
    Callback::from(move |e: MouseEvent| {
        if anchor_target(&href).is_some() {
            e.prevent_default();
            on_navigate.emit(href.clone());
        }
    })
}

fn nav_link(href: &str, label: &str, icon: Option<&str>, class: &str, props: &HeaderProps) -> Html {
    let active = anchor_target(href).is_some() && props.active_section.as_deref() == anchor_target(href);
    let onclick = anchor_click(href, &props.on_navigate);
    html! {
        <a href={href.to_string()} class={classes!(class.to_string(), active.then_some("active"))} {onclick}>
            if let Some(icon) = icon {
                <i class={icon.to_string()}></i>
            }
            {label}
        </a>
    }
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let menu = props.menu;
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let touch_toggle = props.touch_events.then(|| {
        let on_toggle = props.on_toggle.clone();
        // Suppresses the emulated click that would toggle a second time.
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    });

    html! {
        <>
            <header class="cyber-header">
                <div class="header-inner">
                    <a href={BRAND_HREF} class="brand" onclick={anchor_click(BRAND_HREF, &props.on_navigate)}>
                        <FallbackImage
                            src="https://files.catbox.moe/9k5pq0.jpg"
                            alt="CYBERDARK logo"
                            class="logo-img"
                        />
                        <span class="brand-name">{"CYBERDARK"}<span class="brand-year">{"2026"}</span></span>
                    </a>
                    <nav class="desktop-nav">
                        { for NAV_LINKS.iter().map(|(href, label, _)| nav_link(href, label, None, "nav-link", props)) }
                    </nav>
                    <button
                        id="cyberMenuToggle"
                        ref={props.toggle_ref.clone()}
                        class={classes!("cyber-menu-toggle", menu.active.then_some("active"))}
                        aria-label="Toggle navigation"
                        aria-controls="mobileMenu"
                        aria-expanded={menu.aria_expanded}
                        onclick={toggle.clone()}
                        ontouchend={touch_toggle.clone()}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <div
                id="mobileMenu"
                ref={props.panel_ref.clone()}
                class={classes!("mobile-menu", menu.active.then_some("active"))}
                aria-hidden={menu.aria_hidden}
            >
                <button id="closeMenu" class="close-menu" aria-label="Close navigation" onclick={toggle} ontouchend={touch_toggle}>
                    <i class="fa-solid fa-xmark"></i>
                </button>
                <nav class="mobile-nav">
                    { for NAV_LINKS.iter().map(|(href, label, icon)| nav_link(href, label, Some(*icon), "mobile-link", props)) }
                </nav>
                <div class="mobile-menu-footer">
                    <a href={format!("https://t.me/{}", config::get_telegram_handle())} target="_blank" rel="noopener noreferrer">
                        <i class="fa-brands fa-telegram"></i>{format!(" @{}", config::get_telegram_handle())}
                    </a>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::navigation::NAV_SECTIONS;

    #[test]
    fn every_header_link_targets_a_section() {
        let hrefs = NAV_LINKS.iter().map(|(href, _, _)| *href).chain([BRAND_HREF]);
        for href in hrefs {
            let target = anchor_target(href);
            assert!(
                target.map_or(false, |id| NAV_SECTIONS.contains(&id)),
                "{} does not scroll to a section",
                href
            );
        }
    }

    #[test]
    fn brand_link_scrolls_home() {
        assert_eq!(anchor_target(BRAND_HREF), Some("home"));
    }
}
