use dioxus::prelude::*;
use shared_ui::{Navbar, NavbarLink};

use crate::bridge;
use crate::config::site_config;
use crate::nav::{anchor_target, current_section, is_link_active, MenuEvent, ScrollSnapshot, NAV_LINKS};
use crate::NavContext;

/// Site header: brand, section links, and the mobile menu toggle.
///
/// Also owns the page-wide listeners that keep the nav in sync: scroll
/// position for the active link and Escape for closing the menu.
#[component]
pub fn SiteNav() -> Element {
    let mut ctx = use_context::<NavContext>();
    let brand = site_config().profile.name.clone();

    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        let offset = site_config().navigation.highlight_offset_px;
        let mut eval = bridge::watch_scroll();
        loop {
            match eval.recv::<ScrollSnapshot>().await {
                Ok(snapshot) => {
                    let current = current_section(&snapshot.sections, snapshot.scroll_y, offset);
                    if *ctx.current_section.peek() != current {
                        ctx.current_section.set(current);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "scroll listener stopped");
                    break;
                }
            }
        }
    });

    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        let mut eval = bridge::watch_keydown();
        loop {
            match eval.recv::<String>().await {
                Ok(key) => ctx.dispatch(MenuEvent::KeyPressed(&key)),
                Err(e) => {
                    tracing::warn!(error = ?e, "keydown listener stopped");
                    break;
                }
            }
        }
    });

    let open = ctx.menu.read().open;
    let current = ctx.current_section.read().clone();

    rsx! {
        Navbar {
            brand,
            brand_href: "#home",
            open,
            on_toggle: move |_: MouseEvent| ctx.dispatch(MenuEvent::ToggleClicked),
            on_brand_click: move |evt: MouseEvent| {
                evt.prevent_default();
                bridge::scroll_into_view("home");
            },
            for (href, label) in NAV_LINKS.iter().copied() {
                NavbarLink {
                    key: "{href}",
                    href: href.to_string(),
                    active: is_link_active(href, current.as_deref()),
                    onclick: move |evt: MouseEvent| {
                        if let Some(id) = anchor_target(href) {
                            evt.prevent_default();
                            bridge::scroll_into_view(id);
                        }
                        ctx.dispatch(MenuEvent::LinkClicked);
                    },
                    "{label}"
                }
            }
        }
    }
}
