use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMenu, LdX};
use dioxus_free_icons::Icon;

/// Class list for an element that gains `active` when `on` is set.
pub fn with_active(base: &str, on: bool) -> String {
    if on {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// Top navigation bar with a hamburger toggle for narrow screens.
///
/// The bar is controlled: `open` decides whether the link menu is expanded
/// and `on_toggle` fires when the hamburger is pressed. Clicks inside the
/// bar stop propagating here, so a page-level click handler only ever sees
/// clicks outside the navigation.
#[component]
pub fn Navbar(
    brand: String,
    #[props(default = "#".to_string())] brand_href: String,
    open: bool,
    on_toggle: EventHandler<MouseEvent>,
    #[props(default)] on_brand_click: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let expanded = if open { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "navbar",
            div {
                class: "nav-container",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                a {
                    class: "nav-brand",
                    href: "{brand_href}",
                    onclick: move |evt| on_brand_click.call(evt),
                    "{brand}"
                }
                ul { class: with_active("nav-menu", open), {children} }
                button {
                    class: with_active("hamburger", open),
                    r#type: "button",
                    aria_label: "Toggle navigation",
                    aria_expanded: expanded,
                    onclick: move |evt| on_toggle.call(evt),
                    if open {
                        Icon::<LdX> { icon: LdX, width: 24, height: 24 }
                    } else {
                        Icon::<LdMenu> { icon: LdMenu, width: 24, height: 24 }
                    }
                }
            }
        }
    }
}

/// A link inside the Navbar menu.
#[component]
pub fn NavbarLink(
    href: String,
    #[props(default = false)] active: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        li { class: "nav-item",
            a {
                class: with_active("nav-link", active),
                href: "{href}",
                onclick: move |evt| onclick.call(evt),
                {children}
            }
        }
    }
}
