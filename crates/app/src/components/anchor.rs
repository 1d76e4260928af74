use dioxus::prelude::*;

use crate::bridge;
use crate::nav::anchor_target;

/// An in-page link that smooth-scrolls to its target section.
///
/// A bare `#` keeps the browser's default jump to the top.
#[component]
pub fn AnchorLink(
    href: String,
    #[props(default)] class: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let target = href.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                if let Some(id) = anchor_target(&target) {
                    evt.prevent_default();
                    bridge::scroll_into_view(id);
                }
                onclick.call(evt);
            },
            {children}
        }
    }
}
