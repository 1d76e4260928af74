use dioxus::prelude::*;

mod bridge;
mod components;
mod config;
mod contact;
mod format_helpers;
mod nav;
mod reveal;
mod routes;
mod timer;
use nav::{MenuEvent, MenuState};
use routes::Route;

/// Navigation state shared between the header and the page around it.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub menu: Signal<MenuState>,
    /// Id of the section being read. Starts empty, before any section is
    /// reached; `None` when the current section has no id.
    pub current_section: Signal<Option<String>>,
}

impl NavContext {
    /// Feed a menu event through the state machine, writing only on change.
    pub fn dispatch(&mut self, event: MenuEvent<'_>) {
        let current = *self.menu.peek();
        let next = current.apply(event);
        if next != current {
            self.menu.set(next);
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut nav = use_context_provider(|| NavContext {
        menu: Signal::new(MenuState::default()),
        current_section: Signal::new(Some(String::new())),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        // The navbar stops its own clicks, so anything reaching here is outside it.
        div {
            class: "site",
            onclick: move |_| nav.dispatch(MenuEvent::ClickedOutside),
            Router::<Route> {}
        }
    }
}
