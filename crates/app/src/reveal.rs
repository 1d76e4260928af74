//! Fade-in of project cards as they scroll into view.

use dioxus::prelude::*;
use std::collections::HashSet;

use crate::bridge;
use crate::config::site_config;

/// Elements watched by the reveal observer.
pub const CARD_SELECTOR: &str = ".project-card";

const HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease";
const VISIBLE_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease";

/// Inline style for a card that has or has not been seen yet.
pub fn reveal_style(revealed: bool) -> &'static str {
    if revealed {
        VISIBLE_STYLE
    } else {
        HIDDEN_STYLE
    }
}

/// Ids of cards that have entered the viewport at least once.
///
/// The observer reports each card a single time, so the set only grows.
pub fn use_reveal() -> Signal<HashSet<String>> {
    let mut revealed = use_signal(HashSet::<String>::new);

    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        let mut eval = bridge::observe_reveal(CARD_SELECTOR, &site_config().reveal);
        loop {
            match eval.recv::<String>().await {
                Ok(id) => {
                    revealed.write().insert(id);
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "reveal observer stopped");
                    break;
                }
            }
        }
    });

    revealed
}
