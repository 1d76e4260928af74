use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};
use std::time::Duration;

use crate::bridge;
use crate::config::site_config;
use crate::timer;

/// Label shown after a successful copy.
pub const COPIED_LABEL: &str = "Copied!";

/// Copies `text` to the clipboard and briefly confirms on its own label.
#[component]
pub fn CopyButton(text: String, label: String) -> Element {
    let mut shown = use_signal(|| label.clone());

    let copy = move |_: MouseEvent| {
        let text = text.clone();
        let original = label.clone();
        spawn(async move {
            if !bridge::write_clipboard(&text).await {
                tracing::warn!("could not copy to clipboard");
                return;
            }
            shown.set(COPIED_LABEL.to_string());
            timer::sleep(Duration::from_millis(site_config().clipboard.feedback_ms)).await;
            shown.set(original);
        });
    };

    rsx! {
        Button {
            class: "copy-button",
            variant: ButtonVariant::Outline,
            onclick: copy,
            "{shown}"
        }
    }
}
