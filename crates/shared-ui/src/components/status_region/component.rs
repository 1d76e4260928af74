use dioxus::prelude::*;

/// Live region announcing the outcome of a form action.
///
/// `tone` is appended to the `form-status` class (`success`, `error`, ...).
/// Styles live with the Form component.
#[component]
pub fn StatusRegion(
    #[props(default)] message: String,
    #[props(default)] tone: Option<String>,
    #[props(default)] id: String,
) -> Element {
    let class = match tone.as_deref() {
        Some(tone) if !tone.is_empty() => format!("form-status {tone}"),
        _ => "form-status".to_string(),
    };

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            role: "status",
            aria_live: "polite",
            "{message}"
        }
    }
}
