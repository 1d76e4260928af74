use dioxus::prelude::*;

/// Form wrapper that suppresses the browser's default submission.
///
/// Native constraint validation is turned off (`novalidate`) so the
/// submit handler sees every attempt and reports problems itself.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// A labelled row inside a Form.
#[component]
pub fn FormField(children: Element) -> Element {
    rsx! {
        div { class: "form-field", {children} }
    }
}
