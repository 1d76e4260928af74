use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
        }
    }
}

/// A site-styled button.
///
/// `button_type` maps to the HTML `type` attribute; pass `"submit"` for the
/// button that submits a form.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_button_renders_type_and_disabled() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { class: "submit-button", button_type: "submit", disabled: true, "Sending..." }
        });
        assert!(html.contains(r#"type="submit""#), "{html}");
        assert!(html.contains("disabled"), "{html}");
        assert!(html.contains("submit-button"), "{html}");
        assert!(html.contains(r#"data-style="primary""#), "{html}");
        assert!(html.contains("Sending..."), "{html}");
    }

    #[test]
    fn default_button_is_plain_enabled_button() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Outline, "Copy email" }
        });
        assert!(html.contains(r#"type="button""#), "{html}");
        assert!(!html.contains("disabled"), "{html}");
        assert!(html.contains(r#"data-style="outline""#), "{html}");
    }
}
