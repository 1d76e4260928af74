use dioxus::prelude::*;

/// A content card, rendered as an `article`.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        article {
            ..merged,
            {children}
        }
    }
}

/// Header of a Card with a title and an optional small caption beneath it.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] caption: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        header {
            ..merged,
            h3 { class: "card-title", "{title}" }
            if !caption.is_empty() {
                p { class: "card-caption", "{caption}" }
            }
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Footer row of a Card, typically tags and links.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        footer {
            ..merged,
            {children}
        }
    }
}

/// A small pill used for project tags.
#[component]
pub fn Tag(label: String) -> Element {
    rsx! {
        span { class: "card-tag", "{label}" }
    }
}
