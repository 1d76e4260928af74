use dioxus::prelude::*;

use crate::components::{AnchorLink, CopyButton, ProjectGrid};
use crate::config::site_config;
use crate::contact::ContactForm;

/// Entrance animation applied to the hero once it is in the document.
pub const HERO_ENTRANCE: &str = "animation: slideUp 0.8s ease-out";

/// The single page: hero, about, projects, and contact sections.
#[component]
pub fn Home() -> Element {
    let site = site_config();
    let profile = site.profile.clone();
    let projects = site.projects.clone();
    let mut hero_mounted = use_signal(|| false);

    use_effect(|| {
        tracing::info!("Portfolio website loaded successfully!");
    });

    let hero_style = if hero_mounted() { HERO_ENTRANCE } else { "" };
    let mailto = format!("mailto:{}", profile.email);

    rsx! {
        section { id: "home", class: "hero",
            div {
                class: "hero-content",
                style: hero_style,
                onmounted: move |_| hero_mounted.set(true),
                h1 { class: "hero-title", "Hi, I'm {profile.name}" }
                p { class: "hero-role", "{profile.role}" }
                p { class: "hero-tagline", "{profile.tagline}" }
                div { class: "hero-actions",
                    AnchorLink { href: "#projects", class: "cta primary", "See my work" }
                    AnchorLink { href: "#contact", class: "cta outline", "Get in touch" }
                }
            }
        }

        section { id: "about", class: "about",
            h2 { class: "section-title", "About" }
            if !profile.about.is_empty() {
                p { class: "about-text", "{profile.about}" }
            }
            ul { class: "about-links",
                if let Some(github) = profile.github.clone() {
                    li { a { href: "{github}", target: "_blank", rel: "noopener noreferrer", "GitHub" } }
                }
                if let Some(linkedin) = profile.linkedin.clone() {
                    li { a { href: "{linkedin}", target: "_blank", rel: "noopener noreferrer", "LinkedIn" } }
                }
            }
        }

        section { id: "projects", class: "projects",
            h2 { class: "section-title", "Projects" }
            ProjectGrid { projects }
        }

        section { id: "contact", class: "contact",
            h2 { class: "section-title", "Contact" }
            div { class: "contact-direct",
                a { href: "{mailto}", "{profile.email}" }
                CopyButton { text: profile.email.clone(), label: "Copy email" }
            }
            ContactForm {}
            AnchorLink { href: "#", class: "back-to-top", "Back to top" }
        }
    }
}
