use dioxus::prelude::*;
use shared_types::Project;
use shared_ui::{Card, CardContent, CardFooter, CardHeader, Tag};

use crate::format_helpers::format_date;
use crate::reveal::{reveal_style, use_reveal};

/// Grid of project cards that fade in as they reach the viewport.
#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> Element {
    let revealed = use_reveal();

    rsx! {
        div { class: "projects-grid",
            for (index, project) in projects.into_iter().enumerate() {
                {
                    let id = project.card_id(index);
                    let style = reveal_style(revealed.read().contains(&id));
                    let description = project.description.clone();
                    rsx! {
                        Card {
                            key: "{id}",
                            id: "{id}",
                            class: "project-card",
                            style: style,
                            CardHeader {
                                title: project.title.clone(),
                                caption: format_date(&project.date),
                            }
                            CardContent {
                                p { "{description}" }
                            }
                            CardFooter {
                                for tag in project.tags.iter() {
                                    Tag { key: "{tag}", label: tag.clone() }
                                }
                                if let Some(url) = project.url.clone() {
                                    a {
                                        class: "project-link",
                                        href: "{url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "View project"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
