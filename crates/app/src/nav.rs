//! Navigation state: the collapsible menu, anchor targets, and which
//! section counts as current while scrolling.

use serde::Deserialize;

/// Links shown in the top navigation, in page order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

/// Something that happened to, or around, the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent<'a> {
    ToggleClicked,
    LinkClicked,
    /// A click whose target lies outside the navigation container.
    ClickedOutside,
    KeyPressed(&'a str),
}

impl MenuState {
    pub fn apply(self, event: MenuEvent<'_>) -> Self {
        match event {
            MenuEvent::ToggleClicked => MenuState { open: !self.open },
            MenuEvent::LinkClicked | MenuEvent::ClickedOutside => MenuState { open: false },
            MenuEvent::KeyPressed("Escape") => MenuState { open: false },
            MenuEvent::KeyPressed(_) => self,
        }
    }
}

/// Element id an in-page link scrolls to. A bare `#` has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Top edge of one `section` element, as measured in the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionOffset {
    pub id: Option<String>,
    pub top: f64,
}

/// What the scroll bridge reports on every window scroll.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub sections: Vec<SectionOffset>,
}

/// The section the reader is in.
///
/// The last section (in document order) whose top, less `offset`, has been
/// scrolled past wins. Starts out as the empty id; a winning section with
/// no id yields `None`, which matches no link.
pub fn current_section(sections: &[SectionOffset], scroll_y: f64, offset: f64) -> Option<String> {
    let mut current = Some(String::new());
    for section in sections {
        if scroll_y >= section.top - offset {
            current = section.id.clone();
        }
    }
    current
}

/// Whether a nav link points at the current section.
///
/// Compares the href minus its first character, so `#` matches the empty
/// id reported before any section is reached.
pub fn is_link_active(href: &str, current: Option<&str>) -> bool {
    let target = href
        .char_indices()
        .nth(1)
        .map(|(i, _)| &href[i..])
        .unwrap_or("");
    current == Some(target)
}
