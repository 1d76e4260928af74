use serde::{Deserialize, Serialize};

/// Top-level site configuration matching `site.toml`.
///
/// Every section defaults independently so a missing or partial file
/// still yields a working page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Owner details shown in the hero, about, and contact sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            role: "Software Engineer".to_string(),
            tagline: "I build reliable software for the web.".to_string(),
            about: String::new(),
            email: "hello@example.com".to_string(),
            github: None,
            linkedin: None,
        }
    }
}

/// Contact form submission settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    /// Endpoint receiving a JSON POST. Empty means submissions are simulated.
    pub endpoint: String,
    pub simulated_delay_ms: u64,
    /// How long a success status stays visible.
    pub status_clear_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            simulated_delay_ms: 1000,
            status_clear_ms: 5000,
        }
    }
}

impl ContactConfig {
    /// The configured endpoint, if submissions should go over the network.
    pub fn http_endpoint(&self) -> Option<&str> {
        let endpoint = self.endpoint.trim();
        (!endpoint.is_empty()).then_some(endpoint)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// A section counts as current once the scroll offset is within this
    /// many pixels above its top edge.
    pub highlight_offset_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            highlight_offset_px: 200.0,
        }
    }
}

/// Viewport observation settings for project card fade-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClipboardConfig {
    /// How long the "Copied!" label stays before the original text returns.
    pub feedback_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self { feedback_ms: 2000 }
    }
}

/// A project card in the projects section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 date, formatted for display by the page.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Project {
    /// Lowercase ASCII words of the title joined by `-`.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
        slug.trim_end_matches('-').to_string()
    }

    /// DOM id and render key for the card at `index` in the grid.
    ///
    /// The position keeps ids unique when titles slug the same.
    pub fn card_id(&self, index: usize) -> String {
        let slug = self.slug();
        if slug.is_empty() {
            format!("project-{index}")
        } else {
            format!("project-{index}-{slug}")
        }
    }
}
