use shared_types::SiteConfig;
use std::sync::OnceLock;

static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// `site.toml` from the workspace root, embedded at build time.
const SITE_TOML: &str = include_str!("../../../site.toml");

/// Parse site settings, falling back to defaults when the file is invalid.
fn parse_site_config(contents: &str) -> SiteConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse site.toml, using defaults");
        SiteConfig::default()
    })
}

/// Site settings, parsed on first access.
pub fn site_config() -> &'static SiteConfig {
    SITE.get_or_init(|| parse_site_config(SITE_TOML))
}
