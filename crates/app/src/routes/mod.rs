pub mod home;

use crate::components::SiteNav;
use crate::config::site_config;
use dioxus::prelude::*;
use home::Home;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
}

/// Header and footer wrapped around the single-page content.
#[component]
fn SiteLayout() -> Element {
    let profile = &site_config().profile;
    let name = profile.name.clone();
    let year = chrono::Local::now().format("%Y").to_string();

    rsx! {
        header { class: "site-header", SiteNav {} }
        main { class: "site-main", Outlet::<Route> {} }
        footer { class: "site-footer",
            p { "\u{a9} {year} {name}" }
        }
    }
}
