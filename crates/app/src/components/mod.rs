mod anchor;
mod copy_button;
mod projects;
mod site_nav;

pub use anchor::AnchorLink;
pub use copy_button::CopyButton;
pub use projects::ProjectGrid;
pub use site_nav::SiteNav;
