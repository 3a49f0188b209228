//! Application pages module
//!
//! One component per route, plus the shared `PageMeta` head tags.

mod about;
mod auth;
mod chat;
mod features;
mod ghibli;
mod helmet;
mod index;
mod meta;
mod not_found;
mod showcase;
mod team;

pub use about::AboutPage;
pub use auth::AuthPage;
pub use chat::ChatPage;
pub use features::FeaturesPage;
pub use ghibli::GhibliPage;
pub use helmet::HelmetPage;
pub use index::IndexPage;
pub use meta::PageMeta;
pub use not_found::NotFoundPage;
pub use showcase::ShowcasePage;
pub use team::TeamPage;
