//! Core domain models and page logic for the Nyaya site

pub mod animation;
pub mod auth;
pub mod chat;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod nav;
pub mod notification;
pub mod routes;
pub mod storage;
pub mod theme;
#[cfg(test)]
mod tests;

pub use routes::Page;
pub use theme::Theme;
