pub mod animation;
pub mod common;
pub mod home;
pub mod icon;
pub mod layout;
pub mod markdown;
pub mod notifications;
pub mod pages;
pub mod theme;

pub use icon::{Icon, icons};
pub use notifications::{Toaster, provide_notifications, use_notifications};
pub use theme::{provide_theme_context, use_theme_context};
