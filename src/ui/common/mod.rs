//! Common reusable UI components
//!
//! Building blocks shared by the home sections and the content pages.

pub mod feature_card;
pub mod icon_box;
pub mod section;
pub mod tooltip;

pub use feature_card::{FeatureCard, TagList};
pub use icon_box::{Accent, IconBox, IconBoxSize};
pub use section::{Section, SectionHeader, SectionVariant};
pub use tooltip::{Tooltip, TooltipPosition, provide_tooltip_context};
