//! Sections of the home page, in page order

mod audience;
mod cta;
mod features;
mod hero;
mod problem;
mod solution;
mod vision;

pub use audience::AudienceSection;
pub use cta::CtaSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
pub use problem::ProblemSection;
pub use solution::SolutionSection;
pub use vision::VisionSection;
