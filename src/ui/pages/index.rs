use leptos::prelude::*;

use super::PageMeta;
use crate::core::routes::Page;
use crate::ui::home::{
    AudienceSection, CtaSection, FeaturesSection, HeroSection, ProblemSection, SolutionSection,
    VisionSection,
};
use crate::ui::layout::SiteLayout;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <PageMeta page=Page::Index />
        <SiteLayout>
            <HeroSection />
            <ProblemSection />
            <SolutionSection />
            <FeaturesSection />
            <AudienceSection />
            <VisionSection />
            <CtaSection />
        </SiteLayout>
    }
}
