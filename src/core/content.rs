//! Static site copy
//!
//! Every informational block on the site is a const slice of plain records.
//! Views map over these; nothing here changes at runtime.

use derive_more::Display;

/// A link in the navbar or footer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Primary navigation, in display order
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/features", label: "Features" },
    NavLink { href: "/chat", label: "Ask Nyaya" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

/// Footer link columns. Several targets are not built yet and land on the 404 page.
pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            NavLink { href: "/features", label: "Features" },
            NavLink { href: "/chat", label: "Ask Nyaya" },
            NavLink { href: "/pricing", label: "Pricing" },
            NavLink { href: "/api", label: "API Access" },
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            NavLink { href: "/docs", label: "Documentation" },
            NavLink { href: "/glossary", label: "Legal Glossary" },
            NavLink { href: "/cases", label: "Case Studies" },
            NavLink { href: "/blog", label: "Blog" },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            NavLink { href: "/about", label: "About Us" },
            NavLink { href: "/careers", label: "Careers" },
            NavLink { href: "/contact", label: "Contact" },
            NavLink { href: "/press", label: "Press Kit" },
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            NavLink { href: "/terms", label: "Terms of Service" },
            NavLink { href: "/privacy", label: "Privacy Policy" },
            NavLink { href: "/disclaimer", label: "Disclaimer" },
            NavLink { href: "/ethics", label: "Ethics Policy" },
        ],
    },
];

pub const CONTACT_EMAIL: &str = "contact@nyaya.ai";
pub const CONTACT_LOCATION: &str = "New Delhi, India";

/// Icon, title and a sentence. Used by most card grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn card(icon: &'static str, title: &'static str, description: &'static str) -> InfoCard {
    InfoCard {
        icon,
        title,
        description,
    }
}

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

pub const TRUST_INDICATORS: &[InfoCard] = &[
    card("book-open", "Grounded in Law", "Citations & References"),
    card("shield", "Privacy First", "Secure & Confidential"),
    card("scale", "Ethical AI", "Transparent & Honest"),
];

pub const PROBLEMS: &[InfoCard] = &[
    card(
        "search",
        "Vast & Fragmented",
        "Indian law spans constitutions, statutes, judgments, circulars, and amendments across multiple jurisdictions.",
    ),
    card(
        "lock",
        "Dense Legal Language",
        "Complex terminology makes legal documents inaccessible to non-experts and ordinary citizens.",
    ),
    card(
        "alert-triangle",
        "Hard to Search",
        "Finding contextually relevant information across timelines and precedents requires specialized expertise.",
    ),
    card(
        "dollar-sign",
        "Expensive to Interpret",
        "Professional legal consultation remains costly and out of reach for most Indians.",
    ),
];

pub const PRINCIPLES: &[InfoCard] = &[
    card(
        "target",
        "Accuracy over Answers",
        "We prioritize correct information over fast responses. Every output is grounded in verifiable legal sources.",
    ),
    card(
        "eye",
        "Explainability over Speed",
        "Understand the reasoning behind every answer with step-by-step legal analysis and citations.",
    ),
    card(
        "compass",
        "Context over Generalization",
        "Built specifically for Indian law, not generic global legal guesses.",
    ),
    card(
        "heart",
        "Ethics over Shortcuts",
        "Clear disclaimers, honest limitations, and human-in-the-loop philosophy.",
    ),
];

/// What a capability card shows under its description
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityDetail {
    /// A sample question and what the answer covers
    Example {
        question: &'static str,
        points: &'static [&'static str],
    },
    Tags(&'static [&'static str]),
    ComingSoon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capability {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub detail: CapabilityDetail,
}

impl Capability {
    pub fn is_planned(&self) -> bool {
        matches!(self.detail, CapabilityDetail::ComingSoon)
    }
}

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        icon: "search",
        title: "Legal Query Understanding",
        description: "Ask questions in plain language. Nyaya AI interprets intent, identifies relevant legal domains, and responds with structured explanations grounded in Indian law.",
        detail: CapabilityDetail::Example {
            question: "What happens if a company doesn't pay PF contributions?",
            points: &[
                "Relevant acts and sections",
                "Obligations and penalties",
                "Real-world implications",
                "Citations and references",
            ],
        },
    },
    Capability {
        icon: "book-open",
        title: "Indian Law Knowledge Base",
        description: "Built using the Constitution of India, Central and State statutes, Supreme Court and High Court judgments, and government notifications.",
        detail: CapabilityDetail::Tags(&[
            "Constitution of India",
            "Central & State Statutes",
            "SC & HC Judgments",
            "Government Circulars",
        ]),
    },
    Capability {
        icon: "brain",
        title: "Explainable AI Outputs",
        description: "Instead of a single opaque answer, Nyaya AI provides step-by-step reasoning, legal grounding, and clear disclaimers.",
        detail: CapabilityDetail::Tags(&[
            "Step-by-step reasoning",
            "Section & Act citations",
            "Scope boundaries",
            "Judgment references",
        ]),
    },
    Capability {
        icon: "globe",
        title: "Multilingual & Inclusive",
        description: "India is multilingual and law shouldn't be English-only. Designed to support regional languages and simple explanations.",
        detail: CapabilityDetail::ComingSoon,
    },
    Capability {
        icon: "shield",
        title: "Privacy-First Design",
        description: "Legal questions are sensitive. No unnecessary data collection, secure query handling, and no resale of queries.",
        detail: CapabilityDetail::Tags(&[
            "Minimal data collection",
            "Secure processing",
            "No query resale",
            "Controlled inference",
        ]),
    },
];

/// Accent colour of an audience card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Emerald,
    Amber,
    Purple,
}

impl Tone {
    /// (icon classes, tile background)
    pub fn classes(self) -> (&'static str, &'static str) {
        match self {
            Tone::Blue => ("w-7 h-7 text-blue-600", "bg-blue-50"),
            Tone::Emerald => ("w-7 h-7 text-emerald-600", "bg-emerald-50"),
            Tone::Amber => ("w-7 h-7 text-amber-600", "bg-amber-50"),
            Tone::Purple => ("w-7 h-7 text-purple-600", "bg-purple-50"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudienceRecord {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

pub const AUDIENCES: &[AudienceRecord] = &[
    AudienceRecord {
        icon: "users",
        title: "Citizens",
        description: "Understand your rights, duties, and legal processes. Get clarity before seeking professional help.",
        tone: Tone::Blue,
    },
    AudienceRecord {
        icon: "graduation-cap",
        title: "Students",
        description: "Learn Indian law intuitively. Prepare for exams, debates, moot courts, and case analysis.",
        tone: Tone::Emerald,
    },
    AudienceRecord {
        icon: "rocket",
        title: "Startups & MSMEs",
        description: "Understand compliance basics. Interpret regulations without expensive legal consultations.",
        tone: Tone::Amber,
    },
    AudienceRecord {
        icon: "scale",
        title: "Lawyers & Researchers",
        description: "Faster legal research. Case summarization, cross-reference support, and drafting assistance.",
        tone: Tone::Purple,
    },
];

/// The "What Nyaya AI Is NOT" list
pub const BOUNDARIES: &[&str] = &[
    "Does not provide binding legal advice",
    "Does not replace licensed professionals",
    "Does not fabricate or guess answers",
    "Does not hide uncertainty",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisionPoint {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const VISION_POINTS: &[VisionPoint] = &[
    VisionPoint {
        icon: "lightbulb",
        text: "Legal literacy is accessible, not elite",
    },
    VisionPoint {
        icon: "shield",
        text: "AI strengthens democratic access to law",
    },
    VisionPoint {
        icon: "book-open",
        text: "Indian legal knowledge is preserved and modernized",
    },
    VisionPoint {
        icon: "heart",
        text: "Technology empowers justice, not shortcuts it",
    },
];

pub const MISSION_STATEMENT: &str = "We aim to build one of India's first foundational legal intelligence systems, rooted in Indian values, data, and realities.";

// ---------------------------------------------------------------------------
// About page
// ---------------------------------------------------------------------------

pub const ETHICS: &[InfoCard] = &[
    card(
        "shield",
        "No Hallucinated Claims",
        "Every legal reference is grounded in verifiable sources.",
    ),
    card(
        "eye",
        "Clear Disclaimers",
        "All outputs include scope boundaries and limitations.",
    ),
    card(
        "brain",
        "Explainable Reasoning",
        "Understand the logic behind every answer.",
    ),
    card(
        "heart",
        "Human-in-the-Loop",
        "AI assists understanding. Humans make decisions.",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
}

pub const TECH_STACK: &[TechItem] = &[
    TechItem {
        icon: "code",
        label: "Python & FastAPI",
        desc: "Backend APIs",
    },
    TechItem {
        icon: "brain",
        label: "LLMs",
        desc: "Domain-adapted models",
    },
    TechItem {
        icon: "zap",
        label: "NLP Pipelines",
        desc: "Legal entity extraction",
    },
    TechItem {
        icon: "database",
        label: "Vector Databases",
        desc: "Semantic legal search",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum PhaseStatus {
    Current,
    Planned,
    Future,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoadmapPhase {
    pub phase: &'static str,
    pub status: PhaseStatus,
    pub items: &'static [&'static str],
}

impl RoadmapPhase {
    pub fn is_current(&self) -> bool {
        self.status == PhaseStatus::Current
    }

    pub fn card_class(&self) -> &'static str {
        if self.is_current() {
            "p-6 rounded-lg border shadow-page bg-primary/5 border-gold/30"
        } else {
            "p-6 rounded-lg border shadow-page bg-card border-border"
        }
    }

    pub fn badge_class(&self) -> &'static str {
        if self.is_current() {
            "text-xs font-medium px-2 py-0.5 rounded bg-gold/20 text-gold"
        } else {
            "text-xs font-medium px-2 py-0.5 rounded bg-muted text-muted-foreground"
        }
    }
}

pub const ROADMAP: &[RoadmapPhase] = &[
    RoadmapPhase {
        phase: "Phase 1",
        status: PhaseStatus::Current,
        items: &[
            "Core legal Q&A",
            "Explainable responses",
            "Web platform launch",
        ],
    },
    RoadmapPhase {
        phase: "Phase 2",
        status: PhaseStatus::Planned,
        items: &[
            "Judgment summarization",
            "Multilingual support",
            "Legal education tools",
        ],
    },
    RoadmapPhase {
        phase: "Phase 3",
        status: PhaseStatus::Future,
        items: &[
            "Advanced research tools",
            "Academic partnerships",
            "Offline deployments",
        ],
    },
];

// ---------------------------------------------------------------------------
// Features page
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

/// Odd rows put the icon on the right
pub fn highlight_row_class(index: usize) -> &'static str {
    if index % 2 == 1 {
        "flex flex-col lg:flex-row-reverse gap-8 items-start"
    } else {
        "flex flex-col lg:flex-row gap-8 items-start"
    }
}

pub const FEATURE_HIGHLIGHTS: &[FeatureHighlight] = &[
    FeatureHighlight {
        icon: "search",
        title: "Natural Language Queries",
        description: "Ask questions in plain Hindi or English. No legal jargon required: Nyaya AI interprets your intent and identifies the relevant legal domains automatically.",
        details: &[
            "Intent recognition across 50+ legal domains",
            "Support for colloquial and formal language",
            "Context-aware follow-up questions",
        ],
    },
    FeatureHighlight {
        icon: "book-open",
        title: "Indian Legal Knowledge Base",
        description: "Built on comprehensive Indian legal sources including the Constitution, Central and State statutes, landmark judgments, and government notifications.",
        details: &[
            "Constitution of India (all articles & amendments)",
            "Central Acts and State legislations",
            "Supreme Court & High Court judgments",
            "Government circulars and notifications",
        ],
    },
    FeatureHighlight {
        icon: "brain",
        title: "Explainable AI",
        description: "No black boxes. Every answer comes with step-by-step reasoning, section citations, and clear disclaimers about scope and limitations.",
        details: &[
            "Transparent reasoning chains",
            "Direct citations to source material",
            "Confidence indicators",
            "Limitation acknowledgments",
        ],
    },
    FeatureHighlight {
        icon: "shield",
        title: "Privacy-First Architecture",
        description: "Legal questions are sensitive. Nyaya AI is built with privacy at its core: minimal data collection, secure processing, and no resale of queries.",
        details: &[
            "End-to-end encryption",
            "Minimal data retention",
            "No third-party data sharing",
            "Audit-ready logging",
        ],
    },
];

pub const UPCOMING_FEATURES: &[InfoCard] = &[
    card(
        "globe",
        "Multilingual Support",
        "Access legal information in Hindi, Tamil, Bengali, and more regional languages.",
    ),
    card(
        "file-text",
        "Document Analysis",
        "Upload contracts, agreements, or legal documents for plain-language summaries.",
    ),
    card(
        "sparkles",
        "Case Law Research",
        "Deep-dive into precedents with semantic search across thousands of judgments.",
    ),
];

// ---------------------------------------------------------------------------
// Team page
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    /// Upper-case name used as the section heading
    pub display_name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    /// Portrait sits lower than the baseline on wide screens
    pub offset_down: bool,
}

impl TeamMember {
    /// Letter shown on the placeholder avatar
    pub fn initial(&self) -> char {
        self.display_name.chars().next().unwrap_or('?')
    }
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Shoaib SSM",
        display_name: "SHOAIB SSM",
        role: "LEADING WITH VISION",
        description: "As Team Lead and Backend Developer, Shoaib drives the Nyaya AI project with expertise in architecture, model finetuning, and RAG implementation. His passion lies in making legal knowledge accessible to everyone through intelligent AI systems.",
        image: Some("/team/shoaib.jpeg"),
        offset_down: true,
    },
    TeamMember {
        name: "Vignesh Reddy",
        display_name: "VIGNESH REDDY",
        role: "DEPLOYMENT EXCELLENCE",
        description: "Specializing in deployment pipelines, backend development, and AI model optimization. Vignesh ensures seamless integration of finetuned models and RAG systems for production-ready performance.",
        image: None,
        offset_down: false,
    },
    TeamMember {
        name: "Jinal Thakkar",
        display_name: "JINAL THAKKAR",
        role: "CREATIVE DESIGN",
        description: "Crafting beautiful user experiences through thoughtful graphic design and modern frontend development. Jinal brings creative vision to life with pixel-perfect implementation and artistic flair.",
        image: Some("/team/jinal.jpeg"),
        offset_down: false,
    },
    TeamMember {
        name: "Nidhi Shah",
        display_name: "NIDHI SHAH",
        role: "VISUAL INNOVATION",
        description: "Combining artistic design sensibility with technical frontend expertise. Nidhi creates engaging visual interfaces that make complex legal information intuitive and accessible to all users.",
        image: Some("/team/nidhi.png"),
        offset_down: false,
    },
];

// ---------------------------------------------------------------------------
// Card showcase
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Swatches; clicking the n-th one applies [`crate::core::animation::showcase::card_filter`]
    pub colors: &'static [&'static str],
    pub bg_color: &'static str,
    pub text_color: &'static str,
    /// Breakpoint visibility
    pub visibility: &'static str,
}

pub const SHOWCASE_CARDS: &[ShowcaseCard] = &[
    ShowcaseCard {
        title: "LeafKey",
        description: "A keyboard that brings the tranquility of the forest to your fingertips.",
        image: "https://images.unsplash.com/photo-1618384887929-16ec33fab9ef?w=400&h=500&fit=crop",
        colors: &["#7da072", "#5a8a4f", "#8cb580"],
        bg_color: "hsl(var(--primary))",
        text_color: "hsl(var(--primary-foreground))",
        visibility: "hidden sm:flex",
    },
    ShowcaseCard {
        title: "TopoKey",
        description: "Custom illuminated keyboard with neon topology mapped out in every key.",
        image: "https://images.unsplash.com/photo-1595225476474-87563907a212?w=400&h=500&fit=crop",
        colors: &["#2e2e2e", "#1a1a1a", "#404040"],
        bg_color: "hsl(var(--card))",
        text_color: "hsl(var(--card-foreground))",
        visibility: "flex",
    },
    ShowcaseCard {
        title: "PandaKey",
        description: "Panda, panda, panda, panda, panda, panda... panda",
        image: "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400&h=500&fit=crop",
        colors: &["#ffffff", "#f0f0f0", "#e0e0e0"],
        bg_color: "hsl(var(--secondary))",
        text_color: "hsl(var(--secondary-foreground))",
        visibility: "hidden md:flex",
    },
];

// ---------------------------------------------------------------------------
// Helmet reveal
// ---------------------------------------------------------------------------

/// Legend next to the reveal scene: (dot class, title, caption)
pub const HELMET_LEGEND: &[(&str, &str, &str)] = &[
    (
        "bg-blue-400 animate-pulse",
        "AI Core",
        "Neural processing center analyzing legal frameworks",
    ),
    (
        "bg-gold",
        "Justice Scales",
        "Symbolizing balanced legal analysis",
    ),
    (
        "bg-gold-light",
        "Document Rings",
        "Orbiting statutes, precedents & case law",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routes::Page;

    #[test]
    fn test_nav_links_target_registered_routes() {
        for link in NAV_LINKS {
            assert!(Page::is_registered(link.href), "{}", link.href);
        }
    }

    #[test]
    fn test_footer_columns_have_four_links() {
        assert_eq!(FOOTER_COLUMNS.len(), 4);
        for column in FOOTER_COLUMNS {
            assert_eq!(column.links.len(), 4, "{}", column.title);
        }
    }

    #[test]
    fn test_only_one_capability_is_planned() {
        let planned: Vec<_> = CAPABILITIES.iter().filter(|c| c.is_planned()).collect();
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].title, "Multilingual & Inclusive");
    }

    #[test]
    fn test_exactly_one_current_roadmap_phase() {
        let current: Vec<_> = ROADMAP.iter().filter(|p| p.is_current()).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].phase, "Phase 1");
        assert_ne!(ROADMAP[0].card_class(), ROADMAP[1].card_class());
        assert_eq!(PhaseStatus::Planned.to_string(), "Planned");
    }

    #[test]
    fn test_highlight_rows_alternate() {
        assert!(!highlight_row_class(0).contains("reverse"));
        assert!(highlight_row_class(1).contains("lg:flex-row-reverse"));
        assert!(!highlight_row_class(2).contains("reverse"));
    }

    #[test]
    fn test_team_member_initial() {
        let vignesh = TEAM.iter().find(|m| m.image.is_none()).unwrap();
        assert_eq!(vignesh.initial(), 'V');
        assert_eq!(TEAM[0].display_name, Page::Team.heading());
    }

    #[test]
    fn test_showcase_cards_have_three_swatches() {
        assert_eq!(SHOWCASE_CARDS.len(), 3);
        assert!(SHOWCASE_CARDS.iter().all(|c| c.colors.len() == 3));
    }
}
