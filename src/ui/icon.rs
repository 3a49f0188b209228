use leptos::prelude::*;

/// Stroke icon drawn inline, so it follows `currentColor`
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let body = svg_body(name).unwrap_or_else(|| {
        leptos::logging::warn!("unknown icon `{name}`");
        icons::FALLBACK
    });

    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=body
        />
    }
}

/// Inner SVG markup for a named icon
pub fn svg_body(name: &str) -> Option<&'static str> {
    icons::ALL
        .iter()
        .find(|(icon, _)| *icon == name)
        .map(|(_, body)| *body)
}

/// Icon names and their path data (24x24 grid, stroke only)
pub mod icons {
    pub const ALERT_TRIANGLE: &str = "alert-triangle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BOOK_OPEN: &str = "book-open";
    pub const BRAIN: &str = "brain";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CODE: &str = "code";
    pub const COMPASS: &str = "compass";
    pub const DATABASE: &str = "database";
    pub const DOLLAR_SIGN: &str = "dollar-sign";
    pub const EYE: &str = "eye";
    pub const EYE_OFF: &str = "eye-off";
    pub const FILE_TEXT: &str = "file-text";
    pub const GAVEL: &str = "gavel";
    pub const GITHUB: &str = "github";
    pub const GLOBE: &str = "globe";
    pub const GRADUATION_CAP: &str = "graduation-cap";
    pub const HEART: &str = "heart";
    pub const HOME: &str = "home";
    pub const INFO: &str = "info";
    pub const LIGHTBULB: &str = "lightbulb";
    pub const LOCK: &str = "lock";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const MESSAGE_SQUARE: &str = "message-square";
    pub const MOON: &str = "moon";
    pub const ROCKET: &str = "rocket";
    pub const SCALE: &str = "scale";
    pub const SEARCH: &str = "search";
    pub const SEND: &str = "send";
    pub const SHIELD: &str = "shield";
    pub const SPARKLES: &str = "sparkles";
    pub const SUN: &str = "sun";
    pub const TARGET: &str = "target";
    pub const USER: &str = "user";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";

    pub(super) const FALLBACK: &str = r#"<circle cx="12" cy="12" r="10"/>"#;

    pub(super) const ALL: &[(&str, &str)] = &[
        (
            ALERT_TRIANGLE,
            r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#,
        ),
        (
            ARROW_LEFT,
            r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#,
        ),
        (
            ARROW_RIGHT,
            r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
        ),
        (
            BOOK_OPEN,
            r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#,
        ),
        (
            BRAIN,
            r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/><path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/><path d="M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4"/>"#,
        ),
        (
            CHECK_CIRCLE,
            r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="m9 11 3 3L22 4"/>"#,
        ),
        (CHEVRON_RIGHT, r#"<path d="m9 18 6-6-6-6"/>"#),
        (
            CODE,
            r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
        ),
        (
            COMPASS,
            r#"<circle cx="12" cy="12" r="10"/><polygon points="16.24 7.76 14.12 14.12 7.76 16.24 9.88 9.88 16.24 7.76"/>"#,
        ),
        (
            DATABASE,
            r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5V19A9 3 0 0 0 21 19V5"/><path d="M3 12A9 3 0 0 0 21 12"/>"#,
        ),
        (
            DOLLAR_SIGN,
            r#"<line x1="12" x2="12" y1="2" y2="22"/><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>"#,
        ),
        (
            EYE,
            r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/><circle cx="12" cy="12" r="3"/>"#,
        ),
        (
            EYE_OFF,
            r#"<path d="M9.88 9.88a3 3 0 1 0 4.24 4.24"/><path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68"/><path d="M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61"/><line x1="2" x2="22" y1="2" y2="22"/>"#,
        ),
        (
            FILE_TEXT,
            r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#,
        ),
        (
            GAVEL,
            r#"<path d="m14 13-7.5 7.5c-.83.83-2.17.83-3 0a2.12 2.12 0 0 1 0-3L11 10"/><path d="m16 16 6-6"/><path d="m8 8 6-6"/><path d="m9 7 8 8"/><path d="m21 11-8-8"/>"#,
        ),
        (
            GITHUB,
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
        ),
        (
            GLOBE,
            r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#,
        ),
        (
            GRADUATION_CAP,
            r#"<path d="M22 10v6M2 10l10-5 10 5-10 5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#,
        ),
        (
            HEART,
            r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#,
        ),
        (
            HOME,
            r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#,
        ),
        (
            INFO,
            r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
        ),
        (
            LIGHTBULB,
            r#"<path d="M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"/><path d="M9 18h6"/><path d="M10 22h4"/>"#,
        ),
        (
            LOCK,
            r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#,
        ),
        (
            MAIL,
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        ),
        (
            MAP_PIN,
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
        ),
        (
            MENU,
            r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
        ),
        (
            MESSAGE_SQUARE,
            r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#,
        ),
        (MOON, r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#),
        (
            ROCKET,
            r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/><path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/><path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#,
        ),
        (
            SCALE,
            r#"<path d="m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/><path d="m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/><path d="M7 21h10"/><path d="M12 3v18"/><path d="M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2"/>"#,
        ),
        (
            SEARCH,
            r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
        ),
        (
            SEND,
            r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
        ),
        (
            SHIELD,
            r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#,
        ),
        (
            SPARKLES,
            r#"<path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z"/><path d="M5 3v4"/><path d="M19 17v4"/><path d="M3 5h4"/><path d="M17 19h4"/>"#,
        ),
        (
            SUN,
            r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
        ),
        (
            TARGET,
            r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#,
        ),
        (
            USER,
            r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
        ),
        (
            USERS,
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        ),
        (X, r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#),
        (
            ZAP,
            r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::FormField;
    use crate::core::chat::SUGGESTED_QUERIES;
    use crate::core::content::{
        AUDIENCES, CAPABILITIES, ETHICS, FEATURE_HIGHLIGHTS, PRINCIPLES, PROBLEMS, TECH_STACK,
        TRUST_INDICATORS, UPCOMING_FEATURES, VISION_POINTS,
    };

    #[test]
    fn test_every_content_icon_exists() {
        let names = TRUST_INDICATORS
            .iter()
            .chain(PROBLEMS)
            .chain(PRINCIPLES)
            .chain(ETHICS)
            .chain(UPCOMING_FEATURES)
            .map(|c| c.icon)
            .chain(CAPABILITIES.iter().map(|c| c.icon))
            .chain(AUDIENCES.iter().map(|a| a.icon))
            .chain(VISION_POINTS.iter().map(|v| v.icon))
            .chain(TECH_STACK.iter().map(|t| t.icon))
            .chain(FEATURE_HIGHLIGHTS.iter().map(|f| f.icon))
            .chain(SUGGESTED_QUERIES.iter().map(|q| q.icon))
            .chain(
                [FormField::FullName, FormField::Email, FormField::Password]
                    .into_iter()
                    .map(FormField::icon),
            );

        for name in names {
            assert!(svg_body(name).is_some(), "missing icon {name}");
        }
    }

    #[test]
    fn test_icon_names_unique() {
        for (i, (name, _)) in icons::ALL.iter().enumerate() {
            assert!(
                icons::ALL[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate icon {name}"
            );
        }
    }

    #[test]
    fn test_unknown_icon() {
        assert!(svg_body("does-not-exist").is_none());
    }
}
