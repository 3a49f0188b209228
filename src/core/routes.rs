//! Route table for the site
//!
//! Every page the router knows about is listed in [`Page::ALL`] together with
//! its path. Anything else resolves to [`Page::NotFound`].

use derive_more::Display;

/// A page of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Page {
    #[display("index")]
    Index,
    #[display("chat")]
    Chat,
    #[display("about")]
    About,
    #[display("features")]
    Features,
    #[display("auth")]
    Auth,
    #[display("team")]
    Team,
    #[display("showcase")]
    CardShowcase,
    #[display("helmet")]
    HelmetReveal,
    #[display("ghibli")]
    GhibliCastle,
    #[display("not-found")]
    NotFound,
}

impl Page {
    /// All pages reachable through a registered path, in navigation order
    pub const ALL: [Page; 9] = [
        Page::Index,
        Page::Chat,
        Page::About,
        Page::Features,
        Page::Auth,
        Page::Team,
        Page::CardShowcase,
        Page::HelmetReveal,
        Page::GhibliCastle,
    ];

    /// Registered path of the page, `None` for the catch-all
    pub fn path(self) -> Option<&'static str> {
        match self {
            Page::Index => Some("/"),
            Page::Chat => Some("/chat"),
            Page::About => Some("/about"),
            Page::Features => Some("/features"),
            Page::Auth => Some("/auth"),
            Page::Team => Some("/team"),
            Page::CardShowcase => Some("/showcase"),
            Page::HelmetReveal => Some("/helmet"),
            Page::GhibliCastle => Some("/ghibli"),
            Page::NotFound => None,
        }
    }

    /// Resolve a location path to a page.
    ///
    /// Matching is exact, apart from a single trailing slash which is ignored.
    pub fn from_path(path: &str) -> Page {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        Page::ALL
            .into_iter()
            .find(|page| page.path() == Some(path))
            .unwrap_or(Page::NotFound)
    }

    /// Whether the path is served by a page other than the catch-all
    pub fn is_registered(path: &str) -> bool {
        Page::from_path(path) != Page::NotFound
    }

    /// Heading text that tells the page apart from every other page
    pub fn heading(self) -> &'static str {
        match self {
            Page::Index => "Justice, Explained.",
            Page::Chat => "How can I help you understand Indian law today?",
            Page::About => "Rethinking How Law Meets Technology",
            Page::Features => "Legal AI, Done Right",
            Page::Auth => "Welcome Back",
            Page::Team => "SHOAIB SSM",
            Page::CardShowcase => "3D Card Showcase",
            Page::HelmetReveal => "Nyaya AI",
            Page::GhibliCastle => "Moving Castle",
            Page::NotFound => "Page Not Found",
        }
    }

    /// Document title
    pub fn title(self) -> &'static str {
        match self {
            Page::Index => "Nyaya AI - Justice, Explained. Law, Simplified.",
            Page::Chat => "Ask Nyaya - Nyaya AI",
            Page::About => "About - Nyaya AI",
            Page::Features => "Features - Nyaya AI",
            Page::Auth => "Sign In - Nyaya AI",
            Page::Team => "Team - Nyaya AI",
            Page::CardShowcase => "Card Showcase - Nyaya AI",
            Page::HelmetReveal => "Where Law Meets Intelligence - Nyaya AI",
            Page::GhibliCastle => "Moving Castle - Nyaya AI",
            Page::NotFound => "Page Not Found - Nyaya AI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_paths_resolve_to_their_page() {
        for page in Page::ALL {
            let path = page.path().unwrap();
            assert_eq!(Page::from_path(path), page, "path {path}");
        }
    }

    #[test]
    fn test_unregistered_path_is_not_found() {
        assert_eq!(Page::from_path("/pricing"), Page::NotFound);
        assert_eq!(Page::from_path("/chat/123"), Page::NotFound);
        assert_eq!(Page::from_path(""), Page::NotFound);
        assert!(!Page::is_registered("/docs"));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(Page::from_path("/about/"), Page::About);
        assert_eq!(Page::from_path("/"), Page::Index);
        assert_eq!(Page::from_path("/about//"), Page::NotFound);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(Page::from_path("/About"), Page::NotFound);
    }

    #[test]
    fn test_not_found_has_no_path() {
        assert!(Page::NotFound.path().is_none());
        assert!(!Page::ALL.contains(&Page::NotFound));
    }

    #[test]
    fn test_headings_are_distinct() {
        let mut headings: Vec<_> = Page::ALL.iter().map(|p| p.heading()).collect();
        headings.push(Page::NotFound.heading());
        let count = headings.len();
        headings.sort();
        headings.dedup();
        assert_eq!(headings.len(), count);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Page::CardShowcase.to_string(), "showcase");
        assert_eq!(Page::NotFound.to_string(), "not-found");
    }
}
