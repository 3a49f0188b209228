#[cfg(test)]
mod tests {
    use crate::core::auth::AuthMode;
    use crate::core::chat::{ChatPhase, Conversation, MessageRole, SUGGESTED_QUERIES};
    use crate::core::content::{FOOTER_COLUMNS, NAV_LINKS};
    use crate::core::nav::{MenuState, is_active};
    use crate::core::routes::Page;
    use crate::core::storage::{MemoryStorage, PreferenceStorage};
    use crate::core::theme::{THEME_STORAGE_KEY, Theme, ThemeStore};

    #[test]
    fn test_every_registered_path_has_its_heading() {
        for page in Page::ALL {
            let path = page.path().unwrap();
            assert_eq!(Page::from_path(path).heading(), page.heading());
        }
        assert_eq!(Page::from_path("/nope").heading(), "Page Not Found");
    }

    #[test]
    fn test_exactly_one_nav_link_active_on_nav_pages() {
        for link in NAV_LINKS {
            let active: Vec<_> = NAV_LINKS
                .iter()
                .filter(|other| is_active(link.href, other.href))
                .collect();
            assert_eq!(active.len(), 1, "{}", link.href);
        }
        assert!(!NAV_LINKS.iter().any(|l| is_active("/team", l.href)));
    }

    #[test]
    fn test_footer_links_split_into_pages_and_404s() {
        let resolved: Vec<(&str, Page)> = FOOTER_COLUMNS
            .iter()
            .flat_map(|column| column.links)
            .map(|link| (link.href, Page::from_path(link.href)))
            .collect();

        let served: Vec<_> = resolved.iter().filter(|(_, page)| *page != Page::NotFound).collect();
        assert_eq!(
            served,
            [&("/features", Page::Features), &("/chat", Page::Chat), &("/about", Page::About)]
        );

        // Unbuilt pages fall through to the 404 page
        let missing: Vec<&str> = resolved
            .iter()
            .filter(|(_, page)| *page == Page::NotFound)
            .map(|(href, _)| *href)
            .collect();
        assert_eq!(
            missing,
            [
                "/pricing", "/api", "/docs", "/glossary", "/cases", "/blog", "/careers",
                "/contact", "/press", "/terms", "/privacy", "/disclaimer", "/ethics",
            ]
        );
    }

    #[test]
    fn test_mobile_menu_closes_on_link_activation() {
        let menu = MenuState::default().toggle();
        assert!(menu.is_open());
        assert!(!menu.close().is_open());
        assert_eq!(menu.toggle().toggle(), menu);
    }

    #[test]
    fn test_theme_toggle_twice_round_trips_storage() {
        let storage = MemoryStorage::with_value(THEME_STORAGE_KEY, "dark");
        let mut store = ThemeStore::load(storage, false);
        let before_class = store.get().root_class();

        store.toggle().unwrap();
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(
            store.storage().get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );

        store.toggle().unwrap();
        assert_eq!(store.get().root_class(), before_class);
        assert_eq!(
            store.storage().get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_suggested_query_matches_typed_query() {
        let suggestion = SUGGESTED_QUERIES[0];

        let mut typed = Conversation::new();
        let typed_ticket = typed.submit(suggestion.query).unwrap();
        typed.deliver(&typed_ticket);

        let mut clicked = Conversation::new();
        let clicked_ticket = clicked.submit(suggestion.query).unwrap();
        clicked.deliver(&clicked_ticket);

        let shape = |c: &Conversation| {
            c.messages()
                .iter()
                .map(|m| (m.role, m.content.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(shape(&typed), shape(&clicked));
    }

    #[test]
    fn test_section_420_flow() {
        let mut chat = Conversation::new();
        assert_eq!(chat.phase(), ChatPhase::Empty);

        let ticket = chat.submit("What is Section 420?").unwrap();
        let users: Vec<_> = chat
            .messages()
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .collect();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].content, "What is Section 420?");

        chat.deliver(&ticket);
        let replies: Vec<_> = chat
            .messages()
            .iter()
            .filter(|m| m.role == MessageRole::Assistant)
            .collect();
        assert_eq!(replies.len(), 1);
        assert!(replies[0].content.contains("What is Section 420?"));
        assert_eq!(chat.phase(), ChatPhase::Conversing);
    }

    #[test]
    fn test_unmount_before_reply_leaves_one_message() {
        let mut chat = Conversation::new();
        let ticket = chat.submit("bail conditions").unwrap();

        // Page unmounts, then the timer fires
        chat.cancel();
        assert!(chat.deliver(&ticket).is_none());
        assert_eq!(chat.len(), 1);
    }

    #[test]
    fn test_auth_heading_matches_route_heading() {
        assert_eq!(AuthMode::default().heading(), Page::Auth.heading());
    }
}
