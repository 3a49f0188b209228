use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::ui::pages::{
    AboutPage, AuthPage, ChatPage, FeaturesPage, GhibliPage, HelmetPage, IndexPage, NotFoundPage,
    ShowcasePage, TeamPage,
};
use crate::ui::common::{provide_tooltip_context, tooltip::DEFAULT_TOOLTIP_DELAY_MS};
use crate::ui::{Toaster, provide_notifications, provide_theme_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="preconnect" href="https://fonts.googleapis.com"/>
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;500;600;700&family=Inter:wght@400;500;600;700;800&display=swap"
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The theme raises a toast when it cannot be saved, so notifications come first
    provide_notifications();
    provide_theme_context();
    provide_tooltip_context(DEFAULT_TOOLTIP_DELAY_MS);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/nyaya.css"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=IndexPage/>
                <Route path=path!("/chat") view=ChatPage/>
                <Route path=path!("/about") view=AboutPage/>
                <Route path=path!("/features") view=FeaturesPage/>
                <Route path=path!("/auth") view=AuthPage/>
                <Route path=path!("/team") view=TeamPage/>
                <Route path=path!("/showcase") view=ShowcasePage/>
                <Route path=path!("/helmet") view=HelmetPage/>
                <Route path=path!("/ghibli") view=GhibliPage/>
            </Routes>
        </Router>

        <Toaster/>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::routes::Page;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower::ServiceExt;

    fn site() -> Router {
        let options = LeptosOptions::builder().output_name("nyaya").build();
        let routes = generate_route_list(App);

        Router::new()
            .leptos_routes(&options, routes, {
                let options = options.clone();
                move || shell(options.clone())
            })
            .fallback(leptos_axum::file_and_error_handler(shell))
            .with_state(options)
    }

    async fn get(path: &str) -> (StatusCode, String) {
        let request = Request::get(path).body(Body::empty()).unwrap();
        let response = site().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    /// Visible text of an HTML document, tags and hydration markers removed
    fn text_of(html: &str) -> String {
        let mut text = String::with_capacity(html.len());
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => text.push(c),
                _ => {}
            }
        }
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[tokio::test]
    async fn test_router_serves_exactly_the_page_table() {
        let mut served: Vec<String> = generate_route_list(App)
            .iter()
            .map(|listing| listing.path().to_string())
            .collect();
        served.sort();
        served.dedup();

        let mut registered: Vec<String> = Page::ALL
            .iter()
            .filter_map(|page| page.path())
            .map(str::to_string)
            .collect();
        registered.sort();

        assert_eq!(served, registered);
    }

    #[tokio::test]
    async fn test_each_route_renders_its_heading() {
        for page in Page::ALL {
            let Some(path) = page.path() else { continue };
            let (status, html) = get(path).await;

            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(
                text_of(&html).contains(page.heading()),
                "{path} is missing \"{}\"",
                page.heading()
            );
            assert!(html.contains(page.title()), "{path} has the wrong title");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found_with_404() {
        let (status, html) = get("/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(text_of(&html).contains(Page::NotFound.heading()));
    }
}
