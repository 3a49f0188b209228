#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use axum::http::{HeaderValue, header};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use nyaya::app::*;
    use nyaya::core::config::Config;
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tower_http::set_header::SetResponseHeaderLayer;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    tracing::info!(
        "Config loaded: compression={}, precompressed={}, asset_max_age={:?}",
        config.compression,
        config.precompressed,
        config.asset_max_age
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    let mut pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root));
    if config.precompressed {
        pkg_service = pkg_service.precompressed_br().precompressed_gzip();
    }
    let cache_control = config
        .cache_control()
        .map(|value| HeaderValue::from_str(&value))
        .transpose()?;

    let pkg_router = match cache_control {
        Some(value) => Router::new()
            .fallback_service(pkg_service)
            .layer(SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, value)),
        None => Router::new().fallback_service(pkg_service),
    };

    let mut app = Router::new()
        .nest_service("/pkg", pkg_router)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    if config.compression {
        // Compresses responses > 1KB, skips already compressed formats
        app = app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );
    }

    tracing::info!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
