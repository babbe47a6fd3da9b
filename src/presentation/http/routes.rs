// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{
    analytics, articles, auth, menu, public, settings, uploads, users,
};
use crate::presentation::http::middleware::rate_limit::login_rate_limit_layer;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use serde_json::json;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Router with a permissive CORS policy; tests and local tooling use this.
pub fn build_router(state: HttpState) -> Router {
    routes(state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&[]))
        .layer(Extension(state))
}

/// Router with the CORS allow-list from configuration.
pub fn build_router_with_origins(state: HttpState, allowed_origins: &[String]) -> Router {
    routes(state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn routes(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Public read API.
        .route("/api/articles", get(public::list_articles))
        .route("/api/articles/{slug}", get(public::get_article_by_slug))
        .route("/api/articles/{slug}/view", post(public::record_view))
        .route("/api/menu", get(public::menu_tree))
        .route("/api/settings", get(public::settings_map))
        // Session management.
        .route(
            "/api/admin/login",
            post(auth::login).layer(login_rate_limit_layer()),
        )
        .route("/api/admin/logout", post(auth::logout))
        .route("/api/admin/me", get(auth::me))
        // Admin content API.
        .route(
            "/api/admin/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/admin/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/admin/articles/{id}/versions",
            get(articles::list_versions),
        )
        .route(
            "/api/admin/articles/{id}/versions/{version}",
            get(articles::get_version),
        )
        .route(
            "/api/admin/menu",
            get(menu::list_items).post(menu::create_item),
        )
        .route("/api/admin/menu/reorder", put(menu::reorder))
        .route(
            "/api/admin/menu/{id}",
            put(menu::update_item).delete(menu::delete_item),
        )
        .route("/api/admin/menu/{id}/hidden", put(menu::set_hidden))
        .route(
            "/api/admin/menu/{id}/toggle-hidden",
            post(menu::toggle_hidden),
        )
        .route(
            "/api/admin/settings",
            get(settings::list_settings).put(settings::update_settings),
        )
        .route(
            "/api/admin/users",
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/api/admin/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        .route(
            "/api/admin/users/{id}/change-password",
            post(users::change_password),
        )
        .route("/api/admin/upload", post(uploads::upload))
        .route("/api/admin/analytics", get(analytics::report))
        .nest_service("/uploads", ServeDir::new(state.upload_dir.as_ref()))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(json!({ "status": "ok" }))
}
