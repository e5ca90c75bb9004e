//! TeamOps Dashboard Backend
//!
//! A REST backend for team operations: flat-file CRUD resources, a daily
//! email digest, and optional issue-tracker polling.

mod api;
mod auth;
mod config;
mod errors;
mod jira;
mod mailer;
mod models;
mod scheduler;
mod store;
mod summary;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::Config;
use jira::JiraClient;
use mailer::Mailer;
use store::{JsonStore, Repository};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub sessions: Arc<SessionStore>,
    pub mailer: Arc<Mailer>,
    pub jira: Arc<JiraClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TeamOps Dashboard Backend");
    tracing::info!("Data directory: {:?}", config.data_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    if !config.email_enabled {
        tracing::info!("Outbound email is disabled (TEAMOPS_EMAIL_ENABLED)");
    }
    if !config.jira_enabled {
        tracing::info!("Jira polling is disabled (TEAMOPS_JIRA_ENABLED)");
    }

    // Open the record store
    let store = JsonStore::open(&config.data_dir).await?;
    let repo = Arc::new(Repository::new(store));
    seed_default_admin(&repo).await?;

    // Create application state
    let state = AppState {
        repo,
        sessions: Arc::new(SessionStore::new(config.session_ttl_hours)),
        mailer: Arc::new(Mailer::new(&config)),
        jira: Arc::new(JiraClient::new(&config)),
        config: Arc::new(config.clone()),
    };

    // Start the daily digest loop
    scheduler::spawn_daily_digest(state.clone());

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Seed an admin account into an empty user store so a fresh deployment can
/// log in at all.
async fn seed_default_admin(repo: &Repository) -> Result<(), errors::AppError> {
    let users: Vec<models::User> = repo.list().await;
    if !users.is_empty() {
        return Ok(());
    }

    repo.create(models::User {
        id: 0,
        username: "admin".to_string(),
        password: auth::hash_password("admin"),
        role: "admin".to_string(),
        name: "Administrator".to_string(),
    })
    .await?;

    tracing::warn!("Seeded default admin user (admin/admin). Change this password immediately.");
    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the session store for the auth layer
    let sessions = state.sessions.clone();

    // Everything here requires a valid session
    let protected_routes = Router::new()
        // Session
        .route("/auth/logout", post(api::logout))
        .route("/auth/me", get(api::current_session))
        // Dashboard
        .route("/dashboard/stats", get(api::dashboard_stats))
        // Leaves
        .route("/leaves", get(api::list_leaves))
        .route("/leaves", post(api::create_leave))
        .route("/leaves/{id}", get(api::get_leave))
        .route("/leaves/{id}", put(api::update_leave))
        .route("/leaves/{id}", delete(api::delete_leave))
        // Accomplishments
        .route("/accomplishments", get(api::list_accomplishments))
        .route("/accomplishments", post(api::create_accomplishment))
        .route("/accomplishments/{id}", get(api::get_accomplishment))
        .route("/accomplishments/{id}", put(api::update_accomplishment))
        .route("/accomplishments/{id}", delete(api::delete_accomplishment))
        // Inventory
        .route("/inventory", get(api::list_inventory))
        .route("/inventory", post(api::create_inventory_item))
        .route("/inventory/{id}", get(api::get_inventory_item))
        .route("/inventory/{id}", put(api::update_inventory_item))
        .route("/inventory/{id}", delete(api::delete_inventory_item))
        // Servers
        .route("/servers", get(api::list_servers))
        .route("/servers", post(api::create_server))
        .route("/servers/{id}", get(api::get_server))
        .route("/servers/{id}", put(api::update_server))
        .route("/servers/{id}", delete(api::delete_server))
        // Builds
        .route("/builds", get(api::list_builds))
        .route("/builds", post(api::create_build))
        .route("/builds/{id}", get(api::get_build))
        .route("/builds/{id}", put(api::update_build))
        .route("/builds/{id}", delete(api::delete_build))
        // Links
        .route("/links", get(api::list_links))
        .route("/links", post(api::create_link))
        .route("/links/{id}", get(api::get_link))
        .route("/links/{id}", put(api::update_link))
        .route("/links/{id}", delete(api::delete_link))
        // Announcements
        .route("/announcements", get(api::list_announcements))
        .route("/announcements", post(api::create_announcement))
        .route("/announcements/{id}", get(api::get_announcement))
        .route("/announcements/{id}", put(api::update_announcement))
        .route("/announcements/{id}", delete(api::delete_announcement))
        // Celebrations
        .route("/celebrations", get(api::list_celebrations))
        .route("/celebrations", post(api::create_celebration))
        .route("/celebrations/{id}", get(api::get_celebration))
        .route("/celebrations/{id}", put(api::update_celebration))
        .route("/celebrations/{id}", delete(api::delete_celebration))
        // Skills
        .route("/skills", get(api::list_skills))
        .route("/skills", post(api::create_skill))
        .route("/skills/matrix", get(api::skills_matrix))
        .route("/skills/{id}", get(api::get_skill))
        .route("/skills/{id}", put(api::update_skill))
        .route("/skills/{id}", delete(api::delete_skill))
        // Meetings
        .route("/meetings", get(api::list_meetings))
        .route("/meetings", post(api::create_meeting))
        .route("/meetings/{id}", get(api::get_meeting))
        .route("/meetings/{id}", put(api::update_meeting))
        .route("/meetings/{id}", delete(api::delete_meeting))
        // Tasks
        .route("/tasks", get(api::list_tasks))
        .route("/tasks", post(api::create_task))
        .route("/tasks/{id}", get(api::get_task))
        .route("/tasks/{id}", put(api::update_task))
        .route("/tasks/{id}", delete(api::delete_task))
        // Users (admin-only, enforced in the handlers)
        .route("/users", get(api::list_users))
        .route("/users", post(api::create_user))
        .route("/users/{id}", get(api::get_user))
        .route("/users/{id}", put(api::update_user))
        .route("/users/{id}", delete(api::delete_user))
        // Jira
        .route("/jira/issues", get(api::list_jira_issues))
        .route("/jira/sync", get(api::sync_jira))
        // Email
        .route("/email/test", get(api::test_email))
        .route("/email/summary", post(api::send_summary))
        // Apply session auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(sessions.clone(), req, next)
        }));

    // Login is the one API route reachable without a session
    let public_routes = Router::new().route("/auth/login", post(api::login));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
