//! Router, handlers e listener.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::lookup::ProjectLookup;
use crate::render::PageRenderer;
use crate::{PlutoError, PlutoResult};

/// Estado compartilhado entre os handlers.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<ProjectLookup>,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(lookup: ProjectLookup, renderer: PageRenderer) -> Self {
        Self {
            lookup: Arc::new(lookup),
            renderer: Arc::new(renderer),
        }
    }
}

/// Monta o router da aplicação.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/go", get(project_page))
        .route("/go/projects", get(project_list))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Escuta em `addr` e atende até o Ctrl-C.
pub async fn serve(addr: &str, state: AppState) -> PlutoResult<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!("pluto-index listening on http://{}/go", local);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("pluto-index stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

fn internal_error(message: &'static str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}

async fn project_page(State(state): State<AppState>) -> Response {
    let projects = match state.lookup.projects().await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!(error = %e, "Error fetching projects");
            return internal_error("Error fetching projects data.");
        }
    };

    match state.renderer.render(projects).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(
                template = %state.renderer.template_path().display(),
                error = %e,
                "Error rendering page"
            );
            match e {
                PlutoError::TemplateParse(_) => internal_error("Error parsing HTML template."),
                _ => internal_error("Error executing template."),
            }
        }
    }
}

async fn project_list(State(state): State<AppState>) -> Response {
    match state.lookup.projects().await {
        Ok(projects) => Json(projects).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching projects");
            internal_error("Error fetching projects data.")
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}
