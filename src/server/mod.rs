//! Endpoints HTTP.
//!
//! - `GET /go` - página de projetos renderizada
//! - `GET /go/projects` - lista de projetos em JSON
//! - `GET /health` - verificação de vida

mod routes;

pub use routes::{router, serve, AppState};
