use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod error;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
