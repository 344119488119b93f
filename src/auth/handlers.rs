use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, PublicUser, SignupRequest, SignupResponse},
        error::ApiError,
        jwt::JwtKeys,
        password,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let input = payload.validate().map_err(|details| {
        warn!(?details, "signup validation failed");
        ApiError::Validation(details)
    })?;

    // Ensure email is not taken
    if state.users.find_by_email(&input.email).await?.is_some() {
        warn!(email = %input.email, "email already registered");
        return Err(ApiError::EmailTaken);
    }

    let hash = password::hash_password(&input.password)?;
    let user = state
        .users
        .create(&input.name, &input.email, &hash, input.terms_accepted)
        .await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully",
            user: PublicUser::from(user),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = payload.email.trim().to_lowercase();

    let user = match state.users.find_by_email(&email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let ok = password::verify_password(&payload.password, &user.password_hash)?;
    if !ok {
        warn!(email = %email, user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful!",
        token,
    }))
}
