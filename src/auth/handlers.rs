use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, RegisterRequest, TokenResponse, WhoAmI},
        extractors::AuthUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    extract::AppJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/protected", get(protected))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        warn!("register with empty username or password");
        return Err(ApiError::Validation("username and password are required"));
    }

    if User::find_by_username(&state.db, &payload.username)
        .await?
        .is_some()
    {
        warn!(username = %payload.username, "username already registered");
        return Err(ApiError::Conflict("username already registered"));
    }

    let hash = hash_password(&payload.password)?;

    let user = match User::create(&state.db, &payload.username, &hash).await {
        Ok(u) => u,
        // Two concurrent registrations can both pass the lookup above; the
        // unique index on username settles it.
        Err(sqlx::Error::Database(e))
            if matches!(e.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            warn!(username = %payload.username, "username already registered");
            return Err(ApiError::Conflict("username already registered"));
        }
        Err(e) => return Err(anyhow::Error::from(e).into()),
    };

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(PublicUser {
            id: user.id,
            username: user.username,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("username and password are required"));
    }

    let user = User::find_by_username(&state.db, &payload.username)
        .await?
        .ok_or_else(|| {
            warn!(username = %payload.username, "login with unknown username");
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&payload.password, &user.password_hash) {
        warn!(user_id = user.id, "login with invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(user.id)?;

    info!(user_id = user.id, "user logged in");
    Ok((StatusCode::CREATED, Json(TokenResponse { access_token })))
}

#[instrument(skip_all)]
pub async fn protected(AuthUser(user_id): AuthUser) -> Json<WhoAmI> {
    Json(WhoAmI {
        logged_in_as: user_id,
    })
}
