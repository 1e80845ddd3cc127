//! Auth services - registration, login, session authorization

use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::core::{decode_jwt, encode_jwt, AppError, AppState, Session};
use crate::dtos::{RegisterDTO, UserDTO};
use crate::entities::Credential;
use crate::repositories::Read;

/// Create an account: credential plus profile record. Exactly one
/// profile record per successful registration; role defaults to Member.
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register(state: &AppState, body: RegisterDTO) -> Result<UserDTO, AppError> {
    body.validate()?;

    if state.credentials.find_by_email(&body.email).await.is_some() {
        warn!("Registration attempted with an email already in use");
        return Err(AppError::conflict(
            "An account with this email already exists",
        ));
    }

    let password_hash = Credential::hash_password(&body.password).map_err(|_| {
        AppError::internal_server_error("Failed to hash password")
    })?;

    let user = state
        .users
        .create_record(&body.email, &body.display_name)
        .await;
    state
        .credentials
        .create(&user.user_id, &body.email, &password_hash)
        .await;

    info!(user_id = %user.user_id, "User registered");
    Ok(UserDTO::from(user))
}

/// Verify credentials and open a session. The last-login touch is a
/// side effect whose failure must not sink the login itself.
#[instrument(skip(state, password), fields(email = %email))]
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<Session, AppError> {
    let credential = state
        .credentials
        .find_by_email(email)
        .await
        .ok_or_else(|| AppError::unauthenticated("Email or password are not correct"))?;

    if !credential.verify_password(password) {
        warn!("Login attempted with a wrong password");
        return Err(AppError::unauthenticated(
            "Email or password are not correct",
        ));
    }

    if let Err(e) = state.users.touch_last_login(&credential.user_id).await {
        // Logged and swallowed: the login itself succeeded.
        warn!("Failed to persist login timestamp: {}", e);
    }

    let user = state
        .users
        .read(&credential.user_id)
        .await?
        .ok_or_else(|| AppError::unauthenticated("You are not an authorized user"))?;

    let token = encode_jwt(&user.user_id, user.role, &state.jwt_secret)?;
    info!(user_id = %user.user_id, "User logged in");

    Ok(Session {
        user_id: user.user_id,
        role: user.role,
        token,
    })
}

/// Turn a presented token back into a session. The role comes from the
/// stored user, not from the claims.
#[instrument(skip(state, token))]
pub async fn authorize(state: &AppState, token: &str) -> Result<Session, AppError> {
    debug!("Authorizing session token");
    let data = decode_jwt(token, &state.jwt_secret)?;

    let user = state
        .users
        .read(&data.claims.id)
        .await?
        .ok_or_else(|| AppError::unauthenticated("You are not an authorized user"))?;

    Ok(Session {
        user_id: user.user_id,
        role: user.role,
        token: token.to_string(),
    })
}
