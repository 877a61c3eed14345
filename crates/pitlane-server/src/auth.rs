//! Role-based request authorization
//!
//! Role claims arrive in an externally issued JWT (`Authorization: Bearer`).
//! Guards run before the handler body, so a request that fails authorization
//! never reaches the repository. Two failure kinds are distinguished:
//!
//! - 401 Unauthorized: credentials missing or invalid
//! - 403 Forbidden: credentials valid, required role not granted
//!
//! When `auth.enabled` is false in the configuration, every request is
//! admitted.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use pitlane_domain::error::{Error, Result};
use pitlane_domain::Role;
use pitlane_infrastructure::config::{AuthConfig, JwtConfig};
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use serde::{Deserialize, Serialize};

/// Claims carried by a caller's bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Token subject (caller identity)
    pub sub: String,
    /// Roles granted to the caller
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Expiry as a unix timestamp
    pub exp: i64,
}

impl Claims {
    /// Whether any of the required roles is granted
    pub fn has_any(&self, required: &[Role]) -> bool {
        self.roles.iter().any(|role| required.contains(role))
    }
}

/// Authorization failure surfaced by the guards
#[derive(Debug)]
pub enum AuthError {
    /// No usable `Authorization: Bearer` header present
    MissingToken,
    /// Token failed verification
    InvalidToken,
    /// Token valid, caller lacks the required role
    InsufficientRole,
}

fn authenticate(request: &Request<'_>, config: &AuthConfig) -> std::result::Result<Claims, AuthError> {
    let header = request
        .headers()
        .get_one("Authorization")
        .ok_or(AuthError::MissingToken)?;
    let token = header.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)?;

    let key = DecodingKey::from_secret(config.jwt.secret.as_bytes());
    decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256))
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}

fn check_roles(request: &Request<'_>, required: &[Role]) -> request::Outcome<Claims, AuthError> {
    let config = match request.rocket().state::<Arc<AuthConfig>>() {
        Some(config) if config.enabled => config,
        // No managed config, or enforcement disabled: admit the request.
        _ => {
            return Outcome::Success(Claims {
                sub: String::new(),
                roles: required.to_vec(),
                exp: 0,
            });
        }
    };

    match authenticate(request, config) {
        Ok(claims) if claims.has_any(required) => Outcome::Success(claims),
        Ok(_) => Outcome::Error((Status::Forbidden, AuthError::InsufficientRole)),
        Err(err) => Outcome::Error((Status::Unauthorized, err)),
    }
}

/// Guard for robot write endpoints: requires the admin or referee role
pub struct RobotWrite(pub Claims);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RobotWrite {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        check_roles(request, &[Role::Admin, Role::Referee]).map(RobotWrite)
    }
}

/// Guard for lap-time capture: requires the sensor role
pub struct LapCapture(pub Claims);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for LapCapture {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        check_roles(request, &[Role::Sensor]).map(LapCapture)
    }
}

/// Issue a signed token for the given subject and roles.
///
/// Intended for local development and tests; in production, tokens come from
/// the external identity issuer.
pub fn issue_token(subject: &str, roles: &[Role], jwt: &JwtConfig) -> Result<String> {
    let exp = chrono::Utc::now().timestamp() + jwt.expiration_secs as i64;
    let claims = Claims {
        sub: subject.to_string(),
        roles: roles.to_vec(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt.secret.as_bytes()),
    )
    .map_err(|e| Error::configuration(format!("failed to sign token: {e}")))
}
