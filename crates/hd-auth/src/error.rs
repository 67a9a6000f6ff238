/// Why a caller was refused.
///
/// Distinguishable internally for logging; surfaced to callers uniformly so
/// a response never reveals which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Bad signature, malformed token, or wrong credentials.
    Invalid,
    /// Token lifetime has elapsed.
    Expired,
    /// Token subject does not resolve to a live member.
    Unauthorized,
    /// Caller is known but its role is not permitted.
    Forbidden,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid token or credentials"),
            Self::Expired => write!(f, "token expired"),
            Self::Unauthorized => write!(f, "unknown identity"),
            Self::Forbidden => write!(f, "role not permitted"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Every failure the auth and record layers can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Startup-fatal misconfiguration, e.g. a missing signing secret.
    Config(String),
    Auth(AuthError),
    /// Caller input the client can correct.
    Validation(String),
    NotFound(String),
    Conflict(String),
    /// Store or primitive failure; detail is logged, never shown.
    Internal(String),
}

impl Error {
    /// The single conflict callers can trigger: a normalized email that is
    /// already registered.
    pub fn email_taken() -> Self {
        Self::Conflict(String::from("Email already in use"))
    }
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(s) => write!(f, "configuration error: {}", s),
            Self::Auth(e) => write!(f, "authentication error: {}", e),
            Self::Validation(s) => write!(f, "validation error: {}", s),
            Self::NotFound(s) => write!(f, "not found: {}", s),
            Self::Conflict(s) => write!(f, "conflict: {}", s),
            Self::Internal(s) => write!(f, "internal error: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<AuthError> for Error {
    fn from(e: AuthError) -> Self {
        Self::Auth(e)
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(e: argon2::password_hash::Error) -> Self {
        Self::Internal(format!("password hashing: {}", e))
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Internal(format!("token signing: {}", e))
    }
}

#[cfg(feature = "database")]
impl From<hd_pg::PgErr> for Error {
    fn from(e: hd_pg::PgErr) -> Self {
        if hd_pg::is_unique_violation(&e) {
            Self::email_taken()
        } else {
            Self::Internal(format!("database: {}", e))
        }
    }
}

#[cfg(feature = "server")]
mod http {
    use super::*;
    use actix_web::HttpResponse;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    impl ResponseError for Error {
        fn status_code(&self) -> StatusCode {
            match self {
                Self::Auth(AuthError::Forbidden) => StatusCode::FORBIDDEN,
                Self::Auth(_) => StatusCode::UNAUTHORIZED,
                Self::Validation(_) => StatusCode::BAD_REQUEST,
                Self::NotFound(_) => StatusCode::NOT_FOUND,
                Self::Conflict(_) => StatusCode::CONFLICT,
                Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
        fn error_response(&self) -> HttpResponse {
            let message = match self {
                Self::Auth(AuthError::Forbidden) => {
                    log::warn!("{}", self);
                    String::from("Forbidden")
                }
                Self::Auth(_) => {
                    log::warn!("{}", self);
                    String::from("Unauthorized")
                }
                Self::Config(_) | Self::Internal(_) => {
                    log::error!("{}", self);
                    String::from("Internal Server Error")
                }
                Self::Validation(s) | Self::NotFound(s) | Self::Conflict(s) => s.clone(),
            };
            HttpResponse::build(self.status_code()).json(serde_json::json!({ "message": message }))
        }
    }

}
