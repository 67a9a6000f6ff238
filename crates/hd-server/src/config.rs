use hd_auth::Crypto;
use hd_auth::Error;

/// Credentials for the reviewer account ensured at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reviewer {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Which cross-origin callers are admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origins {
    /// Any origin. Development default when `CORS_ORIGIN` is unset.
    Any,
    /// Exactly the origins listed in `CORS_ORIGIN`.
    List(Vec<String>),
    /// No cross-origin access. Production default when `CORS_ORIGIN` is
    /// unset, for a frontend served from the same origin.
    Same,
}

/// Process configuration, read once at startup.
///
/// `JWT_SECRET` and `DB_URL` are required; everything else has a default.
/// `APP_ENV` (or `NODE_ENV`) set to `production` tightens the CORS default.
pub struct Config {
    pub bind: String,
    pub database: String,
    pub origins: Origins,
    pub reviewer: Option<Reviewer>,
    pub crypto: Crypto,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(var: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let given = |key: &str| var(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let crypto = Crypto::configure(
            var("JWT_SECRET").as_deref(),
            given("JWT_EXPIRES_IN").as_deref(),
        )?;
        let database = given("DB_URL").ok_or_else(|| Error::Config(String::from("DB_URL is required")))?;
        let bind = given("BIND_ADDR").unwrap_or_else(|| String::from(hd_core::BIND_ADDR));
        let production = given("APP_ENV")
            .or_else(|| given("NODE_ENV"))
            .is_some_and(|env| env.eq_ignore_ascii_case("production"));
        let listed = given("CORS_ORIGIN")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty());
        let origins = match (listed, production) {
            (Some(list), _) => Origins::List(list),
            (None, true) => Origins::Same,
            (None, false) => Origins::Any,
        };
        let reviewer = match (given("ADMIN_EMAIL"), var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) if !password.is_empty() => Some(Reviewer {
                name: given("ADMIN_NAME").unwrap_or_else(|| String::from(hd_core::REVIEWER_NAME)),
                email,
                password,
            }),
            _ => None,
        };
        Ok(Self {
            bind,
            database,
            origins,
            reviewer,
            crypto,
        })
    }
}
