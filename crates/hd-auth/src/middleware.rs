use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use tokio_postgres::Client;

/// Extractor for authenticated requests.
///
/// Reads a `Bearer` token, verifies it, and resolves the subject against
/// the store registered as `web::Data<R>`. Every failure surfaces as the
/// same 401 response.
pub struct Auth<R = Arc<Client>> {
    principal: Principal,
    store: PhantomData<R>,
}

impl<R> Auth<R> {
    pub fn principal(&self) -> &Principal {
        &self.principal
    }
    pub fn into_inner(self) -> Principal {
        self.principal
    }
}

fn bearer(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

impl<R> FromRequest for Auth<R>
where
    R: AuthRepository + 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let crypto = req.app_data::<web::Data<Crypto>>().cloned();
        let db = req.app_data::<web::Data<R>>().cloned();
        let token = bearer(req);
        Box::pin(async move {
            let token = token.ok_or(Error::Auth(AuthError::Invalid))?;
            let crypto = crypto.ok_or_else(|| Error::Config(String::from("token service not configured")))?;
            let db = db.ok_or_else(|| Error::Config(String::from("store not configured")))?;
            let principal = authenticate(db.get_ref(), &crypto, &token).await?;
            Ok(Auth {
                principal,
                store: PhantomData,
            })
        })
    }
}
