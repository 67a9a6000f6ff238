use super::*;
use hd_core::ID;

/// Maps a verified token subject to a live member.
///
/// Fails closed: an unknown subject is `Unauthorized`, indistinguishable to
/// the caller from a bad token.
#[allow(async_fn_in_trait)]
pub trait Resolver: AuthRepository {
    async fn resolve(&self, subject: ID<Member>) -> Result<Member, Error> {
        self.find(subject)
            .await?
            .ok_or(Error::Auth(AuthError::Unauthorized))
    }
}

impl<R> Resolver for R where R: AuthRepository {}
