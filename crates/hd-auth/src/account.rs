use super::*;
use hd_core::ID;
use hd_core::Unique;

/// Creates a submitter and signs a token for it.
///
/// Name, email, and password are required; the email is normalized and
/// must not already belong to a member.
pub async fn register<R>(
    db: &R,
    crypto: &Crypto,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, Member), Error>
where
    R: AuthRepository,
{
    let name = name.trim();
    let email = normalize(email);
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(Error::validation("name, email, password are required"));
    }
    if !email.contains('@') {
        return Err(Error::validation("email is malformed"));
    }
    if db.exists(&email).await? {
        return Err(Error::email_taken());
    }
    let hashword = password::hash(password)?;
    let member = Member::new(ID::default(), name.to_string(), email, Role::Submitter);
    db.create(&member, &hashword).await?;
    let token = crypto.issue(&member)?;
    log::info!("registered member {}", member.id());
    Ok((token, member))
}

/// Exchanges credentials for a token.
///
/// Unknown email and wrong password both yield [`AuthError::Invalid`].
pub async fn login<R>(
    db: &R,
    crypto: &Crypto,
    email: &str,
    password: &str,
) -> Result<(String, Member), Error>
where
    R: AuthRepository,
{
    let email = normalize(email);
    if email.is_empty() || password.is_empty() {
        return Err(Error::validation("email and password are required"));
    }
    let member = match db.lookup(&email).await? {
        Some((member, hashword)) if password::verify(password, &hashword) => member,
        Some((member, _)) => {
            log::debug!("wrong password for member {}", member.id());
            return Err(Error::Auth(AuthError::Invalid));
        }
        None => {
            log::debug!("login for unknown email");
            return Err(Error::Auth(AuthError::Invalid));
        }
    };
    let token = crypto.issue(&member)?;
    Ok((token, member))
}

/// The single entry point every protected operation goes through:
/// verify the token, then resolve its subject to a live member.
pub async fn authenticate<R>(db: &R, crypto: &Crypto, token: &str) -> Result<Principal, Error>
where
    R: AuthRepository,
{
    let claims = crypto.verify(token)?;
    let member = db.resolve(claims.user()).await?;
    Ok(Principal::new(member, claims.role()))
}

/// Ensures a reviewer exists for `email`: promotes an existing member or
/// creates a new one with the given credentials.
pub async fn bootstrap<R>(db: &R, name: &str, email: &str, password: &str) -> Result<Member, Error>
where
    R: AuthRepository,
{
    let email = normalize(email);
    if email.is_empty() || password.is_empty() {
        return Err(Error::Config(String::from("reviewer email and password are required")));
    }
    match db.lookup(&email).await? {
        Some((member, _)) if member.role() == Role::Reviewer => Ok(member),
        Some((member, _)) => {
            db.promote(member.id(), Role::Reviewer).await?;
            log::info!("promoted member {} to reviewer", member.id());
            Ok(member.with_role(Role::Reviewer))
        }
        None => {
            let hashword = password::hash(password)?;
            let member = Member::new(ID::default(), name.trim().to_string(), email, Role::Reviewer);
            db.create(&member, &hashword).await?;
            log::info!("bootstrapped reviewer {}", member.id());
            Ok(member)
        }
    }
}
