use super::*;
use hd_core::ID;
use hd_core::Unique;

/// An authenticated caller: the live member record plus the role snapshot
/// carried by the token that authenticated it.
///
/// Authorization decisions use the snapshot, so a role change takes effect
/// only once the caller's existing tokens expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    member: Member,
    role: Role,
}

impl Principal {
    pub fn new(member: Member, role: Role) -> Self {
        Self { member, role }
    }
    pub fn member(&self) -> &Member {
        &self.member
    }
    pub fn role(&self) -> Role {
        self.role
    }
}

impl Unique<Member> for Principal {
    fn id(&self) -> ID<Member> {
        self.member.id()
    }
}

/// Role gate. Exact match only: there is no role hierarchy.
pub struct Guard;

impl Guard {
    pub fn authorize(principal: &Principal, required: Role) -> bool {
        principal.role() == required
    }
    pub fn require(principal: &Principal, required: Role) -> Result<(), Error> {
        if Self::authorize(principal, required) {
            Ok(())
        } else {
            log::debug!(
                "member {} with role {} refused, requires {}",
                principal.id(),
                principal.role(),
                required
            );
            Err(Error::Auth(AuthError::Forbidden))
        }
    }
}
