use super::*;
use hd_auth::Error;
use hd_auth::Member;
use hd_auth::Principal;
use hd_auth::Role;
use hd_core::ID;
use hd_core::Unique;

/// Narrowing criteria for complaint queries. `None` fields pass through.
///
/// Client-supplied filters are never trusted for scoping: [`Filter::scope`]
/// recomputes the owner restriction from the verified caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    owner: Option<ID<Member>>,
    category: Option<Category>,
    status: Option<Status>,
}

impl Filter {
    pub fn new(owner: Option<ID<Member>>, category: Option<Category>, status: Option<Status>) -> Self {
        Self {
            owner,
            category,
            status,
        }
    }
    /// Parses raw query values. Blank values mean "no filter".
    pub fn parse(
        owner: Option<&str>,
        category: Option<&str>,
        status: Option<&str>,
    ) -> Result<Self, Error> {
        fn given(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }
        Ok(Self {
            owner: given(owner)
                .map(ID::try_from)
                .transpose()
                .map_err(|_| Error::validation("Invalid owner"))?,
            category: given(category)
                .map(Category::try_from)
                .transpose()
                .map_err(Error::validation)?,
            status: given(status)
                .map(Status::try_from)
                .transpose()
                .map_err(Error::validation)?,
        })
    }
    pub fn owner(&self) -> Option<ID<Member>> {
        self.owner
    }
    pub fn category(&self) -> Option<Category> {
        self.category
    }
    pub fn status(&self) -> Option<Status> {
        self.status
    }
    /// The effective filter for `principal`: submitters are pinned to their
    /// own complaints whatever owner they asked for; reviewers keep theirs.
    pub fn scope(self, principal: &Principal) -> Self {
        match principal.role() {
            Role::Submitter => Self {
                owner: Some(principal.id()),
                ..self
            },
            Role::Reviewer => self,
        }
    }
    pub fn admits(&self, complaint: &Complaint) -> bool {
        self.owner.map_or(true, |o| o == complaint.owner())
            && self.category.map_or(true, |c| c == complaint.category())
            && self.status.map_or(true, |s| s == complaint.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Role) -> Principal {
        let member = Member::new(ID::default(), "p".into(), "p@x.io".into(), role);
        Principal::new(member, role)
    }

    #[test]
    fn parse_blank_is_none() {
        assert_eq!(Filter::parse(None, Some(""), Some("  ")), Ok(Filter::default()));
    }
    #[test]
    fn parse_values() {
        let filter = Filter::parse(None, Some("Plumbing"), Some("In Progress")).unwrap();
        assert_eq!(filter.category(), Some(Category::Plumbing));
        assert_eq!(filter.status(), Some(Status::InProgress));
        assert_eq!(filter.owner(), None);
    }
    #[test]
    fn parse_rejects_out_of_set() {
        assert!(matches!(Filter::parse(None, Some("Roof"), None), Err(Error::Validation(_))));
        assert!(matches!(Filter::parse(None, None, Some("Done")), Err(Error::Validation(_))));
        assert!(matches!(Filter::parse(Some("nope"), None, None), Err(Error::Validation(_))));
    }
    #[test]
    fn submitter_owner_is_forced() {
        let me = principal(Role::Submitter);
        let someone = ID::<Member>::default();
        let scoped = Filter::new(Some(someone), Some(Category::Internet), None).scope(&me);
        assert_eq!(scoped.owner(), Some(me.id()));
        assert_eq!(scoped.category(), Some(Category::Internet));
        let scoped = Filter::default().scope(&me);
        assert_eq!(scoped.owner(), Some(me.id()));
    }
    #[test]
    fn reviewer_filter_passes_through() {
        let reviewer = principal(Role::Reviewer);
        let filter = Filter::new(None, None, Some(Status::Resolved));
        assert_eq!(filter.scope(&reviewer), filter);
    }
}
