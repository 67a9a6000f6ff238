/// Closed capability class gating which operations a member may invoke.
///
/// There is no hierarchy: a reviewer is not implicitly a submitter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Files complaints and sees only their own.
    #[default]
    Submitter,
    /// Sees every complaint and transitions its status.
    Reviewer,
}

impl Role {
    pub const fn all() -> [Self; 2] {
        [Self::Submitter, Self::Reviewer]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Submitter => "submitter",
            Self::Reviewer => "reviewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Role {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|role| role.label() == s)
            .ok_or_else(|| format!("invalid role: {}", s))
    }
}
