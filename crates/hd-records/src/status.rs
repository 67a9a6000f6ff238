/// Where a complaint is in its lifecycle.
///
/// Any status may be reassigned to any other by a reviewer; the ordering
/// below is the nominal progression, not an enforced pipeline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl Status {
    pub const fn all() -> [Self; 3] {
        [Self::Open, Self::InProgress, Self::Resolved]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "InProgress",
            Self::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Status {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Submitted" => Ok(Self::Open),
            "In Progress" => Ok(Self::InProgress),
            s => Self::all()
                .into_iter()
                .find(|status| status.label() == s)
                .ok_or_else(|| String::from("Invalid status")),
        }
    }
}
