/// What kind of maintenance a complaint concerns. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Category {
    Electricity,
    Plumbing,
    Internet,
    Cleanliness,
    Security,
    Other,
}

impl Category {
    pub const fn all() -> [Self; 6] {
        [
            Self::Electricity,
            Self::Plumbing,
            Self::Internet,
            Self::Cleanliness,
            Self::Security,
            Self::Other,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Plumbing => "Plumbing",
            Self::Internet => "Internet",
            Self::Cleanliness => "Cleanliness",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Category {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| String::from("Invalid category"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn labels_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::try_from(category.label()), Ok(category));
        }
    }
    #[test]
    fn closed_set() {
        assert!(Category::try_from("Gardening").is_err());
        assert!(Category::try_from("electricity").is_err());
        assert!(Category::try_from("").is_err());
    }
}
