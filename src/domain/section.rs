use std::fmt;

/// A navigable form section. `id()` is the `data-section` style identifier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, strum_macros::EnumIter)]
pub enum Section {
    #[default]
    Objectives,
    Audience,
    Content,
    Budget,
    Tracking,
    Launch,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Objectives => "objectives",
            Section::Audience => "audience",
            Section::Content => "content",
            Section::Budget => "budget",
            Section::Tracking => "tracking",
            Section::Launch => "launch",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Objectives => "Campaign Objectives",
            Section::Audience => "Target Audience",
            Section::Content => "Content Strategy",
            Section::Budget => "Budget Allocation",
            Section::Tracking => "Offers & Tracking",
            Section::Launch => "Launch",
        }
    }

    /// Parses a section id, case-insensitively. Unknown ids give `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        let id = id.trim();
        Self::iter().find(|s| s.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_round_trip_through_from_id() {
        for section in Section::iter() {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn from_id_ignores_case_and_whitespace() {
        assert_eq!(Section::from_id(" Budget "), Some(Section::Budget));
        assert_eq!(Section::from_id("analytics"), None);
        assert_eq!(Section::from_id(""), None);
    }
}
