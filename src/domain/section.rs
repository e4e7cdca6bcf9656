use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the four full-viewport views of the scroll narrative, in order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Section {
    Intro,
    BuildingInfo,
    Simulator,
    Result,
}

impl Default for Section {
    fn default() -> Self {
        Self::Intro
    }
}

impl Section {
    pub const COUNT: usize = 4;
    pub const ALL: [Section; Section::COUNT] =
        [Self::Intro, Self::BuildingInfo, Self::Simulator, Self::Result];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Maps any integer onto a section, saturating at `Intro` and `Result`.
    pub fn from_index_clamped(index: i64) -> Self {
        let clamped = index.clamp(0, Self::COUNT as i64 - 1);
        Self::ALL[clamped as usize]
    }

    pub fn is_first(self) -> bool {
        self == Self::Intro
    }

    pub fn is_last(self) -> bool {
        self == Self::Result
    }
}

/// What the forward navigation control shows for a given section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForwardControl {
    Begin,
    Continue,
    /// The result section replaces forward navigation with a page refresh.
    Refresh,
}

impl ForwardControl {
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Intro => Self::Begin,
            Section::BuildingInfo | Section::Simulator => Self::Continue,
            Section::Result => Self::Refresh,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Begin => "Let's Begin",
            Self::Continue => "Continue",
            Self::Refresh => "Refresh Page",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case(-100, Section::Intro)]
    #[case(-1, Section::Intro)]
    #[case(0, Section::Intro)]
    #[case(1, Section::BuildingInfo)]
    #[case(2, Section::Simulator)]
    #[case(3, Section::Result)]
    #[case(4, Section::Result)]
    #[case(i64::MAX, Section::Result)]
    fn test_from_index_clamped(#[case] index: i64, #[case] expected: Section) {
        assert_eq!(Section::from_index_clamped(index), expected);
    }

    #[test]
    fn test_iteration_matches_index_order() {
        for (i, section) in Section::iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::ALL[i], section);
        }
    }

    #[test]
    fn test_forward_control_labels() {
        assert_eq!(ForwardControl::for_section(Section::Intro).label(), "Let's Begin");
        assert_eq!(ForwardControl::for_section(Section::Simulator).label(), "Continue");
        assert_eq!(ForwardControl::for_section(Section::Result), ForwardControl::Refresh);
    }
}
