//! Page sections.

/// One of the four stacked sections of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Skills,
    Projects,
    About,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Skills,
        Section::Projects,
        Section::About,
    ];

    /// Stable identifier, used as the anchor name.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::About => "about",
        }
    }

    /// Label shown in the navigation rail.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::About => "About",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Position in page order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section by page index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section, wrapping to the top.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping to the bottom.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
