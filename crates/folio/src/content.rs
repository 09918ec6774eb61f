//! Text shown in each section.

use folio_config::Profile;
use folio_core::Section;

/// How a line of section text is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Body,
    Muted,
    Accent,
    Blank,
}

/// One line of section text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub kind: LineKind,
    pub text: String,
}

impl ContentLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

/// Lines for every section, built once from the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    sections: [Vec<ContentLine>; 4],
    contact: String,
}

impl PageContent {
    pub fn new(profile: &Profile) -> Self {
        use LineKind::*;

        let home = vec![
            ContentLine::new(Muted, "· portfolio ·"),
            ContentLine::blank(),
            ContentLine::new(Title, profile.name.to_uppercase()),
            ContentLine::new(Body, profile.tagline.clone()),
            ContentLine::blank(),
            ContentLine::new(Accent, "scroll or press 2 to explore"),
        ];

        let skills = vec![
            ContentLine::new(Accent, "01 / Technical Stack"),
            ContentLine::blank(),
            ContentLine::new(Title, "Interface"),
            ContentLine::new(Body, "React · Next.js · Tailwind · Framer Motion · GSAP"),
            ContentLine::blank(),
            ContentLine::new(Title, "System & Database"),
            ContentLine::new(Body, "Node.js · Firebase · MongoDB · Supabase"),
            ContentLine::blank(),
            ContentLine::new(Title, "Graphics"),
            ContentLine::new(Body, "three.js · shaders · particle systems"),
        ];

        let projects = vec![
            ContentLine::new(Accent, "02 / Selected Work"),
            ContentLine::blank(),
            ContentLine::new(Title, "Axon Audit"),
            ContentLine::new(Body, "Open contract audits without the gatekeepers."),
            ContentLine::blank(),
            ContentLine::new(Title, "MintSkill"),
            ContentLine::new(Body, "Creators monetize talent without giving up privacy."),
            ContentLine::blank(),
            ContentLine::new(Title, "PitchChain"),
            ContentLine::new(Body, "A meeting point for founders and investors."),
        ];

        let mut about = vec![
            ContentLine::new(Accent, "03 / About"),
            ContentLine::blank(),
            ContentLine::new(Title, "Building quiet interfaces with loud details."),
            ContentLine::new(Body, "Move the mouse: the field leans toward you."),
            ContentLine::blank(),
        ];
        if profile.contact.is_empty() {
            about.push(ContentLine::new(Muted, "no contact configured"));
        } else {
            about.push(ContentLine::new(Body, profile.contact.clone()));
            about.push(ContentLine::new(Muted, "press y to copy"));
        }

        Self {
            sections: [home, skills, projects, about],
            contact: profile.contact.clone(),
        }
    }

    pub fn lines(&self, section: Section) -> &[ContentLine] {
        &self.sections[section.index()]
    }

    /// The text copied by the copy action, if any.
    pub fn contact(&self) -> Option<&str> {
        (!self.contact.is_empty()).then_some(self.contact.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_content() {
        let content = PageContent::new(&Profile::default());
        for section in Section::ALL {
            assert!(!content.lines(section).is_empty());
        }
    }

    #[test]
    fn test_profile_flows_into_home() {
        let profile = Profile {
            name: "Aiko Tan".to_string(),
            ..Profile::default()
        };
        let content = PageContent::new(&profile);
        assert!(
            content
                .lines(Section::Home)
                .iter()
                .any(|l| l.kind == LineKind::Title && l.text == "AIKO TAN")
        );
    }

    #[test]
    fn test_empty_contact_disables_copy() {
        let profile = Profile {
            contact: String::new(),
            ..Profile::default()
        };
        let content = PageContent::new(&profile);
        assert_eq!(content.contact(), None);
        assert!(
            !content
                .lines(Section::About)
                .iter()
                .any(|l| l.text.contains("press y"))
        );
    }
}
