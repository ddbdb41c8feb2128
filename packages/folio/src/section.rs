//! Section identifiers.
//!
//! Raw strings enter the site in two places: the URL fragment and the `data-page` binding of a
//! nav control. Both are validated here into a [`SectionTarget`], so the rest of the crate only
//! ever deals with the closed [`Section`] enum.

use serde::Deserialize;
use std::{fmt::Display, str::FromStr};

/// One of the fixed, named parts of the page.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Certifications,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Certifications,
    ];

    /// The identifier used for the element id and the URL fragment.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string names no known section.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no section is named {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// A navigation request after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionTarget {
    Known(Section),
    Unrecognized(String),
}

impl SectionTarget {
    /// Validate a raw identifier, as carried by a nav control.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Section>() {
            Ok(section) => SectionTarget::Known(section),
            Err(UnknownSection(raw)) => SectionTarget::Unrecognized(raw),
        }
    }

    /// Validate a URL fragment, with or without its leading `#`. An empty fragment means the
    /// home section.
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment.strip_prefix('#').unwrap_or(fragment) {
            "" => SectionTarget::Known(Section::Home),
            raw => Self::parse(raw),
        }
    }

    /// The identifier as it should appear in the URL fragment.
    pub fn as_str(&self) -> &str {
        match self {
            SectionTarget::Known(section) => section.id(),
            SectionTarget::Unrecognized(raw) => raw,
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            SectionTarget::Known(section) => Some(*section),
            SectionTarget::Unrecognized(_) => None,
        }
    }
}

impl From<Section> for SectionTarget {
    fn from(section: Section) -> Self {
        SectionTarget::Known(section)
    }
}

impl Display for SectionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sections that actually exist in the rendered markup.
///
/// The router receives one set for the section panels and one for the nav controls. A section
/// missing from a set behaves like a missing element: effects on it are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SectionSet {
    present: [bool; 4],
}

impl SectionSet {
    pub const fn empty() -> Self {
        Self {
            present: [false; 4],
        }
    }

    pub const fn all() -> Self {
        Self { present: [true; 4] }
    }

    pub fn with(mut self, section: Section) -> Self {
        self.insert(section);
        self
    }

    pub fn without(mut self, section: Section) -> Self {
        self.present[section as usize] = false;
        self
    }

    pub fn insert(&mut self, section: Section) {
        self.present[section as usize] = true;
    }

    pub fn contains(&self, section: Section) -> bool {
        self.present[section as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(|section| self.contains(*section))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Section> for SectionSet {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        let mut set = SectionSet::empty();
        for section in iter {
            set.insert(section);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn empty_fragment_is_home() {
        assert_eq!(SectionTarget::from_fragment(""), SectionTarget::Known(Section::Home));
        assert_eq!(
            SectionTarget::from_fragment("#"),
            SectionTarget::Known(Section::Home)
        );
    }

    #[test]
    fn raw_identifiers_are_not_fragments() {
        assert_eq!(SectionTarget::parse(""), SectionTarget::Unrecognized(String::new()));
        assert_eq!(
            SectionTarget::parse("#about"),
            SectionTarget::Unrecognized("#about".into())
        );
    }

    #[test]
    fn fragments_strip_the_hash() {
        assert_eq!(
            SectionTarget::from_fragment("#projects"),
            SectionTarget::Known(Section::Projects)
        );
        assert_eq!(
            SectionTarget::from_fragment("about"),
            SectionTarget::Known(Section::About)
        );
    }

    // element ids are case sensitive, so identifiers are too
    #[test]
    fn unknown_identifiers_are_kept_verbatim() {
        let target = SectionTarget::parse("Projects");
        assert_eq!(target, SectionTarget::Unrecognized("Projects".into()));
        assert_eq!(target.as_str(), "Projects");
        assert_eq!(target.section(), None);
    }

    #[test]
    fn section_sets() {
        let set = SectionSet::all().without(Section::About);
        assert!(set.contains(Section::Home));
        assert!(!set.contains(Section::About));
        assert_eq!(set.len(), 3);

        let set: SectionSet = [Section::Projects].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Section::Projects]);
        assert!(SectionSet::empty().is_empty());
    }
}
