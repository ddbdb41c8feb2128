use std::collections::BTreeMap;

use crate::{Section, SectionTarget};

/// Page titles keyed by section, with a fallback for anything unmapped.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleMap {
    default: String,
    titles: BTreeMap<Section, String>,
}

impl TitleMap {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            titles: BTreeMap::new(),
        }
    }

    pub fn with(mut self, section: Section, title: impl Into<String>) -> Self {
        self.titles.insert(section, title.into());
        self
    }

    pub fn insert(&mut self, section: Section, title: impl Into<String>) {
        self.titles.insert(section, title.into());
    }

    /// The title for `target`, or the default title when it has no entry.
    pub fn get(&self, target: &SectionTarget) -> &str {
        target
            .section()
            .and_then(|section| self.titles.get(&section))
            .map(String::as_str)
            .unwrap_or(&self.default)
    }

    pub fn default_title(&self) -> &str {
        &self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_targets_use_the_default() {
        let titles = TitleMap::new("Portfolio").with(Section::About, "About Me");

        assert_eq!(titles.get(&Section::About.into()), "About Me");
        assert_eq!(titles.get(&Section::Projects.into()), "Portfolio");
        assert_eq!(titles.get(&SectionTarget::parse("blog")), "Portfolio");
    }
}
