//! Site configuration.
//!
//! The site ships with an embedded `site.toml`. Every key is optional; anything left out falls back
//! to [`SiteConfig::default`].

use std::time::Duration;

use serde::Deserialize;

use crate::{error::ConfigError, Section, SectionSet, TitleMap};

const EMBEDDED: &str = include_str!("../site.toml");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown in the nav bar brand and the hero.
    pub owner: String,
    pub role: String,
    pub github: String,
    /// Page title used for anything without its own entry in `sections`.
    pub default_title: String,
    pub sections: Vec<SectionConfig>,
    /// Paragraphs of the about page.
    pub about: Vec<String>,
    pub details: Vec<DetailConfig>,
    pub certifications: Vec<CertificationConfig>,
    pub navbar: NavbarConfig,
    pub terminal: TerminalConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SectionConfig {
    pub id: Section,
    pub label: String,
    pub title: String,
}

/// A fact shown next to the about text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DetailConfig {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CertificationConfig {
    pub name: String,
    pub issuer: String,
    #[serde(default = "default_certification_icon")]
    pub icon: String,
    pub url: Option<String>,
}

fn default_certification_icon() -> String {
    "fas fa-certificate".to_string()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// The nav bar is styled as scrolled once the page is strictly further down than this.
    pub scroll_threshold: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub commands: Vec<String>,
    pub start_delay_ms: u64,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub hold_delay_ms: u64,
    pub next_delay_ms: u64,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the crate.
    ///
    /// A broken embedded file is logged and replaced by the defaults rather than taking the page
    /// down.
    pub fn embedded() -> Self {
        Self::from_toml(EMBEDDED).unwrap_or_else(|err| {
            tracing::warn!("using default site config: {err}");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = SectionSet::empty();
        for section in &self.sections {
            if seen.contains(section.id) {
                return Err(ConfigError::DuplicateSection(section.id));
            }
            seen.insert(section.id);
        }

        let threshold = self.navbar.scroll_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        Ok(())
    }

    /// The sections that get a panel and a nav control.
    pub fn section_set(&self) -> SectionSet {
        self.sections.iter().map(|section| section.id).collect()
    }

    pub fn titles(&self) -> TitleMap {
        self.sections
            .iter()
            .fold(TitleMap::new(&self.default_title), |titles, section| {
                titles.with(section.id, &section.title)
            })
    }
}

impl TerminalConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let owner = "Jerónimo Miras";
        let section = |id, label: &str, title: &str| SectionConfig {
            id,
            label: label.to_string(),
            title: format!("{owner} - {title}"),
        };

        Self {
            owner: owner.to_string(),
            role: "SOC Analyst | Computer Engineering Student".to_string(),
            github: "https://github.com/jeroSampayo".to_string(),
            default_title: format!("{owner} - Cyber Security Portfolio"),
            sections: vec![
                section(Section::Home, "Home", "Cyber Security Portfolio"),
                section(Section::About, "About", "About Me"),
                section(Section::Projects, "Projects", "Projects"),
                section(Section::Certifications, "Certifications", "Certifications"),
            ],
            about: vec![
                "I am a SOC analyst and computer engineering student focused on defensive security: monitoring, detection and incident response.".to_string(),
                "This site collects the projects I build and the certifications I earn along the way.".to_string(),
            ],
            details: vec![
                detail("fas fa-user-shield", "Role", "SOC Analyst"),
                detail("fas fa-graduation-cap", "Studies", "Computer Engineering"),
                detail("fab fa-github", "GitHub", "jeroSampayo"),
            ],
            certifications: Vec::new(),
            navbar: NavbarConfig::default(),
            terminal: TerminalConfig::default(),
        }
    }
}

fn detail(icon: &str, label: &str, value: &str) -> DetailConfig {
    DetailConfig {
        icon: icon.to_string(),
        label: label.to_string(),
        value: value.to_string(),
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            commands: [
                "nmap -sS 192.168.1.0/24",
                "python3 exploit.py",
                "wireshark -i eth0",
                "msfconsole",
                "whoami",
            ]
            .map(String::from)
            .to_vec(),
            start_delay_ms: 2000,
            type_delay_ms: 100,
            delete_delay_ms: 50,
            hold_delay_ms: 2000,
            next_delay_ms: 500,
        }
    }
}
