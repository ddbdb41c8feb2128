//! The static list of projects shown on the projects page.

/// One project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Font Awesome classes for the card icon.
    pub icon: &'static str,
    pub language: &'static str,
    pub stars: u32,
    pub forks: u32,
    pub url: &'static str,
    pub is_private: bool,
    /// Long-form notes. Lines are kept, `**text**` is bold.
    pub readme: Option<&'static str>,
}

/// Read-only, ordered project records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: &'static [Project],
}

impl ProjectCatalog {
    pub const fn new(projects: &'static [Project]) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::new(PROJECTS)
    }
}

pub static PROJECTS: &[Project] = &[Project {
    title: "My portfolio website",
    description: "Modern, responsive personal portfolio website showcasing my projects and certifications. Built with Rust and Dioxus, featuring dark mode by default, smooth animations, and a professional layout optimized for GitHub Pages deployment.",
    icon: "fas fa-shield-alt",
    language: "Rust/WASM",
    stars: 0,
    forks: 0,
    url: "https://github.com/jeroSampayo/jeroSampayo.github.io",
    is_private: false,
    readme: Some(
        "## 🔒 Portfolio

A modern, responsive personal portfolio website showcasing my projects and certifications.

### 🛠 Technologies Used

- **Rust**: Type-safe state machines for navigation, theming and animation
- **Dioxus**: Reactive components compiled to WebAssembly
- **CSS3**: Modern styling with CSS Grid, Flexbox, and custom properties
- **GitHub Pages**: Optimized for static hosting deployment

### ✨ Features

- Dark Mode First: Cybersecurity aesthetic with theme toggle
- Responsive Design: Mobile-first approach with touch-friendly navigation

### 🚀 Deployment

This portfolio is designed to be deployed as a GitHub Pages project, in order to practice my web development skills and to showcase my projects in a professional manner.",
    ),
}];

/// A run of readme text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub bold: bool,
}

/// Split readme text into lines of spans. Every line becomes its own line in the card, and each
/// `**text**` pair becomes a bold span. An unmatched `**` is kept as plain text.
pub fn readme_lines(readme: &str) -> Vec<Vec<Span<'_>>> {
    readme.split('\n').map(line_spans).collect()
}

fn line_spans(mut line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();

    while let Some(open) = line.find("**") {
        let rest = &line[open + 2..];
        let Some(close) = rest.find("**") else {
            break;
        };

        if open > 0 {
            spans.push(Span {
                text: &line[..open],
                bold: false,
            });
        }
        spans.push(Span {
            text: &rest[..close],
            bold: true,
        });
        line = &rest[close + 2..];
    }

    if !line.is_empty() {
        spans.push(Span {
            text: line,
            bold: false,
        });
    }

    spans
}

/// Format a star or fork count, abbreviating thousands (`1500` becomes `1.5k`).
pub fn format_count(count: u32) -> String {
    if count >= 1000 {
        format!("{:.1}k", f64::from(count) / 1000.0)
    } else {
        count.to_string()
    }
}
