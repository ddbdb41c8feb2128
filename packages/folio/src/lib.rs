#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod fade;
pub mod history;
pub mod host;
pub mod router;
pub mod site;
pub mod storage;
pub mod theme;
pub mod typer;

mod section;
mod titles;

pub use section::*;
pub use titles::*;

pub mod prelude {
    pub use crate::catalog::{Project, ProjectCatalog};
    pub use crate::components::App;
    pub use crate::config::SiteConfig;
    pub use crate::error::{ConfigError, StorageError};
    pub use crate::history::{HashHistory, MemoryHashHistory};
    pub use crate::host::{HostEvent, MemoryPage, PageHost, Platform};
    pub use crate::router::{MobileMenu, RouterState, ScrollStyle, SectionRouter};
    pub use crate::site::Site;
    pub use crate::storage::{MemoryStorage, PreferenceStorage};
    pub use crate::theme::{Theme, ThemeStore, ThemeTarget};
    pub use crate::{Section, SectionSet, SectionTarget, TitleMap};
}
