//! Site content and palette, loaded once from the bundled `site.toml`.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

use crate::theme::{Palette, Theme, is_hex_color};

const TOML: &str = include_str!("../data/site.toml");

/// The projects grid is laid out for exactly this many cards.
pub const PROJECT_COUNT: usize = 3;

static SITE: OnceCell<SiteConfig> = OnceCell::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.toml is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("palette.{field} must be a #RRGGBB color, got {value:?}")]
    InvalidColor { field: &'static str, value: String },

    #[error("{0} must not be empty")]
    EmptyField(String),

    #[error("expected {expected} projects, found {found}")]
    ProjectCount { expected: usize, found: usize },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub name: String,
    /// Single glyph shown in the logo tile.
    pub monogram: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HomeCopy {
    pub greeting: String,
    pub intro: Vec<String>,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub welcome: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AboutSection {
    pub title: String,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AboutCopy {
    pub heading: String,
    pub sections: Vec<AboutSection>,
    pub skills_title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsCopy {
    pub heading: String,
    pub items: Vec<Project>,
}

/// Contact page text. Field entries are the input placeholders.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactCopy {
    pub heading: String,
    pub blurb: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterCopy {
    pub credit: String,
}

/// On-disk shape of `site.toml`, before validation.
#[derive(Debug, Deserialize)]
struct SiteFile {
    owner: Owner,
    palette: Palette,
    home: HomeCopy,
    about: AboutCopy,
    projects: ProjectsCopy,
    contact: ContactCopy,
    footer: FooterCopy,
}

/// Everything the views render. Built once, then shared as `&'static`.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub owner: Owner,
    pub theme: Theme,
    pub home: HomeCopy,
    pub about: AboutCopy,
    pub projects: ProjectsCopy,
    pub contact: ContactCopy,
    pub footer: FooterCopy,
}

impl SiteConfig {
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let file: SiteFile = toml::from_str(src)?;
        Self::validate(file)
    }

    fn validate(file: SiteFile) -> Result<Self, ConfigError> {
        for (field, value) in file.palette.entries() {
            if !is_hex_color(value) {
                return Err(ConfigError::InvalidColor {
                    field,
                    value: value.to_owned(),
                });
            }
        }

        require("owner.name", &file.owner.name)?;
        require("owner.monogram", &file.owner.monogram)?;

        let found = file.projects.items.len();
        if found != PROJECT_COUNT {
            return Err(ConfigError::ProjectCount {
                expected: PROJECT_COUNT,
                found,
            });
        }
        for (i, p) in file.projects.items.iter().enumerate() {
            require(&format!("projects.items[{i}].title"), &p.title)?;
            require(&format!("projects.items[{i}].description"), &p.description)?;
        }

        Ok(Self {
            owner: file.owner,
            theme: Theme::new(file.palette),
            home: file.home,
            about: file.about,
            projects: file.projects,
            contact: file.contact,
            footer: file.footer,
        })
    }
}

fn require(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::EmptyField(field.to_owned()))
    } else {
        Ok(())
    }
}

/// Parses the bundled site file on first call and hands out the same
/// reference afterwards.
pub fn site() -> Result<&'static SiteConfig, ConfigError> {
    SITE.get_or_try_init(|| SiteConfig::from_toml(TOML))
}
