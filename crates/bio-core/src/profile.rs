use crate::config::EffectsConfig;
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("profile field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("duplicate link id `{0}`")]
    DuplicateLinkId(String),
    #[error("link `{id}` has unsupported url `{url}`")]
    InvalidUrl { id: String, url: String },
    #[error("invalid theme color `{0}`")]
    InvalidColor(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub url: String,
    pub platform: String,
    /// Inline SVG markup for the icon.
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebsiteLink {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Accent colors written to `--theme-primary` / `--theme-secondary`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub avatar: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub website_links: Vec<WebsiteLink>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub effects: EffectsConfig,
}

fn is_supported_url(url: &str) -> bool {
    let url = url.trim();
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}

/// Accepts hex, rgb()/hsl() and named colors; rejects anything that could
/// escape a CSS declaration.
fn is_safe_color(value: &str) -> bool {
    let v = value.trim();
    !v.is_empty()
        && v.len() <= 64
        && v
            .chars()
            .all(|c| {
                c.is_ascii_alphanumeric()
                    || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-')
            })
}

impl Profile {
    /// Parse and validate a profile document. Effect tuning is sanitized.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let mut profile: Profile = serde_json::from_str(json)?;
        profile.effects = profile.effects.sanitized();
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyField("name"));
        }
        if self.avatar.trim().is_empty() {
            return Err(ProfileError::EmptyField("avatar"));
        }

        let mut seen = FnvHashSet::default();
        let links = self
            .social_links
            .iter()
            .map(|l| (&l.id, &l.url))
            .chain(self.website_links.iter().map(|l| (&l.id, &l.url)));
        for (id, url) in links {
            if !seen.insert(id.as_str()) {
                return Err(ProfileError::DuplicateLinkId(id.clone()));
            }
            if !is_supported_url(url) {
                return Err(ProfileError::InvalidUrl {
                    id: id.clone(),
                    url: url.clone(),
                });
            }
        }

        if let Some(theme) = &self.theme {
            for color in [&theme.primary, &theme.secondary] {
                if !is_safe_color(color) {
                    return Err(ProfileError::InvalidColor(color.clone()));
                }
            }
        }
        Ok(())
    }

    /// Built-in profile used when the page carries no profile document.
    pub fn sample() -> Self {
        Self {
            avatar: "/avatar.png".into(),
            name: "Alex".into(),
            bio: "Building small, fast things for the web.".into(),
            social_links: vec![
                SocialLink {
                    id: "github".into(),
                    url: "https://github.com/".into(),
                    platform: "GitHub".into(),
                    icon: String::new(),
                },
                SocialLink {
                    id: "email".into(),
                    url: "mailto:hello@example.com".into(),
                    platform: "Email".into(),
                    icon: String::new(),
                },
            ],
            website_links: vec![WebsiteLink {
                id: "blog".into(),
                url: "https://example.com/".into(),
                title: "Blog".into(),
                description: Some("Notes and write-ups".into()),
            }],
            theme: None,
            effects: EffectsConfig::default(),
        }
    }
}

/// One character of the animated greeting headline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreetingGlyph {
    pub ch: char,
    /// Characters after the "Hello, " prefix take the accent color.
    pub highlighted: bool,
    /// Stagger for the bounce animation.
    pub delay_sec: f32,
}

const GREETING_PREFIX: &str = "Hello, ";
const GREETING_STAGGER_SEC: f32 = 0.03;

/// "Hello, I'm {name}" split into per-character glyphs.
pub fn greeting(name: &str) -> Vec<GreetingGlyph> {
    let prefix_len = GREETING_PREFIX.chars().count();
    GREETING_PREFIX
        .chars()
        .chain("I'm ".chars())
        .chain(name.trim().chars())
        .enumerate()
        .map(|(i, ch)| GreetingGlyph {
            ch,
            highlighted: i >= prefix_len,
            delay_sec: i as f32 * GREETING_STAGGER_SEC,
        })
        .collect()
}

#[inline]
pub fn footer_text(name: &str, year: u32) -> String {
    format!("© {} {}. All rights reserved.", year, name.trim())
}
