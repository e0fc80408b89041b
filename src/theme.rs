//! Styling configuration: scanned content patterns, utility rules, and
//! custom animations, rendered to a single stylesheet.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid content pattern `{pattern}`: {source}")]
    InvalidContent {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("invalid animation `{name}`: {reason}")]
    InvalidAnimation { name: String, reason: &'static str },
}

/// Rules for the utility classes used by the view components.
const UTILITIES: &[(&str, &str)] = &[
    ("flex", "display: flex;"),
    ("flex-col", "flex-direction: column;"),
    ("items-center", "align-items: center;"),
    ("justify-center", "justify-content: center;"),
    ("min-h-64", "min-height: 16rem;"),
    ("text-center", "text-align: center;"),
    ("text-lg", "font-size: 1.125rem; line-height: 1.75rem;"),
    ("font-medium", "font-weight: 500;"),
    ("text-gray-600", "color: #4b5563;"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl Direction {
    fn as_css(self) -> &'static str {
        match self {
            Direction::Normal => "normal",
            Direction::Reverse => "reverse",
            Direction::Alternate => "alternate",
            Direction::AlternateReverse => "alternate-reverse",
        }
    }
}

/// A scale animation exposed as the `animate-<name>` utility class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    pub from_scale: f64,
    pub to_scale: f64,
    pub duration_secs: f64,
    #[serde(default = "default_easing")]
    pub easing: String,
    #[serde(default)]
    pub direction: Direction,
    /// `None` loops forever.
    #[serde(default)]
    pub iterations: Option<u32>,
}

fn default_easing() -> String {
    "ease".to_string()
}

impl Animation {
    /// Slow zoom used behind hero images.
    pub fn ken_burns() -> Self {
        Self {
            name: "ken-burns".to_string(),
            from_scale: 1.05,
            to_scale: 1.2,
            duration_secs: 15.0,
            easing: "ease-in-out".to_string(),
            direction: Direction::Alternate,
            iterations: None,
        }
    }

    pub fn class_name(&self) -> String {
        format!("animate-{}", self.name)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        let invalid = |reason| ThemeError::InvalidAnimation {
            name: self.name.clone(),
            reason,
        };
        if !is_css_ident(&self.name) {
            return Err(invalid("name must be a CSS identifier"));
        }
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(invalid("duration must be positive"));
        }
        if !(self.from_scale.is_finite() && self.to_scale.is_finite()) {
            return Err(invalid("scale must be finite"));
        }
        if !is_easing(&self.easing) {
            return Err(invalid("easing must be a keyword or cubic-bezier(x1, y1, x2, y2)"));
        }
        Ok(())
    }

    fn write_css(&self, out: &mut String) {
        let iterations = match self.iterations {
            Some(n) => n.to_string(),
            None => "infinite".to_string(),
        };
        let _ = write!(
            out,
            "@keyframes {name} {{\n  from {{ transform: scale({from}); }}\n  to {{ transform: scale({to}); }}\n}}\n\
             .{class} {{ animation: {name} {duration}s {easing} {iterations} {direction}; }}\n",
            name = self.name,
            from = self.from_scale,
            to = self.to_scale,
            class = self.class_name(),
            duration = self.duration_secs,
            easing = self.easing,
            direction = self.direction.as_css(),
        );
    }
}

fn is_css_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '-' || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn is_easing(value: &str) -> bool {
    if is_css_ident(value) {
        return true;
    }
    let Some(args) = value
        .strip_prefix("cubic-bezier(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };
    let points: Vec<&str> = args.split(',').map(str::trim).collect();
    points.len() == 4
        && points
            .iter()
            .all(|p| p.parse::<f64>().map_or(false, f64::is_finite))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Source files scanned for utility class names.
    #[serde(default = "default_content")]
    pub content: Vec<String>,
    #[serde(default = "default_animations")]
    pub animations: Vec<Animation>,
}

fn default_content() -> Vec<String> {
    vec!["src/**/*.rs".to_string(), "templates/**/*.html".to_string()]
}

fn default_animations() -> Vec<Animation> {
    vec![Animation::ken_burns()]
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            animations: default_animations(),
        }
    }
}

impl ThemeConfig {
    /// Loads overrides from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let raw = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!(
            path = %path.display(),
            patterns = config.content.len(),
            animations = config.animations.len(),
            "theme loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        self.content_set()?;
        for animation in &self.animations {
            animation.validate()?;
        }
        Ok(())
    }

    pub fn content_set(&self) -> Result<GlobSet, ThemeError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.content {
            let glob = Glob::new(pattern).map_err(|source| ThemeError::InvalidContent {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| ThemeError::InvalidContent {
            pattern: self.content.join(", "),
            source,
        })
    }

    /// Renders utility rules followed by each animation.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        for (class, rule) in UTILITIES {
            let _ = writeln!(css, ".{class} {{ {rule} }}");
        }
        for animation in &self.animations {
            css.push('\n');
            animation.write_css(&mut css);
        }
        css
    }
}
