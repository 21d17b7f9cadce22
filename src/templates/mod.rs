//! Template registry and project initializer
//!
//! Template contents are embedded at compile time, so the set of valid
//! template names is closed and known at startup. Initializing a project
//! materializes one template as `<alias>.py`, never overwriting an
//! existing file.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Errors that can occur while initializing a project from a template
#[derive(Debug, Error)]
pub enum InitError {
    /// Template name is not in the registry
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// Alias is not usable as a module name
    #[error(
        "invalid alias '{0}': must start with a letter or underscore \
         and contain only letters, digits and underscores"
    )]
    InvalidAlias(String),

    /// Target file already exists
    #[error("file '{}' already exists, not overwriting", .0.display())]
    AlreadyExists(PathBuf),

    /// Underlying filesystem failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A named project template with embedded content
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Registry name, unique and stable
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    content: &'static str,
}

impl Template {
    /// The project module content this template scaffolds.
    #[must_use]
    pub const fn content(&self) -> &'static str {
        self.content
    }
}

/// All known templates, sorted by name.
pub const TEMPLATES: &[Template] = &[
    Template {
        name: "example",
        description: "A project with a sample operation and label",
        content: include_str!("content/example.py"),
    },
    Template {
        name: "minimal",
        description: "An empty project skeleton",
        content: include_str!("content/minimal.py"),
    },
    Template {
        name: "testing",
        description: "A project with a no-op operation for testing setups",
        content: include_str!("content/testing.py"),
    },
];

/// Template used when none is given
pub const DEFAULT_TEMPLATE: &str = "minimal";

/// Alias used when none is given
pub const DEFAULT_ALIAS: &str = "project";

/// The closed set of valid template names, in registry (sorted) order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.name).collect()
}

/// Look up a template by name.
#[must_use]
pub fn get(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name == name)
}

/// Whether `alias` is usable as a module name.
fn is_valid_alias(alias: &str) -> bool {
    let mut chars = alias.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Initialize a project from a template in the current directory.
///
/// Returns the path of the created project module.
pub fn init(alias: Option<&str>, template: &str) -> Result<PathBuf, InitError> {
    let cwd = std::env::current_dir()?;
    init_in(&cwd, alias, template)
}

/// Initialize a project from a template in `dir`.
///
/// Writes `<alias>.py` into `dir` from the embedded template content and
/// returns its path.
pub fn init_in(dir: &Path, alias: Option<&str>, template: &str) -> Result<PathBuf, InitError> {
    let template = get(template).ok_or_else(|| InitError::UnknownTemplate(template.to_string()))?;

    let alias = alias.unwrap_or(DEFAULT_ALIAS);
    if !is_valid_alias(alias) {
        return Err(InitError::InvalidAlias(alias.to_string()));
    }

    let path = dir.join(format!("{alias}.py"));
    debug!(
        "writing template '{}' to {}",
        template.name,
        path.display()
    );

    // create_new avoids the race between an existence check and the write
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|err| {
            if err.kind() == ErrorKind::AlreadyExists {
                InitError::AlreadyExists(path.clone())
            } else {
                InitError::Io(err)
            }
        })?;
    file.write_all(template.content.as_bytes())?;

    Ok(path)
}
