//! Loads the category page settings from the host's YAML site configuration.

use crate::generate::{validate_page_size, Result as GenerateResult};
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_CATEGORY_PATH: &str = "category";
const DEFAULT_CATEGORY_LAYOUT: &str = "category_index.html";
const LAYOUTS_DIRECTORY: &str = "_layouts";

fn default_category_path() -> String {
    DEFAULT_CATEGORY_PATH.to_owned()
}

fn default_category_layout() -> String {
    DEFAULT_CATEGORY_LAYOUT.to_owned()
}

/// The category page settings. Keys not listed here are ignored, so the
/// whole site configuration file can be parsed directly.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// The directory, relative to the site root, under which each
    /// category's pages are placed (`{category_path}/{slug}/index.html`).
    #[serde(default = "default_category_path")]
    pub category_path: String,

    /// The layout used to render category pages. It is passed through to the
    /// host untouched.
    #[serde(default = "default_category_layout")]
    pub category_layout: String,

    /// The number of posts per page. Pagination is disabled when unset.
    #[serde(default)]
    pub paginate: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            category_path: default_category_path(),
            category_layout: default_category_layout(),
            paginate: None,
        }
    }
}

impl Config {
    /// Parses the configuration from a YAML document.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Config> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        contents.parse()
    }

    /// The validated page size, or `None` if pagination is disabled.
    pub fn page_size(&self) -> GenerateResult<Option<NonZeroUsize>> {
        self.paginate.map(validate_page_size).transpose()
    }

    /// The layout's path relative to the site source, e.g.
    /// `_layouts/category_index.html`.
    pub fn layout_path(&self) -> PathBuf {
        PathBuf::from(LAYOUTS_DIRECTORY).join(&self.category_layout)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Config> {
        // An empty site configuration is valid and means "all defaults".
        if s.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }
}

/// The result of loading a [`Config`].
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading a [`Config`].
#[derive(Debug)]
pub enum Error {
    /// Returned when the configuration is not valid YAML or a setting has the
    /// wrong type.
    Yaml(serde_yaml::Error),

    /// Returned for I/O errors while reading the configuration.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Yaml(err) => write!(f, "Parsing site configuration: {}", err),
            Error::Io(err) => write!(f, "Reading site configuration: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Yaml(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts [`serde_yaml::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: serde_yaml::Error) -> Error {
        Error::Yaml(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
