//! Query parsing and translation into metadata marker paths
//!
//! A query takes one of three literal forms:
//!
//! - `.Name` matches directories carrying the class `Name` (`.meta/Name.class`)
//! - `#Name` matches directories carrying the id `Name` (`.meta/Name.id`)
//! - `Name` matches directories with any marker called `Name` (`.meta/Name`)

use std::convert::Infallible;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Reserved per-directory metadata container.
pub const CONTAINER: &str = ".meta";

/// Suffix of class markers inside the container.
pub const CLASS_SUFFIX: &str = ".class";

/// Suffix of identifier markers inside the container.
pub const ID_SUFFIX: &str = ".id";

/// Which marker convention a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Class,
    Id,
    Plain,
}

/// A parsed query. Any string is a valid query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    kind: QueryKind,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let kind = if raw.starts_with('.') {
            QueryKind::Class
        } else if raw.starts_with('#') {
            QueryKind::Id
        } else {
            QueryKind::Plain
        };
        Self {
            raw: raw.to_string(),
            kind,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// The name carried by the query, without its prefix character.
    pub fn name(&self) -> &str {
        match self.kind {
            // Both prefixes are single-byte ASCII
            QueryKind::Class | QueryKind::Id => &self.raw[1..],
            QueryKind::Plain => &self.raw,
        }
    }

    /// Translate into the marker path relative to a directory.
    ///
    /// Only normal components of the name are kept, so the result always
    /// stays below `container`, whatever separators the query contains.
    pub fn marker_path(&self, container: &str) -> MarkerPath {
        let marker = match self.kind {
            QueryKind::Class => format!("{}{}", self.name(), CLASS_SUFFIX),
            QueryKind::Id => format!("{}{}", self.name(), ID_SUFFIX),
            QueryKind::Plain => self.raw.clone(),
        };
        let mut path = PathBuf::from(container);
        path.extend(
            Path::new(&marker)
                .components()
                .filter(|c| matches!(c, Component::Normal(_))),
        );
        MarkerPath(path)
    }
}

impl FromStr for Query {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Relative path of a marker below a directory, rooted at the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPath(PathBuf);

impl MarkerPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Candidate location of this marker inside `dir`.
    pub fn within(&self, dir: &Path) -> PathBuf {
        dir.join(&self.0)
    }
}

impl AsRef<Path> for MarkerPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for MarkerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Compile a raw query string into a marker path under `container`.
pub fn compile(query: &str, container: &str) -> MarkerPath {
    Query::parse(query).marker_path(container)
}
