use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ScrollworkError, ScrollworkResult};

/// A resolved site path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "route", content = "slug", rename_all = "snake_case")]
pub enum Route {
    /// `/`
    Home,
    /// `/profile`
    Profile,
    /// `/works`
    Works,
    /// `/works/{slug}`; the slug may not exist in the catalog.
    WorkDetail(String),
    /// `/contact`
    Contact,
    /// Anything else.
    NotFound(String),
}

impl Route {
    /// Resolve an absolute path. Query strings, fragments and one trailing slash are ignored.
    ///
    /// Only a path that does not start with `/` is an error; unknown paths resolve to
    /// [`Route::NotFound`].
    pub fn parse(path: &str) -> ScrollworkResult<Self> {
        if !path.starts_with('/') {
            return Err(ScrollworkError::routing(format!(
                "path '{path}' must start with '/'"
            )));
        }
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => path,
        };
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        let route = match segments.as_slice() {
            [""] => Self::Home,
            ["profile"] => Self::Profile,
            ["works"] => Self::Works,
            ["works", slug] if !slug.is_empty() => Self::WorkDetail((*slug).to_owned()),
            ["contact"] => Self::Contact,
            _ => Self::NotFound(path.to_owned()),
        };
        Ok(route)
    }

    /// Canonical path.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::Works => "/works".to_owned(),
            Self::WorkDetail(slug) => format!("/works/{slug}"),
            Self::Contact => "/contact".to_owned(),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl FromStr for Route {
    type Err = ScrollworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/route.rs"]
mod tests;
