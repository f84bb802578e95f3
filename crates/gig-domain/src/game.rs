//! Game query vocabulary: filters and ordering.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::pagination::Sort;
use crate::tag::TagKind;

/// Error returned when a comma-separated id list contains a non-integer entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id list: {0:?}")]
pub struct InvalidIdList(pub String);

/// Parse a comma-separated list of integer ids (`"1,2, 3"`).
///
/// Returns `Ok(None)` for an empty string so that `?genres=` behaves as if the
/// parameter were absent.
pub fn parse_id_list(raw: &str) -> Result<Option<Vec<i32>>, InvalidIdList> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
        .map_err(|_| InvalidIdList(raw.to_owned()))
}

/// `exact` / `lte` / `gte` bounds on a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter<T> {
    pub exact: Option<T>,
    pub lte: Option<T>,
    pub gte: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            exact: None,
            lte: None,
            gte: None,
        }
    }
}

/// All conditions a game listing can be narrowed by. Conditions compose
/// conjunctively; each tag list is a set-membership test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFilter {
    pub genres: Option<Vec<i32>>,
    pub themes: Option<Vec<i32>>,
    pub platforms: Option<Vec<i32>>,
    pub developers: Option<Vec<i32>>,
    pub publishers: Option<Vec<i32>>,
    pub ids: Option<Vec<i32>>,
    pub first_release_date: RangeFilter<DateTime<Utc>>,
    pub rating: RangeFilter<f64>,
    pub search: Option<String>,
}

impl GameFilter {
    /// Tag id lists paired with their kind, skipping absent ones.
    pub fn tag_filters(&self) -> impl Iterator<Item = (TagKind, &[i32])> {
        [
            (TagKind::Genre, &self.genres),
            (TagKind::Theme, &self.themes),
            (TagKind::Platform, &self.platforms),
            (TagKind::Developer, &self.developers),
            (TagKind::Publisher, &self.publishers),
        ]
        .into_iter()
        .filter_map(|(kind, ids)| ids.as_deref().map(|ids| (kind, ids)))
    }

    /// Search terms: `search` split on whitespace and commas. Every term must
    /// appear in the name for a game to match.
    pub fn search_terms(&self) -> impl Iterator<Item = &str> {
        self.search
            .as_deref()
            .unwrap_or_default()
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|term| !term.is_empty())
    }
}

/// Columns a game listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOrderField {
    Rating,
    Popularity,
    FirstReleaseDate,
}

impl GameOrderField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "rating" => Some(Self::Rating),
            "popularity" => Some(Self::Popularity),
            "first_release_date" => Some(Self::FirstReleaseDate),
            _ => None,
        }
    }
}

/// Ordered list of sort keys for game listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOrdering(Vec<(GameOrderField, Sort)>);

impl Default for GameOrdering {
    /// Highest rated first, ties broken by popularity.
    fn default() -> Self {
        Self(vec![
            (GameOrderField::Rating, Sort::Desc),
            (GameOrderField::Popularity, Sort::Desc),
        ])
    }
}

impl GameOrdering {
    /// Parse an `ordering` parameter such as `-rating,first_release_date`.
    ///
    /// Unknown fields are dropped. When nothing valid remains the default
    /// ordering is used.
    pub fn parse(raw: &str) -> Self {
        let keys: Vec<_> = raw
            .split(',')
            .map(str::trim)
            .filter_map(|term| match term.strip_prefix('-') {
                Some(name) => GameOrderField::from_name(name).map(|f| (f, Sort::Desc)),
                None => GameOrderField::from_name(term).map(|f| (f, Sort::Asc)),
            })
            .collect();
        if keys.is_empty() {
            Self::default()
        } else {
            Self(keys)
        }
    }

    pub fn keys(&self) -> &[(GameOrderField, Sort)] {
        &self.0
    }
}
