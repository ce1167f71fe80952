//! Query and result types exchanged with the search backend
//!
//! The backend answers with a JSON array of `[path, rank]` pairs, already
//! ordered by descending relevance. The client keeps that order untouched.

use imstr::ImString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Search text captured at the moment the user confirmed the input.
///
/// Cloning is cheap; the text is shared and never mutated after capture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(ImString);

impl Query {
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<ImString>) -> Self {
        Self(text.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.as_str().is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self(ImString::from(text))
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self(ImString::from(text))
    }
}

/// One ranked hit returned by the backend.
///
/// On the wire this is a two-element array `[path, rank]`. The backend writes
/// a NaN score (empty documents) as `null`, which decodes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Option<f64>)", into = "(String, Option<f64>)")]
pub struct ResultRow {
    pub path: String,
    /// Backend relevance score. Never displayed; no range checks are applied.
    pub rank: Option<f64>,
}

impl ResultRow {
    #[must_use]
    pub fn new(path: impl Into<String>, rank: f64) -> Self {
        Self {
            path: path.into(),
            rank: Some(rank),
        }
    }

    /// Row whose score the backend could not express as a number.
    #[must_use]
    pub fn unranked(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            rank: None,
        }
    }
}

impl From<(String, Option<f64>)> for ResultRow {
    fn from((path, rank): (String, Option<f64>)) -> Self {
        Self { path, rank }
    }
}

impl From<ResultRow> for (String, Option<f64>) {
    fn from(row: ResultRow) -> Self {
        (row.path, row.rank)
    }
}

/// Ordered sequence of rows exactly as the backend ranked them.
///
/// Paths are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultList {
    rows: Vec<ResultRow>,
}

impl ResultList {
    #[must_use]
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a backend response body.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }

    /// Row paths in rank order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.path.as_str())
    }
}

impl From<Vec<ResultRow>> for ResultList {
    fn from(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
