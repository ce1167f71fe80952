//! Full-replace rendering of a result list
//!
//! Every render clears the view and then writes one row per result, in the
//! order the backend ranked them. There is no diffing: rendering the same list
//! twice leaves the same view as rendering it once.

use std::io;

use super::view::View;
use crate::config::ClientConfig;
use crate::search::{ResultList, SearchError};
use crate::utils::ERROR_ROW_PREFIX;

/// Sole writer of a view. Owned by the dispatch worker.
pub struct ResultRenderer<V: View> {
    view: V,
    surface_errors: bool,
}

impl<V: View> ResultRenderer<V> {
    #[must_use]
    pub fn new(view: V) -> Self {
        Self {
            view,
            surface_errors: false,
        }
    }

    #[must_use]
    pub fn with_config(view: V, config: &ClientConfig) -> Self {
        Self {
            view,
            surface_errors: config.surface_errors(),
        }
    }

    #[must_use]
    pub fn surface_errors(mut self, surface: bool) -> Self {
        self.surface_errors = surface;
        self
    }

    /// Replace the view with exactly the rows of `results`.
    ///
    /// Only `path` is shown; `rank` is never displayed.
    pub fn render(&mut self, results: &ResultList) -> io::Result<()> {
        self.view.clear()?;
        for row in results {
            self.view.append_row(&row.path)?;
        }
        self.view.finish()
    }

    /// Wipe the view without marking a completed render.
    pub fn clear(&mut self) -> io::Result<()> {
        self.view.clear()
    }

    /// Show a failed cycle as a single row, if error surfacing is enabled.
    ///
    /// Returns whether anything was drawn.
    pub fn render_error(&mut self, error: &SearchError) -> io::Result<bool> {
        if !self.surface_errors {
            return Ok(false);
        }
        self.view.clear()?;
        self.view.append_row(&format!("{ERROR_ROW_PREFIX}{error}"))?;
        self.view.finish()?;
        Ok(true)
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }
}
