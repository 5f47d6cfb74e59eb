//! Path-to-page routing.
//!
//! Fully stateless: a pure function from path string to page. Unknown and
//! root paths fall back to the overview page.

use std::path::Path;

use crate::page::Page;
use crate::pages;

/// The four dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Overview,
    Timeline,
    Economy,
    Society,
}

impl Route {
    /// Resolves a navigation path; anything unmatched yields [`Route::Overview`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path {
            "/apps/arxiki" => Self::Overview,
            "/apps/pandimia" => Self::Timeline,
            "/apps/oikonomia" => Self::Economy,
            "/apps/koinwnia" => Self::Society,
            _ => Self::Overview,
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/apps/arxiki",
            Self::Timeline => "/apps/pandimia",
            Self::Economy => "/apps/oikonomia",
            Self::Society => "/apps/koinwnia",
        }
    }

    /// Builds this route's page from the datasets under `data_dir`.
    #[must_use]
    pub fn page(self, data_dir: &Path) -> Page {
        match self {
            Self::Overview => pages::overview::page(),
            Self::Timeline => pages::timeline::page(data_dir),
            Self::Economy => pages::economy::page(data_dir),
            Self::Society => pages::society::page(data_dir),
        }
    }
}

/// Renders the page a navigation path addresses.
#[must_use]
pub fn render(path: &str, data_dir: &Path) -> Page {
    Route::from_path(path).page(data_dir)
}
