//! One module per dashboard page.
//!
//! Each page module owns its dataset roster: every dataset gets a private
//! function that loads, reshapes, and styles one chart, documenting the
//! column shape it relies on. Page assembly degrades gracefully: if a
//! dataset fails to load, the page's static text still renders and the
//! failure is logged.

pub mod economy;
pub mod overview;
pub mod society;
pub mod timeline;

/// Banner shown at the top of every thematic page.
pub(crate) const HEADER_TEXT: &str =
    "**ΟΙΚΟΝΟΜΙΚΕΣ ΕΞΕΛΙΞΕΙΣ & ΚΟΙΝΩΝΙΚΕΣ ΕΠΙΠΤΩΣΕΙΣ ΤΗΣ ΠΑΝΔΗΜΙΑΣ COVID-19 ΣΤΗΝ ΕΛΛΑΔΑ**";
