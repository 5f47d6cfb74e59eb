//! Chart object model, builders, palettes, and the figure normalizer.

pub mod build;
pub mod figure;
pub mod layout;
pub mod normalize;
pub mod palette;
pub mod trace;

pub use build::{BarChart, LineChart};
pub use figure::{Chart, FacetGrid};
pub use layout::{
    Annotation, Axis, AxisKind, BarMode, HAnchor, HoverMode, Layout, Legend, Margin, Orientation,
    TickFont, Title, VAnchor,
};
pub use normalize::{Theme, normalize, normalize_with_margin};
pub use trace::{LineMode, TextPosition, Trace, TraceKind};
