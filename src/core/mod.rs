pub mod labels;
pub mod loader;
pub mod reshape;
pub mod table;

pub use labels::{LabelLookup, lookup};
pub use loader::load_csv;
pub use reshape::{DateOrder, Unpivot, coerce_date, coerce_date_format, coerce_numeric, relabel};
pub use table::{Cell, Table};
