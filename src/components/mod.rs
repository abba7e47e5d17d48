pub mod header;
pub mod search_field;

pub use header::Header;
pub use search_field::{SearchField, SearchFieldView, SearchIcon};
