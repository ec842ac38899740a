pub mod slice;

pub use slice::{DataSlice, ListSlice};
