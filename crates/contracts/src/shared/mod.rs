pub mod envelope;
pub mod flag;
pub mod query;

pub use envelope::{Ack, ApiResponse, ErrorBody, Pagination};
pub use query::{DateRange, LimitQuery, YearQuery};
