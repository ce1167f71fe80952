//! Search invocation against the remote ranking endpoint
//!
//! - `types` - `Query`, `ResultRow`, `ResultList`
//! - `errors` - failure taxonomy for one cycle
//! - `backend` - the `SearchBackend` seam and its HTTP implementation

pub mod backend;
pub mod errors;
pub mod types;

pub use backend::{HttpSearchBackend, SearchBackend};
pub use errors::{SearchError, SearchResult};
pub use types::{Query, ResultList, ResultRow};
