mod error;
mod inmemory;
mod traits;

pub use error::{BackendError, Result};
pub use inmemory::InMemoryTableBackend;
pub use traits::{CreateOutcome, TableBackend};
