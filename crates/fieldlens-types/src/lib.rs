pub mod error;
pub mod snapshot;
pub mod value;

pub use error::{Error, Result};
pub use snapshot::{Snapshot, Symbol};
pub use value::{Field, Value};
