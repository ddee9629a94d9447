mod lectern_error;
mod storage_error;

pub use lectern_error::{LecternError, LecternResult};
pub use storage_error::StorageError;
