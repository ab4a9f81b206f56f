pub mod conversion;
pub mod definition;
pub mod summary;

pub use conversion::*;
pub use definition::*;
pub use summary::*;
