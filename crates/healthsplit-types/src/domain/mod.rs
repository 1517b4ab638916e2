pub mod batch;
pub mod category;
pub mod metadata;
pub mod row;

pub use batch::*;
pub use category::*;
pub use metadata::*;
pub use row::*;
