pub mod file;
pub mod category_count;

pub use file::*;
pub use category_count::*;
