pub mod homework;
pub mod verdict;

pub use homework::*;
pub use verdict::*;
