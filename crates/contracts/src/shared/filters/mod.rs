pub mod list;
pub mod set;
pub mod sort;
pub mod value;

pub use list::*;
pub use set::*;
pub use sort::*;
pub use value::*;
