pub mod layout;
pub mod point;

pub use layout::*;
pub use point::*;
