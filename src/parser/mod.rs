pub mod decoder;
pub mod record;
pub mod stream;

pub use decoder::*;
pub use record::*;
pub use stream::*;
