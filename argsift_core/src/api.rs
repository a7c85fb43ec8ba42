mod arguments;
mod core;
mod value;

pub use self::core::*;
pub use arguments::*;
pub use value::*;
