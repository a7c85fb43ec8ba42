mod core;
mod model;
mod sniff;

pub(crate) use self::core::*;
pub(crate) use model::*;
pub(crate) use sniff::*;
