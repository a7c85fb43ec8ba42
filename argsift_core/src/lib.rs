//! Core module for `argsift`.
//! See [documentation root](https://docs.rs/argsift/latest/argsift/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod classifier;
mod constant;
mod model;
pub mod prelude;

pub use api::*;
pub use model::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
