#![warn(clippy::unwrap_used)]

#[macro_use]
extern crate serde;

pub mod bin_lookup;
pub mod cards;
pub mod logger;
pub mod state;
pub mod telegram;
pub mod utils;
