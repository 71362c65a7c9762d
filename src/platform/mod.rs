//! Platform abstraction layer
//!
//! Host-side glue between device events and the simulation's input flags.

pub mod input;

pub use input::{Key, UnknownKey, key_event, set_key};
