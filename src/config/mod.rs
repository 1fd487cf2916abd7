// src/config/mod.rs

//! Command selection.
//!
//! There is no config file: the command list is compiled in
//! ([`defaults`]) and narrowed by CLI flags ([`validate`]).

pub mod defaults;
pub mod validate;

pub use defaults::default_commands;
pub use validate::select_commands;
