//! CLI support for the kiwirail binary.

pub mod commands;
