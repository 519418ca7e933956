//! CLI subcommand implementations.

pub mod inspect;
pub mod normalize;
pub mod validate;
