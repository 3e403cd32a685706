//! Configuration model for agentscape.
//!
//! A `Config` describes where bundled templates live, how a project root is
//! recognised, and how installed components are laid out. It can be read
//! from a YAML file (`--config`); unknown fields are ignored for forward
//! compatibility and every field has a default.

mod model;
mod operations;


pub use model::Config;

#[cfg(test)]
pub use model::bundled_templates_dir;
