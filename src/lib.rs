pub mod ast;
pub mod cli;
pub mod model;
pub mod naming;
pub mod writer;

pub use cli::{Cli, Commands};
