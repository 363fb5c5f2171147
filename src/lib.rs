pub mod cli;
pub mod error;
pub mod hash;
pub mod identifier;

pub use identifier::{IdFormat, Identifier, generate};
