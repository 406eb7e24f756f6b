#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod ast;
#[cfg(feature = "codegen")]
pub mod codegen;
#[cfg(feature = "parser")]
pub mod converter;
#[cfg(feature = "emission")]
pub mod emission;
#[cfg(feature = "parser")]
mod error;
#[cfg(feature = "lexer")]
pub mod lexer;
#[cfg(feature = "lexer")]
pub mod notation;
#[cfg(feature = "parser")]
pub mod parser;
#[cfg(feature = "parser")]
pub mod validator;

#[cfg(feature = "parser")]
pub use error::{Error, Result};
