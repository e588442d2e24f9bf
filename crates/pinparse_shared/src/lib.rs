//! Shared functionality
//!
//! This crate supplies the pieces that both the HTML and the CSS parser build on: the character
//! stream they walk together, the source intervals every record points back with, and the error
//! taxonomy that describes the first thing wrong with a document.
pub mod stream;
pub mod errors;
pub mod node;
