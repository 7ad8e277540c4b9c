//! `toksub_core` is an escape-aware token scanning and variable substitution
//! library. It locates spans bounded by a literal open/close delimiter pair
//! (for example `${` and `}`), hands the inner text to a pluggable handler,
//! and splices the handler's return value into the output. A backslash
//! immediately before a delimiter escapes that occurrence so delimiters can
//! appear literally in the text.
//!
//! ## Key Types
//!
//! - [`TokenScanner`] — the single-pass scan-and-replace engine, configured
//!   once with a delimiter pair and a handler.
//! - [`TokenHandler`] — the capability consumed by the scanner: span text in,
//!   replacement text out. Plain `Fn(&str) -> String` closures qualify.
//! - [`VariableTokenHandler`] — the reference handler: resolves spans against
//!   a variable mapping with optional `${key:default}` fallback syntax.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use toksub_core::substitute;
//!
//! let mut variables = HashMap::new();
//! variables.insert("name".to_string(), "world".to_string());
//!
//! let output = substitute("hello ${name}", Some(&variables)).unwrap();
//! assert_eq!(output, "hello world");
//!
//! // Unknown placeholders pass through literally.
//! let output = substitute("hello ${unknown}", Some(&variables)).unwrap();
//! assert_eq!(output, "hello ${unknown}");
//! ```
//!
//! Custom delimiter pairs and handlers go through [`TokenScanner`] directly:
//!
//! ```rust
//! use toksub_core::TokenScanner;
//!
//! let scanner = TokenScanner::new("{{", "}}", |content: &str| content.trim().to_string()).unwrap();
//! assert_eq!(scanner.parse("a {{ b }} c").unwrap(), "a b c");
//! ```

pub use error::*;
pub use handler::*;
pub use scanner::*;
pub use substitution::*;

mod error;
mod handler;
mod scanner;
pub mod substitution;
