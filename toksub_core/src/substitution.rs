use std::collections::HashMap;

use crate::ToksubResult;
use crate::handler::TokenHandler;
use crate::scanner::TokenScanner;

/// The open marker used by [`substitute`].
pub const DEFAULT_OPEN_TOKEN: &str = "${";
/// The close marker used by [`substitute`].
pub const DEFAULT_CLOSE_TOKEN: &str = "}";

/// Reserved variable key that switches on `${key:default}` fallback syntax
/// when its value is `true` (ASCII case-insensitive).
pub const KEY_ENABLE_DEFAULT_VALUE: &str = "toksub.enable-default-value";
/// Reserved variable key that overrides the key/default separator.
pub const KEY_DEFAULT_VALUE_SEPARATOR: &str = "toksub.default-value-separator";

const DEFAULT_VALUE_SEPARATOR: &str = ":";

/// Options for default-value variable substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstituteOptions {
	/// When enabled, `${key:default}` resolves to the mapped value of `key`
	/// if present, otherwise to `default`. Disabled by default, in which
	/// case the whole span text is treated as the key.
	pub enable_default_values: bool,
	/// Separator between key and default value. Defaults to `:`.
	pub default_value_separator: String,
}

impl Default for SubstituteOptions {
	fn default() -> Self {
		Self {
			enable_default_values: false,
			default_value_separator: DEFAULT_VALUE_SEPARATOR.to_string(),
		}
	}
}

impl SubstituteOptions {
	/// Read options from the reserved keys in a variable mapping, falling
	/// back to the defaults for keys that are absent.
	pub fn from_variables(variables: &HashMap<String, String>) -> Self {
		let mut options = Self::default();

		if let Some(value) = variables.get(KEY_ENABLE_DEFAULT_VALUE) {
			options.enable_default_values = value.eq_ignore_ascii_case("true");
		}

		if let Some(value) = variables.get(KEY_DEFAULT_VALUE_SEPARATOR) {
			options.default_value_separator = value.clone();
		}

		options
	}
}

/// The reference [`TokenHandler`]: resolves span text against a variable
/// mapping, optionally honoring `${key:default}` fallback syntax.
///
/// Missing keys never fail. When the mapping is absent entirely, or when a
/// key has no entry and no default, the span is re-wrapped in the configured
/// markers and returned literally, making substitution a no-op pass.
#[derive(Debug, Clone)]
pub struct VariableTokenHandler<'a> {
	variables: Option<&'a HashMap<String, String>>,
	enable_default_values: bool,
	default_value_separator: String,
	open: String,
	close: String,
}

impl<'a> VariableTokenHandler<'a> {
	/// Create a handler with the default options and `${` / `}` markers.
	pub fn new(variables: Option<&'a HashMap<String, String>>) -> Self {
		Self::with_options(variables, SubstituteOptions::default())
	}

	/// Create a handler with explicit options and `${` / `}` markers.
	pub fn with_options(
		variables: Option<&'a HashMap<String, String>>,
		options: SubstituteOptions,
	) -> Self {
		Self {
			variables,
			enable_default_values: options.enable_default_values,
			default_value_separator: options.default_value_separator,
			open: DEFAULT_OPEN_TOKEN.to_string(),
			close: DEFAULT_CLOSE_TOKEN.to_string(),
		}
	}

	/// Override the markers used when re-wrapping unresolved spans. Pass the
	/// same pair the enclosing scanner was constructed with.
	pub fn with_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
		self.open = open.into();
		self.close = close.into();
		self
	}
}

impl TokenHandler for VariableTokenHandler<'_> {
	fn handle_token(&self, content: &str) -> ToksubResult<String> {
		if let Some(variables) = self.variables {
			if self.enable_default_values {
				if let Some(separator_index) = content.find(&self.default_value_separator) {
					let key = &content[..separator_index];
					let default_value =
						&content[separator_index + self.default_value_separator.len()..];
					return Ok(variables
						.get(key)
						.cloned()
						.unwrap_or_else(|| default_value.to_string()));
				}
			}

			if let Some(value) = variables.get(content) {
				return Ok(value.clone());
			}
		}

		Ok(format!("{}{content}{}", self.open, self.close))
	}
}

/// Substitute `${name}` placeholders in `text` using `variables`, with the
/// default options.
///
/// Passing `None` for the mapping leaves every placeholder untouched.
pub fn substitute(
	text: &str,
	variables: Option<&HashMap<String, String>>,
) -> ToksubResult<String> {
	substitute_with_options(text, variables, SubstituteOptions::default())
}

/// Substitute `${name}` (and, when enabled, `${name:default}`) placeholders
/// in `text` using `variables`.
pub fn substitute_with_options(
	text: &str,
	variables: Option<&HashMap<String, String>>,
	options: SubstituteOptions,
) -> ToksubResult<String> {
	let handler = VariableTokenHandler::with_options(variables, options);
	let scanner = TokenScanner::new(DEFAULT_OPEN_TOKEN, DEFAULT_CLOSE_TOKEN, handler)?;
	scanner.parse(text)
}
