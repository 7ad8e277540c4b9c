use tracing::debug;
use tracing::trace;

use crate::ToksubError;
use crate::ToksubResult;
use crate::handler::TokenHandler;

/// A single-pass, escape-aware scanner for one open/close delimiter pair.
///
/// The scanner walks the input left to right, locates each span bounded by
/// the literal `open` and `close` markers, hands the inner text to the
/// configured [`TokenHandler`], and splices the handler's return value into
/// the output. A backslash immediately before a marker escapes exactly that
/// occurrence, so delimiters can appear literally in the text.
///
/// Matching is literal substring search; neither marker is treated as a
/// pattern. Configuration is immutable after construction and the scanner
/// holds no per-call state, so a single instance can be reused across calls
/// and shared between threads when the handler allows it.
///
/// ```rust
/// use toksub_core::TokenScanner;
///
/// let scanner = TokenScanner::new("${", "}", |content: &str| content.to_uppercase()).unwrap();
/// assert_eq!(scanner.parse("a${b}c").unwrap(), "aBc");
/// assert_eq!(scanner.parse(r"\${b}").unwrap(), "${b}");
/// ```
#[derive(Debug, Clone)]
pub struct TokenScanner<H> {
	/// The literal text that opens a span.
	open: String,
	/// The literal text that closes a span.
	close: String,
	/// The handler invoked once per recognized, terminated span.
	handler: H,
}

impl<H: TokenHandler> TokenScanner<H> {
	/// Create a scanner for the given delimiter pair and handler.
	///
	/// Fails with [`ToksubError::EmptyOpenToken`] or
	/// [`ToksubError::EmptyCloseToken`] when a marker is empty, so
	/// misconfiguration surfaces at construction rather than mid-scan.
	pub fn new(
		open: impl Into<String>,
		close: impl Into<String>,
		handler: H,
	) -> ToksubResult<Self> {
		let open = open.into();
		let close = close.into();

		if open.is_empty() {
			return Err(ToksubError::EmptyOpenToken);
		}

		if close.is_empty() {
			return Err(ToksubError::EmptyCloseToken);
		}

		Ok(Self {
			open,
			close,
			handler,
		})
	}

	/// The configured open marker.
	pub fn open_token(&self) -> &str {
		&self.open
	}

	/// The configured close marker.
	pub fn close_token(&self) -> &str {
		&self.close
	}

	/// Scan `text` and replace every recognized span with the handler's
	/// output.
	///
	/// Empty input returns an empty string; input without the open marker is
	/// returned unchanged. An open marker with no matching close consumes
	/// the remainder of the input as plain text. Handler errors propagate
	/// unmodified.
	///
	/// The escape rule inspects exactly the one byte before a marker
	/// occurrence: a backslash there always escapes that occurrence, even
	/// when the backslash is itself preceded by another backslash. `\\${x}`
	/// is therefore still escaped. Backslash counting is deliberately not
	/// parity-based.
	pub fn parse(&self, text: &str) -> ToksubResult<String> {
		if text.is_empty() {
			return Ok(String::new());
		}

		let Some(mut start) = text.find(&self.open) else {
			return Ok(text.to_string());
		};

		let src = text.as_bytes();
		let mut offset = 0;
		let mut builder = String::with_capacity(text.len());

		loop {
			if start > 0 && src[start - 1] == b'\\' {
				// Escaped open marker: drop the backslash, keep the marker
				// literally, and open no span.
				trace!(start, "escaped open token kept as literal text");
				builder.push_str(&text[offset..start - 1]);
				builder.push_str(&self.open);
				offset = start + self.open.len();
			} else {
				builder.push_str(&text[offset..start]);
				offset = start + self.open.len();

				// Per-span buffer, freshly scoped; escaped close markers
				// accumulate here until an unescaped close terminates the
				// span.
				let mut expression = String::new();
				let mut end = find_from(text, &self.close, offset);

				loop {
					match end {
						Some(e) if e > offset && src[e - 1] == b'\\' => {
							trace!(end = e, "escaped close token folded into span");
							expression.push_str(&text[offset..e - 1]);
							expression.push_str(&self.close);
							offset = e + self.close.len();
							end = find_from(text, &self.close, offset);
						}
						Some(e) => {
							expression.push_str(&text[offset..e]);
							break;
						}
						None => break,
					}
				}

				match end {
					Some(e) => {
						trace!(content = %expression, "handing span to the handler");
						builder.push_str(&self.handler.handle_token(&expression)?);
						offset = e + self.close.len();
					}
					None => {
						// Unterminated span: everything from the open marker
						// onward is plain text and the scan stops recognizing
						// tokens in it.
						debug!(start, "close token not found, passing remainder through");
						builder.push_str(&text[start..]);
						offset = src.len();
					}
				}
			}

			match find_from(text, &self.open, offset) {
				Some(next) => start = next,
				None => break,
			}
		}

		if offset < src.len() {
			builder.push_str(&text[offset..]);
		}

		Ok(builder)
	}
}

/// Find the next occurrence of `needle` at or after `from`, as an absolute
/// byte offset into `text`.
fn find_from(text: &str, needle: &str, from: usize) -> Option<usize> {
	text[from..].find(needle).map(|index| index + from)
}
