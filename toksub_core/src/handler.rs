use crate::ToksubResult;

/// The capability consumed by [`TokenScanner`](crate::TokenScanner): given
/// the text strictly between an open and close token (escapes already
/// resolved), produce the replacement text.
///
/// The scanner imposes no contract on idempotence or side effects; a handler
/// may look up variables, count invocations, or fail. Errors returned here
/// propagate out of [`parse`](crate::TokenScanner::parse) unmodified.
pub trait TokenHandler {
	fn handle_token(&self, content: &str) -> ToksubResult<String>;
}

/// Any infallible `Fn(&str) -> String` closure is a handler, so simple
/// replacements don't need a dedicated type.
impl<F> TokenHandler for F
where
	F: Fn(&str) -> String,
{
	fn handle_token(&self, content: &str) -> ToksubResult<String> {
		Ok(self(content))
	}
}
