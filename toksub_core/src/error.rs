use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ToksubError {
	#[error(transparent)]
	#[diagnostic(code(toksub::io_error))]
	Io(#[from] std::io::Error),

	#[error("the open token must not be empty")]
	#[diagnostic(
		code(toksub::empty_open_token),
		help("construct the scanner with a non-empty open marker, e.g. `${{`")
	)]
	EmptyOpenToken,

	#[error("the close token must not be empty")]
	#[diagnostic(
		code(toksub::empty_close_token),
		help("construct the scanner with a non-empty close marker, e.g. `}}`")
	)]
	EmptyCloseToken,

	/// A failure raised by a [`TokenHandler`](crate::TokenHandler) while
	/// replacing a span. The scanner never produces this itself; it carries
	/// the handler's error through `parse` untouched.
	#[error(transparent)]
	#[diagnostic(code(toksub::handler))]
	Handler(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type ToksubResult<T> = Result<T, ToksubError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
