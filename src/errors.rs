use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The different kinds of errors for `elias`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
  /// `Corruption` errors occur during decompression, indicating the
  /// provided bytes cannot have been produced by the same code and
  /// configuration.
  Corruption,
  /// `InsufficientData` errors occur during decompression, indicating the
  /// decoder reached the end of the provided bytes before emitting the
  /// requested number of values.
  InsufficientData,
  /// `InvalidArgument` errors occur during compression, indicating the
  /// parameters or input values provided to a function were invalid.
  InvalidArgument,
}

/// The error type used in results for all `elias` functionality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EliasError {
  pub kind: ErrorKind,
  pub message: String,
}

impl EliasError {
  pub(crate) fn new<S: AsRef<str>>(kind: ErrorKind, message: S) -> Self {
    EliasError {
      kind,
      message: message.as_ref().to_string(),
    }
  }

  pub(crate) fn corruption<S: AsRef<str>>(message: S) -> Self {
    Self::new(ErrorKind::Corruption, message)
  }

  pub(crate) fn insufficient_data<S: AsRef<str>>(message: S) -> Self {
    Self::new(ErrorKind::InsufficientData, message)
  }

  pub(crate) fn invalid_argument<S: AsRef<str>>(message: S) -> Self {
    Self::new(ErrorKind::InvalidArgument, message)
  }
}

impl Display for EliasError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "elias {:?} error: {}",
      self.kind, &self.message
    )
  }
}

impl Error for EliasError {}

pub type EliasResult<T> = Result<T, EliasError>;
