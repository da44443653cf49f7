//! Setup-level error types shared by the resolver and the orchestrator.

// crates.io
use serde_json::error::Category;
// self
use crate::{_prelude::*, store::SourceError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical setup error exposed by public APIs.
///
/// Only [`Error::InvalidCredentialFormat`] is raised by the credential resolver itself; every
/// other variant wraps a collaborator failure surfaced by the orchestrator.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Credential payload is not a well-formed flat JSON string map.
	///
	/// Only the location and category of the failure are kept; decoder messages may quote
	/// credential values.
	#[error(
		"Cannot decode credentials as a flat JSON string map at `{path}` ({} error at line {line}, column {column}).",
		category_label(.category)
	)]
	InvalidCredentialFormat {
		/// JSON path at which decoding failed (`.` for the document root).
		path: String,
		/// Decoder failure category.
		category: Category,
		/// One-based line of the failure.
		line: usize,
		/// One-based column of the failure.
		column: usize,
	},
	/// Managed resource did not reference any provider config.
	#[error("No provider config reference provided.")]
	NoProviderConfigReference,
	/// Referenced provider config could not be retrieved.
	#[error("Cannot get referenced provider config `{name}`.")]
	ProviderConfigFetchFailed {
		/// Name of the provider config that was requested.
		name: String,
		/// Collaborator failure.
		#[source]
		source: SourceError,
	},
	/// Provider config usage bookkeeping failed.
	#[error("Cannot track provider config usage.")]
	UsageTrackingFailed {
		/// Collaborator failure.
		#[source]
		source: SourceError,
	},
	/// Raw credential bytes could not be produced.
	#[error("Cannot extract credentials.")]
	CredentialExtractionFailed {
		/// Collaborator failure.
		#[source]
		source: SourceError,
	},
}
impl Error {
	pub(crate) fn invalid_format(path: impl Into<String>, source: &serde_json::Error) -> Self {
		Self::InvalidCredentialFormat {
			path: path.into(),
			category: source.classify(),
			line: source.line(),
			column: source.column(),
		}
	}

	/// Returns the stable kind for this error.
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Error::InvalidCredentialFormat { .. } => ErrorKind::InvalidCredentialFormat,
			Error::NoProviderConfigReference => ErrorKind::NoProviderConfigReference,
			Error::ProviderConfigFetchFailed { .. } => ErrorKind::ProviderConfigFetchFailed,
			Error::UsageTrackingFailed { .. } => ErrorKind::UsageTrackingFailed,
			Error::CredentialExtractionFailed { .. } => ErrorKind::CredentialExtractionFailed,
		}
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::invalid_format(e.path().to_string(), e.inner())
	}
}

fn category_label(category: &Category) -> &'static str {
	match category {
		Category::Io => "io",
		Category::Syntax => "syntax",
		Category::Data => "data",
		Category::Eof => "eof",
	}
}

/// Payload-free discriminant of [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// See [`Error::InvalidCredentialFormat`].
	InvalidCredentialFormat,
	/// See [`Error::NoProviderConfigReference`].
	NoProviderConfigReference,
	/// See [`Error::ProviderConfigFetchFailed`].
	ProviderConfigFetchFailed,
	/// See [`Error::UsageTrackingFailed`].
	UsageTrackingFailed,
	/// See [`Error::CredentialExtractionFailed`].
	CredentialExtractionFailed,
}
impl ErrorKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ErrorKind::InvalidCredentialFormat => "invalid_credential_format",
			ErrorKind::NoProviderConfigReference => "no_provider_config_reference",
			ErrorKind::ProviderConfigFetchFailed => "provider_config_fetch_failed",
			ErrorKind::UsageTrackingFailed => "usage_tracking_failed",
			ErrorKind::CredentialExtractionFailed => "credential_extraction_failed",
		}
	}

	/// Returns `true` when the failure originated in the credential resolver rather than in a
	/// collaborator handed to the orchestrator.
	pub const fn is_resolver_failure(self) -> bool {
		matches!(self, ErrorKind::InvalidCredentialFormat)
	}
}
impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
