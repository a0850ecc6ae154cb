use crate::{response::VerificationResult, transport::TransportError};

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
	#[error("Service does not exist: {0}")]
	UnknownService(String),
	#[error("Phone number, country code and code are required to place a call.")]
	MissingCallFields,
	#[error("Invalid base url: {0}")]
	InvalidBaseUrl(#[from] url::ParseError),
	#[error(transparent)]
	Transport(#[from] TransportError),
	#[error("Empty body response received from service (HTTP {status})")]
	EmptyResponse { status: u16 },
	#[error("Could not decode the service response (HTTP {status}): {reason}")]
	MalformedResponse {
		status: u16,
		reason: String,
		/// The upstream `message` field, if it could still be read from the wrapper node.
		message: Option<String>,
	},
	#[error("{0}")]
	Rejected(String),
}

impl VerifyError {
	/// The result the service call would have produced from what was known when decoding failed.
	///
	/// Only available for [`VerifyError::MalformedResponse`].
	pub fn partial_result(&self) -> Option<VerificationResult> {
		match self {
			VerifyError::MalformedResponse {
				status,
				reason,
				message,
			} => {
				let text = message.clone().unwrap_or_else(|| reason.clone());
				Some(VerificationResult {
					response_code: i64::from(*status),
					message: text.clone(),
					error: text,
					..Default::default()
				})
			}
			_ => None,
		}
	}

	pub fn is_timeout(&self) -> bool {
		matches!(self, VerifyError::Transport(err) if err.is_timeout())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_partial_result_prefers_upstream_message() {
		let err = VerifyError::MalformedResponse {
			status: 503,
			reason: "status: invalid type: map, expected a string".into(),
			message: Some("apikey is invalid".into()),
		};

		let partial = err.partial_result().unwrap();
		assert_eq!(partial.response_code, 503);
		assert_eq!(partial.message, "apikey is invalid");
		assert_eq!(partial.error, "apikey is invalid");
		assert!(!partial.is_valid());
	}

	#[test]
	fn test_partial_result_falls_back_to_reason() {
		let err = VerifyError::MalformedResponse {
			status: 200,
			reason: "response had no wrapper node".into(),
			message: None,
		};

		let partial = err.partial_result().unwrap();
		assert_eq!(partial.response_code, 200);
		assert_eq!(partial.message, "response had no wrapper node");
	}

	#[test]
	fn test_partial_result_only_for_malformed() {
		assert!(VerifyError::EmptyResponse { status: 200 }
			.partial_result()
			.is_none());
		assert!(VerifyError::MissingCallFields.partial_result().is_none());
	}
}
