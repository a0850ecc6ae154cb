pub mod http;

use reqwest::Url;

pub use http::HttpTransport;

/// Performs the HTTP requests for a [`crate::VerificationClient`].
pub trait Transport {
	/// Issue a GET request and read the whole response body.
	///
	/// Non-2xx responses are not errors at this level, the caller decides what to do with the body.
	fn get(&self, url: &Url) -> Result<RawResponse, TransportError>;
}

impl<T> Transport for &T
where
	T: Transport + ?Sized,
{
	fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
		(**self).get(url)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
	pub status: u16,
	pub body: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	#[error("Network failure: {0}")]
	NetworkFailure(#[from] reqwest::Error),
}

impl TransportError {
	pub fn is_timeout(&self) -> bool {
		match self {
			TransportError::NetworkFailure(err) => err.is_timeout(),
		}
	}
}
