use std::time::Duration;

use log::*;
use reqwest::{header::USER_AGENT, Url};

use super::{RawResponse, Transport, TransportError};

/// Sends requests with a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: reqwest::blocking::Client,
}

impl HttpTransport {
	pub fn new(timeout: Duration) -> Result<HttpTransport, TransportError> {
		let client = reqwest::blocking::ClientBuilder::new()
			.timeout(timeout)
			.build()?;
		Ok(Self { client })
	}

	/// Use an already configured client. Its timeout settings are used as is.
	pub fn from_client(client: reqwest::blocking::Client) -> HttpTransport {
		Self { client }
	}
}

impl Transport for HttpTransport {
	fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
		debug!("HTTP Request: GET {}", url.path());
		trace!("Request url: {}", url);
		let resp = self
			.client
			.get(url.clone())
			.header(USER_AGENT, concat!("xverify/", env!("CARGO_PKG_VERSION")))
			.send()?;

		let status = resp.status().as_u16();
		debug!("Response HTTP status: {}", status);

		let body = resp.bytes()?.to_vec();
		trace!("Response body: {}", String::from_utf8_lossy(&body));

		Ok(RawResponse { status, body })
	}
}
