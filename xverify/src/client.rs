use std::time::Duration;

use log::*;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};

use crate::{
	phonecall::{self, CallOptions, PhoneNumber},
	response::{self, VerificationResult},
	service::ServiceKind,
	transport::{HttpTransport, Transport},
	Params, VerifyError,
};

pub const DEFAULT_BASE_URL: &str = "http://www.xverify.com/services";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

lazy_static! {
	static ref DEFAULT_URL: Url = DEFAULT_BASE_URL
		.parse::<Url>()
		.expect("default base url must be valid");
}

/// Credentials and connection settings for a [`VerificationClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub base_url: String,
	pub api_key: SecretString,
	/// The domain registered with the account.
	pub domain: String,
	pub timeout: Duration,
}

impl ClientConfig {
	pub fn new(api_key: impl Into<String>, domain: impl Into<String>) -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_owned(),
			api_key: SecretString::new(api_key.into()),
			domain: domain.into(),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}

/// A client for the verification API. Every call is a single GET request, authenticated with the
/// account's api key and domain.
#[derive(Debug)]
pub struct VerificationClient<T = HttpTransport>
where
	T: Transport,
{
	base_url: Url,
	api_key: SecretString,
	domain: String,
	transport: T,
}

impl VerificationClient<HttpTransport> {
	pub fn new(
		api_key: impl Into<String>,
		domain: impl Into<String>,
	) -> Result<Self, VerifyError> {
		Self::from_config(ClientConfig::new(api_key, domain))
	}

	pub fn from_config(config: ClientConfig) -> Result<Self, VerifyError> {
		let transport = HttpTransport::new(config.timeout)?;
		Self::with_transport(config, transport)
	}

	/// Like [`Self::from_config`], but sends requests with `client`. The configured timeout is ignored.
	pub fn with_http_client(
		config: ClientConfig,
		client: reqwest::blocking::Client,
	) -> Result<Self, VerifyError> {
		Self::with_transport(config, HttpTransport::from_client(client))
	}
}

impl<T> VerificationClient<T>
where
	T: Transport,
{
	pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, VerifyError> {
		let base_url = if config.base_url == DEFAULT_BASE_URL {
			DEFAULT_URL.clone()
		} else {
			config.base_url.parse::<Url>()?
		};

		Ok(Self {
			base_url,
			api_key: config.api_key,
			domain: config.domain,
			transport,
		})
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Returns true if the service reports the email address as valid.
	pub fn is_email_verified(&self, email: &str) -> Result<bool, VerifyError> {
		is_verified(self.verify_email(email))
	}

	pub fn verify_email(&self, email: &str) -> Result<VerificationResult, VerifyError> {
		let params: Params = convert_args!(btreemap!("email" => email));
		self.call(ServiceKind::Email, params)
	}

	/// Returns true if the service reports the phone number as valid.
	pub fn is_phone_verified(&self, phone: &str) -> Result<bool, VerifyError> {
		is_verified(self.verify_phone(phone))
	}

	pub fn verify_phone(&self, phone: &str) -> Result<VerificationResult, VerifyError> {
		let params: Params = convert_args!(btreemap!("phone" => phone));
		self.call(ServiceKind::Phone, params)
	}

	pub fn verify_address(&self, street: &str, zip: &str) -> Result<VerificationResult, VerifyError> {
		let params: Params = convert_args!(btreemap!(
			"street" => street,
			"zip" => zip,
		));
		self.call(ServiceKind::Address, params)
	}

	pub fn verify_scoring(&self, street: &str, zip: &str) -> Result<VerificationResult, VerifyError> {
		let params: Params = convert_args!(btreemap!(
			"street" => street,
			"zip" => zip,
		));
		self.call(ServiceKind::Scoring, params)
	}

	/// Verify several things in one request. Empty arguments are left out of the request.
	pub fn verify_all_services(
		&self,
		email: &str,
		phone: &str,
		street: &str,
		zip: &str,
	) -> Result<VerificationResult, VerifyError> {
		let params: Params = [
			("services[email]", email),
			("services[phone]", phone),
			("services[address][street]", street),
			("services[address][zip]", zip),
		]
		.iter()
		.filter(|(_, value)| !value.is_empty())
		.map(|(key, value)| (key.to_string(), value.to_string()))
		.collect();

		self.call(ServiceKind::AllServices, params)
	}

	/// Have the service call `phone` and read out its code. Fails without making a request if the
	/// phone number, country code or code is missing.
	pub fn place_call(
		&self,
		phone: &PhoneNumber,
		options: &CallOptions,
	) -> Result<VerificationResult, VerifyError> {
		let params = phonecall::place_call_params(phone, options)?;
		self.call(ServiceKind::PlaceCall, params)
	}

	/// Check the code the user entered against a call placed with [`Self::place_call`].
	pub fn confirm_code(
		&self,
		transaction_number: &str,
		code: &str,
	) -> Result<VerificationResult, VerifyError> {
		let params: Params = convert_args!(btreemap!(
			"transaction_number" => transaction_number,
			"code" => code,
		));
		self.call(ServiceKind::ConfirmCode, params)
	}

	/// Send `params` to `service`. The authentication parameters are always added and take
	/// precedence over any given here.
	pub fn call(
		&self,
		service: ServiceKind,
		params: Params,
	) -> Result<VerificationResult, VerifyError> {
		trace!("VerificationClient::call {}", service);
		let url = self.build_url(service, params);

		let resp = self.transport.get(&url)?;
		if resp.body.is_empty() {
			return Err(VerifyError::EmptyResponse {
				status: resp.status,
			});
		}

		response::unwrap_response(&resp.body).map_err(|failure| {
			debug!("{} response could not be decoded: {}", service, failure.reason);
			VerifyError::MalformedResponse {
				status: resp.status,
				reason: failure.reason,
				message: failure.message,
			}
		})
	}

	fn build_url(&self, service: ServiceKind, mut params: Params) -> Url {
		params.insert("apikey".into(), self.api_key.expose_secret().clone());
		params.insert("domain".into(), self.domain.clone());
		params.insert("type".into(), "json".into());

		let mut url = self.base_url.clone();
		let path = format!("{}{}", url.path().trim_end_matches('/'), service.path());
		url.set_path(&path);

		let existing: Vec<(String, String)> = url
			.query_pairs()
			.into_owned()
			.filter(|(key, _)| !params.contains_key(key))
			.collect();
		url.query_pairs_mut()
			.clear()
			.extend_pairs(existing)
			.extend_pairs(params);
		url
	}
}

fn is_verified(outcome: Result<VerificationResult, VerifyError>) -> Result<bool, VerifyError> {
	match outcome {
		Ok(result) => Ok(result.is_valid()),
		Err(VerifyError::MalformedResponse {
			message: Some(message),
			..
		}) => Err(VerifyError::Rejected(message)),
		Err(err) => Err(err),
	}
}
