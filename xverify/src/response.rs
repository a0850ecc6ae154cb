use log::*;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A verification response. The API answers every service with a differently shaped object, so this
/// holds the union of all known fields. Anything the service did not send is left empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationResult {
	/// The address given in the request, echoed back.
	#[serde(deserialize_with = "lenient_string")]
	pub address: String,
	/// `1` if the email address is well formed, `0` if not.
	#[serde(deserialize_with = "lenient_string")]
	pub syntax: String,
	/// Username part of the email address, before the `@`.
	#[serde(deserialize_with = "lenient_string")]
	pub handle: String,
	/// Domain part of the email address, after the `@`.
	#[serde(deserialize_with = "lenient_string")]
	pub domain: String,
	/// `0` when the request had no problems. The service sends either a number or a description here.
	#[serde(deserialize_with = "lenient_string")]
	pub error: String,
	/// `valid`, `invalid`, or something else for indeterminate results.
	#[serde(deserialize_with = "lenient_string")]
	pub status: String,
	#[serde(deserialize_with = "nullable_record")]
	pub auto_correct: AutoCorrect,
	#[serde(deserialize_with = "lenient_string")]
	pub message: String,
	/// Total execution time of the request on the service side.
	#[serde(deserialize_with = "lenient_string")]
	pub duration: String,
	/// Whether the mail server accepts every address: `yes`, `no` or `unknown`.
	#[serde(deserialize_with = "lenient_string")]
	pub catch_all: String,
	#[serde(rename = "responsecode", deserialize_with = "lenient_number")]
	pub response_code: i64,
	#[serde(
		rename = "AreaCode",
		alias = "areacode",
		alias = "area_code",
		deserialize_with = "lenient_number"
	)]
	pub area_code: i64,
	#[serde(rename = "Prefix", alias = "prefix", deserialize_with = "lenient_number")]
	pub prefix: i64,
	#[serde(
		rename = "Sufix",
		alias = "sufix",
		alias = "suffix",
		deserialize_with = "lenient_number"
	)]
	pub suffix: i64,
	/// Identifies a placed call, needed to confirm the code the user received.
	#[serde(deserialize_with = "lenient_string")]
	pub transaction_number: String,
}

impl VerificationResult {
	pub fn is_valid(&self) -> bool {
		self.status == "valid"
	}
}

/// Misspelled domains of major providers can be corrected by the service, if enabled for the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoCorrect {
	#[serde(deserialize_with = "lenient_string")]
	pub corrected: String,
	/// The corrected email address.
	#[serde(deserialize_with = "lenient_string")]
	pub address: String,
}

impl AutoCorrect {
	pub fn was_corrected(&self) -> bool {
		matches!(self.corrected.as_str(), "true" | "1")
	}
}

/// Why a response body could not be turned into a [`VerificationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecodeFailure {
	pub reason: String,
	pub message: Option<String>,
}

impl DecodeFailure {
	fn new(reason: impl Into<String>) -> Self {
		Self {
			reason: reason.into(),
			message: None,
		}
	}
}

/// Every response is nested under a single top level key whose name varies between services and is
/// not documented, eg. `{"email": {...}}`. The first key in document order wins, the rest are ignored.
pub(crate) fn unwrap_response(body: &[u8]) -> Result<VerificationResult, DecodeFailure> {
	let wrapper: Map<String, Value> =
		serde_json::from_slice(body).map_err(|err| DecodeFailure::new(err.to_string()))?;

	let (node, payload) = wrapper
		.into_iter()
		.next()
		.ok_or_else(|| DecodeFailure::new("response had no wrapper node"))?;
	trace!("unwrapping response node {:?}", node);
	if payload.is_null() {
		return Ok(VerificationResult::default());
	}

	let message = payload
		.get("message")
		.and_then(Value::as_str)
		.filter(|m| !m.is_empty())
		.map(str::to_owned);

	serde_path_to_error::deserialize(payload).map_err(|err| DecodeFailure {
		reason: format!("in node {:?}: {}", node, err),
		message,
	})
}

fn nullable_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::Null => Ok(String::new()),
		Value::String(s) => Ok(s),
		Value::Bool(b) => Ok(b.to_string()),
		Value::Number(n) => Ok(n.to_string()),
		other => Err(de::Error::invalid_type(
			unexpected(&other),
			&"a string, number or boolean",
		)),
	}
}

fn lenient_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::Null => Ok(0),
		Value::Number(n) => n
			.as_i64()
			.or_else(|| n.as_f64().map(|f| f as i64))
			.ok_or_else(|| de::Error::custom(format!("number out of range: {}", n))),
		Value::String(s) => {
			let s = s.trim();
			if s.is_empty() {
				return Ok(0);
			}
			s.parse::<i64>()
				.or_else(|_| s.parse::<f64>().map(|f| f as i64))
				.map_err(|_| de::Error::invalid_value(de::Unexpected::Str(s), &"a numeric string"))
		}
		other => Err(de::Error::invalid_type(unexpected(&other), &"a number")),
	}
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
	match value {
		Value::Array(_) => de::Unexpected::Seq,
		Value::Object(_) => de::Unexpected::Map,
		Value::Bool(b) => de::Unexpected::Bool(*b),
		Value::String(s) => de::Unexpected::Str(s),
		Value::Number(_) => de::Unexpected::Other("number"),
		Value::Null => de::Unexpected::Unit,
	}
}
