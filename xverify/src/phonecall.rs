use std::time::Duration;

use chrono::NaiveDateTime;

use crate::{Params, VerifyError};

const CALL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where to call, and the code the callee will hear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumber {
	/// Country code of the country the call is placed to.
	pub country_code: String,
	pub phone_number: String,
	/// The code read out to the user. They confirm it with [`crate::VerificationClient::confirm_code`].
	pub code: String,
}

impl PhoneNumber {
	pub fn new(
		country_code: impl Into<String>,
		phone_number: impl Into<String>,
		code: impl Into<String>,
	) -> Self {
		Self {
			country_code: country_code.into(),
			phone_number: phone_number.into(),
			code: code.into(),
		}
	}

	fn ensure_complete(&self) -> Result<(), VerifyError> {
		if self.code.is_empty() || self.phone_number.is_empty() || self.country_code.is_empty() {
			return Err(VerifyError::MissingCallFields);
		}
		Ok(())
	}
}

/// Optional settings for a placed call. Default values are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
	/// How many times to redial if the user does not pick up.
	pub redial_count: u32,
	/// Time between redial attempts. Sent in whole seconds.
	pub redial_interval: Duration,
	/// Place the call at this time instead of immediately.
	pub call_place_time: Option<NaiveDateTime>,
}

impl CallOptions {
	pub fn with_redial(mut self, count: u32, interval: Duration) -> Self {
		self.redial_count = count;
		self.redial_interval = interval;
		self
	}

	pub fn at(mut self, time: NaiveDateTime) -> Self {
		self.call_place_time = Some(time);
		self
	}
}

pub(crate) fn place_call_params(
	phone: &PhoneNumber,
	options: &CallOptions,
) -> Result<Params, VerifyError> {
	phone.ensure_complete()?;

	let mut params: Params = convert_args!(btreemap!(
		"phone" => phone.phone_number.as_str(),
		"country_code" => phone.country_code.as_str(),
		"code" => phone.code.as_str(),
	));

	if options.redial_count != 0 {
		params.insert("redial_count".into(), options.redial_count.to_string());
	}

	let interval = options.redial_interval.as_secs();
	if interval != 0 {
		params.insert("redial_interval".into(), interval.to_string());
	}

	if let Some(time) = options.call_place_time {
		// sic, this is the parameter name the service expects
		params.insert(
			"call_place_tile".into(),
			time.format(CALL_TIME_FORMAT).to_string(),
		);
	}

	Ok(params)
}

/// Parses a call time in the format the service uses, eg. `2020-01-01 21:12:13`.
pub fn parse_call_time(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
	NaiveDateTime::parse_from_str(s, CALL_TIME_FORMAT)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn phone() -> PhoneNumber {
		PhoneNumber::new("01", "1234567890", "AB01CD")
	}

	#[test]
	fn test_required_fields() {
		let cases = [
			PhoneNumber::new("", "1234567890", "AB01CD"),
			PhoneNumber::new("01", "", "AB01CD"),
			PhoneNumber::new("01", "1234567890", ""),
			PhoneNumber::default(),
		];
		for case in cases {
			let result = place_call_params(&case, &CallOptions::default());
			assert!(
				matches!(result, Err(VerifyError::MissingCallFields)),
				"case {:?} got {:?}",
				case,
				result
			);
		}
	}

	#[test]
	fn test_defaults_are_omitted() -> anyhow::Result<()> {
		let params = place_call_params(&phone(), &CallOptions::default())?;

		let keys: Vec<&str> = params.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["code", "country_code", "phone"]);
		assert_eq!(params["phone"], "1234567890");
		assert_eq!(params["country_code"], "01");
		assert_eq!(params["code"], "AB01CD");
		Ok(())
	}

	#[test]
	fn test_redial_interval_in_whole_seconds() -> anyhow::Result<()> {
		let options = CallOptions::default().with_redial(3, Duration::from_secs(5 * 60));
		let params = place_call_params(&phone(), &options)?;

		assert_eq!(params["redial_count"], "3");
		assert_eq!(params["redial_interval"], "300");

		let options = CallOptions::default().with_redial(0, Duration::from_millis(90_500));
		let params = place_call_params(&phone(), &options)?;
		assert_eq!(params["redial_interval"], "90");
		assert!(!params.contains_key("redial_count"));
		Ok(())
	}

	#[test]
	fn test_sub_second_interval_is_omitted() -> anyhow::Result<()> {
		let options = CallOptions::default().with_redial(2, Duration::from_millis(400));
		let params = place_call_params(&phone(), &options)?;

		assert!(!params.contains_key("redial_interval"));
		Ok(())
	}

	#[test]
	fn test_call_place_time() -> anyhow::Result<()> {
		let time = parse_call_time("2020-01-01 21:12:13")?;
		let params = place_call_params(&phone(), &CallOptions::default().at(time))?;

		assert_eq!(params["call_place_tile"], "2020-01-01 21:12:13");
		Ok(())
	}

	#[test]
	fn test_parse_call_time_rejects_other_formats() {
		assert!(parse_call_time("2020-01-01T21:12:13").is_err());
		assert!(parse_call_time("01/01/2020 21:12").is_err());
		assert!(parse_call_time("").is_err());
	}
}
