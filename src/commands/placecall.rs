use std::time::Duration;

use chrono::NaiveDateTime;
use log::*;
use xverify::{parse_call_time, CallOptions, PhoneNumber};

use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(
	about = "Call a phone number and read out a code",
	long_about = "Call a phone number and read out a code. The user then enters the code, which is checked with confirm-code using the transaction number this prints."
)]
pub struct PlaceCallCommand {
	#[clap(long)]
	pub phone: String,
	#[clap(long, help = "Country code of the country the call is placed to.")]
	pub country_code: String,
	#[clap(long, help = "The code to read out.")]
	pub code: String,
	#[clap(long, default_value_t = 0, help = "Redial this many times if nobody picks up.")]
	pub redial_count: u32,
	#[clap(long, default_value_t = 0, help = "Seconds to wait between redials.")]
	pub redial_interval: u64,
	#[clap(
		long,
		value_parser = parse_call_time,
		help = "Place the call at this time instead of immediately, eg. \"2020-01-01 21:12:13\"."
	)]
	pub at: Option<NaiveDateTime>,
}

impl PlaceCallCommand {
	fn phone_number(&self) -> PhoneNumber {
		PhoneNumber::new(&self.country_code, &self.phone, &self.code)
	}

	fn call_options(&self) -> CallOptions {
		CallOptions {
			redial_count: self.redial_count,
			redial_interval: Duration::from_secs(self.redial_interval),
			call_place_time: self.at,
		}
	}
}

impl<T> ServiceCommand<T> for PlaceCallCommand
where
	T: Transport,
{
	fn execute(&self, client: &VerificationClient<T>) -> anyhow::Result<()> {
		let result = client.place_call(&self.phone_number(), &self.call_options())?;
		if !result.transaction_number.is_empty() {
			info!("Transaction number: {}", result.transaction_number);
		}
		print_result(&result)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_place_call() -> anyhow::Result<()> {
		let cmd = PlaceCallCommand::try_parse_from([
			"place-call",
			"--phone",
			"1234567890",
			"--country-code",
			"01",
			"--code",
			"AB01CD",
			"--redial-count",
			"3",
			"--redial-interval",
			"300",
			"--at",
			"2020-01-01 21:12:13",
		])?;

		assert_eq!(
			cmd.phone_number(),
			PhoneNumber::new("01", "1234567890", "AB01CD")
		);
		let options = cmd.call_options();
		assert_eq!(options.redial_count, 3);
		assert_eq!(options.redial_interval, Duration::from_secs(300));
		assert_eq!(
			options.call_place_time,
			Some(parse_call_time("2020-01-01 21:12:13")?)
		);
		Ok(())
	}

	#[test]
	fn test_parse_place_call_bad_time() {
		let result = PlaceCallCommand::try_parse_from([
			"place-call",
			"--phone",
			"1234567890",
			"--country-code",
			"01",
			"--code",
			"AB01CD",
			"--at",
			"tomorrow",
		]);
		assert!(result.is_err());
	}
}
