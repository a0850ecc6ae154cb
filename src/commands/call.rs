use xverify::{Params, ServiceKind, VerifyError};

use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(
	about = "Send a request to any service",
	long_about = "Send a request to any service with the given parameters, for options the other commands don't cover. The api key, domain and response type are always added."
)]
pub struct CallCommand {
	#[clap(
		value_parser = parse_service,
		help = "One of: phone, email, address, scoring, allservices, placecall, confirmcode."
	)]
	pub service: ServiceKind,
	#[clap(value_parser = parse_param, help = "Request parameters, eg. email=someone@example.com")]
	pub params: Vec<(String, String)>,
}

fn parse_service(s: &str) -> Result<ServiceKind, VerifyError> {
	s.parse()
}

fn parse_param(s: &str) -> Result<(String, String), String> {
	match s.split_once('=') {
		Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
		_ => Err(format!("expected key=value, got {:?}", s)),
	}
}

impl<T> ServiceCommand<T> for CallCommand
where
	T: Transport,
{
	fn execute(&self, client: &VerificationClient<T>) -> anyhow::Result<()> {
		let params: Params = self.params.iter().cloned().collect();
		print_result(&client.call(self.service, params)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_param() {
		assert_eq!(
			parse_param("email=someone@example.com"),
			Ok(("email".into(), "someone@example.com".into()))
		);
		assert_eq!(
			parse_param("street=a=b"),
			Ok(("street".into(), "a=b".into()))
		);
		assert_eq!(parse_param("zip="), Ok(("zip".into(), "".into())));
		assert!(parse_param("zip").is_err());
		assert!(parse_param("=UX002").is_err());
	}

	#[test]
	fn test_parse_call() -> anyhow::Result<()> {
		let cmd = CallCommand::try_parse_from([
			"call",
			"allservices",
			"services[email]=valid@email.com",
			"services[address][zip]=UX002",
		])?;

		assert_eq!(cmd.service, ServiceKind::AllServices);
		assert_eq!(cmd.params.len(), 2);
		assert_eq!(cmd.params[1].0, "services[address][zip]");
		Ok(())
	}

	#[test]
	fn test_parse_call_unknown_service() {
		let result = CallCommand::try_parse_from(["call", "fax", "number=1"]);
		assert!(result.is_err());
	}
}
