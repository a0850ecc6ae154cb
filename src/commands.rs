use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::*;
use xverify::{transport::Transport, ClientConfig, VerificationClient, VerificationResult};

use crate::errors::UserError;

pub mod address;
pub mod allservices;
pub mod call;
pub mod completions;
pub mod confirmcode;
pub mod email;
pub mod phone;
pub mod placecall;

pub use address::{AddressCommand, ScoringCommand};
pub use allservices::AllServicesCommand;
pub use call::CallCommand;
pub use completions::CompletionsCommand;
pub use confirmcode::ConfirmCodeCommand;
pub use email::EmailCommand;
pub use phone::PhoneCommand;
pub use placecall::PlaceCallCommand;

/// A command that does not talk to the verification service.
pub(crate) trait ConstCommand {
	fn execute(&self) -> anyhow::Result<()>;
}

/// A command that sends a request to the verification service.
pub(crate) trait ServiceCommand<T>
where
	T: Transport,
{
	fn execute(&self, client: &VerificationClient<T>) -> anyhow::Result<()>;
}

pub(crate) enum CommandType<T>
where
	T: Transport,
{
	Const(Box<dyn ConstCommand>),
	Service(Box<dyn ServiceCommand<T>>),
}

#[derive(Debug, Clone, Parser)]
#[clap(name="xverify-cli", bin_name="xverify", author, version, about = "Verify email addresses, phone numbers and postal addresses from the command line.", long_about = None)]
pub(crate) struct Args {
	#[clap(flatten)]
	pub global: GlobalArgs,

	#[clap(subcommand)]
	pub sub: Subcommands,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct GlobalArgs {
	#[clap(
		long,
		env = "XVERIFY_API_KEY",
		hide_env_values = true,
		help = "The api key of your xverify account."
	)]
	pub api_key: Option<String>,
	#[clap(
		long,
		env = "XVERIFY_DOMAIN",
		help = "The domain registered with your xverify account."
	)]
	pub domain: Option<String>,
	#[clap(
		long,
		env = "XVERIFY_BASE_URL",
		default_value = xverify::DEFAULT_BASE_URL,
		help = "Base url of the verification service."
	)]
	pub base_url: String,
	#[clap(
		long,
		env = "XVERIFY_TIMEOUT",
		default_value_t = 2,
		value_parser = clap::value_parser!(u64).range(1..),
		help = "How long to wait for the service to respond, in seconds."
	)]
	pub timeout: u64,
	#[clap(short, long, value_enum, default_value_t=Verbosity::Info, help = "Set the log level. Be warned, trace is capable of printing your api key.")]
	pub verbosity: Verbosity,
}

impl GlobalArgs {
	pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
		let api_key = match &self.api_key {
			Some(key) if !key.is_empty() => key.clone(),
			_ => bail!("An api key is required. Use --api-key or set XVERIFY_API_KEY."),
		};
		let domain = match &self.domain {
			Some(domain) if !domain.is_empty() => domain.clone(),
			_ => bail!("A domain is required. Use --domain or set XVERIFY_DOMAIN."),
		};

		Ok(ClientConfig::new(api_key, domain)
			.with_base_url(self.base_url.clone())
			.with_timeout(Duration::from_secs(self.timeout)))
	}
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Subcommands {
	Email(EmailCommand),
	Phone(PhoneCommand),
	Address(AddressCommand),
	Scoring(ScoringCommand),
	All(AllServicesCommand),
	PlaceCall(PlaceCallCommand),
	ConfirmCode(ConfirmCodeCommand),
	Call(CallCommand),
	Completion(CompletionsCommand),
}

impl Subcommands {
	pub fn into_command<T>(self) -> CommandType<T>
	where
		T: Transport,
	{
		match self {
			Subcommands::Email(cmd) => CommandType::Service(Box::new(cmd)),
			Subcommands::Phone(cmd) => CommandType::Service(Box::new(cmd)),
			Subcommands::Address(cmd) => CommandType::Service(Box::new(cmd)),
			Subcommands::Scoring(cmd) => CommandType::Service(Box::new(cmd)),
			Subcommands::All(cmd) => CommandType::Service(Box::new(cmd)),
			Subcommands::PlaceCall(cmd) => CommandType::Service(Box::new(cmd)),
			Subcommands::ConfirmCode(cmd) => CommandType::Service(Box::new(cmd)),
			Subcommands::Call(cmd) => CommandType::Service(Box::new(cmd)),
			Subcommands::Completion(cmd) => CommandType::Const(Box::new(cmd)),
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Verbosity {
	Error = 0,
	Warn = 1,
	Info = 2,
	Debug = 3,
	Trace = 4,
}

impl std::fmt::Display for Verbosity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!(
			"{}",
			match self {
				Verbosity::Error => "error",
				Verbosity::Warn => "warn",
				Verbosity::Info => "info",
				Verbosity::Debug => "debug",
				Verbosity::Trace => "trace",
			}
		))
	}
}

pub(crate) fn print_result(result: &VerificationResult) -> anyhow::Result<()> {
	if !result.is_valid() {
		info!("status: {:?}, message: {:?}", result.status, result.message);
	}
	println!("{}", serde_json::to_string_pretty(result)?);
	Ok(())
}

/// Prints the outcome of a `--check`. Not being verified is reported through the exit status.
pub(crate) fn print_check(verified: bool) -> anyhow::Result<()> {
	if verified {
		println!("valid");
		Ok(())
	} else {
		println!("invalid");
		Err(UserError::NotVerified.into())
	}
}
