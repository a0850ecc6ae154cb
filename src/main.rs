use clap::Parser;
use log::*;
use xverify::{transport::HttpTransport, VerificationClient};

use crate::commands::{CommandType, Subcommands};
use crate::errors::UserError;

#[macro_use]
extern crate anyhow;

mod commands;
mod errors;

fn main() {
	std::process::exit(match run() {
		Ok(_) => 0,
		Err(e) => match e.downcast_ref::<UserError>() {
			Some(UserError::NotVerified) => 1,
			None => {
				error!("{:?}", e);
				255
			}
		},
	});
}

fn run() -> anyhow::Result<()> {
	let args = commands::Args::parse();

	stderrlog::new()
		.verbosity(args.global.verbosity as usize)
		.module(module_path!())
		.module("xverify")
		.init()?;

	let commands::Args { global, sub } = args;
	debug!("subcommand: {:?}", sub);

	match Subcommands::into_command::<HttpTransport>(sub) {
		CommandType::Const(cmd) => cmd.execute(),
		CommandType::Service(cmd) => {
			let config = global.client_config()?;
			let client = VerificationClient::from_config(config)?;
			info!("Using service at {}", client.base_url());
			cmd.execute(&client)
		}
	}
}
