use log::*;

use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(about = "Verify an email address")]
pub struct EmailCommand {
	#[clap(help = "The email address to verify.")]
	pub email: String,
	#[clap(
		long,
		help = "Only print whether the address is valid. Exits with status 1 if it is not."
	)]
	pub check: bool,
}

impl<T> ServiceCommand<T> for EmailCommand
where
	T: Transport,
{
	fn execute(&self, client: &VerificationClient<T>) -> anyhow::Result<()> {
		if self.check {
			return print_check(client.is_email_verified(&self.email)?);
		}

		let result = client.verify_email(&self.email)?;
		if result.auto_correct.was_corrected() {
			info!("Did you mean {}?", result.auto_correct.address);
		}
		print_result(&result)
	}
}
