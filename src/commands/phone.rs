use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(about = "Verify a phone number")]
pub struct PhoneCommand {
	#[clap(help = "The phone number to verify.")]
	pub phone: String,
	#[clap(
		long,
		help = "Only print whether the number is valid. Exits with status 1 if it is not."
	)]
	pub check: bool,
}

impl<T> ServiceCommand<T> for PhoneCommand
where
	T: Transport,
{
	fn execute(&self, client: &VerificationClient<T>) -> anyhow::Result<()> {
		if self.check {
			return print_check(client.is_phone_verified(&self.phone)?);
		}

		print_result(&client.verify_phone(&self.phone)?)
	}
}
