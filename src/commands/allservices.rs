use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(about = "Verify an email address, phone number and postal address in one request")]
pub struct AllServicesCommand {
	#[clap(long, default_value = "")]
	pub email: String,
	#[clap(long, default_value = "")]
	pub phone: String,
	#[clap(long, default_value = "")]
	pub street: String,
	#[clap(long, default_value = "")]
	pub zip: String,
}

impl<T> ServiceCommand<T> for AllServicesCommand
where
	T: Transport,
{
	fn execute(&self, client: &VerificationClient<T>) -> anyhow::Result<()> {
		if self.email.is_empty()
			&& self.phone.is_empty()
			&& self.street.is_empty()
			&& self.zip.is_empty()
		{
			bail!("Nothing to verify. Pass at least one of --email, --phone, --street or --zip.");
		}

		let result = client.verify_all_services(&self.email, &self.phone, &self.street, &self.zip)?;
		print_result(&result)
	}
}
