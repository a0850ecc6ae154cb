use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(about = "Verify a postal address")]
pub struct AddressCommand {
	pub street: String,
	pub zip: String,
}

impl<T> ServiceCommand<T> for AddressCommand
where
	T: Transport,
{
	fn execute(&self, client: &VerificationClient<T>) -> anyhow::Result<()> {
		print_result(&client.verify_address(&self.street, &self.zip)?)
	}
}

#[derive(Debug, Clone, Parser)]
#[clap(about = "Get the risk score of a postal address")]
pub struct ScoringCommand {
	pub street: String,
	pub zip: String,
}

impl<T> ServiceCommand<T> for ScoringCommand
where
	T: Transport,
{
	fn execute(&self, client: &VerificationClient<T>) -> anyhow::Result<()> {
		print_result(&client.verify_scoring(&self.street, &self.zip)?)
	}
}
