use super::*;

#[derive(Debug, Clone, Parser)]
#[clap(about = "Confirm the code a user received in a call placed with place-call")]
pub struct ConfirmCodeCommand {
	#[clap(help = "The transaction number returned by place-call.")]
	pub transaction_number: String,
	#[clap(help = "The code the user entered.")]
	pub code: String,
}

impl<T> ServiceCommand<T> for ConfirmCodeCommand
where
	T: Transport,
{
	fn execute(&self, client: &VerificationClient<T>) -> anyhow::Result<()> {
		print_result(&client.confirm_code(&self.transaction_number, &self.code)?)
	}
}
