use std::str::FromStr;

use crate::VerifyError;

/// The verification services exposed by the API. Each one is bound to a fixed endpoint path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
	Phone,
	Email,
	Address,
	Scoring,
	AllServices,
	PlaceCall,
	ConfirmCode,
}

impl ServiceKind {
	pub const ALL: [ServiceKind; 7] = [
		ServiceKind::Phone,
		ServiceKind::Email,
		ServiceKind::Address,
		ServiceKind::Scoring,
		ServiceKind::AllServices,
		ServiceKind::PlaceCall,
		ServiceKind::ConfirmCode,
	];

	/// Endpoint path, relative to the service base url. Case-sensitive.
	pub const fn path(&self) -> &'static str {
		match self {
			ServiceKind::Phone => "/phone/verify",
			ServiceKind::Email => "/email/verify",
			ServiceKind::Address => "/address/verify",
			ServiceKind::Scoring => "/scoring/verify",
			ServiceKind::AllServices => "/allservices/verify",
			// the trailing slash is part of the upstream route
			ServiceKind::PlaceCall => "/phoneconfirm/placecall/",
			ServiceKind::ConfirmCode => "/phoneconfirm/verifycode",
		}
	}

	pub const fn name(&self) -> &'static str {
		match self {
			ServiceKind::Phone => "phone",
			ServiceKind::Email => "email",
			ServiceKind::Address => "address",
			ServiceKind::Scoring => "scoring",
			ServiceKind::AllServices => "allservices",
			ServiceKind::PlaceCall => "placecall",
			ServiceKind::ConfirmCode => "confirmcode",
		}
	}
}

impl std::fmt::Display for ServiceKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for ServiceKind {
	type Err = VerifyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ServiceKind::ALL
			.iter()
			.find(|kind| kind.name() == s)
			.copied()
			.ok_or_else(|| VerifyError::UnknownService(s.to_owned()))
	}
}
