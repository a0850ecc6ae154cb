use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum UserError {
	#[error("The service did not report the input as valid.")]
	NotVerified,
}
