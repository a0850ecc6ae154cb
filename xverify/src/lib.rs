//! Client for the xverify verification API: email, phone, address, scoring and phone call
//! confirmation checks.
//!
//! ```no_run
//! use xverify::VerificationClient;
//!
//! let client = VerificationClient::new("api key", "example.com")?;
//! if client.is_email_verified("someone@example.com")? {
//! 	println!("deliverable");
//! }
//! # Ok::<(), xverify::VerifyError>(())
//! ```

use std::collections::BTreeMap;

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

mod client;
mod error;
mod phonecall;
mod response;
mod service;
pub mod transport;

pub use client::{ClientConfig, VerificationClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::VerifyError;
pub use phonecall::{parse_call_time, CallOptions, PhoneNumber};
pub use response::{AutoCorrect, VerificationResult};
pub use secrecy::{ExposeSecret, SecretString};
pub use service::ServiceKind;

/// Query parameters of a request.
pub type Params = BTreeMap<String, String>;
