use std::{collections::BTreeMap, sync::Mutex};

use proptest::prelude::*;
use reqwest::Url;
use xverify::{
	transport::{RawResponse, Transport, TransportError},
	ClientConfig, VerificationClient,
};

#[derive(Default)]
struct LastRequest(Mutex<Option<Url>>);

impl Transport for LastRequest {
	fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
		*self.0.lock().unwrap() = Some(url.clone());
		Ok(RawResponse {
			status: 200,
			body: br#"{"response": {"status": "valid"}}"#.to_vec(),
		})
	}
}

fn sent_query(transport: &LastRequest) -> BTreeMap<String, String> {
	transport
		.0
		.lock()
		.unwrap()
		.as_ref()
		.expect("no request was sent")
		.query_pairs()
		.into_owned()
		.collect()
}

proptest! {
	#[test]
	fn test_email_reaches_service_unchanged(email in ".{1,64}") {
		let transport = LastRequest::default();
		let client = VerificationClient::with_transport(ClientConfig::new("key", "domain.tld"), &transport).unwrap();

		client.verify_email(&email).unwrap();

		let query = sent_query(&transport);
		prop_assert_eq!(&query["email"], &email);
		prop_assert_eq!(&query["type"], "json");
	}

	#[test]
	fn test_all_services_sends_only_given_inputs(
		email in "[a-z@.]{0,3}",
		phone in "[0-9]{0,3}",
		street in "[a-z ]{0,3}",
		zip in "[A-Z0-9]{0,3}",
	) {
		let transport = LastRequest::default();
		let client = VerificationClient::with_transport(ClientConfig::new("key", "domain.tld"), &transport).unwrap();

		client.verify_all_services(&email, &phone, &street, &zip).unwrap();

		let query = sent_query(&transport);
		let inputs = [
			("services[email]", &email),
			("services[phone]", &phone),
			("services[address][street]", &street),
			("services[address][zip]", &zip),
		];
		for (key, value) in inputs {
			prop_assert_eq!(query.get(key), if value.is_empty() { None } else { Some(value) });
		}
		let given = inputs.iter().filter(|(_, value)| !value.is_empty()).count();
		prop_assert_eq!(query.len(), given + 3);
	}
}
