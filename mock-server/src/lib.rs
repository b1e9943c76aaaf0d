//! A stand-in for the news platform SOAP endpoint, used by the probe's integration tests.

pub mod mock_soap;
pub mod replies;

pub use mock_soap::{MockSoap, RecordedRequest};
