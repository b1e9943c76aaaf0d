//! A probe for the news platform SOAP services. It sends one SOAP request and prints
//! the request, the status, the headers and the body of the answer.
//! # Probe
//! ```no_run
//! use soap_probe::{Probe, ProbeConfig, SoapCall};
//!
//! # async fn probe() -> std::io::Result<()> {
//! let probe = Probe::new(ProbeConfig::new("http://localhost:8080/soap", "my-token"));
//! probe.run(&SoapCall::default(), &mut std::io::stdout()).await
//! # }
//! ```
//! # Typed client
//! ```no_run
//! use soap_probe::SoapClient;
//! use soap_probe::models::pagination::Pagination;
//!
//! # async fn client() -> Result<(), soap_probe::ProbeError> {
//! let client = SoapClient::new("http://localhost:8080/soap", None)?;
//! let authentication = client.login("admin", "Admin123!").await?;
//!
//! if let Some(token) = authentication.access_token {
//!     let page = client.list_users(&token, &Pagination::default()).await?;
//!     for user in page.users {
//!         println!("{}", user.full_name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod config;
mod envelope;
pub mod errors;
pub mod http;
pub mod models;
pub mod probe;
pub mod soap_call;

pub use config::ProbeConfig;
pub use errors::probe_error::ProbeError;
pub use http::soap_client::{SoapClient, SoapReply};
pub use probe::Probe;
pub use soap_call::SoapCall;
