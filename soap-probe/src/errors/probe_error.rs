/// Errors the probe and the SOAP client might return.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Could not build the HTTP client")]
    ClientBuild(#[source] reqwest::Error),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Server answered with HTTP {status}")]
    HttpStatus { status: u16, body: String },
    #[error("SOAP fault {code}: {message}")]
    Fault { code: String, message: String },
    #[error("Could not decode the SOAP response")]
    Decode(#[from] quick_xml::DeError),
    #[error("Server rejected the request: {message}")]
    Rejected {
        message: String,
        error_code: Option<String>,
    },
    #[error("Response did not contain a {0} element")]
    MissingElement(&'static str),
    #[error("Access token missing from the login response")]
    MissingAccessToken,
}

impl ProbeError {
    /// Display of the error followed by every source in its chain, joined with `": "`.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);

        while let Some(error) = source {
            let text = error.to_string();
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }

            source = error.source();
        }

        message
    }
}
