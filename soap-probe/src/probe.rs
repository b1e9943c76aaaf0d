use crate::config::ProbeConfig;
use crate::errors::probe_error::ProbeError;
use crate::http::soap_client::{SoapClient, SoapReply};
use crate::http::xml::envelope;
use crate::soap_call::SoapCall;
use log::{debug, info};
use std::io::{self, Write};

/// Sends one SOAP call and writes the whole exchange to a console-like sink.
pub struct Probe {
    config: ProbeConfig,
    decode: bool,
}

impl Probe {
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            config,
            decode: false,
        }
    }

    /// Also print a summary of the decoded SOAP payload after the raw response.
    pub fn decode(mut self, decode: bool) -> Self {
        self.decode = decode;
        self
    }

    /// Transport failures are written as an `Erreur:` line and never returned.
    /// The only errors returned come from writing to `out`.
    pub async fn run<W: Write>(&self, call: &SoapCall, out: &mut W) -> io::Result<()> {
        let envelope = call.envelope(&self.config.auth_token);

        writeln!(out, "{}", call.title())?;
        writeln!(out, "URL: {}", self.config.url)?;
        writeln!(out, "Request:\n{envelope}")?;
        out.flush()?;

        match self.exchange(call.soap_action(), envelope).await {
            Ok(reply) => {
                info!("{} answered {}", self.config.url, reply.status);
                writeln!(out, "\nStatus Code: {}", reply.status)?;
                writeln!(out, "Headers: {:?}", reply.headers)?;
                writeln!(out, "Response:\n{}", reply.body)?;

                if self.decode {
                    write_summary(&reply, out)?;
                }
            }

            Err(error) => {
                debug!("Probe failed: {error:?}");
                writeln!(out, "Erreur: {}", error.describe())?;
            }
        }

        out.flush()
    }

    async fn exchange(
        &self,
        soap_action: &'static str,
        envelope: String,
    ) -> Result<SoapReply, ProbeError> {
        let client = SoapClient::new(self.config.url.as_str(), self.config.timeout)?;
        client.post(soap_action, envelope).await
    }
}

fn write_summary<W: Write>(reply: &SoapReply, out: &mut W) -> io::Result<()> {
    match envelope::parse(&reply.body) {
        Ok(body) => match body.summary() {
            Some(summary) => writeln!(out, "Décodé: {summary}"),
            None => writeln!(out, "Décodage impossible: corps SOAP vide"),
        },
        Err(error) => writeln!(out, "Décodage impossible: {error}"),
    }
}
