use crate::domain::cep::Cep;
use crate::domain::model::Address;
use crate::domain::ports::AddressLookup;
use crate::utils::error::{CepError, DecodeFailure, Result};
use crate::utils::validation::parse_base_url;
use reqwest::Client;
use serde_json::Value;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";

/// Looks addresses up against ViaCEP, one GET per call, no retry.
#[derive(Debug, Clone)]
pub struct ViaCepService {
    client: Client,
    base_url: Url,
}

impl ViaCepService {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url("base_url", base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{cep}/json`, with the code percent-encoded as a path segment.
    pub fn request_url(&self, cep: &Cep) -> Url {
        let mut url = self.base_url.clone();
        // parse_base_url rejects cannot-be-a-base URLs
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(cep.as_str()).push("json");
        }
        url
    }
}

#[async_trait::async_trait]
impl AddressLookup for ViaCepService {
    async fn lookup(&self, raw_code: &str) -> Result<Address> {
        let cep = Cep::parse(raw_code)?;
        let url = self.request_url(&cep);

        tracing::debug!("Making ViaCEP request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("ViaCEP response status: {}", status);

        if !status.is_success() {
            tracing::debug!("ViaCEP rejected CEP {} with status {}", cep, status);
            return Err(CepError::UpstreamError {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let address = parse_address(&cep, &body)?;
        tracing::info!("Resolved CEP {} to {}/{}", cep, address.city, address.state);
        Ok(address)
    }
}

/// Turns a successful response body into an address.
///
/// ViaCEP answers unknown but well-formed codes with HTTP 200 and
/// `{"erro": true}`; that and a bare `null` become `NotFound`.
pub fn parse_address(cep: &Cep, body: &str) -> Result<Address> {
    let value: Value = serde_json::from_str(body).map_err(decode_error)?;

    if signals_absence(&value) {
        tracing::debug!("ViaCEP has no address for CEP {}", cep);
        return Err(CepError::NotFound {
            cep: cep.to_string(),
        });
    }

    serde_json::from_value(value).map_err(decode_error)
}

fn signals_absence(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => match map.get("erro") {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag == "true",
            _ => false,
        },
        _ => false,
    }
}

fn decode_error(source: serde_json::Error) -> CepError {
    CepError::DeserializationError {
        kind: DecodeFailure::classify(&source),
        source,
    }
}
