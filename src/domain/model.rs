use serde::{Deserialize, Serialize};

/// An address resolved by the upstream service.
///
/// Deserializes from ViaCEP's Portuguese field names and serializes with the
/// English ones. `city` and `state` are required; a body without them is not
/// an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename(deserialize = "logradouro"), default)]
    pub street: String,
    #[serde(rename(deserialize = "bairro"), default)]
    pub neighborhood: String,
    #[serde(rename(deserialize = "localidade"))]
    pub city: String,
    #[serde(rename(deserialize = "uf"))]
    pub state: String,

    #[serde(rename(deserialize = "cep"), default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename(deserialize = "complemento"), default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(rename(deserialize = "ibge"), default, skip_serializing_if = "Option::is_none")]
    pub ibge_code: Option<String>,
    #[serde(rename(deserialize = "gia"), default, skip_serializing_if = "Option::is_none")]
    pub gia_code: Option<String>,
    #[serde(rename(deserialize = "ddd"), default, skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(rename(deserialize = "siafi"), default, skip_serializing_if = "Option::is_none")]
    pub siafi_code: Option<String>,
}
