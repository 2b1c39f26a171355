use crate::core::DEFAULT_BASE_URL;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "busca-cep")]
#[command(about = "Look up a Brazilian address by its postal code (CEP)")]
pub struct CliConfig {
    #[arg(long, help = "CEP to look up; prompts on stdin when omitted")]
    pub cep: Option<String>,

    #[arg(long, env = "BUSCA_CEP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, help = "Print the full address as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}
