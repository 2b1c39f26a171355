pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{AddressLookup, ViaCepService};
pub use domain::{cep::Cep, model::Address};
pub use utils::error::{CepError, Result};
