pub mod via_cep;

pub use crate::domain::model::Address;
pub use crate::domain::ports::AddressLookup;
pub use crate::utils::error::Result;
pub use via_cep::{ViaCepService, DEFAULT_BASE_URL};
