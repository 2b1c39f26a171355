use crate::domain::model::Address;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Resolves a raw, user-supplied postal code into an address.
    async fn lookup(&self, raw_code: &str) -> Result<Address>;
}
