//! Profile API adapters.

mod http_client;
mod in_memory;

pub use http_client::HttpPrismClient;
pub use in_memory::{
    default_master_kras, ApiOperation, InMemoryProfileApi, INSERTED_MESSAGE, UPDATED_MESSAGE,
};
