pub mod price_api_client;

pub use price_api_client::{DEFAULT_BASE_URL, PriceApiClient};
