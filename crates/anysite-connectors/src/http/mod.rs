pub mod executor;
pub mod url_builder;

pub use executor::{HttpExecutor, HttpExecutorConfig, ACCESS_TOKEN_HEADER, ACCOUNT_ID_HEADER};
pub use url_builder::UrlBuilder;
