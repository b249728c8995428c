pub mod aggregate;
pub mod data_fetch;
pub mod feed;
pub mod http_client;
pub mod state;
pub mod trend;
