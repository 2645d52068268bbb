pub mod light_client;
pub mod transport;
pub mod types;
