pub mod commitment;
pub mod context;
pub mod signer;
