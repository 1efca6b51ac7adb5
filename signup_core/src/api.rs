/// Things that can go wrong talking to the account service
pub mod error;
pub use error::Error;

/// Client for the account service
pub mod client;
pub use client::Client;

/// Ask whether an email is already registered
pub mod exists;

/// Create a new account
pub mod create;
