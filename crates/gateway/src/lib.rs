//! Login boundary between the interface and whatever resolves credentials.

pub mod api;
pub mod delay;

pub use api::{Authenticator, DemoAuthenticator};
