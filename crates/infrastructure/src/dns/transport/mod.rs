pub mod https;

pub use https::{build_client, DEFAULT_CONNECT_TIMEOUT, DEFAULT_USER_AGENT};
