#[cfg(feature = "dns-over-https")]
pub mod doh;
pub mod manager;
#[cfg(feature = "system-resolver")]
pub mod system;
#[cfg(feature = "dns-over-https")]
pub mod transport;

#[cfg(feature = "dns-over-https")]
pub use doh::DohSocket;
pub use manager::{SocketCreator, SocketManager};
#[cfg(feature = "system-resolver")]
pub use system::SystemSocket;
