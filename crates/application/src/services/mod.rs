pub mod dns;

pub use dns::Dns;
