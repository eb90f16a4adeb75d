//! dnsock infrastructure: the DoH and host-resolver socket drivers and the
//! registry that builds them from configuration.
pub mod dns;
