//! dnsock application layer: the socket contract and the facade over the
//! configured default socket.
pub mod ports;
pub mod services;

pub use ports::{PendingAnswers, QueryResult, ReplyDecoder, ReplyTask, Socket, SocketFactory};
pub use services::Dns;
