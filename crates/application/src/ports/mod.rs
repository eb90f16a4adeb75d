pub mod pending;
pub mod socket;
pub mod socket_factory;

pub use pending::{PendingAnswers, ReplyDecoder, ReplyTask};
pub use socket::{QueryResult, Socket};
pub use socket_factory::SocketFactory;
