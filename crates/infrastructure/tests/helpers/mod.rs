pub mod mock_doh_server;
pub mod static_socket;

pub use mock_doh_server::{closed_endpoint, MockDohServer, RecordedRequest};
pub use static_socket::StaticSocket;
