pub mod mock_sockets;

pub use mock_sockets::{MockFactory, MockSocket};
