use tokio::sync::mpsc;

pub use protocol::{Request, Response};

pub type RoomTx = mpsc::Sender<Request>;
pub type RoomRx = mpsc::Receiver<Request>;
