pub mod session;

pub use session::{Mode, Session, SessionEvent};
