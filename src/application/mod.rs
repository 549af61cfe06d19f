pub mod session;

pub use session::DraftSession;
