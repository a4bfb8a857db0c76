pub mod session;
pub mod tui;
pub mod view;

pub use session::Session;
