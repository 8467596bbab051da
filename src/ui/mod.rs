pub mod buffer;
pub mod messages;
pub mod terminal;

pub use buffer::BufferContainer;
pub use terminal::TerminalContainer;
