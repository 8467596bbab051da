pub mod filter;
pub mod render;
pub mod session;

pub use filter::{FilterState, evaluate};
pub use render::{Card, Container, NO_EVENTS, View, build_view, render};
pub use session::{Clock, FixedClock, Session, SystemClock, ToggleChange};
