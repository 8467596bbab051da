pub mod category;
pub mod event;
pub mod sport;

pub use category::{CategoryInfo, CategoryTable};
pub use event::{Event, EventRecord, EventTime};
pub use sport::Sport;
