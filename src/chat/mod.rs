pub mod models;
pub mod widget;

pub use models::{Message, Role, Transcript};
pub use widget::ChatWidget;
