pub mod event;
pub mod user;

pub use event::{Event, EventCategory, EventPatch, Modality, NewEvent};
pub use user::User;
