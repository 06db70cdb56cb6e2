pub mod event;
pub mod user;

pub use event::{CreateEvent, Event, EventStats, ListEventsQuery, SortBy, SortOrder, UpdateEvent};
pub use user::{LoginUser, PublicUser, RegisterUser, User};
