mod create;
mod mutate;
mod query;

pub use create::create_event;
pub use mutate::{delete_event, update_event};
pub use query::{get_event, get_stats, list_events};
