pub mod add;
pub mod health;
pub mod list;

pub use add::add_note_handler;
pub use health::health_handler;
pub use list::list_notes_handler;
