pub mod chat;

pub use chat::ChatLogForm;
