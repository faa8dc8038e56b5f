pub mod clipboard;
pub mod notify;
