pub mod chat;
pub mod icon;
pub mod pages;
pub mod theme;
pub mod voice;

pub use chat::{ChatPanel, ChatWidget};
pub use icon::{Icon, icons};
