pub mod fssai_chat;
pub mod guess;
pub mod ingredients;
pub mod ports;
pub mod product;
pub mod services;
pub mod summary;

pub use fssai_chat::*;
pub use guess::*;
pub use ingredients::*;
pub use ports::*;
pub use product::*;
pub use summary::*;
