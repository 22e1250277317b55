//! Structured prompt flows: render a typed request into a prompt, send it to a
//! generative model together with the expected output schema, and only hand back
//! values that validate against that schema.

pub mod entities;
pub mod ports;
pub mod schema;
pub mod services;
pub mod template;

pub use entities::*;
pub use ports::*;
pub use schema::*;
pub use template::*;
