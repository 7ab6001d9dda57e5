pub mod client;
pub mod prompts;
pub mod response;

pub use client::*;
pub use prompts::*;
pub use response::*;
