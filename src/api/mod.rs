pub mod client;
pub mod agents;
pub mod calls;

pub use client::*;
