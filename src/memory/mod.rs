//! Session memory
//!
//! Holds the conversation transcript for each advisor session.

pub mod store;

pub use store::{Message, Sender, Transcript};
