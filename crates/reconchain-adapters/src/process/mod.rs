//! Process runner adapters.

mod scripted;
mod system;

pub use scripted::{ScriptedProcessRunner, ScriptedResponse};
pub use system::SystemProcessRunner;
