//! Core domain layer for reconchain.
//!
//! Pure logic only: the tool menu, the project layout, and the text filters
//! that turn nmap's grepable output into plain target lists. All I/O goes
//! through the ports in the application layer.

pub mod entities;
pub mod error;
pub mod gnmap;
pub mod value_objects;

pub use entities::{HostPort, NMAP_DIR, Project, RunSummary, ToolDirectory, ToolSelection};
pub use error::DomainError;
pub use value_objects::{Tool, is_affirmative};
