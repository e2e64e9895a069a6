pub mod host_port;
pub mod project;
pub mod summary;

pub use host_port::HostPort;
pub use project::{NMAP_DIR, Project, ToolDirectory, ToolSelection};
pub use summary::RunSummary;
