mod client;
mod project;

pub use client::Client;
pub use project::{Project, ProjectStatus};
