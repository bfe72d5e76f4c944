// Helpers shared by the CLI and storage adapters
pub mod path;
pub mod size;
