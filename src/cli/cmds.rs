pub mod chart;
pub mod import;
pub mod init;
pub mod list;
pub mod root;
pub mod suppliers;
pub mod trend;
