pub mod checklist_io;
pub mod config_io;
pub mod logging;
