pub mod config;
pub mod logging;

pub mod archive;
pub mod layout;
pub mod pipeline;
pub mod portal;
pub mod postprocess;
pub mod watch;
