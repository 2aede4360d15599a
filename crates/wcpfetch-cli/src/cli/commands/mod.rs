//! One module per subcommand.

mod completions;
mod fetch;
mod login;
mod process;
mod resolve;

pub use completions::run_completions;
pub use fetch::run_fetch;
pub use login::run_login;
pub use process::run_process;
pub use resolve::run_resolve;
