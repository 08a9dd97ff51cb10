//! CLI command handlers. Each command is in its own file.

mod fetch;
mod urls;

pub use fetch::run_fetch;
pub use urls::run_urls;
