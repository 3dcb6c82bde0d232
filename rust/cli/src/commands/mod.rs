//! Command handler modules for the fivecard CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod batch;
mod categories;
mod cfg;
mod classify;
mod compare;

pub use batch::handle_batch_command;
pub use categories::handle_categories_command;
pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use compare::handle_compare_command;
