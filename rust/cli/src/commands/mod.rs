//! Command handler modules for the Showdown CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via the `CliError` enum

mod bench;
mod deal;
mod eval;
mod rng;

pub use bench::handle_bench_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use rng::handle_rng_command;
