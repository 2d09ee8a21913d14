mod cli;

use cli::commands::Command;
use cli::Isolation;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    isolation::instrumentation::init_tracing();

    Isolation::from_args().execute();

    #[cfg(feature = "instrumentation")]
    isolation::instrumentation::print_timing_statistics();
}
