use std::env;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use securepass::cli::{self, CliFlags};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    disable_core_dumps();

    let bare = env::args_os().len() == 1;
    let flags = CliFlags::parse();

    cli::run(flags, bare)
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    if unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } != 0 {
        log::debug!("prctl(PR_SET_DUMPABLE) failed");
    }
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}
