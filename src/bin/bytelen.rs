// SPDX-FileCopyrightText: (C) 2025 Jason Ish <jason@codemonkey.net>
// SPDX-License-Identifier: MIT

use bytelen::cli::Args;
use bytelen::logger;
use bytelen::version;
use clap::Parser;
use tracing::error;

fn main() {
    // Must happen before anything can spawn a thread.
    logger::init_offset();

    // Argument errors exit here with clap's usage message, before any
    // file is opened.
    let args = Args::parse();

    logger::init_logger(logger::level_from_verbosity(args.verbose));
    version::log_version();

    if let Err(err) = bytelen::cli::main(args) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
