//! Rename Audio Files - command line entry point

use anyhow::Context;
use clap::Parser;
use rename_audio::{init_logging, Args, Config, Renamer};
use std::io;
use std::process;

fn main() {
    let args = Args::parse();

    // The merged config decides verbosity; the flag alone is enough to report a bad config
    let config = Config::from_args(&args);
    init_logging(config.as_ref().map_or(args.verbose, Config::verbose));

    let result = config
        .context("invalid options")
        .and_then(|config| run(&args, config));

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Only option errors fail the process; a pass that stops early still exits 0.
fn run(args: &Args, config: Config) -> anyhow::Result<()> {
    let renamer = Renamer::new(config);
    let config = renamer.config();

    if config.verbose() {
        log::info!("{}", rename_audio::get_library_info());
        log::info!(
            "Directory: {} (suffix {}, split mode {}, dropping {} tokens{})",
            args.directory.display(),
            config.suffix(),
            config.split_mode(),
            config.skip_tokens(),
            if config.dry_run() { ", dry run" } else { "" }
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = renamer.rename_wav_files(&args.directory, &mut out);

    log::debug!(
        "{} renamed, {} skipped{}",
        report.renamed.len(),
        report.skipped,
        if report.is_success() { "" } else { ", stopped on error" }
    );

    Ok(())
}
