use clap::Parser;
use nametag::apply::{apply_pattern, FileReport};
use nametag::cli::Cli;
use nametag::output::Output;
use nametag::pattern::Pattern;
use nametag::tags::{load_cover, Cover};
use rayon::prelude::*;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    let pattern = Pattern::compile(&cli.pattern)?;
    let defaults = cli.default_tags();
    let cover: Option<Cover> = match &cli.cover {
        Some(path) => Some(load_cover(path)?),
        None => None,
    };

    let start_time = Instant::now();

    let reports: Vec<FileReport> = if cli.sequential || cli.files.len() == 1 {
        cli.files
            .iter()
            .map(|file| apply_pattern(file, &pattern, &defaults, cover.as_ref(), cli.dry_run))
            .collect()
    } else {
        cli.files
            .par_iter()
            .map(|file| apply_pattern(file, &pattern, &defaults, cover.as_ref(), cli.dry_run))
            .collect()
    };

    let show_fields = cli.verbose || cli.dry_run;
    for report in &reports {
        output.print_report(report, show_fields);
    }
    output.print_summary(&reports, start_time.elapsed(), cli.dry_run);

    let all_ok = reports.iter().all(FileReport::ok);
    std::process::exit(if all_ok { 0 } else { 1 });
}
