//! Seqlab CLI - walk through list and tuple operations

use anyhow::Context;
use clap::Parser;
use seqlab::cli::{Args, SubCommand};
use seqlab::input::{FixedWord, StdinSource, WordSource};
use seqlab::lessons::{catalog, run_all, run_lesson, stats_report, Lesson, LessonContext};
use seqlab::value::parse_number;
use seqlab::{format_catalog, format_output, format_report, List, OutputFormat};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to set tracing subscriber: {}", e);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let ctx = LessonContext {
        output_format: if args.json { OutputFormat::Json } else { OutputFormat::Human },
        verbose: args.verbose,
    };
    let mut input: Box<dyn WordSource> = match args.word {
        Some(word) => Box::new(FixedWord(word)),
        None => Box::new(StdinSource::new()),
    };

    match args.command.unwrap_or(SubCommand::Run) {
        SubCommand::Run => {
            let reports = match ctx.output_format {
                OutputFormat::Human => run_all(input.as_mut(), |report| {
                    println!("{}", format_report(report, &ctx.output_format));
                })?,
                OutputFormat::Json => {
                    let reports = run_all(input.as_mut(), |_| {})?;
                    println!("{}", format_output(&reports, &ctx.output_format));
                    reports
                }
            };

            if ctx.verbose {
                let steps: usize = reports.iter().map(|r| r.steps.len()).sum();
                eprintln!("--- Walkthrough completed: {} lessons, {} steps ---", reports.len(), steps);
            }
            Ok(())
        }

        SubCommand::Lesson { name } => {
            let lesson: Lesson = name.parse()?;
            let report = run_lesson(lesson, input.as_mut())
                .with_context(|| format!("lesson '{}' failed", lesson))?;
            println!("{}", format_report(&report, &ctx.output_format));
            Ok(())
        }

        SubCommand::Lessons => {
            print!("{}", format_catalog(&catalog(), &ctx.output_format));
            if ctx.output_format == OutputFormat::Json {
                println!();
            }
            Ok(())
        }

        SubCommand::Stats { numbers } => {
            let values = numbers
                .iter()
                .map(|n| parse_number(n))
                .collect::<seqlab::Result<Vec<_>>>()?;
            let report = stats_report(&List::from_values(values))
                .context("cannot summarize these numbers")?;
            println!("{}", format_report(&report, &ctx.output_format));
            Ok(())
        }
    }
}
