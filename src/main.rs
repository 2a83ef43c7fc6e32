use clap::{ArgAction, Parser};
use log::{info, warn};
use std::{
    io::{self, BufWriter},
    ops::ControlFlow,
    time::Instant,
};
use subset_walker::{format, Report, Strategy, SubsetEnumerator};

#[derive(Debug, Parser)]
#[command(author, version, about = "Prints every subset of the given tokens")]
struct Cli {
    /// Tokens making up the input set. Repeated tokens count once.
    #[arg(value_name = "TOKEN")]
    tokens: Vec<String>,

    /// Enumeration strategy: tt, video or iterative.
    #[arg(short, long, value_name = "NAME", default_value = "tt")]
    strategy: String,

    /// Run every strategy without printing subsets and compare timings.
    #[arg(long)]
    compare: bool,

    /// Print only the summary.
    #[arg(short, long)]
    quiet: bool,

    /// Stop after this many subsets.
    #[arg(long, value_name = "INT", value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    if args.compare {
        for strategy in Strategy::ALL {
            let enumerator = SubsetEnumerator::new(args.tokens.iter(), strategy)?;
            let time = Instant::now();
            let report = enumerator.run(|_| ControlFlow::Continue(()));
            let took = time.elapsed();
            summarize(&report);
            info!("{strategy} took {:.6}secs", took.as_secs_f64());
        }
        return Ok(());
    }

    let strategy: Strategy = args.strategy.parse()?;
    let enumerator = SubsetEnumerator::new(args.tokens.iter(), strategy)?;
    if enumerator.input().collapsed() {
        warn!(
            "{} tokens given, {} distinct; enumerating 2^{} subsets",
            enumerator.input().raw_len(),
            enumerator.input().len(),
            enumerator.input().len()
        );
    }

    let mut out = format::SubsetWriter::new(
        BufWriter::new(io::stdout().lock()),
        format::Config::default(),
    );
    let mut failure = None;
    let mut count = 0u64;
    let time = Instant::now();
    let report = enumerator.run(|subset| {
        if !args.quiet {
            if let Err(e) = out.write_subset(subset) {
                failure = Some(e);
                return ControlFlow::Break(());
            }
        }
        count += 1;
        if args.limit.is_some_and(|limit| count >= limit) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    let took = time.elapsed();
    if let Some(e) = failure {
        return Err(e.into());
    }
    out.finish()?;

    summarize(&report);
    info!("{strategy} took {:.6}secs", took.as_secs_f64());
    Ok(())
}

fn summarize(report: &Report) {
    eprintln!("{report}");
    if let Err(e) = report.verify() {
        warn!("{}: {e}", report.strategy);
    }
}
