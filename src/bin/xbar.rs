use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use xbar_rs::sample::{self, DEMO_HIGHLIGHT};
use xbar_rs::{stats, storage, viz};

#[derive(Parser, Debug)]
#[command(
    name = "xbar",
    version,
    about = "Compute stacked bar layouts & render exploded bar charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a demo exploded chart from seeded random data.
    Demo(DemoArgs),
    /// Render an exploded chart from series files.
    Render(RenderArgs),
    /// Render a single stacked bar from a series file.
    Stacked(StackedArgs),
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Seed for the demo data generator.
    #[arg(long, default_value_t = 69)]
    seed: u64,
    /// Chart output path (.svg or .png).
    #[arg(long, default_value = "exploded.svg")]
    out: PathBuf,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Label of the segment to explode.
    #[arg(long, default_value = DEMO_HIGHLIGHT)]
    highlight: String,
    /// Also save the generated series as CSV into this directory.
    #[arg(long)]
    save: Option<PathBuf>,
    /// Print per-series summaries to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Primary series file (.csv or .json).
    #[arg(long)]
    primary: PathBuf,
    /// Breakdown series file (.csv or .json).
    #[arg(long)]
    exploded: PathBuf,
    /// Label of the primary segment the breakdown decomposes.
    #[arg(long)]
    highlight: String,
    /// Chart output path (.svg or .png).
    #[arg(long)]
    out: PathBuf,
    /// Chart title.
    #[arg(long, default_value = "Exploded Bar Chart")]
    title: String,
    /// Y-axis description.
    #[arg(long, default_value = "Value")]
    y_desc: String,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print per-series summaries to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Args, Debug)]
struct StackedArgs {
    /// Series file (.csv or .json).
    #[arg(long)]
    input: PathBuf,
    /// Chart output path (.svg or .png).
    #[arg(long)]
    out: PathBuf,
    /// Chart title.
    #[arg(long, default_value = "Stacked Bar Chart")]
    title: String,
    /// Y-axis description.
    #[arg(long, default_value = "Value")]
    y_desc: String,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print a series summary to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Demo(args) => cmd_demo(args),
        Command::Render(args) => cmd_render(args),
        Command::Stacked(args) => cmd_stacked(args),
    }
}

fn cmd_demo(args: DemoArgs) -> Result<()> {
    let (primary, exploded) = sample::demo_pair(args.seed);

    viz::plot_exploded_chart(
        &primary,
        &exploded,
        &args.highlight,
        &args.out,
        args.width,
        args.height,
        "This is an Exploded Bar Chart",
        "Something You're Measuring",
    )?;
    eprintln!("Wrote plot to {}", args.out.display());

    if let Some(dir) = args.save.as_ref() {
        std::fs::create_dir_all(dir)?;
        let primary_path = dir.join("primary.csv");
        let exploded_path = dir.join("exploded.csv");
        storage::save_csv(&primary, &primary_path)?;
        storage::save_csv(&exploded, &exploded_path)?;
        eprintln!(
            "Saved series to {} and {}",
            primary_path.display(),
            exploded_path.display()
        );
    }

    if args.stats {
        print_summary(&stats::summarize(&primary));
        print_summary(&stats::summarize(&exploded));
    }

    Ok(())
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let primary = storage::load_series(&args.primary)?;
    let exploded = storage::load_series(&args.exploded)?;

    viz::plot_exploded_chart(
        &primary,
        &exploded,
        &args.highlight,
        &args.out,
        args.width,
        args.height,
        &args.title,
        &args.y_desc,
    )?;
    eprintln!("Wrote plot to {}", args.out.display());

    if args.stats {
        print_summary(&stats::summarize(&primary));
        print_summary(&stats::summarize(&exploded));
    }

    Ok(())
}

fn cmd_stacked(args: StackedArgs) -> Result<()> {
    let series = storage::load_series(&args.input)?;

    viz::plot_stacked_chart(
        &series,
        0.0,
        viz::BarPalette::Primary,
        &args.out,
        args.width,
        args.height,
        &args.title,
        &args.y_desc,
    )?;
    eprintln!("Wrote plot to {}", args.out.display());

    if args.stats {
        print_summary(&stats::summarize(&series));
    }

    Ok(())
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn print_summary(s: &stats::StackSummary) {
    println!(
        "{}  count={}  pos={} neg={} net={}  min={} max={}",
        s.name,
        s.count,
        fmt_opt(Some(s.positive_total)),
        fmt_opt(Some(s.negative_total)),
        fmt_opt(Some(s.net)),
        fmt_opt(s.min),
        fmt_opt(s.max)
    );
}
