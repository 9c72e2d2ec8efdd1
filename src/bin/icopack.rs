use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "icopack", version)]
struct Cli {
    /// Log pipeline progress at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an SVG into a PNG or a multi-resolution ICO.
    Convert(ConvertArgs),
    /// Print the directory of an ICO file.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input SVG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Output format. Inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Render icon sizes in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (defaults to the number of CPUs).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input ICO.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the directory as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Ico,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let opts = icopack::ConvertOpts {
        format: args.format.map(|f| match f {
            FormatChoice::Png => icopack::OutputFormat::Png,
            FormatChoice::Ico => icopack::OutputFormat::Ico,
        }),
        threading: icopack::RenderThreading {
            parallel: args.parallel,
            threads: args.threads,
        },
    };

    let report = icopack::convert_file(&args.in_path, &args.out, &opts)
        .with_context(|| format!("convert '{}'", args.in_path.display()))?;

    eprintln!(
        "wrote {} ({} frame(s), {} bytes)",
        report.output.display(),
        report.frames.len(),
        report.bytes_written
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = read_file(&args.in_path)?;
    let dir = icopack::ContainerDirectory::parse(&bytes)
        .with_context(|| format!("parse icon directory '{}'", args.in_path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dir)?);
        return Ok(());
    }

    println!("{}: {} entries", args.in_path.display(), dir.entries.len());
    for (i, e) in dir.entries.iter().enumerate() {
        println!(
            "  [{i}] {}x{}  {} bpp  {} bytes @ {}",
            e.pixel_width(),
            e.pixel_height(),
            e.bit_count,
            e.data_size,
            e.data_offset
        );
    }
    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read '{}'", path.display()))
}
