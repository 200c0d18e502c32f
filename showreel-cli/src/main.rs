use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "showreel", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    List,
    /// Print the phase table of a composition.
    Phases(PhasesArgs),
    /// Write the scene tree of a single frame as JSON.
    Frame(FrameArgs),
    /// Stream a frame range to a JSON Lines file.
    Render(RenderArgs),
    /// Dump a built-in theme as JSON.
    Theme(ThemeArgs),
}

#[derive(Parser, Debug)]
struct PhasesArgs {
    /// Composition id (see `showreel list`).
    #[arg(long)]
    comp: showreel::CompositionId,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Composition id (see `showreel list`).
    #[arg(long)]
    comp: showreel::CompositionId,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Built-in theme name or path to a theme JSON file.
    #[arg(long)]
    theme: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Composition id (see `showreel list`).
    #[arg(long)]
    comp: showreel::CompositionId,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,

    /// Output JSON Lines path.
    #[arg(long)]
    out: PathBuf,

    /// Built-in theme name or path to a theme JSON file.
    #[arg(long)]
    theme: Option<String>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Evaluation chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Write repeated scenes as references to their first occurrence.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

#[derive(Parser, Debug)]
struct ThemeArgs {
    /// Built-in theme name.
    #[arg(long)]
    name: showreel::ThemeName,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Phases(args) => cmd_phases(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Theme(args) => cmd_theme(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_list() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for info in showreel::registry() {
        writeln!(
            out,
            "{:<24} {}x{} ({})  {} fps  {} frames  theme={}",
            info.id.as_str(),
            info.canvas.width,
            info.canvas.height,
            info.canvas.aspect_label(),
            info.fps.as_f64(),
            info.duration,
            info.default_theme,
        )?;
    }
    Ok(())
}

fn cmd_phases(args: PhasesArgs) -> anyhow::Result<()> {
    let comp = args.comp.build(None)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for phase in comp.phases().iter() {
        writeln!(out, "{:<20} {}", phase.name, phase.frame)?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let theme = load_theme(args.theme.as_deref())?;
    let comp = args.comp.build(theme)?;
    let scene = showreel::evaluate_frame(comp.as_ref(), showreel::FrameIndex(args.frame))?;

    match &args.out {
        Some(path) => {
            let mut w = create_output(path)?;
            serde_json::to_writer_pretty(&mut w, &scene)
                .with_context(|| format!("write scene '{}'", path.display()))?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &scene).context("write scene to stdout")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let theme = load_theme(args.theme.as_deref())?;
    let comp = args.comp.build(theme)?;
    let end = args.end.unwrap_or(comp.info().duration);
    let range = showreel::FrameRange::new(showreel::FrameIndex(args.start), showreel::FrameIndex(end))?;

    let opts = showreel::RenderOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };
    let mut sink = showreel::JsonLinesSink::new(create_output(&args.out)?);
    let stats = showreel::evaluate_range(comp.as_ref(), range, &opts, &mut sink)
        .with_context(|| format!("render {} frames {}..{}", args.comp, args.start, end))?;

    eprintln!(
        "wrote {} ({} frames, {} elided)",
        args.out.display(),
        stats.frames_total,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_theme(args: ThemeArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &args.name.theme()).context("write theme")?;
    writeln!(out)?;
    Ok(())
}

fn load_theme(arg: Option<&str>) -> anyhow::Result<Option<showreel::Theme>> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    if let Ok(name) = arg.parse::<showreel::ThemeName>() {
        return Ok(Some(name.theme()));
    }
    let theme = showreel::Theme::from_path(arg).with_context(|| format!("load theme '{arg}'"))?;
    Ok(Some(theme))
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}
