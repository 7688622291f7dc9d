use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use typewave::{
    FrameIndex, FrameRange, FrameRecord, JsonlSink, PlayerTiming, RenderThreading, SceneConfig,
    SceneRenderer, render_to_sink,
};

#[derive(Parser, Debug)]
#[command(name = "typewave", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the visual state of a single frame as JSON.
    Frame(FrameArgs),
    /// Write every frame of one cycle as JSON lines.
    Export(ExportArgs),
    /// Print timing information for a scene.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSONL path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive). Defaults to 0.
    #[arg(long)]
    start: Option<u64>,

    /// Last frame (exclusive). Defaults to one full cycle.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Sampling chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Keep a separate state for every frame, even identical ones.
    #[arg(long, default_value_t = false)]
    no_elision: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Export(args) => cmd_export(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<(SceneConfig, SceneRenderer)> {
    let cfg = SceneConfig::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    let renderer = SceneRenderer::prepare(&cfg)
        .with_context(|| format!("prepare scene '{}'", path.display()))?;
    Ok((cfg, renderer))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (_, renderer) = load(&args.in_path)?;
    let idx = FrameIndex(args.frame);
    let state = renderer.render(idx);
    let record = FrameRecord::new(idx, state.fingerprint(), &state);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let (_, renderer) = load(&args.in_path)?;
    let range = FrameRange::new(
        FrameIndex(args.start.unwrap_or(0)),
        FrameIndex(args.end.unwrap_or_else(|| renderer.duration_frames())),
    )?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let file = File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    let mut sink = JsonlSink::new(BufWriter::new(file));

    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: !args.no_elision,
    };
    let stats = render_to_sink(&renderer, range, &threading, &mut sink)
        .with_context(|| format!("export '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {} distinct, {} elided)",
        args.out.display(),
        stats.frames_total,
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let (cfg, renderer) = load(&args.in_path)?;
    let fps = renderer.fps();
    let mut summary = serde_json::json!({
        "kind": cfg.kind(),
        "fps": fps.as_f64(),
        "theme": cfg.theme(),
        "duration_frames": renderer.duration_frames(),
    });

    if let (SceneConfig::CodeBlock(code), SceneRenderer::CodeBlock(r)) = (&cfg, &renderer) {
        let timeline = r.timeline();
        summary["char_count"] = timeline.char_count().into();
        summary["start_frames"] = timeline.start_frames().into();
        summary["typing_frames"] = timeline.typing_frames().into();
        summary["cycle_frames"] = r.loop_controller().cycle().total_frames().into();
        summary["player"] = serde_json::to_value(PlayerTiming::for_config(code))?;
    }
    if let SceneRenderer::StageDiagram(r) = &renderer {
        summary["stages"] = serde_json::to_value(r.stages().names())?;
        summary["dwell"] = r.stages().timeline().dwell().into();
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
