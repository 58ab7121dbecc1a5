use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use quadmorph::{
    BackendKind, Fps, FrameIndex, RenderSettings, Scene, create_backend, render_frame,
    render_frame_at, render_frames,
};

#[derive(Parser, Debug)]
#[command(name = "quadmorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render consecutive loop frames as numbered PNGs.
    Sequence(SequenceArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON; defaults to the built-in scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Normalized progress in [0,1]. Conflicts with --frame.
    #[arg(long, conflicts_with = "frame")]
    t: Option<f64>,

    /// Frame index (0-based), mapped through the loop at --fps.
    #[arg(long)]
    frame: Option<u64>,

    /// Frames per second used with --frame.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Input scene JSON; defaults to the built-in scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of frames to render, starting at frame 0.
    #[arg(long)]
    frames: u64,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output directory for frame_NNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn load_scene(in_path: Option<&PathBuf>) -> anyhow::Result<Scene> {
    match in_path {
        Some(p) => Ok(Scene::from_path(p)?),
        None => Ok(Scene::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_ref())?;
    let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::default())?;

    let frame = match (args.t, args.frame) {
        (Some(t), None) => render_frame(&scene, t, backend.as_mut())?,
        (None, Some(f)) => {
            let fps = Fps::new(args.fps, 1)?;
            render_frame_at(&scene, FrameIndex(f), fps, backend.as_mut())?
        }
        (None, None) => render_frame(&scene, 0.0, backend.as_mut())?,
        (Some(_), Some(_)) => unreachable!("clap rejects --t with --frame"),
    };

    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_ref())?;
    let fps = Fps::new(args.fps, 1)?;
    let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::default())?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let frames = render_frames(&scene, fps, args.frames, backend.as_mut())?;
    for (i, frame) in frames.iter().enumerate() {
        let out = args.out_dir.join(format!("frame_{i:04}.png"));
        write_png(&out, frame)?;
    }

    eprintln!(
        "wrote {} frames to {}",
        frames.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn write_png(path: &std::path::Path, frame: &quadmorph::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
