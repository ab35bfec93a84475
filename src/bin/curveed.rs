use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "curveed", version)]
struct Cli {
    /// Editor config JSON (defaults apply when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep keys in file order instead of sorting them by time.
    #[arg(long, global = true, default_value_t = false)]
    no_sort: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a keys file to a PNG preview.
    Render(RenderArgs),
    /// Recompute tangents from neighbouring keys and print the result.
    Smooth(SmoothArgs),
    /// Sample the curve at the given times.
    Eval(EvalArgs),
    /// Parse a keys file and print it back in canonical form.
    Normalize(NormalizeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input keys text.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SmoothArgs {
    /// Input keys text.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input keys text.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Times to sample.
    #[arg(long = "at", num_args = 1.., allow_negative_numbers = true, required = true)]
    at: Vec<f64>,
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Input keys text.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref(), cli.no_sort)?;
    match cli.cmd {
        Command::Render(args) => cmd_render(&cfg, args),
        Command::Smooth(args) => cmd_smooth(&cfg, args),
        Command::Eval(args) => cmd_eval(&cfg, args),
        Command::Normalize(args) => cmd_normalize(&cfg, args),
    }
}

fn load_config(path: Option<&Path>, no_sort: bool) -> anyhow::Result<curveed::EditorConfig> {
    let mut cfg = match path {
        Some(p) => curveed::EditorConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => curveed::EditorConfig::default(),
    };
    cfg.seed_keys.clear();
    if no_sort {
        cfg.sort = false;
    }
    Ok(cfg)
}

fn open_editor(cfg: &curveed::EditorConfig, in_path: &Path) -> anyhow::Result<curveed::CurveEditor> {
    let text = std::fs::read_to_string(in_path)
        .with_context(|| format!("read keys '{}'", in_path.display()))?;
    let mut editor = curveed::CurveEditor::new(cfg)?;
    editor.set_text(&text);
    editor.tick();
    if editor.keyframes().is_empty() {
        tracing::warn!(
            path = %in_path.display(),
            key_name = editor.codec().key_name(),
            "no keyframe records found"
        );
    }
    Ok(editor)
}

fn cmd_render(cfg: &curveed::EditorConfig, args: RenderArgs) -> anyhow::Result<()> {
    let editor = open_editor(cfg, &args.in_path)?;
    editor.pixels().save_png(&args.out)?;

    let labels = editor
        .axis_labels()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    eprintln!(
        "wrote {} (keys: {}, min: {}, max: {}, guides: [{}])",
        args.out.display(),
        editor.keyframes().len(),
        editor.raster().min_y,
        editor.raster().max_y,
        labels
    );
    Ok(())
}

fn cmd_smooth(cfg: &curveed::EditorConfig, args: SmoothArgs) -> anyhow::Result<()> {
    let mut editor = open_editor(cfg, &args.in_path)?;
    editor.smooth_tangents();
    editor.tick();
    write_text(args.out.as_deref(), editor.text())
}

fn cmd_eval(cfg: &curveed::EditorConfig, args: EvalArgs) -> anyhow::Result<()> {
    let editor = open_editor(cfg, &args.in_path)?;
    let mut stdout = std::io::stdout().lock();
    for t in args.at {
        writeln!(stdout, "{} {}", t, editor.evaluate(t)).context("write stdout")?;
    }
    Ok(())
}

fn cmd_normalize(cfg: &curveed::EditorConfig, args: NormalizeArgs) -> anyhow::Result<()> {
    let editor = open_editor(cfg, &args.in_path)?;
    write_text(None, editor.text())
}

fn write_text(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("write keys '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("write stdout")?,
    }
    Ok(())
}
