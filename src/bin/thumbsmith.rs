use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use thumbsmith::{
    ConfigOverrides, FontAssets, GenerateRequest, GenerateResponse, OverlayRenderer, Settings,
    Template, ThumbnailPipeline, TitleAnalyzer, heuristic_analysis,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "thumbsmith", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a full thumbnail PNG for a title.
    Generate(GenerateArgs),
    /// Print the analysis of a title as JSON.
    Analyze(AnalyzeArgs),
    /// Render only the transparent overlay (heuristic analysis, no network).
    Overlay(OverlayArgs),
    /// Serve a `GenerateRequest` JSON file and print the `GenerateResponse` JSON.
    Request(RequestArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Video title.
    #[arg(long)]
    title: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Replace the analyzed headline (use "\n" for a line break).
    #[arg(long)]
    headline: Option<String>,

    /// Replace the analyzed subtext.
    #[arg(long)]
    subtext: Option<String>,

    /// Replace the analyzed metric.
    #[arg(long)]
    metric: Option<String>,

    /// Replace the analyzed metric label.
    #[arg(long)]
    metric_label: Option<String>,

    /// Force a template (speed, conversion, comparison, feature, trust).
    #[arg(long)]
    template: Option<Template>,

    /// Print the full JSON response instead of a summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Video title.
    #[arg(long)]
    title: String,

    /// Skip the LLM even when a credential is configured.
    #[arg(long, default_value_t = false)]
    offline: bool,
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    /// Video title.
    #[arg(long)]
    title: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the intermediate SVG here.
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RequestArgs {
    /// Input `GenerateRequest` JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("thumbsmith=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    match cli.cmd {
        Command::Generate(args) => cmd_generate(&settings, args).await,
        Command::Analyze(args) => cmd_analyze(&settings, args).await,
        Command::Overlay(args) => cmd_overlay(&settings, args),
        Command::Request(args) => cmd_request(&settings, args).await,
    }
}

async fn cmd_generate(settings: &Settings, args: GenerateArgs) -> anyhow::Result<()> {
    let pipeline = ThumbnailPipeline::from_settings(settings)?;
    let overrides = ConfigOverrides {
        template: args.template,
        headline: args.headline.map(|h| h.replace("\\n", "\n")),
        subtext: args.subtext,
        metric: args.metric,
        metric_label: args.metric_label,
    };
    let overrides = (!overrides.is_empty()).then_some(overrides);

    let thumb = pipeline.generate(&args.title, overrides.as_ref()).await?;
    write_file(&args.out, &thumb.png)?;

    if args.json {
        let response = GenerateResponse::from(thumb);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        eprintln!(
            "wrote {} (template {}, background {})",
            args.out.display(),
            thumb.config.template,
            thumb.bg_provider
        );
    }
    Ok(())
}

async fn cmd_analyze(settings: &Settings, args: AnalyzeArgs) -> anyhow::Result<()> {
    let analysis = if args.offline {
        heuristic_analysis(&args.title)
    } else {
        TitleAnalyzer::from_settings(settings)?
            .analyze(&args.title)
            .await
    };
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn cmd_overlay(settings: &Settings, args: OverlayArgs) -> anyhow::Result<()> {
    let fonts = FontAssets::load_dir(&settings.fonts_dir)?;
    let renderer = OverlayRenderer::new(fonts)?;
    let config = heuristic_analysis(&args.title).config();

    if let Some(svg_path) = &args.svg {
        write_file(svg_path, renderer.render_svg(&config)?.as_bytes())?;
    }
    write_file(&args.out, &renderer.render_png(&config)?)?;
    eprintln!("wrote {} (template {})", args.out.display(), config.template);
    Ok(())
}

async fn cmd_request(settings: &Settings, args: RequestArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read request '{}'", args.in_path.display()))?;
    let request: GenerateRequest = serde_json::from_str(&raw)
        .with_context(|| format!("parse request '{}'", args.in_path.display()))?;

    let pipeline = ThumbnailPipeline::from_settings(settings)?;
    let response = pipeline.handle(&request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
