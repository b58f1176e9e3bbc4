mod shell;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use studio_contracts::markup::newlines_to_breaks;
use studio_contracts::media::{AspectRatio, ImageCount, ImagePayload};
use studio_engine::{
    DryrunCamera, DryrunGenerationService, GenerationService, Latency, Panel, Studio,
    StudioConfig, Tab,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "studio-rs", version, about = "Design studio: UI and image generation panels")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Directory for the origin store and event log (default: $STUDIO_HOME or ./.design-studio).
    #[arg(long, global = true)]
    home: Option<PathBuf>,
    #[arg(long, global = true)]
    events: Option<PathBuf>,
    /// Fixed delay for every dry-run call; 0 answers immediately.
    #[arg(long, global = true)]
    latency_ms: Option<u64>,
    /// Keep saved prompts in memory for this run only.
    #[arg(long, global = true)]
    ephemeral: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate UI markup from a prompt.
    Ui(UiArgs),
    /// Generate images from a prompt, optionally guided by a reference image.
    Image(ImageArgs),
    /// Analyze a screenshot or camera capture.
    Analyze(AnalyzeArgs),
    /// Render a content image in the style of another image.
    Remix(RemixArgs),
    /// Manage saved prompts.
    Prompts(PromptsArgs),
    /// Browse preset prompt categories.
    Presets(PresetsArgs),
    /// Interactive studio.
    Shell,
}

#[derive(Debug, Parser)]
struct UiArgs {
    prompt: Option<String>,
    /// Use the premium markup model.
    #[arg(long)]
    pro: bool,
    /// Print only the fenced code block.
    #[arg(long)]
    code_only: bool,
    #[arg(long)]
    save: bool,
}

#[derive(Debug, Parser)]
struct ImageArgs {
    prompt: Option<String>,
    #[arg(long, default_value = "16:9")]
    aspect: AspectRatio,
    #[arg(long, default_value = "1")]
    count: ImageCount,
    #[arg(long)]
    reference: Option<PathBuf>,
    /// Directory to write the generated images to.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    save: bool,
}

#[derive(Debug, Parser)]
struct AnalyzeArgs {
    prompt: Option<String>,
    #[arg(long, conflicts_with = "camera")]
    image: Option<PathBuf>,
    /// Capture the image from the dry-run camera.
    #[arg(long)]
    camera: bool,
    /// Render line breaks as `<br>`.
    #[arg(long)]
    html: bool,
}

#[derive(Debug, Parser)]
struct RemixArgs {
    prompt: Option<String>,
    #[arg(long)]
    content: PathBuf,
    #[arg(long)]
    style: PathBuf,
    #[arg(long, default_value = "1:1")]
    aspect: AspectRatio,
    #[arg(long, default_value = "1")]
    count: ImageCount,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Parser)]
struct PromptsArgs {
    #[command(subcommand)]
    action: PromptsAction,
}

#[derive(Debug, Subcommand)]
enum PromptsAction {
    List {
        #[arg(long, default_value = "ui-generator")]
        tab: Tab,
    },
    Save {
        prompt: String,
        #[arg(long, default_value = "ui-generator")]
        tab: Tab,
    },
    Delete {
        index: usize,
        #[arg(long, default_value = "ui-generator")]
        tab: Tab,
    },
    /// Print a saved prompt.
    Load {
        index: usize,
        #[arg(long, default_value = "ui-generator")]
        tab: Tab,
    },
}

#[derive(Debug, Parser)]
struct PresetsArgs {
    #[command(subcommand)]
    action: PresetsAction,
}

#[derive(Debug, Subcommand)]
enum PresetsAction {
    List {
        #[arg(long, default_value = "ui-generator")]
        tab: Tab,
    },
    Show {
        category: String,
        #[arg(long, default_value = "ui-generator")]
        tab: Tab,
        #[arg(long)]
        filter: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("studio-rs error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = resolve_config(&cli.global, StudioConfig::from_env()?);
    debug!(home = %config.home.display(), ephemeral = config.ephemeral, "studio config");
    let service: Arc<dyn GenerationService> = Arc::new(DryrunGenerationService::new(config.latency));
    let mut studio = Studio::new(&config, service);

    match cli.command {
        Command::Ui(args) => run_ui(&mut studio, args),
        Command::Image(args) => run_image(&mut studio, args),
        Command::Analyze(args) => run_analyze(&mut studio, args),
        Command::Remix(args) => run_remix(&mut studio, args),
        Command::Prompts(args) => run_prompts(&mut studio, args.action),
        Command::Presets(args) => run_presets(&mut studio, args.action),
        Command::Shell => {
            shell::run_shell(studio)?;
            Ok(0)
        }
    }
}

/// Command-line flags win over the environment.
fn resolve_config(global: &GlobalArgs, mut config: StudioConfig) -> StudioConfig {
    if let Some(home) = global.home.as_ref() {
        config.home = home.clone();
    }
    if let Some(events) = global.events.as_ref() {
        config.events_path = Some(events.clone());
    }
    if let Some(millis) = global.latency_ms {
        config.latency = Latency::Fixed(Duration::from_millis(millis));
    }
    if global.ephemeral {
        config.ephemeral = true;
    }
    config
}

fn run_ui(studio: &mut Studio, args: UiArgs) -> Result<i32> {
    if let Some(prompt) = args.prompt {
        studio.set_prompt(Tab::UiGenerator, prompt);
    }
    if args.pro {
        studio.ui_mut().toggle_premium();
    }
    if args.save {
        studio.save_prompt(Tab::UiGenerator)?;
    }
    studio.submit(Tab::UiGenerator)?;
    let markup = studio
        .ui()
        .operation()
        .result()
        .context("markup generation returned nothing")?;
    println!("{}", shell::markup_for_output(markup, args.code_only));
    Ok(0)
}

fn run_image(studio: &mut Studio, args: ImageArgs) -> Result<i32> {
    let panel = studio.image_mut();
    if let Some(prompt) = args.prompt {
        panel.set_prompt(prompt);
    }
    panel.set_aspect_ratio(args.aspect);
    panel.set_count(args.count);
    if let Some(path) = args.reference.as_deref() {
        panel.set_reference(ImagePayload::from_file(path)?);
    }
    if args.save {
        studio.save_prompt(Tab::ImageGenerator)?;
    }
    studio.submit(Tab::ImageGenerator)?;
    report_images(studio.image().images(), args.out.as_deref(), |dir| {
        studio.image().download_images(dir)
    })
}

fn run_analyze(studio: &mut Studio, args: AnalyzeArgs) -> Result<i32> {
    let panel = studio.analyzer_mut();
    if let Some(prompt) = args.prompt {
        panel.set_prompt(prompt);
    }
    if args.camera {
        panel.capture_from_camera(&mut DryrunCamera::default())?;
    } else if let Some(path) = args.image.as_deref() {
        panel.upload(ImagePayload::from_file(path)?);
    }
    studio.submit(Tab::ImageAnalyzer)?;
    let text = studio
        .analyzer()
        .operation()
        .result()
        .context("analysis returned nothing")?;
    if args.html {
        println!("{}", newlines_to_breaks(text));
    } else {
        println!("{text}");
    }
    Ok(0)
}

fn run_remix(studio: &mut Studio, args: RemixArgs) -> Result<i32> {
    let panel = studio.remix_mut();
    if let Some(prompt) = args.prompt {
        panel.set_prompt(prompt);
    }
    panel.set_content(ImagePayload::from_file(&args.content)?);
    panel.set_style(ImagePayload::from_file(&args.style)?);
    panel.set_aspect_ratio(args.aspect);
    panel.set_count(args.count);
    studio.submit(Tab::ImageRemix)?;
    report_images(studio.remix().images(), args.out.as_deref(), |dir| {
        studio.remix().download_images(dir)
    })
}

fn report_images(
    images: &[String],
    out: Option<&Path>,
    download: impl FnOnce(&Path) -> Result<Vec<PathBuf>>,
) -> Result<i32> {
    match out {
        Some(dir) => {
            for path in download(dir)? {
                println!("{}", path.display());
            }
        }
        None => println!(
            "Generated {} image(s). Pass --out <dir> to save them.",
            images.len()
        ),
    }
    Ok(0)
}

fn run_prompts(studio: &mut Studio, action: PromptsAction) -> Result<i32> {
    match action {
        PromptsAction::List { tab } => {
            let library = library_for(studio, tab)?;
            for (idx, prompt) in library.saved().prompts().iter().enumerate() {
                println!("{idx:>3}  {prompt}");
            }
        }
        PromptsAction::Save { prompt, tab } => {
            studio.set_prompt(tab, prompt);
            if studio.save_prompt(tab)? {
                println!("saved");
            } else {
                println!("unchanged (empty or already saved)");
            }
        }
        PromptsAction::Delete { index, tab } => match studio.delete_prompt(tab, index)? {
            Some(prompt) => println!("deleted: {prompt}"),
            None => bail!("no saved prompt at index {index}"),
        },
        PromptsAction::Load { index, tab } => match studio.load_saved(tab, index)? {
            Some(prompt) => println!("{prompt}"),
            None => bail!("no saved prompt at index {index}"),
        },
    }
    Ok(0)
}

fn run_presets(studio: &mut Studio, action: PresetsAction) -> Result<i32> {
    match action {
        PresetsAction::List { tab } => {
            for category in library_for(studio, tab)?.presets().catalog().categories() {
                println!("{} ({})", category.name, category.prompts.len());
            }
        }
        PresetsAction::Show {
            category,
            tab,
            filter,
        } => {
            let library = studio
                .library_mut(tab)
                .with_context(|| format!("{} has no presets", tab.name()))?;
            let presets = library.presets_mut();
            presets.select_category(&category)?;
            if let Some(filter) = filter {
                presets.set_filter(filter);
            }
            for (idx, prompt) in presets.filtered_prompts().iter().enumerate() {
                println!("{idx:>3}  {prompt}");
            }
        }
    }
    Ok(0)
}

fn library_for(studio: &Studio, tab: Tab) -> Result<&studio_engine::panels::PromptLibrary> {
    studio
        .library(tab)
        .with_context(|| format!("{} has no prompt library", tab.name()))
}
