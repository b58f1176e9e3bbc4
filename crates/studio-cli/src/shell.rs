use std::io::{self, BufRead, ErrorKind, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use serde_json::Value;
use studio_contracts::chat::{parse_intent, Intent, SHELL_HELP_COMMANDS};
use studio_contracts::media::{AspectRatio, ImageCount, ImagePayload};
use studio_contracts::markup::copyable_code;
use studio_engine::{CompletedRequest, DryrunCamera, Panel, Studio, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Interactive front end over a `Studio`. Collaborator calls run on worker threads; their
/// completions are applied before the next command is handled.
pub(crate) struct Shell {
    studio: Studio,
    camera: DryrunCamera,
    completions_tx: mpsc::Sender<CompletedRequest>,
    completions_rx: mpsc::Receiver<CompletedRequest>,
    in_flight: usize,
}

impl Shell {
    pub(crate) fn new(studio: Studio) -> Self {
        let (completions_tx, completions_rx) = mpsc::channel();
        Self {
            studio,
            camera: DryrunCamera::default(),
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    pub(crate) fn studio(&self) -> &Studio {
        &self.studio
    }

    pub(crate) fn run(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Design studio ({}). Type /help for commands.",
            self.studio.service().name()
        )?;
        let mut line = String::new();
        loop {
            write!(out, "[{}]> ", self.studio.active_tab())?;
            out.flush()?;

            line.clear();
            let read = match input.read_line(&mut line) {
                Ok(read) => read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if read == 0 {
                break;
            }
            if self.handle(line.trim_end_matches(['\n', '\r']), out)? == Flow::Quit {
                break;
            }
        }
        self.wait_all(out)
    }

    pub(crate) fn handle(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        self.drain(out)?;
        let intent = parse_intent(line);
        let tab = self.studio.active_tab();
        match intent.action.as_str() {
            "noop" => {}
            "quit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "Commands: {}", SHELL_HELP_COMMANDS.join(" "))?,
            "list_tabs" => {
                for candidate in Tab::ALL {
                    let marker = if candidate == tab { "*" } else { " " };
                    writeln!(out, "{marker} {:<16} {}", candidate.id(), candidate.name())?;
                }
            }
            "select_tab" => match intent.arg_str("tab").unwrap_or_default().parse::<Tab>() {
                Ok(next) => {
                    self.studio.select_tab(next);
                    writeln!(out, "Switched to {}.", next.name())?;
                }
                Err(message) => writeln!(out, "{message}")?,
            },
            "set_prompt" => {
                self.studio
                    .set_prompt(tab, intent.arg_str("prompt").unwrap_or_default());
                writeln!(out, "Prompt set.")?;
            }
            "generate" => {
                if let Some(prompt) = intent.prompt.as_deref() {
                    self.studio.set_prompt(tab, prompt);
                }
                self.start_generation(tab, out)?;
            }
            "status" => self.print_status(tab, out)?,
            "wait" => self.wait_all(out)?,
            "save_prompt" => match self.studio.save_prompt(tab) {
                Ok(true) => writeln!(out, "Prompt saved.")?,
                Ok(false) => writeln!(out, "Nothing to save (empty or already saved).")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            "list_saved" => match self.studio.library(tab) {
                Some(library) if library.saved().is_empty() => {
                    writeln!(out, "No saved prompts yet.")?
                }
                Some(library) => {
                    for (idx, prompt) in library.saved().prompts().iter().enumerate() {
                        writeln!(out, "{idx:>3}  {prompt}")?;
                    }
                }
                None => writeln!(out, "{} has no saved prompts.", tab.name())?,
            },
            "load_saved" => {
                let Some(index) = index_arg(&intent, out)? else {
                    return Ok(Flow::Continue);
                };
                match self.studio.load_saved(tab, index) {
                    Ok(Some(prompt)) => writeln!(out, "Prompt: {prompt}")?,
                    Ok(None) => writeln!(out, "No saved prompt at {index}.")?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            "delete_saved" => {
                let Some(index) = index_arg(&intent, out)? else {
                    return Ok(Flow::Continue);
                };
                match self.studio.delete_prompt(tab, index) {
                    Ok(Some(prompt)) => writeln!(out, "Deleted: {prompt}")?,
                    Ok(None) => writeln!(out, "No saved prompt at {index}.")?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            "toggle_drawer" => match self.studio.library_mut(tab) {
                Some(library) => {
                    let open = library.toggle_drawer();
                    let height = library.resize().height();
                    if open {
                        writeln!(out, "Saved prompts drawer open ({height}px).")?;
                    } else {
                        writeln!(out, "Saved prompts drawer closed.")?;
                    }
                }
                None => writeln!(out, "{} has no prompt drawer.", tab.name())?,
            },
            "list_presets" => self.print_presets(tab, out)?,
            "select_category" => {
                let name = intent.arg_str("category").unwrap_or_default();
                match self.studio.library_mut(tab) {
                    Some(library) => match library.presets_mut().select_category(name) {
                        Ok(Some(category)) => writeln!(
                            out,
                            "Category: {} ({} prompts)",
                            category.name,
                            category.prompts.len()
                        )?,
                        Ok(None) => writeln!(out, "Category cleared.")?,
                        Err(err) => writeln!(out, "{err}")?,
                    },
                    None => writeln!(out, "{} has no presets.", tab.name())?,
                }
            }
            "set_filter" => match self.studio.library_mut(tab) {
                Some(library) => {
                    library
                        .presets_mut()
                        .set_filter(intent.arg_str("filter").unwrap_or_default());
                    let matches = library.presets().filtered_prompts().len();
                    writeln!(out, "{matches} matching preset(s).")?;
                }
                None => writeln!(out, "{} has no presets.", tab.name())?,
            },
            "use_preset" => {
                let Some(index) = index_arg(&intent, out)? else {
                    return Ok(Flow::Continue);
                };
                match self.studio.load_preset(tab, index) {
                    Ok(Some(prompt)) => writeln!(out, "Prompt: {prompt}")?,
                    Ok(None) => writeln!(out, "No preset at {index}.")?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            "drag" => self.drag(tab, &intent, out)?,
            "toggle_premium" => {
                let premium = self.studio.ui_mut().toggle_premium();
                let label = if premium { "on" } else { "off" };
                writeln!(out, "Premium model {label}.")?;
            }
            "set_aspect_ratio" => {
                match intent.arg_str("aspect_ratio").unwrap_or_default().parse::<AspectRatio>() {
                    Ok(aspect) => match tab {
                        Tab::ImageGenerator => {
                            self.studio.image_mut().set_aspect_ratio(aspect);
                            writeln!(out, "Aspect ratio {aspect}.")?;
                        }
                        Tab::ImageRemix => {
                            self.studio.remix_mut().set_aspect_ratio(aspect);
                            writeln!(out, "Aspect ratio {aspect}.")?;
                        }
                        _ => writeln!(out, "{} has no aspect ratio.", tab.name())?,
                    },
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            "set_count" => match ImageCount::new(intent.arg_i64("index").unwrap_or_default()) {
                Ok(count) => match tab {
                    Tab::ImageGenerator => {
                        self.studio.image_mut().set_count(count);
                        writeln!(out, "Generating {} image(s).", count.get())?;
                    }
                    Tab::ImageRemix => {
                        self.studio.remix_mut().set_count(count);
                        writeln!(out, "Generating {} image(s).", count.get())?;
                    }
                    _ => writeln!(out, "{} has no image count.", tab.name())?,
                },
                Err(err) => writeln!(out, "{err}")?,
            },
            "set_reference" => self.set_reference(intent.arg_str("source").unwrap_or_default(), out)?,
            "clear_reference" => match self.studio.image_mut().clear_reference() {
                Some(image) => writeln!(out, "Reference {} cleared.", image.name)?,
                None => writeln!(out, "No reference image set.")?,
            },
            "upload_image" | "upload_content" | "upload_style" => {
                let path = PathBuf::from(intent.arg_str("path").unwrap_or_default());
                match ImagePayload::from_file(&path) {
                    Ok(image) => {
                        let name = image.name.clone();
                        match intent.action.as_str() {
                            "upload_image" => self.studio.analyzer_mut().upload(image),
                            "upload_content" => self.studio.remix_mut().set_content(image),
                            _ => self.studio.remix_mut().set_style(image),
                        }
                        writeln!(out, "Loaded {name}.")?;
                    }
                    Err(err) => writeln!(out, "Upload failed: {err:#}")?,
                }
            }
            "camera_capture" => match self.studio.analyzer_mut().capture_from_camera(&mut self.camera)
            {
                Ok(()) => {
                    let name = self
                        .studio
                        .analyzer()
                        .image()
                        .map(|image| image.name.clone())
                        .unwrap_or_default();
                    writeln!(out, "Captured {name}.")?;
                }
                Err(err) => writeln!(out, "{err:#}")?,
            },
            "copy_code" => match self.studio.ui().copyable_code() {
                Some(code) => writeln!(out, "{code}")?,
                None => writeln!(out, "No generated markup yet.")?,
            },
            "download" => {
                let raw = intent.arg_str("path").unwrap_or_default();
                let dir = if raw.is_empty() { PathBuf::from(".") } else { PathBuf::from(raw) };
                let written = match tab {
                    Tab::ImageGenerator => self.studio.image().download_images(&dir),
                    Tab::ImageRemix => self.studio.remix().download_images(&dir),
                    _ => {
                        writeln!(out, "{} has no images to download.", tab.name())?;
                        return Ok(Flow::Continue);
                    }
                };
                match written {
                    Ok(paths) => {
                        for path in paths {
                            writeln!(out, "Saved {}", path.display())?;
                        }
                    }
                    Err(err) => writeln!(out, "Download failed: {err:#}")?,
                }
            }
            "invalid" => writeln!(out, "{}", intent.arg_str("error").unwrap_or("invalid command"))?,
            _ => writeln!(
                out,
                "Unknown command /{}. Type /help for commands.",
                intent.arg_str("command").unwrap_or_default()
            )?,
        }
        Ok(Flow::Continue)
    }

    fn start_generation(&mut self, tab: Tab, out: &mut dyn Write) -> Result<()> {
        let pending = match self.studio.begin(tab) {
            Ok(pending) => pending,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(());
            }
        };
        let fallback = pending.clone();
        let service = self.studio.service();
        let tx = self.completions_tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("studio-{}", tab.id()))
            .spawn(move || {
                let _ = tx.send(pending.run(service.as_ref()));
            });
        match spawned {
            Ok(_) => {
                self.in_flight += 1;
                writeln!(out, "{}: working...", tab.name())?;
            }
            Err(err) => {
                let err = anyhow::Error::new(err).context("failed to start generation worker");
                self.report(fallback.abandon(err), out)?;
            }
        }
        Ok(())
    }

    fn drain(&mut self, out: &mut dyn Write) -> Result<()> {
        while let Ok(completed) = self.completions_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.report(completed, out)?;
        }
        Ok(())
    }

    fn wait_all(&mut self, out: &mut dyn Write) -> Result<()> {
        while self.in_flight > 0 {
            let completed = self
                .completions_rx
                .recv()
                .context("generation worker disappeared")?;
            self.in_flight -= 1;
            self.report(completed, out)?;
        }
        Ok(())
    }

    fn report(&mut self, completed: CompletedRequest, out: &mut dyn Write) -> Result<()> {
        let tab = completed.tab;
        let elapsed = completed.elapsed;
        if let Err(err) = self.studio.finish(completed) {
            writeln!(out, "{}: {err}", tab.name())?;
            return Ok(());
        }
        writeln!(out, "{}: done in {:.1}s", tab.name(), elapsed.as_secs_f64())?;
        match tab {
            Tab::UiGenerator => {
                if let Some(code) = self.studio.ui().copyable_code() {
                    writeln!(out, "{code}")?;
                }
            }
            Tab::ImageGenerator => {
                let count = self.studio.image().images().len();
                writeln!(out, "{count} image(s) ready. Use /download <dir> or /reference <n>.")?;
            }
            Tab::ImageAnalyzer => {
                if let Some(text) = self.studio.analyzer().operation().result() {
                    writeln!(out, "{text}")?;
                }
            }
            Tab::ImageRemix => {
                let count = self.studio.remix().images().len();
                writeln!(out, "{count} remixed image(s) ready. Use /download <dir>.")?;
            }
        }
        Ok(())
    }

    fn print_status(&self, tab: Tab, out: &mut dyn Write) -> Result<()> {
        let (state, error) = self.studio.status(tab);
        writeln!(out, "Tab: {} ({})", tab.name(), tab.id())?;
        writeln!(out, "State: {state}")?;
        if let Some(error) = error {
            writeln!(out, "Error: {error}")?;
        }
        writeln!(out, "Prompt: {}", self.studio.prompt(tab))?;
        match tab {
            Tab::UiGenerator => {
                let premium = if self.studio.ui().use_premium() { "on" } else { "off" };
                writeln!(out, "Premium model: {premium}")?;
            }
            Tab::ImageGenerator => {
                let panel = self.studio.image();
                writeln!(
                    out,
                    "Aspect ratio: {}  Images: {}",
                    panel.aspect_ratio(),
                    panel.count().get()
                )?;
                if let Some(reference) = panel.reference() {
                    writeln!(out, "Reference: {}", reference.name)?;
                }
            }
            Tab::ImageAnalyzer => {
                let image = self.studio.analyzer().image().map(|image| image.name.as_str());
                writeln!(out, "Image: {}", image.unwrap_or("(none)"))?;
            }
            Tab::ImageRemix => {
                let panel = self.studio.remix();
                writeln!(
                    out,
                    "Content: {}  Style: {}",
                    panel.content().map(|image| image.name.as_str()).unwrap_or("(none)"),
                    panel.style().map(|image| image.name.as_str()).unwrap_or("(none)")
                )?;
                writeln!(
                    out,
                    "Aspect ratio: {}  Images: {}",
                    panel.aspect_ratio(),
                    panel.count().get()
                )?;
            }
        }
        if let Some(library) = self.studio.library(tab) {
            writeln!(
                out,
                "Saved prompts: {}  Drawer: {}",
                library.saved().len(),
                if library.is_drawer_open() { "open" } else { "closed" }
            )?;
        }
        Ok(())
    }

    fn print_presets(&self, tab: Tab, out: &mut dyn Write) -> Result<()> {
        let Some(library) = self.studio.library(tab) else {
            writeln!(out, "{} has no presets.", tab.name())?;
            return Ok(());
        };
        let presets = library.presets();
        match presets.active() {
            None => {
                for name in presets.catalog().names() {
                    writeln!(out, "- {name}")?;
                }
                writeln!(out, "Pick one with /category <name>.")?;
            }
            Some(category) => {
                writeln!(out, "{}:", category.name)?;
                let prompts = presets.filtered_prompts();
                if prompts.is_empty() {
                    writeln!(out, "No presets match '{}'.", presets.filter())?;
                }
                for (idx, prompt) in prompts.iter().enumerate() {
                    writeln!(out, "{idx:>3}  {prompt}")?;
                }
            }
        }
        Ok(())
    }

    fn drag(&mut self, tab: Tab, intent: &Intent, out: &mut dyn Write) -> Result<()> {
        let positions: Vec<i32> = intent
            .command_args
            .get("positions")
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_i64)
                    .map(|value| value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
                    .collect()
            })
            .unwrap_or_default();
        let Some((start, moves)) = positions.split_first() else {
            writeln!(out, "/drag needs pointer positions")?;
            return Ok(());
        };
        let Some(library) = self.studio.library_mut(tab) else {
            writeln!(out, "{} has no resizable drawer.", tab.name())?;
            return Ok(());
        };
        let mut gesture = library.resize_mut().drag(*start);
        for position in moves {
            gesture.move_to(*position);
        }
        let height = gesture.release();
        writeln!(out, "Drawer height {height}px.")?;
        Ok(())
    }

    fn set_reference(&mut self, source: &str, out: &mut dyn Write) -> Result<()> {
        let source = source.trim();
        if source.is_empty() {
            writeln!(out, "/reference needs a path, a data URI or a generated image number")?;
            return Ok(());
        }
        if source.starts_with("data:") {
            match self.studio.image_mut().use_as_reference(source) {
                Ok(()) => writeln!(out, "Reference set.")?,
                Err(message) => writeln!(out, "{message}")?,
            }
            return Ok(());
        }
        if let Ok(number) = source.parse::<usize>() {
            let generated = number
                .checked_sub(1)
                .and_then(|idx| self.studio.image().images().get(idx).cloned());
            match generated {
                Some(uri) => match self.studio.image_mut().use_as_reference(&uri) {
                    Ok(()) => writeln!(out, "Generated image {number} set as reference.")?,
                    Err(message) => writeln!(out, "{message}")?,
                },
                None => writeln!(out, "No generated image {number}.")?,
            }
            return Ok(());
        }
        match ImagePayload::from_file(&PathBuf::from(source)) {
            Ok(image) => {
                writeln!(out, "Reference {} set.", image.name)?;
                self.studio.image_mut().set_reference(image);
            }
            Err(err) => writeln!(out, "Reference failed: {err:#}")?,
        }
        Ok(())
    }
}

fn index_arg(intent: &Intent, out: &mut dyn Write) -> Result<Option<usize>> {
    match intent.arg_i64("index").and_then(|value| usize::try_from(value).ok()) {
        Some(index) => Ok(Some(index)),
        None => {
            writeln!(out, "Index must be zero or greater.")?;
            Ok(None)
        }
    }
}

pub(crate) fn run_shell(studio: Studio) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(studio);
    shell.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Markup text a user would paste: the fenced body if any.
pub(crate) fn markup_for_output(markup: &str, code_only: bool) -> &str {
    if code_only {
        copyable_code(markup)
    } else {
        markup.trim()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use studio_contracts::events::{read_event_kinds, EventKind};
    use studio_contracts::prompts::MemoryKeyValueStore;
    use studio_engine::DryrunGenerationService;

    use super::*;

    fn shell(dir: &tempfile::TempDir) -> Shell {
        Shell::new(Studio::with_store(
            Arc::new(MemoryKeyValueStore::new()),
            dir.path().join("events.jsonl"),
            50,
            Arc::new(DryrunGenerationService::instant()),
        ))
    }

    fn send(shell: &mut Shell, line: &str) -> Result<String> {
        let mut out = Vec::new();
        shell.handle(line, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn plain_text_generates_on_active_tab() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut shell = shell(&dir);
        assert!(send(&mut shell, "a pricing table")?.contains("working"));
        let waited = send(&mut shell, "/wait")?;
        assert!(waited.contains("Generate UI: done"));
        assert!(waited.contains("a pricing table"));
        assert_eq!(shell.studio().prompt(Tab::UiGenerator), "a pricing table");
        assert_eq!(
            read_event_kinds(&dir.path().join("events.jsonl"))?,
            vec![
                EventKind::SessionStarted,
                EventKind::GenerationStarted,
                EventKind::GenerationSucceeded,
            ]
        );
        Ok(())
    }

    #[test]
    fn validation_errors_are_printed() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut shell = shell(&dir);
        send(&mut shell, "/tab image-analyzer")?;
        send(&mut shell, "/prompt")?;
        let output = send(&mut shell, "/generate")?;
        assert!(output.contains("Please upload an image and provide a prompt."));
        assert!(send(&mut shell, "/status")?.contains("State: failed"));
        Ok(())
    }

    #[test]
    fn presets_and_saved_prompts_flow() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut shell = shell(&dir);
        assert!(send(&mut shell, "/presets")?.contains("- Game Table & Layout"));
        assert!(send(&mut shell, "/category scoring & state")?.contains("Category: Scoring & State"));
        assert!(send(&mut shell, "/filter DIGITAL")?.contains("1 matching preset(s)."));
        assert!(send(&mut shell, "/preset 0")?.contains("digital scoreboard"));
        assert!(send(&mut shell, "/save")?.contains("Prompt saved."));
        assert!(send(&mut shell, "/saved")?.contains("digital scoreboard"));
        assert!(send(&mut shell, "/delete x")?.contains("/delete requires a number"));
        assert!(send(&mut shell, "/delete 0")?.contains("Deleted"));
        assert!(send(&mut shell, "/saved")?.contains("No saved prompts yet."));
        Ok(())
    }

    #[test]
    fn drag_and_drawer_commands() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut shell = shell(&dir);
        assert!(send(&mut shell, "/drawer")?.contains("open (240px)"));
        assert!(send(&mut shell, "/drag 100 500 900")?.contains("Drawer height 600px."));
        assert!(send(&mut shell, "/drag 100 0")?.contains("Drawer height 500px."));
        assert!(send(&mut shell, "/drag 5")?.contains("start position"));
        send(&mut shell, "/tab image-remix")?;
        assert!(send(&mut shell, "/drag 1 2")?.contains("no resizable drawer"));
        Ok(())
    }

    #[test]
    fn generated_image_can_become_reference_and_download() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut shell = shell(&dir);
        send(&mut shell, "/tab image-generator")?;
        send(&mut shell, "/count 2")?;
        send(&mut shell, "/aspect 4:3")?;
        send(&mut shell, "/generate")?;
        assert!(send(&mut shell, "/wait")?.contains("2 image(s) ready"));
        assert!(send(&mut shell, "/reference 2")?.contains("Generated image 2 set as reference."));
        assert!(send(&mut shell, "/reference 9")?.contains("No generated image 9."));
        let downloads = dir.path().join("downloads");
        let output = send(&mut shell, &format!("/download {}", downloads.display()))?;
        assert_eq!(output.matches("Saved ").count(), 2);

        assert!(send(&mut shell, "/reference data:nope")?
            .contains("Could not parse image data to use as reference."));
        let status = send(&mut shell, "/status")?;
        assert!(status.contains("State: succeeded"));
        assert!(status.contains("Error: Could not parse image data to use as reference."));
        assert!(status.contains("Reference: reference.png"));
        assert_eq!(shell.studio().image().images().len(), 2);
        Ok(())
    }

    #[test]
    fn analyzer_uses_camera_capture() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut shell = shell(&dir);
        send(&mut shell, "/tab Analyze Image")?;
        assert!(send(&mut shell, "/camera")?.contains("Captured capture-"));
        send(&mut shell, "/generate")?;
        assert!(send(&mut shell, "/wait")?.contains("Dry-run Analysis Report"));
        Ok(())
    }

    #[test]
    fn run_reads_until_quit() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut shell = shell(&dir);
        let mut input = Cursor::new("/tabs\n/pro\n/quit\n/status\n");
        let mut out = Vec::new();
        shell.run(&mut input, &mut out)?;
        let output = String::from_utf8_lossy(&out);
        assert!(output.contains("* ui-generator"));
        assert!(output.contains("Premium model on."));
        assert!(!output.contains("State:"));
        Ok(())
    }

    #[test]
    fn unknown_commands_are_reported() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut shell = shell(&dir);
        assert!(send(&mut shell, "/teleport now")?.contains("Unknown command /teleport"));
        assert!(send(&mut shell, "/tab video")?.contains("unknown tab 'video'"));
        Ok(())
    }

    #[test]
    fn code_only_output_strips_fence() {
        let markup = "intro\n```html\n<p>x</p>\n```\n";
        assert_eq!(markup_for_output(markup, true), "<p>x</p>");
        assert_eq!(markup_for_output(markup, false), markup.trim());
    }
}
