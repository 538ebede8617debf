#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use std::{io::Read, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use glyph_engine::{EditSession, EventLoop, Frame, FrameSink, event_loop::DEFAULT_DOCUMENT, tools::TOOLS};

mod ansi;
mod script;
mod settings;

use ansi::AnsiPainter;
use script::{ScriptInput, parse_script};
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about = "Replays a key script on a layered character canvas and prints the result", long_about = None)]
pub struct Args {
    /// Key script to replay, '-' reads standard input
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Keys given inline, replayed after the script file
    #[arg(short, long, value_name = "KEYS")]
    keys: Option<String>,

    /// Canvas width, overrides the settings file
    #[arg(long)]
    width: Option<i32>,

    /// Canvas height, overrides the settings file
    #[arg(long)]
    height: Option<i32>,

    /// Document to open before replaying
    #[arg(short, long, value_name = "PATH")]
    load: Option<PathBuf>,

    /// Write the canvas here when the script is done
    #[arg(short, long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// File used by the save and load keys
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DOCUMENT)]
    document: PathBuf,

    /// Show the grid
    #[arg(long)]
    grid: bool,

    /// Print every frame instead of only the last one
    #[arg(long)]
    all_frames: bool,

    /// Store the effective options as the new settings
    #[arg(long)]
    write_settings: bool,

    /// Print frames with ANSI colors
    #[arg(long)]
    color: bool,

    /// List the tool names usable in `<tool NAME>` tags and exit
    #[arg(long)]
    list_tools: bool,
}

struct TextSink {
    all_frames: bool,
    painter: Option<AnsiPainter>,
    last: Option<Frame>,
}

impl TextSink {
    fn text(&self, frame: &Frame) -> String {
        match &self.painter {
            Some(painter) => painter.paint(frame),
            None => frame.to_text(),
        }
    }
}

impl FrameSink for TextSink {
    fn present(&mut self, frame: &Frame) {
        if self.all_frames {
            println!("{}", self.text(frame));
        }
        self.last = Some(frame.clone());
    }
}

fn get_log_dir() -> Option<PathBuf> {
    let dir = Settings::config_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn read_script(args: &Args) -> anyhow::Result<String> {
    let mut text = String::new();
    match args.script.as_deref() {
        Some(path) if path.as_os_str() == "-" => {
            std::io::stdin().read_to_string(&mut text).context("reading script from stdin")?;
        }
        Some(path) => {
            text = std::fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
        }
        None => {}
    }
    if let Some(keys) = &args.keys {
        text.push_str(keys);
    }
    Ok(text)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.list_tools {
        for tool in TOOLS {
            println!("{:<6} {}", tool.name(), tool.tooltip());
        }
        return Ok(());
    }

    let _logger = if let Some(log_dir) = get_log_dir() {
        Some(
            Logger::try_with_env_or_str("info")?
                .log_to_file(FileSpec::default().directory(&log_dir).basename("glyph_draw").suffix("log").suppress_timestamp())
                .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
                .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
                .start()?,
        )
    } else {
        eprintln!("Failed to create log file");
        None
    };

    log::info!("Starting glyph_draw {}", env!("CARGO_PKG_VERSION"));

    let mut options = Settings::load();
    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(height) = args.height {
        options.height = height;
    }
    if args.grid {
        options.show_grid = true;
    }
    if options.width < 1 || options.height < 1 {
        anyhow::bail!("invalid canvas size {}x{}", options.width, options.height);
    }
    if args.write_settings {
        Settings::store(&options);
    }

    let mut session = EditSession::new(&options);
    if let Some(path) = &args.load {
        let doc = glyph_engine::document::load_from_path(path)?;
        session.load_document(&doc).with_context(|| format!("loading {}", path.display()))?;
    }

    let events = parse_script(&read_script(&args)?)?;
    log::info!("replaying {} events", events.len());

    let mut input = ScriptInput::new(events);
    let mut sink = TextSink {
        all_frames: args.all_frames,
        painter: args.color.then(AnsiPainter::new),
        last: None,
    };
    let frames = EventLoop::new(&options).with_document_path(&args.document).run(&mut session, &mut input, &mut sink);
    log::info!("presented {frames} frames");

    if !args.all_frames {
        if let Some(frame) = &sink.last {
            print!("{}", sink.text(frame));
        }
    }

    if let Some(path) = &args.save {
        glyph_engine::document::save_to_path(&session.to_document(), path)?;
        log::info!("saved {}", path.display());
    }
    Ok(())
}
