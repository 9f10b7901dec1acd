//! focust - A full-screen focus timer for the terminal
//!
//! focust takes over the terminal, draws an HH:MM:SS clock in big
//! ASCII-art glyphs, and counts down (or up) while you work on one
//! named task. Quitting prints how long you actually worked.
//!
//! # Features
//!
//! - **Three modes**: countdown (default), count-up, wall clock
//! - **Glyph fonts**: selectable ASCII-art digit styles
//! - **Pause/resume**: space freezes the clock and the worked total
//! - **Resize aware**: the display re-centers on every window change
//! - **Safe exit**: the terminal is restored on quit, signal, or panic
//!
//! # Quick Start
//!
//! ```text
//! focust -t "write the report"        # 30-minute countdown
//! focust -t deep-work -T 50           # 50-minute countdown
//! focust -t standup -m clock          # wall clock
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | space | Pause / resume |
//! | q | Quit and print the worked time |

mod config;
mod core;
mod error;
mod font;
mod ui;

use std::env;
use std::time::{Duration, Instant};

use chrono::Timelike;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::Config as FileConfig;
use crate::core::session::{install_panic_hook, TerminalSession};
use crate::core::signals::SignalBridge;
use crate::core::timer::{TimerEvent, TimerMode, TimerState};
use crate::font::GlyphSet;
use crate::ui::renderer::{pick_quote, preview_lines};
use crate::ui::{layout, GlyphRenderer, Layout};

/// Command-line configuration
struct Config {
    /// Task to work on
    task: Option<String>,
    /// Countdown length in minutes
    minutes: Option<u64>,
    /// Timer mode
    mode: TimerMode,
    /// Glyph font name
    font: Option<String>,
    /// List available fonts and exit
    list_fonts: bool,
    /// Print a font sample and exit
    preview: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task: None,
            minutes: None,
            mode: TimerMode::Countdown,
            font: None,
            list_fonts: false,
            preview: None,
        }
    }
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("focust {}", VERSION);
}

fn print_help() {
    eprintln!("focust {} - A full-screen focus timer for the terminal", VERSION);
    eprintln!();
    eprintln!("Usage: focust -t <TASK> [OPTIONS]");
    eprintln!();
    eprintln!("Timer options:");
    eprintln!("  -t, --task <NAME>     Task to work on (required)");
    eprintln!("  -T, --time <MINUTES>  Countdown length (default: 30, or config.toml)");
    eprintln!("  -m, --mode <MODE>     countdown, count-up or clock (default: countdown)");
    eprintln!();
    eprintln!("Display options:");
    eprintln!("  -f, --font <NAME>     Glyph font (default: short, or config.toml)");
    eprintln!("  -L, --list            List available fonts");
    eprintln!("  -p, --preview <NAME>  Print a font sample and exit");
    eprintln!();
    eprintln!("Other options:");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys while running:");
    eprintln!("  space                 Pause / resume");
    eprintln!("  q                     Quit and print the worked time");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  focust -t \"write the report\"       30-minute countdown");
    eprintln!("  focust -t deep-work -T 50          50-minute countdown");
    eprintln!("  focust -t standup -m clock         wall clock");
    eprintln!();
    eprintln!("Configuration: ~/.focust/config.toml");
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-t" | "--task" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing task argument".to_string());
                }
                config.task = Some(args[i].clone());
            }
            "-T" | "--time" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing time argument".to_string());
                }
                let minutes: u64 = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid time: {}", args[i]))?;
                if minutes == 0 {
                    return Err("Time must be at least 1 minute".to_string());
                }
                config.minutes = Some(minutes);
            }
            "-m" | "--mode" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing mode argument".to_string());
                }
                config.mode = match args[i].as_str() {
                    "countdown" => TimerMode::Countdown,
                    "count-up" | "countup" => TimerMode::CountUp,
                    "clock" => TimerMode::Clock,
                    other => return Err(format!("Unknown mode: {}. Use -h for help.", other)),
                };
            }
            "-f" | "--font" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing font argument".to_string());
                }
                config.font = Some(args[i].clone());
            }
            "-L" | "--list" => {
                config.list_fonts = true;
            }
            "-p" | "--preview" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing font argument".to_string());
                }
                config.preview = Some(args[i].clone());
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Look up a glyph font, exiting with a pointer to --list on a miss.
fn resolve_font(name: &str) -> &'static GlyphSet {
    match font::lookup(name) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --list to see the available fonts");
            std::process::exit(1);
        }
    }
}

/// Formats a second count as HH:MM:SS.
fn format_hms(total: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        total % 3600 / 60,
        total % 60
    )
}

/// Seconds elapsed since local midnight.
fn seconds_of_day() -> u64 {
    chrono::Local::now().num_seconds_from_midnight() as u64
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    // Initialize logging to file
    let log_path = config::home_dir()
        .map(|h| h.join(".focust").join("focust.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("focust.log"));

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    info!("focust {} starting...", VERSION);

    if config.list_fonts {
        for name in font::names() {
            if name == font::DEFAULT_FONT {
                println!("{} (default)", name);
            } else {
                println!("{}", name);
            }
        }
        return Ok(());
    }

    if let Some(ref name) = config.preview {
        let font = resolve_font(name);
        for line in preview_lines(font) {
            println!("{}", line);
        }
        return Ok(());
    }

    let task = match config.task {
        Some(ref task) if !task.trim().is_empty() => task.clone(),
        _ => {
            eprintln!("Error: Missing task. What will you work on?");
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    // Merge config: command-line flags override the config file
    let file_config = FileConfig::load();
    let minutes = config.minutes.unwrap_or(file_config.timer.minutes);
    let font_name = config
        .font
        .clone()
        .unwrap_or_else(|| file_config.ui.font.clone());
    let font = resolve_font(&font_name);

    info!("Task: {}", task);
    info!("Mode: {:?}, font: {}", config.mode, font.name);

    let state = match config.mode {
        TimerMode::Countdown => TimerState::countdown(minutes),
        TimerMode::CountUp => TimerState::count_up(),
        TimerMode::Clock => TimerState::clock(seconds_of_day()),
    };

    let worked = match run_timer(state, font, &task, file_config.ui.blink) {
        Ok(worked) => worked,
        Err(e) => {
            error!("Fatal: {:#}", e);
            return Err(e);
        }
    };

    println!("worked {} on {}", format_hms(worked), task);
    info!("Worked {} on '{}'", format_hms(worked), task);

    Ok(())
}

/// Owns the terminal for the life of the timer: signal handlers first
/// (nothing to restore if that fails), then the raw-mode session, then
/// the loop. The session is left exactly once, and a loop error wins
/// over a leave error.
fn run_timer(
    mut state: TimerState,
    font: &GlyphSet,
    task: &str,
    blink: bool,
) -> anyhow::Result<u64> {
    let signals = SignalBridge::install()?;
    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    let mut renderer = GlyphRenderer::new(blink);

    let result = event_loop(&mut state, &signals, &mut renderer, font, task);

    let leave = session.leave();
    let worked = result?;
    leave?;
    Ok(worked)
}

/// Computes a fresh layout for the current window size and repaints
/// the whole screen. Called at startup and after every resize.
fn draw_all(
    renderer: &mut GlyphRenderer,
    state: &TimerState,
    font: &GlyphSet,
    task: &str,
    quote: &str,
) -> anyhow::Result<Layout> {
    let (cols, rows) = TerminalSession::size()?;
    let layout = Layout::compute(
        rows,
        cols,
        font,
        layout::DISPLAY_CELLS,
        layout::RESERVED_ROWS,
        layout::RESERVED_COLS,
    )?;
    info!(
        "Terminal size: {}x{}, glyphs at ({}, {})",
        cols, rows, layout.origin_col, layout.origin_row
    );
    renderer.draw_static(layout, font, task, state.label(), quote)?;
    renderer.draw_time(layout, font, state.display_fields())?;
    Ok(layout)
}

/// Main event loop
///
/// Single thread, one wait point: sleeps in `event::poll` until the
/// next whole-second tick is due, waking early for keys and resizes.
/// Returns the worked seconds once the timer reaches its stopped
/// phase.
fn event_loop(
    state: &mut TimerState,
    signals: &SignalBridge,
    renderer: &mut GlyphRenderer,
    font: &GlyphSet,
    task: &str,
) -> anyhow::Result<u64> {
    const TICK: Duration = Duration::from_secs(1);

    let quote = pick_quote(task);
    let mut layout = draw_all(renderer, state, font, task, quote)?;
    let mut next_tick = Instant::now() + TICK;

    while !state.is_stopped() {
        // Signal flags first: a signal delivered while drawing must
        // not wait out another poll timeout.
        let flags = signals.poll_and_clear();
        if flags.terminate_requested {
            info!("Quit on termination signal");
            state.apply(TimerEvent::Quit);
            continue;
        }
        if flags.resize_requested {
            layout = draw_all(renderer, state, font, task, quote)?;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key_event.code {
                        KeyCode::Char('q') => {
                            info!("Quit on key");
                            state.apply(TimerEvent::Quit);
                        }
                        // Raw mode turns ISIG off, so Ctrl+C arrives
                        // here instead of as SIGINT.
                        KeyCode::Char('c')
                            if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            info!("Quit on Ctrl+C");
                            state.apply(TimerEvent::Quit);
                        }
                        KeyCode::Char(' ') => {
                            state.apply(TimerEvent::TogglePause);
                            info!("Pause toggled: {:?}", state.phase());
                            renderer.draw_mode_label(layout, font, state.label())?;
                        }
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    layout = draw_all(renderer, state, font, task, quote)?;
                }
                _ => {}
            }
        } else {
            state.sync_to(seconds_of_day());
            state.apply(TimerEvent::Tick);
            renderer.draw_time(layout, font, state.display_fields())?;
            next_tick += TICK;
        }
    }

    Ok(state.worked_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse_args(&args(&["focust"])).unwrap();
        assert!(config.task.is_none());
        assert!(config.minutes.is_none());
        assert_eq!(config.mode, TimerMode::Countdown);
        assert!(config.font.is_none());
        assert!(!config.list_fonts);
        assert!(config.preview.is_none());
    }

    #[test]
    fn test_parse_short_flags() {
        let config = parse_args(&args(&[
            "focust", "-t", "report", "-T", "50", "-m", "clock", "-f", "raw",
        ]))
        .unwrap();
        assert_eq!(config.task.as_deref(), Some("report"));
        assert_eq!(config.minutes, Some(50));
        assert_eq!(config.mode, TimerMode::Clock);
        assert_eq!(config.font.as_deref(), Some("raw"));
    }

    #[test]
    fn test_parse_long_flags() {
        let config = parse_args(&args(&[
            "focust", "--task", "report", "--time", "5", "--mode", "count-up", "--font",
            "bulbhead",
        ]))
        .unwrap();
        assert_eq!(config.task.as_deref(), Some("report"));
        assert_eq!(config.minutes, Some(5));
        assert_eq!(config.mode, TimerMode::CountUp);
        assert_eq!(config.font.as_deref(), Some("bulbhead"));
    }

    #[test]
    fn test_parse_mode_spellings() {
        for (name, mode) in [
            ("countdown", TimerMode::Countdown),
            ("count-up", TimerMode::CountUp),
            ("countup", TimerMode::CountUp),
            ("clock", TimerMode::Clock),
        ] {
            let config = parse_args(&args(&["focust", "-m", name])).unwrap();
            assert_eq!(config.mode, mode);
        }
        assert!(parse_args(&args(&["focust", "-m", "sideways"])).is_err());
    }

    #[test]
    fn test_parse_unknown_argument() {
        assert!(parse_args(&args(&["focust", "--frobnicate"])).is_err());
    }

    #[test]
    fn test_parse_missing_value() {
        assert!(parse_args(&args(&["focust", "-t"])).is_err());
        assert!(parse_args(&args(&["focust", "-T"])).is_err());
        assert!(parse_args(&args(&["focust", "-m"])).is_err());
        assert!(parse_args(&args(&["focust", "-f"])).is_err());
        assert!(parse_args(&args(&["focust", "-p"])).is_err());
    }

    #[test]
    fn test_parse_rejects_zero_and_garbage_minutes() {
        assert!(parse_args(&args(&["focust", "-T", "0"])).is_err());
        assert!(parse_args(&args(&["focust", "-T", "soon"])).is_err());
    }

    #[test]
    fn test_parse_list_and_preview() {
        let config = parse_args(&args(&["focust", "-L"])).unwrap();
        assert!(config.list_fonts);

        let config = parse_args(&args(&["focust", "-p", "raw"])).unwrap();
        assert_eq!(config.preview.as_deref(), Some("raw"));
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(100 * 3600), "100:00:00");
    }
}
