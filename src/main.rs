//! treedeck: navigable slide decks from sectioned documents.
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use treedeck::app_state::AppState;
use treedeck::config::Config;
use treedeck::export::{self, ExportFormat};
use treedeck::nav::{Command, Overlay};
use treedeck::{input, logging, ui};

#[derive(Parser)]
#[command(name = "treedeck")]
#[command(about = "Navigable slide decks from sectioned documents", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Configuration file (defaults to treedeck.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a document interactively
    Present {
        /// Markdown document to present
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Start at this location, e.g. `#intro` or `#intro/2`
        #[arg(long, value_name = "FRAGMENT")]
        at: Option<String>,

        /// Start with linear navigation
        #[arg(long)]
        linear: bool,
    },
    /// Print the minimap of every presentation as JSON
    Outline {
        /// Markdown document to outline
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Export the first presentation
    Export {
        /// Markdown document to export
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output format
        #[arg(long, short = 'f', value_enum)]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.log_file.as_deref()).context("failed to open log file")?;
    let mut cfg = Config::load(args.config.as_deref());

    match args.command {
        Commands::Present { path, at, linear } => {
            if linear {
                cfg.linear_navigation = true;
            }
            let forest = input::load_forest(&path, &cfg)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let output_dir = path.parent().unwrap_or_else(|| Path::new("."));
            let Some(mut state) = AppState::new(forest, &cfg, output_dir) else {
                eprintln!("No sections found in {}", path.display());
                return Ok(());
            };
            if let Some(fragment) = at {
                state.apply_fragment(&fragment);
            }
            run_tui(state, &cfg)?;
        }
        Commands::Outline { path } => {
            let forest = input::load_forest(&path, &cfg)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let maps = forest
                .roots()
                .iter()
                .map(|root| export::minimap(&forest, *root))
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&maps)?);
        }
        Commands::Export {
            path,
            format,
            output,
        } => {
            let forest = input::load_forest(&path, &cfg)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let Some(root) = forest.root(0) else {
                return Ok(());
            };
            let rendered = format.render(&forest, root);
            match output {
                Some(file) => std::fs::write(&file, rendered)
                    .with_context(|| format!("failed to write {}", file.display()))?,
                None => print!("{rendered}"),
            }
        }
    }
    Ok(())
}

fn run_tui(mut app: AppState, cfg: &Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else {
        // Where the presentation was left, for `--at` next time.
        println!("{}", app.fragment);
    }

    Ok(())
}

#[allow(clippy::too_many_lines)]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cfg: &Config,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        app.message = None;

        match app.cursor.overlay {
            Overlay::Minimap => match key.code {
                KeyCode::Tab => app.move_minimap_focus(true),
                KeyCode::BackTab => app.move_minimap_focus(false),
                KeyCode::Enter => {
                    app.select_minimap_focus();
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    app.dispatch(&Command::Ascend);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    app.dispatch(&Command::Descend);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    app.dispatch(&Command::StepRight);
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    app.dispatch(&Command::StepLeft);
                }
                KeyCode::Char('n') => {
                    app.dispatch(&Command::SwitchPresentation { forward: true });
                }
                KeyCode::Char('N') => {
                    app.dispatch(&Command::SwitchPresentation { forward: false });
                }
                KeyCode::Char('m') | KeyCode::Esc => {
                    app.dispatch(&Command::CloseOverlay);
                }
                KeyCode::Char('q') => return Ok(()),
                _ => {}
            },
            Overlay::Settings => match key.code {
                KeyCode::Char('l') => {
                    let on = !app.cursor.mode.is_linear();
                    app.dispatch(&Command::SetLinear(on));
                }
                KeyCode::Char('s') | KeyCode::Esc => {
                    app.dispatch(&Command::CloseOverlay);
                }
                KeyCode::Char('q') => return Ok(()),
                _ => {}
            },
            Overlay::Download => match key.code {
                KeyCode::Char('b') => download(app, ExportFormat::Beamer),
                KeyCode::Char('t') => download(app, ExportFormat::Html),
                KeyCode::Char('d') | KeyCode::Esc => {
                    app.dispatch(&Command::CloseOverlay);
                }
                KeyCode::Char('q') => return Ok(()),
                _ => {}
            },
            Overlay::Help => match key.code {
                KeyCode::Char('?') | KeyCode::Esc => {
                    app.dispatch(&Command::CloseOverlay);
                }
                KeyCode::Char('q') => return Ok(()),
                _ => {}
            },
            Overlay::None => {
                let command = match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char(' ') => Command::ToggleZoom,
                    KeyCode::Char('h') => Command::StepLeft,
                    KeyCode::Char('l') => Command::StepRight,
                    KeyCode::Char('j') => Command::Descend,
                    KeyCode::Char('k') => Command::Ascend,
                    KeyCode::Right => Command::LinearForward,
                    KeyCode::Left => Command::LinearBackward,
                    KeyCode::Up => Command::LinkPrev,
                    KeyCode::Down => Command::LinkNext,
                    KeyCode::Enter => Command::FollowLink,
                    KeyCode::Char('n') => Command::SwitchPresentation { forward: true },
                    KeyCode::Char('N') => Command::SwitchPresentation { forward: false },
                    KeyCode::Char('m') => Command::ToggleOverlay(Overlay::Minimap),
                    KeyCode::Char('s') => Command::ToggleOverlay(Overlay::Settings),
                    KeyCode::Char('?') => Command::ToggleOverlay(Overlay::Help),
                    KeyCode::Char('d') => Command::ToggleOverlay(Overlay::Download),
                    _ => continue,
                };
                app.dispatch(&command);
            }
        }
    }
}

/// Exports from the presenter. A failed write is shown in the status bar and the session goes on.
fn download(app: &mut AppState, format: ExportFormat) {
    match app.export(format) {
        Ok(path) => tracing::debug!(path = %path.display(), "download written"),
        Err(e) => tracing::debug!(error = %e, "download failed, presenter continues"),
    }
}
