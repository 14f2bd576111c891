use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use term_desk::actions::{Action, action_for_key};
use term_desk::desktop::DesktopShell;
use term_desk::error::ShellError;
use term_desk::event_loop::{ControlFlow, EventLoop};
use term_desk::logging;
use term_desk::registry::AppRegistry;
use term_desk::theme::Theme;
use term_desk::window::ShellSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Initial shell theme.
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Append diagnostics to this file (stderr belongs to the UI).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Applications to open at startup. Repeatable; defaults to Welcome.
    #[arg(long = "open", value_name = "APP")]
    open: Vec<String>,

    /// Input poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,
}

fn main() -> Result<(), ShellError> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let registry = AppRegistry::with_builtin_apps();
    let mut shell = DesktopShell::new(registry, ShellSettings {
        theme: cli.theme.into(),
    });
    let launch = if cli.open.is_empty() {
        vec!["Welcome".to_string()]
    } else {
        cli.open.clone()
    };
    for key in &launch {
        shell.open_app(key);
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(
        &mut terminal,
        &mut shell,
        Duration::from_millis(cli.tick_ms.max(1)),
    );

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shell: &mut DesktopShell,
    tick: Duration,
) -> io::Result<()> {
    let size = terminal.size()?;
    shell.resize(size.width, size.height);

    EventLoop::new(tick).run(|event| {
        if let Some(event) = event {
            if let Event::Key(key) = &event
                && action_for_key(key, shell.launcher_open()) == Some(Action::Quit)
            {
                return Ok(ControlFlow::Quit);
            }
            shell.handle_event(&event);
        }
        terminal.draw(|frame| shell.render(frame))?;
        Ok(ControlFlow::Continue)
    })
}
