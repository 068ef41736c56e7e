use calcpad::app::App;
use calcpad::cli::{parse_args, run_cli_command};
use calcpad::error::CalcpadError;
use calcpad::input::{handle_event, EventOutcome, KeybindingConfig};
use calcpad::startup::{init_logging, StartupConfig};
use calcpad::terminal::{setup_panic_hook, TerminalManager};
use calcpad::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

fn main() -> Result<()> {
    match run() {
        Ok(()) => Ok(()),
        Err(report) => {
            if let Some(err) = report.downcast_ref::<CalcpadError>() {
                tracing::error!(category = %err.category(), error = %err, "exiting with error");
                eprintln!("{}", err.user_message());
                std::process::exit(1);
            }
            Err(report)
        }
    }
}

fn run() -> Result<()> {
    let Some(options) = run_cli_command(parse_args(std::env::args())?) else {
        return Ok(());
    };

    let config = StartupConfig::from_env()?.merge_cli(&options);
    if init_logging(config.log_file.as_deref())? {
        tracing::info!(
            version = calcpad::cli::VERSION,
            theme = %config.theme,
            "calcpad starting"
        );
    }

    color_eyre::install()?;
    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = App::with_config(&config);
    let mut term_manager = TerminalManager::new()?;
    let size = term_manager.terminal().size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    term_manager.restore();
    tracing::info!("calcpad exited");
    result
}

/// Draw, then wait for the next terminal event, until the app quits.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let bindings = KeybindingConfig::new();
    let mut event_stream = EventStream::new();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            needs_redraw = false;
        }

        let Some(event) = event_stream.next().await else {
            tracing::warn!("terminal event stream closed");
            return Ok(());
        };

        match handle_event(app, &bindings, &event?) {
            EventOutcome::None => {}
            EventOutcome::Redraw => needs_redraw = true,
            EventOutcome::ClearAndRedraw => {
                terminal.clear()?;
                needs_redraw = true;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
