use std::io;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use chat_panel::adapters::ReqwestHttpClient;
use chat_panel::app::App;
use chat_panel::cli::{parse_args, run_cli_command, CliCommand, VERSION};
use chat_panel::client::ChatClient;
use chat_panel::config::PanelConfig;
use chat_panel::logging::init_logging;
use chat_panel::terminal::{setup_panic_hook, TerminalGuard};
use chat_panel::ui;

fn main() -> Result<()> {
    // Handle flags before any initialization
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }

    color_eyre::install()?;

    let cli_url = match command {
        CliCommand::Run { url } => url,
        _ => None,
    };
    let config = PanelConfig::resolve(cli_url)?;

    if let Err(e) = init_logging(config.log_path().as_deref()) {
        eprintln!("Logging disabled: {}", e);
    }
    tracing::info!(version = VERSION, base_url = %config.base_url, "Starting chat panel");

    let http = ReqwestHttpClient::with_connect_timeout(config.connect_timeout)?;
    let client = ChatClient::new(Arc::new(http), config.base_url.clone());

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(client));

    tracing::info!("Chat panel exited");
    result
}

async fn run(client: ChatClient) -> Result<()> {
    let mut app = App::new(client);
    app.load_history();

    let mut guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app).await;

    guard.cleanup();
    terminal.show_cursor()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        app.quit();
                    }
                    None => app.quit(),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
                // Apply everything already queued before the next draw
                while let Ok(msg) = message_rx.try_recv() {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
