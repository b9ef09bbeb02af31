use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::warn;

use plaza::app::App;
use plaza::cache::ImageCache;
use plaza::cli::{parse_args, CliCommand, RunOptions};
use plaza::favorites::FavoritesStore;
use plaza::source::HttpBusinessSource;
use plaza::startup::{init_tracing, StartupConfig};
use plaza::storage::FileStore;
use plaza::terminal::{setup_panic_hook, TerminalManager};
use plaza::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("plaza {VERSION}");
            return Ok(());
        }
        CliCommand::Run(options) => options,
    };

    color_eyre::install()?;
    setup_panic_hook();

    run(options).await
}

async fn run(options: RunOptions) -> Result<()> {
    let config = StartupConfig::resolve(&options);

    let store = match &config.data_dir {
        Some(dir) => FileStore::with_dir(dir)?,
        None => FileStore::new()?,
    };
    init_tracing(store.dir())?;
    tracing::info!("plaza {} starting, source {}", VERSION, config.source_url);

    let favorites = FavoritesStore::load(Box::new(store));
    let image_cache = Arc::new(ImageCache::new());
    let source = Arc::new(HttpBusinessSource::with_base_url(config.source_url));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(favorites, image_cache, source, tx);
    app.refresh();

    let mut manager = TerminalManager::new()?;
    let mut events = EventStream::new();

    loop {
        manager.terminal().draw(|frame| ui::render(frame, &mut app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => warn!("terminal event error: {}", e),
                None => break,
            },
            Some(message) = rx.recv() => app.handle_message(message),
        }

        if app.should_quit {
            break;
        }
    }

    manager.restore()?;
    Ok(())
}
