use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexihover_config::Config;
use lexihover_core::{InputGateway, Session};
use lexihover_types::Viewport;
use tokio::sync::Notify;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, event_loop};
use crate::io::{EventSource, load_dictionary, read_input};
use crate::page::ReplayPage;
use crate::report::ChainReport;

/// Centralized channel management
pub struct ChannelSet {
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(256), // recorded input arrives in bursts
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    config: Config,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(config: Config) -> Self {
        Self {
            channels: ChannelSet::new(),
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, source: EventSource) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();
        let settled = Arc::new(Notify::new());

        // Dictionary loader
        tasks.spawn(load_dictionary(
            self.config.dictionary.clone(),
            settled.clone(),
            self.channels.events.0.clone(),
        ));

        // Input reader
        tasks.spawn(read_input(
            source,
            settled,
            self.cancel_token.child_token(),
            self.channels.events.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    /// Replay `source` over `text` and report the chain left at the end
    pub async fn run(&self, text: &str, source: EventSource) -> anyhow::Result<ChainReport> {
        let page = ReplayPage::new(text, self.config.page, self.config.popup);
        let viewport = Viewport::new(self.config.page.viewport_width, self.config.page.viewport_height);
        let session = Session::new(page, self.config.popup, viewport);
        let mut gateway = InputGateway::new(session, &self.config.input);

        let mut tasks = self.spawn_tasks(source);

        tokio::select! {
            result = event_loop(&mut gateway, self.channels.events.1.clone()) => {
                if let Err(e) = result {
                    tracing::error!("event_loop exited: {e}");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
            }
        }

        self.shutdown();
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("Task failed: {}", e),
                Err(e) => tracing::error!("Task panicked: {}", e),
            }
        }

        let session = gateway.session();
        tracing::info!(
            "Replay finished with {} popup(s) open",
            session.host().popup_count()
        );

        Ok(ChainReport::from_session(session))
    }
}
