use std::sync::Arc;

use kanal::AsyncReceiver;
use lexihover_core::{InputGateway, Page, PopupRenderer};
use lexihover_lang_dutch::DutchDictionary;
use lexihover_types::InputEvent;

#[derive(Debug)]
pub enum AppEvent {
    Input(InputEvent),
    DictionaryLoaded(Arc<DutchDictionary>),
    DictionaryFailed(String),
    /// No more input will arrive
    InputClosed,
}

/// Applies events to the session one at a time until input closes
pub async fn event_loop<H: Page + PopupRenderer>(
    gateway: &mut InputGateway<H>,
    events_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Event loop started");

    loop {
        let event = events_rx.recv().await?;
        if !handle_event(gateway, event) {
            break;
        }
    }

    tracing::info!("Event loop finished");
    Ok(())
}

/// Returns false once the loop should stop
fn handle_event<H: Page + PopupRenderer>(gateway: &mut InputGateway<H>, event: AppEvent) -> bool {
    match event {
        AppEvent::Input(input) => {
            let outcome = gateway.dispatch(&input);
            tracing::debug!("{:?} -> {:?}", input, outcome);
        }
        AppEvent::DictionaryLoaded(dictionary) => {
            gateway.session_mut().attach_dictionary(dictionary);
        }
        AppEvent::DictionaryFailed(reason) => {
            gateway.session_mut().dictionary_failed(&reason);
        }
        AppEvent::InputClosed => {
            tracing::info!("Input closed");
            return false;
        }
    }

    true
}
