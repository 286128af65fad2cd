//! Best-effort delivery of domain events to an external channel.
//!
//! The games emit [`GameEvent`]s; a sink formats and ships them. Delivery is
//! strictly fire-and-forget: the fetch promise is dropped without awaiting,
//! failures are logged to the console, and nothing here ever touches game
//! state. With no Telegram credentials configured, events just go to the
//! console.

use serde::Serialize;
use web_sys::wasm_bindgen::JsValue;

use crate::games::GameEvent;

/// Consumes domain events. Implementations must be infallible from the
/// caller's point of view: a failed delivery is the sink's problem.
pub trait EventSink {
    fn deliver(&self, event: &GameEvent);
}

/// Format an event as the (HTML-flavoured) notification message.
pub fn format_event(event: &GameEvent) -> String {
    match event {
        GameEvent::QuestCompleted { quest, reward } => format!(
            "🎯 <b>Quest completed!</b>\n\n📋 Task: {}\n💰 Reward: {} coins\n\nKeep playing! 🚀",
            quest, reward
        ),
        GameEvent::LevelUp { level } => format!(
            "🎉 <b>Congratulations!</b>\n\n⚡ You reached <b>level {}</b>!\n\nBigger rewards await! 🚀",
            level
        ),
        GameEvent::PrizeWon { prize } => format!(
            "🎁 <b>Congratulations!</b>\n\n🏆 You won: <b>{}</b>\n\nContact the administrator to claim it! 📞",
            prize
        ),
    }
}

/// Fallback sink: logs the formatted message to the browser console.
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn deliver(&self, event: &GameEvent) {
        web_sys::console::log_1(&format!("[notify] {}", format_event(event)).into());
    }
}

/// Telegram Bot API `sendMessage` payload.
#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Sends events to a Telegram chat through the Bot API.
pub struct TelegramSink {
    chat_id: String,
    token: String,
}

impl TelegramSink {
    pub fn new(chat_id: String, token: String) -> Self {
        Self { chat_id, token }
    }

    fn send(&self, text: &str) -> Result<(), JsValue> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        let headers = web_sys::Headers::new()?;
        headers.set("Content-Type", "application/json")?;
        init.set_headers(&headers.into());
        init.set_body(&JsValue::from_str(&body));

        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
        let request = web_sys::Request::new_with_str_and_init(&url, &init)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        // Fire-and-forget: drop the promise, never await the response.
        let _ = window.fetch_with_request(&request);
        Ok(())
    }
}

impl EventSink for TelegramSink {
    fn deliver(&self, event: &GameEvent) {
        if let Err(err) = self.send(&format_event(event)) {
            web_sys::console::warn_1(&format!("[notify] send failed: {:?}", err).into());
        }
    }
}

/// Owns the configured sink and fans drained events into it.
pub struct Notifier {
    sink: Box<dyn EventSink>,
}

impl Notifier {
    /// Build from `localStorage` configuration: when both
    /// `telegram_chat_id` and `telegram_bot_token` are present, events go to
    /// Telegram; otherwise to the console.
    pub fn from_environment() -> Self {
        let sink: Box<dyn EventSink> =
            match (storage_item("telegram_chat_id"), storage_item("telegram_bot_token")) {
                (Some(chat_id), Some(token)) => Box::new(TelegramSink::new(chat_id, token)),
                _ => {
                    web_sys::console::log_1(
                        &"[notify] no Telegram credentials, logging to console".into(),
                    );
                    Box::new(ConsoleSink)
                }
            };
        Self { sink }
    }

    #[cfg(test)]
    pub fn with_sink(sink: Box<dyn EventSink>) -> Self {
        Self { sink }
    }

    pub fn publish(&self, events: Vec<GameEvent>) {
        for event in &events {
            self.sink.deliver(event);
        }
    }
}

fn storage_item(key: &str) -> Option<String> {
    web_sys::window()?.local_storage().ok()??.get_item(key).ok()?
}
