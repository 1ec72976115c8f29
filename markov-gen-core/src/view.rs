use std::sync::{Arc, Mutex};

/// A receiver of what a `MarkovModel` produces.
///
/// Messages (read counts, timings, errors) are advisory; a view may drop
/// them. `show_text` receives every generated text.
pub trait ModelView {
	/// Receives an informational status message.
	fn show_message(&mut self, message: &str);

	/// Receives a generated text.
	fn show_text(&mut self, text: &str);
}

/// Forwards texts to the `tracing` log at `debug` level.
///
/// Status messages are already logged by the model, so they are ignored here.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogView;

impl ModelView for LogView {
	fn show_message(&mut self, _message: &str) {}

	fn show_text(&mut self, text: &str) {
		tracing::debug!(chars = text.chars().count(), "generated text");
	}
}

/// Records everything into a buffer shared with its clones.
///
/// Clone it before handing it to the model, then read from the copy.
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
	inner: Arc<Mutex<Entries>>,
}

#[derive(Debug, Default)]
struct Entries {
	messages: Vec<String>,
	texts: Vec<String>,
}

impl MessageLog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Recorded status messages, oldest first.
	pub fn messages(&self) -> Vec<String> {
		self.inner.lock().map(|e| e.messages.clone()).unwrap_or_default()
	}

	/// Recorded texts, oldest first.
	pub fn texts(&self) -> Vec<String> {
		self.inner.lock().map(|e| e.texts.clone()).unwrap_or_default()
	}
}

impl ModelView for MessageLog {
	fn show_message(&mut self, message: &str) {
		if let Ok(mut entries) = self.inner.lock() {
			entries.messages.push(message.to_owned());
		}
	}

	fn show_text(&mut self, text: &str) {
		if let Ok(mut entries) = self.inner.lock() {
			entries.texts.push(text.to_owned());
		}
	}
}
