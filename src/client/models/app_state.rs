use std::sync::Arc;

use iced::Command;

use crate::client::models::messages::Message;
use crate::client::services::submit_service::SubmitService;

/// State owned by the submission form: what the user typed, what the last
/// submission produced, and whether a request is in flight.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input_text: String,
    pub output_text: String,
    pub loading: bool,
}

impl FormState {
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input_text.trim().is_empty()
    }

    pub fn update(&mut self, message: Message, service: &Arc<SubmitService>) -> Command<Message> {
        match message {
            Message::None => {}
            Message::InputChanged(value) => {
                self.input_text = value;
            }
            Message::Submit => {
                // The button is already disabled while loading or on empty
                // input, but the text input's on_submit fires independently.
                if !self.can_submit() {
                    return Command::none();
                }
                self.loading = true;
                self.output_text.clear();

                // The body carries the input untrimmed; only the guard trims.
                let text = self.input_text.clone();
                let svc = service.clone();
                return Command::perform(
                    async move { svc.submit_text(&text).await },
                    Message::SubmitCompleted,
                );
            }
            Message::SubmitCompleted(output) => {
                self.loading = false;
                self.output_text = output;
            }
        }
        Command::none()
    }
}
