use std::sync::Arc;

use iced::{Application, Command, Element, Theme};

use crate::client::models::app_state::FormState;
use crate::client::models::messages::Message;
use crate::client::services::submit_service::SubmitService;
use crate::config::ClientConfig;

pub struct SubmitApp {
    pub state: FormState,
    pub service: Arc<SubmitService>,
}

impl Application for SubmitApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        log::info!("submission endpoint: {}", config.endpoint_url);

        let app = SubmitApp {
            state: FormState::default(),
            service: Arc::new(SubmitService::new(&config)),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Invio".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.service)
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::submit_form::view(&self.state)
    }
}
