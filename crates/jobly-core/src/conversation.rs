//! Conversation controller: the chat turn state machine.
//!
//! One turn is: user submits → user message appended → query sent →
//! exactly one assistant message appended. While a turn is in flight further
//! submits are ignored, so every completed turn grows the transcript by two.
//!
//! The controller is a reducer: [`Conversation::apply`] takes a [`ChatAction`]
//! and returns the side effect (if any) the caller must perform. Completion is
//! fed back as another action, tagged with the turn id it answers.

use jobly_types::{
    config::{AppConfig, ChatConfig},
    message::{ChatReply, Message},
};

use crate::client::JobClient;
use crate::suggestions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    AwaitingResponse { turn_id: u64 },
}

#[derive(Debug, Clone)]
pub enum ChatAction {
    /// Replace the input buffer
    EditInput(String),
    /// Copy a suggested query into the input buffer (does not submit)
    SelectSuggestion(String),
    /// Submit the input buffer
    Submit,
    /// The reply for `turn_id` is available
    ReplyArrived { turn_id: u64, reply: ChatReply },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    /// Send `query` to the backend and report back with `turn_id`
    SendQuery { turn_id: u64, query: String },
}

pub struct Conversation {
    messages: Vec<Message>,
    input: String,
    phase: TurnPhase,
    next_message_id: u64,
    turn_counter: u64,
    chat: ChatConfig,
    max_input_chars: usize,
}

impl Conversation {
    pub fn new(chat: ChatConfig, max_input_chars: usize) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            input: String::new(),
            phase: TurnPhase::Idle,
            next_message_id: 1,
            turn_counter: 0,
            chat,
            max_input_chars,
        };
        conversation.push_welcome();
        conversation
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.chat.clone(), config.ui.max_message_length)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, TurnPhase::AwaitingResponse { .. })
    }

    /// Placeholder text to show while a turn is in flight
    pub fn loading_text(&self) -> Option<&str> {
        self.is_busy().then_some(self.chat.loading_message.as_str())
    }

    pub fn suggestions_visible(&self) -> bool {
        suggestions::suggestions_visible(self.messages.len(), self.is_busy())
    }

    /// Whether the current input would start a turn
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.input.trim().is_empty()
    }

    pub fn apply(&mut self, action: ChatAction) -> Option<ChatEffect> {
        match action {
            ChatAction::EditInput(text) | ChatAction::SelectSuggestion(text) => {
                self.input = text.chars().take(self.max_input_chars).collect();
                None
            }
            ChatAction::Submit => self.submit(),
            ChatAction::ReplyArrived { turn_id, reply } => {
                self.complete(turn_id, reply);
                None
            }
        }
    }

    fn submit(&mut self) -> Option<ChatEffect> {
        if self.is_busy() {
            log::debug!("submit ignored: a turn is already in flight");
            return None;
        }
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return None;
        }

        self.turn_counter += 1;
        let turn_id = self.turn_counter;

        let id = self.next_id();
        self.messages.push(Message::user(id, query.clone()));
        self.input.clear();
        self.phase = TurnPhase::AwaitingResponse { turn_id };
        log::debug!("turn {} started", turn_id);

        Some(ChatEffect::SendQuery { turn_id, query })
    }

    fn complete(&mut self, turn_id: u64, reply: ChatReply) {
        if self.phase != (TurnPhase::AwaitingResponse { turn_id }) {
            log::warn!("dropping reply for stale turn {}", turn_id);
            return;
        }
        if let Some(kind) = reply.failure {
            log::warn!("turn {} answered with fallback ({:?})", turn_id, kind);
        }

        let id = self.next_id();
        self.messages
            .push(Message::assistant(id, reply.text).with_jobs(reply.jobs));
        self.phase = TurnPhase::Idle;
        log::debug!("turn {} finished", turn_id);
    }

    /// Run one full turn against `client`: submit the current input, wait for
    /// the reply and append it. Returns `false` when nothing was submitted.
    pub async fn run_turn(&mut self, client: &JobClient) -> bool {
        let Some(ChatEffect::SendQuery { turn_id, query }) = self.apply(ChatAction::Submit)
        else {
            return false;
        };
        let reply = match client.send_chat_query(&query).await {
            Ok(reply) => reply,
            // submit() never yields a blank query
            Err(e) => ChatReply::fallback(self.chat.error_message.clone(), e.kind()),
        };
        self.apply(ChatAction::ReplyArrived { turn_id, reply });
        true
    }

    /// Start over with only the welcome message
    pub fn reset(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.phase = TurnPhase::Idle;
        self.next_message_id = 1;
        self.push_welcome();
    }

    /// Start over under a new config. Turn ids keep counting up, so replies
    /// for turns issued before the restart are still recognised as stale.
    pub fn restart(&mut self, config: &AppConfig) {
        self.chat = config.chat.clone();
        self.max_input_chars = config.ui.max_message_length;
        self.reset();
    }

    fn push_welcome(&mut self) {
        let id = self.next_id();
        self.messages
            .push(Message::assistant(id, self.chat.welcome_message.clone()));
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}
