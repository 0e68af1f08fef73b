//! Conversation orchestration: one exchange in flight at a time.
//!
//! `submit` appends the user turn, awaits the responder, then appends the
//! assistant turn. A second `submit` while an exchange is pending is rejected
//! rather than queued.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::domain::{
    conversation::{Author, ConversationLog, ConversationMessage},
    dispatcher, responses,
};

use super::contracts::{RespondError, Responder};

/// Assistant turn written when the responder fails.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again!";

/// Suggestions offered while the conversation has not started.
pub const QUICK_PROMPTS: [&str; 4] = [
    "Help me prepare for Google interview",
    "Top coding questions for FAANG",
    "System design interview tips",
    "Behavioral interview preparation",
];

/// Answers from the static keyword table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

#[async_trait]
impl Responder for KeywordResponder {
    async fn respond(&self, input: &str) -> Result<String, RespondError> {
        Ok(dispatcher::classify_and_respond(input).to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyInput,
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed,
    Ignored(IgnoreReason),
}

pub struct ConversationOrchestrator<R>
where
    R: Responder,
{
    responder: R,
    log: RefCell<ConversationLog>,
    in_flight: Cell<bool>,
    greeting: bool,
}

impl<R> ConversationOrchestrator<R>
where
    R: Responder,
{
    pub fn new(responder: R) -> Self {
        Self {
            responder,
            log: RefCell::new(ConversationLog::default()),
            in_flight: Cell::new(false),
            greeting: false,
        }
    }

    /// Starts the conversation with the assistant greeting turn.
    pub fn with_greeting(responder: R) -> Self {
        let orchestrator = Self {
            greeting: true,
            ..Self::new(responder)
        };
        orchestrator.seed_greeting();
        orchestrator
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub fn messages(&self) -> Vec<ConversationMessage> {
        self.log.borrow().messages().to_vec()
    }

    pub fn last_message(&self) -> Option<ConversationMessage> {
        self.log.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    pub fn shows_quick_prompts(&self) -> bool {
        self.len() <= 1
    }

    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
        }

        if self.in_flight.get() {
            tracing::debug!("submission ignored while another exchange is in flight");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        }

        self.log.borrow_mut().push(Author::User, text);
        let _in_flight = InFlightGuard::engage(&self.in_flight);

        let reply = match self.responder.respond(text).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::error!(error = %error, "responder failed; writing fallback reply");
                FALLBACK_REPLY.to_owned()
            }
        };

        let reply_id = self.log.borrow_mut().push(Author::Assistant, reply);
        tracing::debug!(message_id = %reply_id, "assistant turn appended");
        SubmitOutcome::Completed
    }

    /// Clears the log. Refused while an exchange is in flight.
    pub fn reset(&self) -> bool {
        if self.in_flight.get() {
            return false;
        }

        self.log.borrow_mut().clear();
        if self.greeting {
            self.seed_greeting();
        }
        true
    }

    fn seed_greeting(&self) {
        self.log
            .borrow_mut()
            .push(Author::Assistant, responses::GREETING);
    }
}

struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InFlightGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
