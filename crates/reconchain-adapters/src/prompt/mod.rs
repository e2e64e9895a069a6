//! Prompt adapters.
//!
//! The interactive terminal prompt lives in the CLI crate; this module only
//! provides the scripted double used by tests and non-interactive callers.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, PoisonError},
};

use reconchain_core::{
    application::{ApplicationError, ports::Prompt},
    error::ReconResult,
};

/// Answers questions from a fixed list and records the conversation.
///
/// Running out of answers behaves like a closed stdin.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: Arc<Mutex<VecDeque<String>>>,
    transcript: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().map(Into::into).collect())),
            transcript: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every question and notice shown so far, in order.
    pub fn transcript(&self) -> Vec<String> {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, question: &str) -> ReconResult<String> {
        self.transcript
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(question.to_string());

        let answer = self
            .answers
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .pop_front();

        answer.ok_or_else(|| {
            ApplicationError::InputClosed {
                prompt: question.to_string(),
            }
            .into()
        })
    }

    fn notify(&self, message: &str) -> ReconResult<()> {
        self.transcript
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(message.to_string());
        Ok(())
    }
}
