use std::path::PathBuf;

use anyhow::Result;

use crate::terminal::{TerminalFactory, TerminalOptions, TerminalSession};

use super::EditorUi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PromptCall {
    pub title: String,
    pub placeholder: String,
    pub items: Vec<String>,
}

/// Editor double with a fixed active document and a canned prompt answer.
pub(crate) struct ScriptedUi {
    active: Option<PathBuf>,
    answer: Option<String>,
    pub errors: Vec<String>,
    pub prompts: Vec<PromptCall>,
}

impl ScriptedUi {
    pub fn new(active: Option<PathBuf>) -> Self {
        Self {
            active,
            answer: None,
            errors: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn selecting(mut self, name: &str) -> Self {
        self.answer = Some(name.to_string());
        self
    }

    pub fn dismissing(mut self) -> Self {
        self.answer = None;
        self
    }
}

impl EditorUi for ScriptedUi {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn select(&mut self, title: &str, placeholder: &str, items: &[String]) -> Result<Option<String>> {
        self.prompts.push(PromptCall {
            title: title.to_string(),
            placeholder: placeholder.to_string(),
            items: items.to_vec(),
        });
        Ok(self.answer.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RecordedTerminal {
    pub options: Option<TerminalOptions>,
    pub shown: usize,
    pub sent: Vec<String>,
}

/// Terminal factory that records every session it hands out.
#[derive(Debug, Default)]
pub(crate) struct RecordingTerminals {
    pub sessions: std::rc::Rc<std::cell::RefCell<Vec<RecordedTerminal>>>,
}

impl RecordingTerminals {
    pub fn created(&self) -> Vec<RecordedTerminal> {
        self.sessions.borrow().clone()
    }
}

impl TerminalFactory for RecordingTerminals {
    fn create_terminal(&mut self, options: TerminalOptions) -> Result<Box<dyn TerminalSession>> {
        let mut sessions = self.sessions.borrow_mut();
        sessions.push(RecordedTerminal {
            options: Some(options),
            ..RecordedTerminal::default()
        });
        Ok(Box::new(RecordingSession {
            sessions: self.sessions.clone(),
            index: sessions.len() - 1,
        }))
    }
}

struct RecordingSession {
    sessions: std::rc::Rc<std::cell::RefCell<Vec<RecordedTerminal>>>,
    index: usize,
}

impl TerminalSession for RecordingSession {
    fn show(&mut self) -> Result<()> {
        self.sessions.borrow_mut()[self.index].shown += 1;
        Ok(())
    }

    fn send_text(&mut self, text: &str) -> Result<()> {
        self.sessions.borrow_mut()[self.index].sent.push(text.to_string());
        Ok(())
    }
}
