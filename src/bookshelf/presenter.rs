//! The seam between the core and whatever draws the screen.
//!
//! The navigation controller never touches stdin or stdout. It asks a
//! [`Presenter`] to pick from a menu, read a line, and show messages or a
//! table of books. The binary provides a terminal implementation; tests use
//! [`fixtures::ScriptedPresenter`].

use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::Book;

pub trait Presenter {
    /// Zero-based index of the chosen option, or `None` if the user backed out.
    /// Fails with `InputClosed` once input is exhausted.
    fn select(&mut self, title: &str, options: &[&str]) -> Result<Option<usize>>;

    /// One raw line of input, without the trailing newline.
    /// Fails with `InputClosed` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn show_messages(&mut self, messages: &[CmdMessage]);

    fn show_books(&mut self, title: &str, books: &[Book]);

    /// Called when a new screen is entered.
    fn clear(&mut self) {}
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::LibraryError;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Input {
        Choice(Option<usize>),
        Line(String),
        /// Bytes that are not valid UTF-8.
        Undecodable(Vec<u8>),
    }

    /// Everything the controller asked the presenter to show, in order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Shown {
        Menu(String),
        Prompt(String),
        Message(CmdMessage),
        Table { title: String, ids: Vec<u32> },
        Clear,
    }

    /// Presenter that replays a fixed script of inputs and records output.
    #[derive(Debug, Default)]
    pub struct ScriptedPresenter {
        inputs: VecDeque<Input>,
        pub shown: Vec<Shown>,
    }

    impl ScriptedPresenter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn choose(mut self, index: usize) -> Self {
            self.inputs.push_back(Input::Choice(Some(index)));
            self
        }

        pub fn cancel(mut self) -> Self {
            self.inputs.push_back(Input::Choice(None));
            self
        }

        pub fn type_line(mut self, line: &str) -> Self {
            self.inputs.push_back(Input::Line(line.to_string()));
            self
        }

        pub fn type_bytes(mut self, bytes: &[u8]) -> Self {
            self.inputs.push_back(Input::Undecodable(bytes.to_vec()));
            self
        }

        pub fn remaining(&self) -> usize {
            self.inputs.len()
        }

        pub fn messages(&self) -> Vec<&CmdMessage> {
            self.shown
                .iter()
                .filter_map(|s| match s {
                    Shown::Message(m) => Some(m),
                    _ => None,
                })
                .collect()
        }

        pub fn menus(&self) -> Vec<&str> {
            self.shown
                .iter()
                .filter_map(|s| match s {
                    Shown::Menu(title) => Some(title.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn tables(&self) -> Vec<(&str, &[u32])> {
            self.shown
                .iter()
                .filter_map(|s| match s {
                    Shown::Table { title, ids } => Some((title.as_str(), ids.as_slice())),
                    _ => None,
                })
                .collect()
        }
    }

    impl Presenter for ScriptedPresenter {
        fn select(&mut self, title: &str, _options: &[&str]) -> Result<Option<usize>> {
            self.shown.push(Shown::Menu(title.to_string()));
            match self.inputs.pop_front() {
                Some(Input::Choice(choice)) => Ok(choice),
                Some(Input::Undecodable(bytes)) => decode(bytes).map(|_| None),
                Some(other) => panic!("menu {:?} expected a choice, script had {:?}", title, other),
                None => Err(LibraryError::InputClosed),
            }
        }

        fn read_line(&mut self, prompt: &str) -> Result<String> {
            self.shown.push(Shown::Prompt(prompt.to_string()));
            match self.inputs.pop_front() {
                Some(Input::Line(line)) => Ok(line),
                Some(Input::Undecodable(bytes)) => decode(bytes),
                Some(other) => panic!("prompt {:?} expected a line, script had {:?}", prompt, other),
                None => Err(LibraryError::InputClosed),
            }
        }

        fn show_messages(&mut self, messages: &[CmdMessage]) {
            self.shown
                .extend(messages.iter().cloned().map(Shown::Message));
        }

        fn show_books(&mut self, title: &str, books: &[Book]) {
            self.shown.push(Shown::Table {
                title: title.to_string(),
                ids: books.iter().map(|b| b.id).collect(),
            });
        }

        fn clear(&mut self) {
            self.shown.push(Shown::Clear);
        }
    }

    fn decode(bytes: Vec<u8>) -> Result<String> {
        Ok(String::from_utf8(bytes)?)
    }
}
