use super::render::book_table;
use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::error::{LibraryError, Result};
use bookshelf::model::Book;
use bookshelf::presenter::Presenter;
use colored::Colorize;
use console::Term;
use log::debug;
use std::io::{self, BufRead, Write};

/// Numbered menus and line prompts on stdin/stdout.
pub struct TermPresenter {
    term: Term,
}

impl Default for TermPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl TermPresenter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut raw = Vec::new();
        if io::stdin().lock().read_until(b'\n', &mut raw)? == 0 {
            return Err(LibraryError::InputClosed);
        }
        let line = String::from_utf8(raw)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Presenter for TermPresenter {
    fn select(&mut self, title: &str, options: &[&str]) -> Result<Option<usize>> {
        println!();
        println!("{}", format!("«{}»", title).bold());
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", (i + 1).to_string().yellow(), option);
        }

        let answer = self.ask("Choose an option (q to cancel): ")?;
        Ok(parse_choice(&answer, options.len()))
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.ask(&format!("{}: ", prompt))
    }

    fn show_messages(&mut self, messages: &[CmdMessage]) {
        for message in messages {
            match message.level {
                MessageLevel::Success => println!("{}", message.content.green()),
                MessageLevel::Warning => println!("{}", message.content.yellow()),
                MessageLevel::Error => println!("{}", message.content.red()),
            }
        }
    }

    fn show_books(&mut self, title: &str, books: &[Book]) {
        println!("{}", book_table(title, books));
    }

    fn clear(&mut self) {
        if !self.term.is_term() {
            return;
        }
        if let Err(e) = self.term.clear_screen() {
            debug!("could not clear screen: {}", e);
        }
    }
}

/// 1-based menu answer to a zero-based index; anything else is no selection.
fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_one_based() {
        assert_eq!(parse_choice("1", 3), Some(0));
        assert_eq!(parse_choice(" 3 ", 3), Some(2));
    }

    #[test]
    fn anything_else_cancels() {
        assert_eq!(parse_choice("", 3), None);
        assert_eq!(parse_choice("q", 3), None);
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
    }
}
