//! # Navigation
//!
//! The interactive session is a state machine over [`Screen`]s. Each screen
//! performs its operation (if any), then shows a fixed menu; the chosen index
//! is mapped to the next screen by [`Screen::next`]. [`Navigator::run`] drives
//! the machine in a plain loop until `Exit` is reached, so long sessions do
//! not grow the call stack.
//!
//! ```text
//! MainMenu ─┬─> ListBooks(1) ──> ListBooks(p±1) | MainMenu
//!           ├─> AddBook ───────> AddBook | MainMenu
//!           ├─> DeleteBook ────> DeleteBook | MainMenu
//!           ├─> SearchMenu ────> SearchResults(field) ──> SearchMenu | MainMenu
//!           ├─> UpdateStatus ──> UpdateStatus | MainMenu
//!           └─> Exit
//! ```
//!
//! A cancelled selection leaves the navigator on the same screen: its menu is
//! shown again without repeating the operation.

use crate::api::LibraryApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::input;
use crate::model::{SearchField, SearchQuery};
use crate::presenter::Presenter;
use crate::store::DataStore;
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    ListBooks(i64),
    AddBook,
    DeleteBook,
    SearchMenu,
    SearchResults(SearchField),
    UpdateStatus,
    Exit,
}

/// Title and ordered option labels of a screen's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub options: &'static [&'static str],
}

const MAIN_MENU: Menu = Menu {
    title: "Library Management",
    options: &[
        "List books",
        "Add a book",
        "Delete a book",
        "Search books",
        "Change book status",
        "Exit",
    ],
};

const LIST_MENU: Menu = Menu {
    title: "List books",
    options: &["Next page", "Previous page", "Back to main menu"],
};

const ADD_MENU: Menu = Menu {
    title: "Add book",
    options: &["Add another book", "Back to main menu"],
};

const DELETE_MENU: Menu = Menu {
    title: "Delete book",
    options: &["Delete another book", "Back to main menu"],
};

const SEARCH_MENU: Menu = Menu {
    title: "Search books",
    options: &[
        "Search by title",
        "Search by author",
        "Search by year",
        "Back to main menu",
    ],
};

const RESULTS_MENU: Menu = Menu {
    title: "Search results",
    options: &["Search again", "Back to main menu"],
};

const STATUS_MENU: Menu = Menu {
    title: "Update book status",
    options: &["Change another book's status", "Back to main menu"],
};

impl Screen {
    /// Menu shown once the screen's operation is done. `Exit` has none.
    pub fn menu(&self) -> Option<Menu> {
        match self {
            Screen::MainMenu => Some(MAIN_MENU),
            Screen::ListBooks(_) => Some(LIST_MENU),
            Screen::AddBook => Some(ADD_MENU),
            Screen::DeleteBook => Some(DELETE_MENU),
            Screen::SearchMenu => Some(SEARCH_MENU),
            Screen::SearchResults(_) => Some(RESULTS_MENU),
            Screen::UpdateStatus => Some(STATUS_MENU),
            Screen::Exit => None,
        }
    }

    /// Transition table. `None` if `choice` is not an option of this screen.
    pub fn next(&self, choice: usize) -> Option<Screen> {
        let next = match (self, choice) {
            (Screen::MainMenu, 0) => Screen::ListBooks(1),
            (Screen::MainMenu, 1) => Screen::AddBook,
            (Screen::MainMenu, 2) => Screen::DeleteBook,
            (Screen::MainMenu, 3) => Screen::SearchMenu,
            (Screen::MainMenu, 4) => Screen::UpdateStatus,
            (Screen::MainMenu, 5) => Screen::Exit,

            (Screen::ListBooks(page), 0) => Screen::ListBooks(page.saturating_add(1)),
            (Screen::ListBooks(page), 1) => Screen::ListBooks(page.saturating_sub(1)),
            (Screen::ListBooks(_), 2) => Screen::MainMenu,

            (Screen::SearchMenu, 0) => Screen::SearchResults(SearchField::Title),
            (Screen::SearchMenu, 1) => Screen::SearchResults(SearchField::Author),
            (Screen::SearchMenu, 2) => Screen::SearchResults(SearchField::Year),
            (Screen::SearchMenu, 3) => Screen::MainMenu,

            (Screen::SearchResults(_), 0) => Screen::SearchMenu,
            (Screen::SearchResults(_), 1) => Screen::MainMenu,

            (Screen::AddBook | Screen::DeleteBook | Screen::UpdateStatus, 0) => *self,
            (Screen::AddBook | Screen::DeleteBook | Screen::UpdateStatus, 1) => Screen::MainMenu,

            _ => return None,
        };
        Some(next)
    }
}

pub struct Navigator<S: DataStore, P: Presenter> {
    api: LibraryApi<S>,
    presenter: P,
}

impl<S: DataStore, P: Presenter> Navigator<S, P> {
    pub fn new(api: LibraryApi<S>, presenter: P) -> Self {
        Self { api, presenter }
    }

    pub fn api(&self) -> &LibraryApi<S> {
        &self.api
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Drive the session from the main menu until `Exit`.
    /// Running out of input ends the session the same way.
    pub fn run(&mut self) -> Result<()> {
        let mut screen = Screen::MainMenu;
        while screen != Screen::Exit {
            debug!("entering {:?}", screen);
            screen = match self.step(screen) {
                Ok(next) => next,
                Err(LibraryError::InputClosed) => {
                    info!("input closed on {:?}, leaving", screen);
                    Screen::Exit
                }
                Err(e) if e.is_encoding() => {
                    warn!("retrying {:?}: {}", screen, e);
                    self.report(&e);
                    screen
                }
                Err(e) => return Err(e),
            };
        }
        Ok(())
    }

    /// Run one screen and return the screen to go to next.
    pub fn step(&mut self, screen: Screen) -> Result<Screen> {
        match screen {
            Screen::MainMenu => {
                self.presenter.clear();
                self.choose(screen)
            }
            Screen::SearchMenu => self.choose(screen),
            Screen::ListBooks(page) => self.list_books(page),
            Screen::AddBook => self.add_book(),
            Screen::DeleteBook => {
                let result = self.until_found("ID of the book to delete", LibraryApi::delete_book)?;
                self.presenter.show_messages(&result.messages);
                self.choose(screen)
            }
            Screen::SearchResults(field) => self.search(field),
            Screen::UpdateStatus => {
                let result = self.until_found(
                    "ID of the book to change status",
                    LibraryApi::toggle_status,
                )?;
                self.presenter.show_messages(&result.messages);
                self.choose(screen)
            }
            Screen::Exit => Ok(Screen::Exit),
        }
    }

    fn list_books(&mut self, requested: i64) -> Result<Screen> {
        self.presenter.clear();
        let result = self.api.list_books(requested)?;
        self.presenter.show_messages(&result.messages);

        let shown = match result.page {
            Some(page) => {
                let title = format!("Page {}/{}", page.current_page, page.last_page);
                self.presenter.show_books(&title, &result.listed_books);
                // Neighbours are computed from the page actually shown.
                Screen::ListBooks(page.current_page as i64)
            }
            None => Screen::ListBooks(requested),
        };
        self.choose(shown)
    }

    fn add_book(&mut self) -> Result<Screen> {
        let title = input::prompt_text(&mut self.presenter, "Book title")?;
        let author = input::prompt_text(&mut self.presenter, "Author")?;
        let year: i32 = input::prompt_integer(&mut self.presenter, "Year published")?;

        // An encoding failure re-enters this screen from the top.
        let result = self.api.add_book(title, author, year)?;
        self.presenter.show_messages(&result.messages);
        self.choose(Screen::AddBook)
    }

    fn search(&mut self, field: SearchField) -> Result<Screen> {
        let prompt = format!("Search by {}", field);
        let query = match field {
            SearchField::Title => SearchQuery::Title(input::prompt_text(&mut self.presenter, &prompt)?),
            SearchField::Author => SearchQuery::Author(input::prompt_text(&mut self.presenter, &prompt)?),
            SearchField::Year => SearchQuery::Year(input::prompt_integer(&mut self.presenter, &prompt)?),
        };

        let result = self.api.find_books(&query)?;
        if result.listed_books.is_empty() {
            self.presenter.show_messages(&result.messages);
        } else {
            self.presenter.show_books("Search results", &result.listed_books);
        }
        self.choose(Screen::SearchResults(field))
    }

    /// Ask for an id until `op` succeeds on it, reporting each miss.
    fn until_found<F>(&mut self, prompt: &str, mut op: F) -> Result<CmdResult>
    where
        F: FnMut(&mut LibraryApi<S>, i64) -> Result<CmdResult>,
    {
        loop {
            let id: i64 = input::prompt_integer(&mut self.presenter, prompt)?;
            match op(&mut self.api, id) {
                Ok(result) => return Ok(result),
                Err(e) if e.is_recoverable() => self.report(&e),
                Err(e) => return Err(e),
            }
        }
    }

    /// Show `screen`'s menu until an option is picked; return its target.
    fn choose(&mut self, screen: Screen) -> Result<Screen> {
        let Some(menu) = screen.menu() else {
            return Ok(Screen::Exit);
        };
        loop {
            match self.presenter.select(menu.title, menu.options) {
                Ok(Some(choice)) => match screen.next(choice) {
                    Some(next) => return Ok(next),
                    None => warn!("option {} is not on the {:?} menu", choice, screen),
                },
                Ok(None) => debug!("no selection on {:?}, staying", screen),
                // Undecodable answer counts as no selection; the operation is not redone.
                Err(e) if e.is_encoding() => self.report(&e),
                Err(e) => return Err(e),
            }
        }
    }

    fn report(&mut self, error: &LibraryError) {
        self.presenter
            .show_messages(&[CmdMessage::error(error.to_string())]);
    }
}
