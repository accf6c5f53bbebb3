//! Blocking prompt loop that only returns valid answers.
//!
//! Empty answers and, where a number is required, answers that do not parse
//! are reported through the presenter and asked again. [`InputError`] never
//! leaves this module; the only error a caller sees is `InputClosed` (or
//! whatever the presenter itself fails with).

use crate::commands::CmdMessage;
use crate::error::Result;
use crate::presenter::Presenter;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("This field cannot be empty.")]
    EmptyInput,

    #[error("This field must be a number.")]
    NotAnInteger,
}

/// Trim `raw` and reject it if empty.
pub fn validate_text(raw: &str) -> std::result::Result<String, InputError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(InputError::EmptyInput);
    }
    Ok(value.to_string())
}

/// Trim `raw`, reject it if empty, then parse it as an integer.
pub fn validate_integer<T: FromStr>(raw: &str) -> std::result::Result<T, InputError> {
    let value = validate_text(raw)?;
    value.parse().map_err(|_| InputError::NotAnInteger)
}

/// Ask until a non-empty answer is given.
pub fn prompt_text<P: Presenter + ?Sized>(presenter: &mut P, text: &str) -> Result<String> {
    ask(presenter, text, validate_text)
}

/// Ask until a non-empty answer that parses as `T` is given.
pub fn prompt_integer<T, P>(presenter: &mut P, text: &str) -> Result<T>
where
    T: FromStr,
    P: Presenter + ?Sized,
{
    ask(presenter, text, validate_integer::<T>)
}

fn ask<T, P, F>(presenter: &mut P, text: &str, validate: F) -> Result<T>
where
    P: Presenter + ?Sized,
    F: Fn(&str) -> std::result::Result<T, InputError>,
{
    loop {
        let raw = presenter.read_line(text)?;
        match validate(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => presenter.show_messages(&[CmdMessage::error(e.to_string())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraryError;
    use crate::presenter::fixtures::ScriptedPresenter;

    #[test]
    fn text_is_trimmed() {
        assert_eq!(validate_text("  Dune \n"), Ok("Dune".to_string()));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(validate_text("   "), Err(InputError::EmptyInput));
    }

    #[test]
    fn integer_checks_emptiness_first() {
        assert_eq!(validate_integer::<i64>(""), Err(InputError::EmptyInput));
        assert_eq!(validate_integer::<i64>("12a"), Err(InputError::NotAnInteger));
        assert_eq!(validate_integer::<i64>(" -4 "), Ok(-4));
    }

    #[test]
    fn out_of_range_integer_is_not_an_integer() {
        assert_eq!(
            validate_integer::<i32>("99999999999"),
            Err(InputError::NotAnInteger)
        );
    }

    #[test]
    fn reprompts_until_valid() {
        let mut presenter = ScriptedPresenter::new()
            .type_line("")
            .type_line("nineteen")
            .type_line("1999");

        let year: i32 = prompt_integer(&mut presenter, "Year").unwrap();
        assert_eq!(year, 1999);

        let errors: Vec<_> = presenter.messages().iter().map(|m| m.content.clone()).collect();
        assert_eq!(
            errors,
            vec!["This field cannot be empty.", "This field must be a number."]
        );
    }

    #[test]
    fn closed_input_ends_the_loop() {
        let mut presenter = ScriptedPresenter::new().type_line(" ");
        assert!(matches!(
            prompt_text(&mut presenter, "Title"),
            Err(LibraryError::InputClosed)
        ));
    }
}
