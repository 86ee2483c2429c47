//! Interaction scripts for replaying slideshow sessions.
//!
//! A script is a list of steps separated by commas or newlines:
//!
//! - `enter` / `leave` → pointer enters / leaves the card
//! - `next` / `prev` → arrow click
//! - `dot 3` → click the fourth dot
//! - `wait 3000` → let 3000 ms of virtual time pass
//!
//! Keywords are case-insensitive; blank steps are skipped. A single `wait`
//! is limited to [`MAX_WAIT_MS`] (one day of virtual time).
//!
//! ```text
//! enter, wait 9000, prev, wait 450, dot 0, leave
//! ```

use crate::slideshow::Interaction;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScriptError {
    #[error("Unknown step '{0}'")]
    UnknownStep(String),
    #[error("Step '{0}' needs a number")]
    MissingNumber(String),
    #[error("Invalid number in step '{0}'")]
    InvalidNumber(String),
    #[error("Step '{0}' waits longer than {max} ms", max = MAX_WAIT_MS)]
    WaitTooLong(String),
}

/// Longest virtual time one `wait` step may cover.
pub const MAX_WAIT_MS: u64 = 24 * 60 * 60 * 1000;

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Interact(Interaction),
    Wait(u64),
}

/// Parse a whole script.
pub fn parse_script(script: &str) -> Result<Vec<Step>, ScriptError> {
    script
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_step)
        .collect()
}

/// Parse a single step like `dot 2` or `wait 450`.
pub fn parse_step(step: &str) -> Result<Step, ScriptError> {
    let mut words = step.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
    let arg = words.next();
    if words.next().is_some() {
        return Err(ScriptError::UnknownStep(step.to_string()));
    }

    let number = |arg: Option<&str>| -> Result<u64, ScriptError> {
        arg.ok_or_else(|| ScriptError::MissingNumber(step.to_string()))?
            .parse()
            .map_err(|_| ScriptError::InvalidNumber(step.to_string()))
    };
    let bare = |s: Step| match arg {
        None => Ok(s),
        Some(_) => Err(ScriptError::UnknownStep(step.to_string())),
    };

    match keyword.as_str() {
        "enter" => bare(Step::Interact(Interaction::PointerEnter)),
        "leave" => bare(Step::Interact(Interaction::PointerLeave)),
        "next" => bare(Step::Interact(Interaction::NextClick)),
        "prev" => bare(Step::Interact(Interaction::PrevClick)),
        "dot" => {
            let index = usize::try_from(number(arg)?)
                .map_err(|_| ScriptError::InvalidNumber(step.to_string()))?;
            Ok(Step::Interact(Interaction::DotClick(index)))
        }
        "wait" => match number(arg)? {
            ms if ms > MAX_WAIT_MS => Err(ScriptError::WaitTooLong(step.to_string())),
            ms => Ok(Step::Wait(ms)),
        },
        _ => Err(ScriptError::UnknownStep(step.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_script() {
        let steps = parse_script("enter, wait 9000,\nprev\n, DOT 2 ,leave").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Interact(Interaction::PointerEnter),
                Step::Wait(9000),
                Step::Interact(Interaction::PrevClick),
                Step::Interact(Interaction::DotClick(2)),
                Step::Interact(Interaction::PointerLeave),
            ]
        );
    }

    #[test]
    fn empty_script_is_empty() {
        assert_eq!(parse_script(" , \n ").unwrap(), vec![]);
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(
            parse_script("enter, jump 3"),
            Err(ScriptError::UnknownStep("jump 3".to_string()))
        );
    }

    #[test]
    fn wait_needs_number() {
        assert_eq!(
            parse_step("wait"),
            Err(ScriptError::MissingNumber("wait".to_string()))
        );
        assert_eq!(
            parse_step("wait soon"),
            Err(ScriptError::InvalidNumber("wait soon".to_string()))
        );
    }

    #[test]
    fn wait_is_capped_at_one_day() {
        assert_eq!(parse_step("wait 86400000"), Ok(Step::Wait(MAX_WAIT_MS)));
        assert_eq!(
            parse_script("wait 5, wait 18446744073709551615"),
            Err(ScriptError::WaitTooLong(
                "wait 18446744073709551615".to_string()
            ))
        );
    }

    #[test]
    fn bare_steps_reject_arguments() {
        assert!(parse_step("next 2").is_err());
        assert!(parse_step("dot 1 2").is_err());
    }
}
