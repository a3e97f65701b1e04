//! # Flow Right Sample
//!
//! Composes `to_upper`, `first` and `reverse` right-to-left and applies the
//! result to a list of words, so `one two three` becomes `THREE`.

#![forbid(unsafe_code)]

use std::io::Write;

use flowright::compose::lift;
use flowright::sequence::{EmptySequenceError, first, reverse, to_upper};
use flowright::try_compose;
use thiserror::Error;

/// Words used when none are given on the command line.
pub const DEFAULT_WORDS: [&str; 3] = ["one", "two", "three"];

/// Errors of the sample application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SampleError {
    /// No words to take the last one from.
    #[error("no words given: {0}")]
    NoWords(#[from] EmptySequenceError),

    /// The result could not be written.
    #[error("failed to write the result: {0}")]
    Output(std::io::ErrorKind),
}

impl From<std::io::Error> for SampleError {
    fn from(error: std::io::Error) -> Self {
        Self::Output(error.kind())
    }
}

/// Process exit status for a successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit status for a failed run.
pub const EXIT_FAILURE: u8 = 1;

/// Returns the last word of `words` in uppercase.
///
/// # Errors
///
/// Returns [`SampleError::NoWords`] if `words` is empty.
///
/// # Examples
///
/// ```
/// use flow_right_sample::shout_last_word;
///
/// let words = vec!["one".to_string(), "two".to_string(), "three".to_string()];
/// assert_eq!(shout_last_word(words).unwrap(), "THREE");
/// ```
pub fn shout_last_word(words: Vec<String>) -> Result<String, SampleError> {
    let shout_last = try_compose!(lift(to_upper), first, lift(reverse));

    let word_count = words.len();
    let shouted = shout_last(words)?;
    tracing::debug!(word_count, %shouted, "composed reverse, first and to_upper");

    Ok(shouted)
}

/// Returns the words to process: `arguments` if any, [`DEFAULT_WORDS`] otherwise.
pub fn words_or_default(arguments: Vec<String>) -> Vec<String> {
    if arguments.is_empty() {
        DEFAULT_WORDS.iter().map(ToString::to_string).collect()
    } else {
        arguments
    }
}

/// Shouts the last of `arguments` (or of [`DEFAULT_WORDS`]) into `output`,
/// followed by a newline.
///
/// # Errors
///
/// Returns [`SampleError::NoWords`] if there is no word to shout and
/// [`SampleError::Output`] if writing to `output` fails.
pub fn run<W: Write>(arguments: Vec<String>, output: &mut W) -> Result<(), SampleError> {
    let words = words_or_default(arguments);
    tracing::info!(?words, "composing to_upper, first and reverse");

    let shouted = shout_last_word(words)?;
    writeln!(output, "{shouted}")?;

    Ok(())
}

/// Maps the outcome of [`run`] to a process exit status, logging failures.
pub fn exit_status(outcome: &Result<(), SampleError>) -> u8 {
    match outcome {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            tracing::error!(%error, "composition failed");
            EXIT_FAILURE
        }
    }
}
