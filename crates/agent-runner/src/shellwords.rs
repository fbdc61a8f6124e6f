//! Shell-word splitting for command strings.
//!
//! Splits a command string into an argument vector using shell quoting
//! rules: single quotes are literal, double quotes group with backslash
//! escapes, and a backslash outside quotes escapes the next character.
//! No shell is interposed, so there is no globbing, variable substitution,
//! piping, or redirection; the resulting tokens are handed directly to the
//! OS as the child's argv.

use thiserror::Error;

/// Failure to split a command string into words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// A single or double quote was opened but never closed
    #[error("unclosed quote in command")]
    UnclosedQuote,
    /// The command string ends with an unfinished backslash escape
    #[error("trailing escape character in command")]
    TrailingEscape,
}

/// Split `input` into shell words.
///
/// Returns an empty vector for an empty or all-whitespace input.
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut current = String::new();
    // `in_word` distinguishes "no token yet" from an empty quoted token
    // such as ''.
    let mut in_word = false;
    let mut in_single = false;
    let mut in_double = false;

    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if in_single {
            if ch == '\'' {
                in_single = false;
            } else {
                current.push(ch);
            }
        } else if in_double {
            match ch {
                '"' => in_double = false,
                '\\' => match chars.next() {
                    Some(escaped @ ('"' | '\\' | '$' | '`')) => current.push(escaped),
                    Some(other) => {
                        current.push('\\');
                        current.push(other);
                    }
                    None => return Err(SplitError::TrailingEscape),
                },
                _ => current.push(ch),
            }
        } else {
            match ch {
                '\'' => {
                    in_single = true;
                    in_word = true;
                }
                '"' => {
                    in_double = true;
                    in_word = true;
                }
                '\\' => match chars.next() {
                    Some(escaped) => {
                        current.push(escaped);
                        in_word = true;
                    }
                    None => return Err(SplitError::TrailingEscape),
                },
                _ if ch.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                _ => {
                    current.push(ch);
                    in_word = true;
                }
            }
        }
    }

    if in_single || in_double {
        return Err(SplitError::UnclosedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        split(input).unwrap()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(words("echo hello world"), ["echo", "hello", "world"]);
        assert_eq!(words("  echo \t hello  "), ["echo", "hello"]);
    }

    #[test]
    fn empty_input_yields_no_words() {
        assert_eq!(words(""), Vec::<String>::new());
        assert_eq!(words("   "), Vec::<String>::new());
    }

    #[test]
    fn single_quotes_group_and_are_literal() {
        assert_eq!(words("sh -c 'exit 7'"), ["sh", "-c", "exit 7"]);
        assert_eq!(words(r"echo 'a \ b'"), ["echo", r"a \ b"]);
    }

    #[test]
    fn double_quotes_group_with_escapes() {
        assert_eq!(words(r#"echo "a b""#), ["echo", "a b"]);
        assert_eq!(words(r#"echo "say \"hi\"""#), ["echo", r#"say "hi""#]);
        assert_eq!(words(r#"echo "back\\slash""#), ["echo", r"back\slash"]);
    }

    #[test]
    fn backslash_escapes_outside_quotes() {
        assert_eq!(words(r"echo a\ b"), ["echo", "a b"]);
        assert_eq!(words(r"echo \'"), ["echo", "'"]);
    }

    #[test]
    fn quotes_join_with_adjacent_text() {
        assert_eq!(words("echo pre'fix'post"), ["echo", "prefixpost"]);
    }

    #[test]
    fn empty_quoted_token_is_preserved() {
        assert_eq!(words("echo '' end"), ["echo", "", "end"]);
    }

    #[test]
    fn unclosed_quote_is_an_error() {
        assert_eq!(split("echo 'oops"), Err(SplitError::UnclosedQuote));
        assert_eq!(split(r#"echo "oops"#), Err(SplitError::UnclosedQuote));
    }

    #[test]
    fn trailing_escape_is_an_error() {
        assert_eq!(split(r"echo oops\"), Err(SplitError::TrailingEscape));
    }
}
