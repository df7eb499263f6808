use std::fmt;

/// Errors that can occur during decoding.
///
/// Every variant reports an invalid input string. All of them are raised
/// before the first byte is produced.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input string is empty
    EmptyInput,
    /// The final character is not the symbol for digit 0 or 1
    InvalidTerminator {
        char: char,
        position: usize,
        input: String,
        column: usize,
    },
    /// The input contains a character that is neither a symbol nor a separator
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        column: usize,
        valid_chars: String,
    },
    /// The decoded bytes are not valid UTF-8
    InvalidUtf8 { valid_up_to: usize },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        let (input, column) = excerpt(input, position);
        DecodeError::InvalidCharacter {
            char: c,
            position,
            input,
            column,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an InvalidTerminator error with context
    pub fn invalid_terminator(c: char, position: usize, input: &str) -> Self {
        let (input, column) = excerpt(input, position);
        DecodeError::InvalidTerminator {
            char: c,
            position,
            input,
            column,
        }
    }
}

/// Cuts long inputs down to the characters around byte offset `position`.
///
/// Returns the excerpt and the character column of `position` within it.
fn excerpt(input: &str, position: usize) -> (String, usize) {
    const BEFORE: usize = 40;
    const AFTER: usize = 20;

    let before: Vec<char> = input[..position].chars().collect();
    let after = &input[position..];

    let mut shown = String::new();
    let mut column = before.len();
    if before.len() > BEFORE {
        shown.push_str("...");
        shown.extend(&before[before.len() - BEFORE..]);
        column = 3 + BEFORE;
    } else {
        shown.extend(&before);
    }

    if after.chars().count() > AFTER {
        shown.extend(after.chars().take(AFTER));
        shown.push_str("...");
    } else {
        shown.push_str(after);
    }

    (shown, column)
}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m invalid input string: {}", message)
    } else {
        write!(f, "error: invalid input string: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

/// Show input with caret pointing at the error column
fn write_caret(
    f: &mut fmt::Formatter<'_>,
    use_color: bool,
    input: &str,
    column: usize,
) -> fmt::Result {
    writeln!(f, "  {}", input)?;
    write!(f, "  {}", " ".repeat(column))?;
    if use_color {
        writeln!(f, "\x1b[1;31m^\x1b[0m")
    } else {
        writeln!(f, "^")
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::EmptyInput => {
                write_header(f, use_color, "cannot decode empty input")?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "encoded text always ends with a terminator symbol, even for empty data",
                )
            }
            DecodeError::InvalidTerminator {
                char: c,
                position,
                input,
                column,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid terminator '{}' at position {}", c, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                write_caret(f, use_color, input, *column)?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "the last character must be the dictionary's first or second symbol; \
                     the input may be truncated",
                )
            }
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                column,
                valid_chars,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid character '{}' at position {}", c, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                write_caret(f, use_color, input, *column)?;
                writeln!(f)?;

                // Hint with valid characters (truncate if too long)
                let hint_chars = if valid_chars.chars().count() > 80 {
                    let head: String = valid_chars.chars().take(80).collect();
                    format!("{}...", head)
                } else {
                    valid_chars.clone()
                };
                write_hint(f, use_color, &format!("valid characters: {}", hint_chars))
            }
            DecodeError::InvalidUtf8 { valid_up_to } => {
                write_header(
                    f,
                    use_color,
                    &format!("decoded data is not valid UTF-8 after byte {}", valid_up_to),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(f, use_color, "decode to raw bytes instead of a string")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors raised while building a dictionary or looking one up.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary must have between 2 and 256 symbols, got {size}")]
    InvalidSize { size: usize },
    #[error("symbol '{symbol}' appears at both index {first} and index {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
    #[error("invalid character range: {0}")]
    InvalidRange(String),
    #[error(transparent)]
    NotFound(#[from] DictionaryNotFoundError),
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a dictionary is not found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl DictionaryNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for DictionaryNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m dictionary '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: dictionary '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`base-rc config list`\x1b[0m to see all dictionaries"
            )
        } else {
            write!(f, "      run `base-rc config list` to see all dictionaries")
        }
    }
}

impl std::error::Error for DictionaryNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching dictionary name
pub fn find_closest_dictionary(name: &str, available: &[String]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
