//! core::tokenizer
//!
//! Splits a raw command line into argument tokens.
//!
//! # Escaping
//!
//! Tokens are separated by whitespace. A backslash directly before a
//! whitespace character escapes it: the backslash is dropped and the
//! whitespace becomes part of the token. Any other backslash is kept as is.
//!
//! ```
//! use dirshell::core::tokenizer::tokenize;
//!
//! let tokens = tokenize(r"touch my\ notes.txt");
//! assert_eq!(tokens.as_slice(), &["touch", "my notes.txt"]);
//! ```

use crate::core::list::OrderedList;

/// Tokenize one input line.
///
/// Runs of unescaped whitespace never produce empty tokens. An empty or
/// whitespace-only line yields an empty list.
pub fn tokenize(line: &str) -> OrderedList<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = OrderedList::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let escaped = i > 0 && chars[i - 1] == '\\';

        if c.is_whitespace() && !escaped {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            continue;
        }

        let escapes_next = c == '\\' && chars.get(i + 1).is_some_and(|n| n.is_whitespace());
        if !escapes_next {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
