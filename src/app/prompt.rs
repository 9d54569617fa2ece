use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter an animal: ";

/// Asks for an animal name on `output` and reads one line from `input`.
///
/// Surrounding whitespace is dropped; an empty answer comes back empty and
/// is rejected by the caller.
pub fn read_search_term<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_and_trims_one_line() {
        let mut shown = Vec::new();
        let term = read_search_term(Cursor::new("  red fox \nignored\n"), &mut shown).unwrap();

        assert_eq!(term, "red fox");
        assert_eq!(String::from_utf8(shown).unwrap(), PROMPT);
    }

    #[test]
    fn test_closed_input_yields_empty_term() {
        let term = read_search_term(Cursor::new(""), Vec::new()).unwrap();
        assert!(term.is_empty());
    }
}
