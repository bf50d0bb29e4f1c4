use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::table::{CODON_LEN, CodonTable};

/// Errors that can occur during translation.
#[derive(Debug, PartialEq, Eq)]
pub enum TranslateError {
    /// The text contains a character with no codon-table entry
    UnsupportedCharacter {
        char: char,
        position: usize,
        input: String,
        supported: String,
    },
    /// The sequence contains a chunk not in the inverse table
    UnsupportedCodon {
        codon: String,
        offset: usize,
        input: String,
    },
}

impl TranslateError {
    /// Create an UnsupportedCharacter error with context
    pub fn unsupported_character(c: char, position: usize, input: &str, supported: &str) -> Self {
        TranslateError::UnsupportedCharacter {
            char: c,
            position,
            input: truncate_for_display(input),
            supported: supported.to_string(),
        }
    }

    /// Create an UnsupportedCodon error with context
    pub fn unsupported_codon(codon: impl Into<String>, offset: usize, input: &str) -> Self {
        TranslateError::UnsupportedCodon {
            codon: codon.into(),
            offset,
            input: truncate_for_display(input),
        }
    }
}

/// Truncate long inputs for display
fn truncate_for_display(input: &str) -> String {
    if input.chars().count() > 60 {
        let truncated: String = input.chars().take(60).collect();
        format!("{}...", truncated)
    } else {
        input.to_string()
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            TranslateError::UnsupportedCharacter {
                char: c,
                position,
                input,
                supported,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m unsupported character '{}' at position {}",
                        c, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: unsupported character '{}' at position {}",
                        c, position
                    )?;
                }
                writeln!(f)?;

                // Show input with caret pointing at error position
                let caret_column = input.chars().take(*position).count();
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(caret_column))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m supported symbols: {}", supported)?;
                } else {
                    write!(f, "hint: supported symbols: {}", supported)?;
                }
                Ok(())
            }
            TranslateError::UnsupportedCodon {
                codon,
                offset,
                input,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m unsupported codon '{}' at offset {}",
                        codon, offset
                    )?;
                } else {
                    writeln!(f, "error: unsupported codon '{}' at offset {}", codon, offset)?;
                }
                writeln!(f)?;

                // Caret run covering the offending chunk
                let caret_column = input.chars().take(*offset).count();
                let caret_width = codon.chars().count().max(1);
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(caret_column))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m{}\x1b[0m", "^".repeat(caret_width))?;
                } else {
                    writeln!(f, "{}", "^".repeat(caret_width))?;
                }
                writeln!(f)?;

                let hint = if codon.chars().count() < CODON_LEN {
                    format!(
                        "sequence length is not a multiple of {}; '{}' is a trailing fragment",
                        CODON_LEN, codon
                    )
                } else {
                    "codons are 3 letters over ACGT plus IUPAC ambiguity codes".to_string()
                };
                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)?;
                } else {
                    write!(f, "hint: {}", hint)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for TranslateError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Encodes text as a codon sequence using the thread-local generator.
///
/// Each character is replaced by one of its codons chosen uniformly at
/// random, so repeated calls produce different sequences for the same text.
/// Use [`encode_with`] to control the random source.
///
/// # Errors
///
/// Returns [`TranslateError::UnsupportedCharacter`] for any character with no
/// table entry.
pub fn encode(text: &str, table: &CodonTable) -> Result<String, TranslateError> {
    encode_with(text, table, &mut rand::rng())
}

/// Encodes text as a codon sequence using the given random source.
///
/// Seeding the generator makes the output reproducible.
pub fn encode_with<R: Rng + ?Sized>(
    text: &str,
    table: &CodonTable,
    rng: &mut R,
) -> Result<String, TranslateError> {
    let mut sequence = String::with_capacity(text.len() * CODON_LEN);

    for (position, c) in text.chars().enumerate() {
        let codons = table.codons_for(c.to_ascii_uppercase()).ok_or_else(|| {
            let supported: String = table.symbols().into_iter().collect();
            TranslateError::unsupported_character(c, position, text, &supported)
        })?;
        // Codon lists are validated non-empty at table construction
        sequence.push_str(codons.choose(rng).unwrap());
    }

    Ok(sequence)
}

/// Decodes a codon sequence back to text.
///
/// The sequence is split into consecutive 3-character chunks; a trailing
/// chunk shorter than a codon is looked up as-is and fails rather than being
/// padded.
///
/// # Errors
///
/// Returns [`TranslateError::UnsupportedCodon`] for any chunk not in the
/// inverse table.
pub fn decode(sequence: &str, table: &CodonTable) -> Result<String, TranslateError> {
    let chars: Vec<char> = sequence.chars().collect();
    let mut text = String::with_capacity(chars.len() / CODON_LEN);

    for (index, chunk) in chars.chunks(CODON_LEN).enumerate() {
        let codon: String = chunk.iter().map(|c| c.to_ascii_uppercase()).collect();
        let symbol = table
            .symbol_for(&codon)
            .ok_or_else(|| TranslateError::unsupported_codon(codon, index * CODON_LEN, sequence))?;
        text.push(symbol);
    }

    Ok(text)
}
