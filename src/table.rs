use std::collections::HashMap;

use crate::config::TableConfig;

/// Number of nucleotides per codon.
pub const CODON_LEN: usize = 3;

/// IUPAC nucleotide codes: the four bases plus the pattern letters used by
/// ambiguous table entries.
const NUCLEOTIDE_CODES: &str = "ACGTRYSWKMBDHVN";

/// A validated bidirectional codon table.
///
/// The forward direction maps one symbol (an uppercase letter) to its list of
/// interchangeable codons; the inverse direction maps each codon back to
/// exactly one symbol. Both directions are built once and never mutated.
#[derive(Debug, Clone)]
pub struct CodonTable {
    codons: HashMap<char, Vec<String>>,
    inverse: HashMap<String, char>,
}

impl CodonTable {
    /// Builds a table from symbol -> codon-list entries.
    ///
    /// Symbols and codons are normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The table is empty
    /// - A symbol is not a single ASCII letter
    /// - A codon list is empty
    /// - A codon is not exactly 3 IUPAC nucleotide codes
    /// - A codon appears under two symbols (decoding would be ambiguous)
    pub fn new(entries: &HashMap<String, Vec<String>>) -> Result<Self, String> {
        if entries.is_empty() {
            return Err("Codon table cannot be empty".to_string());
        }

        let mut codons = HashMap::new();
        let mut inverse = HashMap::new();

        for (key, list) in entries {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
                _ => return Err(format!("Symbol '{}' must be a single letter", key)),
            };

            if list.is_empty() {
                return Err(format!("Symbol '{}' has no codons", symbol));
            }

            let mut normalized = Vec::with_capacity(list.len());
            for codon in list {
                let codon = codon.to_ascii_uppercase();
                if codon.chars().count() != CODON_LEN {
                    return Err(format!(
                        "Codon '{}' for symbol '{}' must be exactly {} characters",
                        codon, symbol, CODON_LEN
                    ));
                }
                if let Some(c) = codon.chars().find(|c| !NUCLEOTIDE_CODES.contains(*c)) {
                    return Err(format!(
                        "Codon '{}' for symbol '{}' contains '{}', not a nucleotide code",
                        codon, symbol, c
                    ));
                }
                if let Some(previous) = inverse.insert(codon.clone(), symbol) {
                    return Err(format!(
                        "Codon '{}' maps to both '{}' and '{}'",
                        codon, previous, symbol
                    ));
                }
                normalized.push(codon);
            }

            if codons.insert(symbol, normalized).is_some() {
                return Err(format!("Duplicate symbol in table: {}", symbol));
            }
        }

        Ok(CodonTable { codons, inverse })
    }

    /// Builds a table from a registry entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured entries fail validation, see
    /// [`CodonTable::new`].
    pub fn from_config(config: &TableConfig) -> Result<Self, String> {
        Self::new(&config.symbols)
    }

    /// Returns the codon list for a symbol, or `None` if the symbol is not in
    /// the table.
    pub fn codons_for(&self, symbol: char) -> Option<&[String]> {
        self.codons.get(&symbol).map(Vec::as_slice)
    }

    /// Returns the symbol a codon decodes to, or `None` if the codon is not in
    /// the inverse table.
    pub fn symbol_for(&self, codon: &str) -> Option<char> {
        self.inverse.get(codon).copied()
    }

    /// Returns the table's symbols in sorted order.
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.codons.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    /// Number of symbols in the table.
    pub fn symbol_count(&self) -> usize {
        self.codons.len()
    }

    /// Total number of codons across all symbols.
    pub fn codon_count(&self) -> usize {
        self.inverse.len()
    }
}
