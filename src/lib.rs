mod config;
mod table;
mod translate;

pub use config::{TableConfig, TableRegistry};
pub use table::{CODON_LEN, CodonTable};
pub use translate::{TranslateError, decode, encode, encode_with};

#[cfg(test)]
mod tests;
