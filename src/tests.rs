use crate::{CodonTable, TableRegistry, TranslateError, decode, encode, encode_with};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn standard_table() -> CodonTable {
    let registry = TableRegistry::load_default().unwrap();
    let config = registry.get_table("standard").unwrap();
    CodonTable::from_config(config).unwrap()
}

#[test]
fn test_encode_mat() {
    let table = standard_table();
    let mut rng = StdRng::seed_from_u64(7);

    let dna = encode_with("MAT", &table, &mut rng).unwrap();
    assert_eq!(dna.len(), 9);
    assert!(dna.starts_with("ATG"));

    let last_codon = &dna[6..];
    assert!(
        ["ACT", "ACC", "ACA", "ACG"].contains(&last_codon),
        "unexpected codon for T: {}",
        last_codon
    );

    assert_eq!(decode(&dna, &table).unwrap(), "MAT");
}

#[test]
fn test_roundtrip_full_alphabet() {
    let table = standard_table();
    let text: String = ('A'..='Z').collect();

    for seed in [0, 1, 42, u64::MAX] {
        let mut rng = StdRng::seed_from_u64(seed);
        let dna = encode_with(&text, &table, &mut rng).unwrap();
        assert_eq!(dna.len(), text.len() * 3);
        assert_eq!(decode(&dna, &table).unwrap(), text);
    }
}

#[test]
fn test_roundtrip_uppercases_input() {
    let table = standard_table();
    let mut rng = StdRng::seed_from_u64(3);

    let dna = encode_with("maestro", &table, &mut rng).unwrap();
    assert_eq!(decode(&dna, &table).unwrap(), "MAESTRO");
}

#[test]
fn test_every_codon_decodes_to_its_symbol() {
    let table = standard_table();

    for symbol in table.symbols() {
        for codon in table.codons_for(symbol).unwrap() {
            assert_eq!(
                decode(codon, &table).unwrap(),
                symbol.to_string(),
                "codon {} did not decode to {}",
                codon,
                symbol
            );
        }
    }
}

#[test]
fn test_encode_with_thread_rng() {
    let table = standard_table();
    let dna = encode("HELIX", &table).unwrap();
    assert_eq!(dna.len(), 15);
    assert_eq!(decode(&dna, &table).unwrap(), "HELIX");
}

#[test]
fn test_seeded_encoding_is_reproducible() {
    let table = standard_table();

    let mut rng1 = StdRng::seed_from_u64(99);
    let mut rng2 = StdRng::seed_from_u64(99);
    let first = encode_with("REPRODUCIBLE", &table, &mut rng1).unwrap();
    let second = encode_with("REPRODUCIBLE", &table, &mut rng2).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_encode_unsupported_character() {
    let table = standard_table();

    match encode("MAT1", &table) {
        Err(TranslateError::UnsupportedCharacter { char: c, position, .. }) => {
            assert_eq!(c, '1');
            assert_eq!(position, 3);
        }
        other => panic!("expected UnsupportedCharacter, got {:?}", other),
    }
}

#[test]
fn test_decode_unsupported_codon() {
    let table = standard_table();

    match decode("XYZ", &table) {
        Err(TranslateError::UnsupportedCodon { codon, offset, .. }) => {
            assert_eq!(codon, "XYZ");
            assert_eq!(offset, 0);
        }
        other => panic!("expected UnsupportedCodon, got {:?}", other),
    }
}

#[test]
fn test_decode_trailing_fragment_fails() {
    let table = standard_table();

    // "ATG" decodes fine, the dangling "C" does not
    match decode("ATGC", &table) {
        Err(TranslateError::UnsupportedCodon { codon, offset, .. }) => {
            assert_eq!(codon, "C");
            assert_eq!(offset, 3);
        }
        other => panic!("expected UnsupportedCodon, got {:?}", other),
    }
}

#[test]
fn test_empty_input() {
    let table = standard_table();

    assert_eq!(encode("", &table).unwrap(), "");
    assert_eq!(decode("", &table).unwrap(), "");
}

#[test]
fn test_ambiguous_symbols_roundtrip() {
    let table = standard_table();
    let mut rng = StdRng::seed_from_u64(11);

    let dna = encode_with("BJOUXZ", &table, &mut rng).unwrap();
    assert_eq!(decode(&dna, &table).unwrap(), "BJOUXZ");
}
