use clap::Parser;
use helix_text::{CodonTable, TableRegistry, decode, encode, encode_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "helix-text")]
#[command(version)]
#[command(
    about = "Reversible text to DNA translator using amino-acid reverse translation",
    long_about = None
)]
struct Cli {
    /// Text to encode, or DNA sequence to decode (reads from stdin if not provided)
    #[arg(value_name = "SEQUENCE")]
    sequence: Option<String>,

    /// Reverse translation: decode a DNA sequence back to text
    #[arg(short, long)]
    reverse: bool,

    /// Codon table to use
    #[arg(short, long, default_value = "standard")]
    table: String,

    /// Seed for codon selection (reproducible encoding)
    #[arg(long)]
    seed: Option<u64>,

    /// List available codon tables
    #[arg(short, long)]
    list: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load codon tables with user overrides
    let registry = TableRegistry::load_with_overrides()?;

    // Handle list command
    if cli.list {
        println!("Available codon tables:\n");
        let mut tables: Vec<_> = registry.tables.iter().collect();
        tables.sort_by_key(|(name, _)| *name);

        for (name, config) in tables {
            match CodonTable::from_config(config) {
                Ok(table) => {
                    let preview: String = table.symbols().into_iter().take(20).collect();
                    let suffix = if table.symbol_count() > 20 { "..." } else { "" };
                    println!(
                        "  {:<15} {:>3} symbols {:>4} codons  {}{}",
                        name,
                        table.symbol_count(),
                        table.codon_count(),
                        preview,
                        suffix
                    );
                }
                Err(e) => println!("  {:<15} (invalid: {})", name, e),
            }
        }
        return Ok(());
    }

    let table_config = registry.get_table(&cli.table).ok_or_else(|| {
        format!(
            "Table '{}' not found. Use --list to see available tables.",
            cli.table
        )
    })?;
    let table = CodonTable::from_config(table_config)
        .map_err(|e| format!("Invalid codon table '{}': {}", cli.table, e))?;

    // Read input
    let sequence = match cli.sequence {
        Some(sequence) => sequence,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer.trim().to_string()
        }
    };

    if cli.reverse {
        let text = decode(sequence.trim(), &table)?;
        println!("Amino Acid: {}", text);
    } else {
        let dna = match cli.seed {
            Some(seed) => encode_with(&sequence, &table, &mut StdRng::seed_from_u64(seed))?,
            None => encode(&sequence, &table)?,
        };
        println!("DNA Sequence: {}", dna);
    }

    Ok(())
}
