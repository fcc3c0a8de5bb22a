use std::path::PathBuf;

use anyhow::{Context, Result};
use article_explorer::data::model::Record;
use clap::Parser;

const SUBJECTS: [&str; 6] = [
    "Biology and life sciences",
    "Medicine and health sciences",
    "Physical sciences",
    "Social sciences",
    "Earth sciences",
    "Computer and information sciences",
];

const TOPICS: [&str; 8] = [
    "lung cancer", "gene expression", "malaria", "deep learning",
    "coral reefs", "sleep quality", "antibiotic resistance", "urban heat",
];

const SURNAMES: [&str; 10] = [
    "Chen", "Garcia", "Müller", "Okafor", "Tanaka", "Silva", "Novak", "Haddad", "Kim", "Smith",
];

const INSTITUTIONS: [&str; 5] = [
    "University of Lisbon",
    "National Taiwan University",
    "Karolinska Institutet",
    "University of Nairobi",
    "ETH Zurich",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

#[derive(Parser)]
#[command(about = "Write a sample article/author CSV for the explorer")]
struct Args {
    /// Output CSV path
    #[arg(short, long, default_value = "sample_articles.csv")]
    output: PathBuf,

    /// Number of articles to generate
    #[arg(short = 'n', long, default_value_t = 200)]
    articles: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut rows = 0;
    for article in 0..args.articles {
        // A few identifiers outside the PLOS ONE scheme have no derivable year.
        let identifier = if article % 25 == 24 {
            format!("10.5555/sample.{article:05}")
        } else {
            let year = 15 + rng.below(10);
            format!("10.1371/journal.pone.{year:02}{article:06}")
        };
        let topic = rng.pick(&TOPICS);
        let title = format!("A study of {topic} (sample {article})");
        let subjects = rng.pick(&SUBJECTS);

        // Mostly small teams, with the occasional large consortium.
        let authors = if article % 50 == 7 {
            51 + rng.below(30)
        } else {
            1 + rng.below(12)
        };
        let corresponding = rng.below(authors);

        for position in 0..authors {
            let mut roles = Vec::new();
            if position == 0 {
                roles.push("first author");
            }
            if position == corresponding {
                roles.push("corresponding author");
            }
            let record = Record {
                identifier: identifier.clone(),
                title: title.clone(),
                author: format!("{} {}.", rng.pick(&SURNAMES), (b'A' + rng.below(26) as u8) as char),
                affiliation: rng.pick(&INSTITUTIONS).to_string(),
                role: roles.join("; "),
                subjects: subjects.to_string(),
                keywords: format!("{topic}; sample data"),
                abstract_text: format!("We report a sample investigation of {topic}."),
            };
            writer.serialize(&record).context("writing sample row")?;
            rows += 1;
        }
    }

    writer.flush().context("flushing sample CSV")?;
    println!(
        "Wrote {rows} author rows for {} articles to {}",
        args.articles,
        args.output.display()
    );
    Ok(())
}
