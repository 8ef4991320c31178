use std::fs::File;
use std::io::{prelude::*, stdin, stdout, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tagfreq::{Tag, TagDictionary};

#[derive(Parser, Debug)]
#[command(
    name = "predict_tags",
    about = "A program to assign the most frequent tag to each word."
)]
struct Args {
    /// The model file to use when tagging text
    #[arg(long)]
    model: PathBuf,

    /// The tag to print for words without a most frequent tag. The bare word is printed if this
    /// is not given.
    #[arg(long)]
    unk_tag: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(File::open(args.model)?)?;
    let dict = TagDictionary::read(&mut f)?;

    eprintln!("Start tagging");
    let mut n_tokens = 0;
    let mut out = BufWriter::new(stdout().lock());
    let start = Instant::now();
    for line in stdin().lock().lines() {
        let line = line?;
        let mut toks = vec![];
        for word in line.split_whitespace() {
            let tok = match (dict.first_tag(word), &args.unk_tag) {
                (Some(Tag::Text(tag)), _) => format!("{word}/{tag}"),
                (_, Some(unk)) => format!("{word}/{unk}"),
                (_, None) => word.to_string(),
            };
            toks.push(tok);
        }
        n_tokens += toks.len();
        writeln!(out, "{}", toks.join(" "))?;
    }
    out.flush()?;
    let duration = start.elapsed();
    eprintln!("Elapsed: {} [sec]", duration.as_secs_f64());
    eprintln!(
        "Speed: {} [tokens/sec]",
        n_tokens as f64 / duration.as_secs_f64()
    );

    Ok(())
}
