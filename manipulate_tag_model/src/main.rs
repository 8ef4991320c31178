use std::error::Error;
use std::fs;
use std::io::{stderr, Read, Write};
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use serde::{Deserialize, Serialize};
use tagfreq::{Tag, TagCounter, TagDictionary, NULL_SYMBOL};

#[derive(Parser, Debug)]
#[command(
    name = "manipulate_tag_model",
    about = "A program to build and manipulate tag frequency models.",
    group = ArgGroup::new("input").required(true).multiple(true),
)]
struct Args {
    /// Input path of a model file
    #[arg(long, group = "input")]
    model_in: Vec<PathBuf>,

    /// Input path of a CSV file with `word,tag,count` columns. `<<NULL>>` in the tag column means
    /// no tag.
    #[arg(long, group = "input")]
    csv_in: Vec<PathBuf>,

    /// Output path of the model file
    #[arg(long)]
    model_out: Option<PathBuf>,

    /// Output the tag counts in CSV format.
    #[arg(long)]
    dump_csv: Option<PathBuf>,

    /// The number of workers for zstd (0 means multithreaded will be disabled)
    #[arg(long, default_value = "0")]
    zstd_workers: u32,
}

#[derive(Deserialize, Serialize)]
struct TagCountRecord {
    word: String,
    tag: String,
    count: u32,
}

fn read_csv<R>(rdr: R, counter: &mut TagCounter) -> Result<(), Box<dyn Error>>
where
    R: Read,
{
    let mut rdr = csv::Reader::from_reader(rdr);
    for (i, result) in rdr.deserialize().enumerate() {
        if i % 10000 == 0 {
            eprint!("# of records: {i}\r");
            stderr().flush()?;
        }
        let record: TagCountRecord = result?;
        counter.add_count(&record.word, Tag::from_wire_text(record.tag), record.count);
    }
    Ok(())
}

fn write_csv<W>(wtr: W, dict: &TagDictionary) -> Result<(), Box<dyn Error>>
where
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(wtr);
    for (word, tc) in dict.iter() {
        for (tag, count) in tc.iter() {
            if tag.is_reserved() {
                return Err(
                    format!("{word}: {NULL_SYMBOL} is reserved for the absent tag").into(),
                );
            }
            wtr.serialize(TagCountRecord {
                word: word.to_string(),
                tag: tag.wire_text().to_string(),
                count,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut counter = TagCounter::new();

    for path in args.model_in {
        eprintln!("Loading {path:?} ...");
        let mut f = zstd::Decoder::new(fs::File::open(path)?)?;
        let dict = TagDictionary::read(&mut f)?;
        counter.add_dictionary(&dict);
        eprintln!("# of words: {}", counter.len());
    }

    for path in args.csv_in {
        eprintln!("Loading {path:?} ...");
        read_csv(fs::File::open(path)?, &mut counter)?;
        eprintln!("# of words: {}", counter.len());
    }

    eprintln!("# of observations: {}", counter.num_observations());
    let dict = counter.build();

    if let Some(path) = args.dump_csv {
        eprintln!("Saving CSV file...");
        write_csv(fs::File::create(path)?, &dict)?;
    }

    if let Some(path) = args.model_out {
        eprintln!("Saving model file...");
        let mut f = zstd::Encoder::new(fs::File::create(path)?, 19)?;
        f.multithread(args.zstd_workers)?;
        dict.write(&mut f)?;
        f.finish()?;
    }

    Ok(())
}
