#![cfg_attr(docsrs, feature(doc_cfg))]

//! # tagfreq
//!
//! tagfreq stores how many times each word was seen with each part-of-speech tag, and reads and
//! writes the statistics in the binary format of `java.io.DataOutputStream`.
//!
//! ## Examples
//!
//! ```
//! use tagfreq::{Tag, TagCounter, TagDictionary};
//!
//! let mut counter = TagCounter::new();
//! counter.add_count("the", "DT", 10);
//! counter.add("the", "NN");
//! let dict = counter.build();
//!
//! let mut buf = vec![];
//! dict.write(&mut buf).unwrap();
//! let dict = TagDictionary::read(buf.as_slice()).unwrap();
//!
//! assert_eq!(11, dict.sum("the"));
//! assert_eq!(Some(&Tag::text("DT")), dict.first_tag("the"));
//! ```
//!
//! A word without any applicable tag is counted with [`Tag::Absent`], which is serialized as
//! [`NULL_SYMBOL`]. The same text cannot be used as a real tag.

pub mod errors;
pub mod utils;

mod counter;
mod dictionary;
mod tag;
mod tag_count;

pub use counter::TagCounter;
pub use dictionary::TagDictionary;
pub use tag::{Tag, NULL_SYMBOL};
pub use tag_count::{TagCount, UNASSIGNED_AMBIGUITY_CLASS};
