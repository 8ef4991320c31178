use std::collections::btree_map::{BTreeMap, Entry};
use std::io::{Read, Write};

use log::debug;

use crate::errors::{Result, TagFreqError};
use crate::tag::Tag;
use crate::tag_count::TagCount;
use crate::utils;

/// Tag statistics of every word in a corpus.
///
/// Words are kept in ascending order so that serialized dictionaries are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagDictionary {
    dict: BTreeMap<String, TagCount>,
}

impl TagDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// Returns an iterator over words and their statistics in ascending word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagCount)> + '_ {
        self.dict.iter().map(|(word, tc)| (word.as_str(), tc))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.dict.keys().map(String::as_str)
    }

    pub fn get(&self, word: &str) -> Option<&TagCount> {
        self.dict.get(word)
    }

    /// Returns a mutable reference to the statistics of `word`.
    ///
    /// Counts cannot be changed through it; only the ambiguity class ID can.
    pub fn get_mut(&mut self, word: &str) -> Option<&mut TagCount> {
        self.dict.get_mut(word)
    }

    /// Inserts the statistics of `word`, returning the previous ones if any.
    pub fn insert<S>(&mut self, word: S, tag_count: TagCount) -> Option<TagCount>
    where
        S: Into<String>,
    {
        self.dict.insert(word.into(), tag_count)
    }

    /// Returns the number of occurrences of `word`, or 0 for an unknown word.
    pub fn sum(&self, word: &str) -> u64 {
        self.dict.get(word).map_or(0, TagCount::sum)
    }

    /// Returns the number of times `word` appeared with `tag`.
    pub fn count(&self, word: &str, tag: &Tag) -> u32 {
        self.dict.get(word).map_or(0, |tc| tc.get(tag))
    }

    /// Returns the most frequent tag of `word`. See [`TagCount::first_tag()`].
    pub fn first_tag(&self, word: &str) -> Option<&Tag> {
        self.dict.get(word).and_then(TagCount::first_tag)
    }

    pub fn num_tags(&self, word: &str) -> usize {
        self.dict.get(word).map_or(0, TagCount::num_tags)
    }

    /// Returns the tags `word` has had, or an empty slice for an unknown word.
    pub fn tags(&self, word: &str) -> &[Tag] {
        self.dict.get(word).map(TagCount::tags).unwrap_or(&[])
    }

    pub fn is_unknown(&self, word: &str) -> bool {
        !self.dict.contains_key(word)
    }

    pub fn ambiguity_class_id(&self, word: &str) -> Option<i32> {
        self.dict.get(word).map(TagCount::ambiguity_class_id)
    }

    /// Exports the dictionary.
    ///
    /// The number of words is written first, followed by each word and its [`TagCount`] record.
    ///
    /// # Errors
    ///
    /// Errors of [`TagCount::write()`] and of `wtr` are returned as is.
    pub fn write<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        utils::write_i32_from(&mut wtr, self.dict.len())?;
        for (word, tc) in &self.dict {
            utils::write_java_utf(&mut wtr, word)?;
            tc.write(&mut wtr)?;
        }
        debug!("wrote tag counts of {} words", self.dict.len());
        Ok(())
    }

    /// Creates a dictionary from data written by [`TagDictionary::write()`].
    ///
    /// # Errors
    ///
    /// [`TagFreqError::InvalidModel`] is returned if the data is malformed or contains the same
    /// word twice. A truncated stream results in [`TagFreqError::IOError`].
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let n_words = utils::read_non_negative_i32(&mut rdr, "number of words")?;
        let mut dict = BTreeMap::new();
        for _ in 0..n_words {
            let word = utils::read_java_utf(&mut rdr)?;
            match dict.entry(word) {
                Entry::Vacant(e) => {
                    e.insert(TagCount::read(&mut rdr)?);
                }
                Entry::Occupied(e) => {
                    return Err(TagFreqError::invalid_model(format!(
                        "duplicate word: {}",
                        e.key()
                    )));
                }
            }
        }
        debug!("read tag counts of {} words", dict.len());
        Ok(Self { dict })
    }
}

impl<S> FromIterator<(S, TagCount)> for TagDictionary
where
    S: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, TagCount)>,
    {
        Self {
            dict: iter.into_iter().map(|(w, tc)| (w.into(), tc)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dictionary() -> TagDictionary {
        [
            ("the", TagCount::from_counts([("DT", 10), ("NN", 1)])),
            ("run", TagCount::from_counts([("VB", 4), ("NN", 4)])),
            ("<s>", TagCount::from_counts([(None::<&str>, 3)])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_dictionary_queries() {
        let dict = sample_dictionary();

        assert_eq!(3, dict.len());
        assert_eq!(vec!["<s>", "run", "the"], dict.words().collect::<Vec<_>>());
        assert_eq!(11, dict.sum("the"));
        assert_eq!(10, dict.count("the", &Tag::text("DT")));
        assert_eq!(0, dict.count("the", &Tag::text("JJ")));
        assert_eq!(Some(&Tag::text("DT")), dict.first_tag("the"));
        assert_eq!(Some(&Tag::text("NN")), dict.first_tag("run"));
        assert_eq!(Some(&Tag::Absent), dict.first_tag("<s>"));
        assert_eq!(2, dict.num_tags("run"));
        assert_eq!(&[Tag::text("NN"), Tag::text("VB")], dict.tags("run"));
        assert!(!dict.is_unknown("run"));
    }

    #[test]
    fn test_dictionary_unknown_word() {
        let dict = sample_dictionary();

        assert!(dict.is_unknown("walk"));
        assert!(dict.get("walk").is_none());
        assert_eq!(0, dict.sum("walk"));
        assert_eq!(0, dict.count("walk", &Tag::text("VB")));
        assert_eq!(None, dict.first_tag("walk"));
        assert_eq!(0, dict.num_tags("walk"));
        assert!(dict.tags("walk").is_empty());
        assert_eq!(None, dict.ambiguity_class_id("walk"));
    }

    #[test]
    fn test_dictionary_ambiguity_class() {
        let mut dict = sample_dictionary();
        assert_eq!(Some(-1), dict.ambiguity_class_id("run"));

        dict.get_mut("run").unwrap().set_ambiguity_class_id(5);

        assert_eq!(Some(5), dict.ambiguity_class_id("run"));
        assert_eq!(Some(-1), dict.ambiguity_class_id("the"));
    }

    #[test]
    fn test_dictionary_insert() {
        let mut dict = TagDictionary::new();
        assert!(dict.is_empty());

        assert!(dict
            .insert("dog", TagCount::from_counts([("NN", 1)]))
            .is_none());
        let old = dict.insert("dog", TagCount::from_counts([("NN", 2)]));

        assert_eq!(Some(1), old.map(|tc| tc.get_text("NN")));
        assert_eq!(2, dict.sum("dog"));
    }

    #[test]
    fn test_dictionary_write_bytes() {
        let dict: TagDictionary = [("a", TagCount::from_counts([("DT", 1)]))]
            .into_iter()
            .collect();
        let mut buf = vec![];

        dict.write(&mut buf).unwrap();

        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 1,
            0, 1, b'a',
            0, 0, 0, 1,
            0, 2, b'D', b'T',
            0, 0, 0, 1,
        ];
        assert_eq!(expected, buf);
    }

    #[test]
    fn test_dictionary_round_trip() {
        let dict = sample_dictionary();
        let mut buf = vec![];
        dict.write(&mut buf).unwrap();

        let mut rdr = buf.as_slice();
        let result = TagDictionary::read(&mut rdr).unwrap();

        assert!(rdr.is_empty());
        assert_eq!(dict, result);
        assert_eq!(3, result.get("<s>").unwrap().get(&Tag::Absent));
    }

    #[test]
    fn test_dictionary_read_duplicate_word() {
        let tc = TagCount::from_counts([("NN", 1)]);
        let mut buf = vec![0, 0, 0, 2];
        for _ in 0..2 {
            utils::write_java_utf(&mut buf, "dog").unwrap();
            tc.write(&mut buf).unwrap();
        }

        let e = TagDictionary::read(buf.as_slice()).unwrap_err();

        assert_eq!("InvalidModelError: duplicate word: dog", e.to_string());
    }

    #[test]
    fn test_dictionary_read_truncated() {
        let dict = sample_dictionary();
        let mut buf = vec![];
        dict.write(&mut buf).unwrap();
        buf.pop();

        let e = TagDictionary::read(buf.as_slice()).unwrap_err();

        assert!(e.is_truncated());
    }

    #[test]
    fn test_dictionary_write_reserved_tag() {
        let dict: TagDictionary = [("x", TagCount::from_counts([("<<NULL>>", 1)]))]
            .into_iter()
            .collect();
        let mut buf = vec![];

        let e = dict.write(&mut buf).unwrap_err();

        assert!(matches!(e, TagFreqError::InvalidArgument(_)));
    }
}
