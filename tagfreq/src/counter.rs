use hashbrown::HashMap;

use crate::dictionary::TagDictionary;
use crate::tag::Tag;
use crate::tag_count::TagCount;

/// Accumulator of (word, tag) observations.
#[derive(Debug, Default)]
pub struct TagCounter {
    counts: HashMap<String, HashMap<Tag, u32>>,
}

impl TagCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn word_counts(&mut self, word: &str) -> &mut HashMap<Tag, u32> {
        self.counts
            .raw_entry_mut()
            .from_key(word)
            .or_insert_with(|| (word.to_string(), HashMap::new()))
            .1
    }

    /// Records one occurrence of `word` with `tag`.
    pub fn add<T>(&mut self, word: &str, tag: T)
    where
        T: Into<Tag>,
    {
        self.add_count(word, tag, 1);
    }

    /// Records `count` occurrences of `word` with `tag`. Counts saturate at `u32::MAX`.
    pub fn add_count<T>(&mut self, word: &str, tag: T, count: u32)
    where
        T: Into<Tag>,
    {
        let c = self.word_counts(word).entry(tag.into()).or_insert(0);
        *c = c.saturating_add(count);
    }

    /// Adds all counts of an existing [`TagCount`] to `word`.
    pub fn add_tag_count(&mut self, word: &str, tag_count: &TagCount) {
        let counts = self.word_counts(word);
        for (tag, count) in tag_count.iter() {
            let c = counts.entry(tag.clone()).or_insert(0);
            *c = c.saturating_add(count);
        }
    }

    /// Adds every entry of `dict`.
    pub fn add_dictionary(&mut self, dict: &TagDictionary) {
        for (word, tc) in dict.iter() {
            self.add_tag_count(word, tc);
        }
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the number of observations recorded so far.
    pub fn num_observations(&self) -> u64 {
        self.counts
            .values()
            .flat_map(|counts| counts.values())
            .map(|&c| u64::from(c))
            .sum()
    }

    /// Builds a dictionary with one [`TagCount`] per word.
    pub fn build(self) -> TagDictionary {
        self.counts
            .into_iter()
            .map(|(word, counts)| (word, TagCount::from_counts(counts)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_build() {
        let mut counter = TagCounter::new();
        for _ in 0..10 {
            counter.add("the", "DT");
        }
        counter.add("the", "NN");
        counter.add_count("run", "VB", 3);
        counter.add("run", Tag::Absent);
        counter.add("run", None::<String>);

        assert_eq!(2, counter.len());
        assert_eq!(16, counter.num_observations());

        let dict = counter.build();

        assert_eq!(11, dict.sum("the"));
        assert_eq!(Some(&Tag::text("DT")), dict.first_tag("the"));
        assert_eq!(2, dict.count("run", &Tag::Absent));
        assert_eq!(3, dict.count("run", &Tag::text("VB")));
    }

    #[test]
    fn test_counter_saturates() {
        let mut counter = TagCounter::new();
        counter.add_count("a", "DT", u32::MAX);
        counter.add("a", "DT");

        let dict = counter.build();

        assert_eq!(u32::MAX, dict.count("a", &Tag::text("DT")));
    }

    #[test]
    fn test_counter_add_dictionary() {
        let dict: TagDictionary = [
            ("the", TagCount::from_counts([("DT", 10)])),
            ("empty", TagCount::new()),
        ]
        .into_iter()
        .collect();
        let mut counter = TagCounter::new();
        counter.add("the", "DT");
        counter.add("the", "NN");

        counter.add_dictionary(&dict);
        let result = counter.build();

        assert_eq!(12, result.sum("the"));
        assert_eq!(11, result.count("the", &Tag::text("DT")));
        assert!(!result.is_unknown("empty"));
        assert_eq!(0, result.num_tags("empty"));
    }

    #[test]
    fn test_counter_empty() {
        let counter = TagCounter::new();

        assert!(counter.is_empty());
        assert_eq!(0, counter.num_observations());
        assert!(counter.build().is_empty());
    }
}
