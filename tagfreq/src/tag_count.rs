use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;
use std::io::{Read, Write};

use crate::errors::{Result, TagFreqError};
use crate::tag::{Tag, NULL_SYMBOL};
use crate::utils;

/// Ambiguity class ID of a word that has not been assigned to a class.
pub const UNASSIGNED_AMBIGUITY_CLASS: i32 = -1;

/// Numbers of times a word appeared with each tag.
///
/// The counts are fixed once the object is built. The total and the tag list are computed at that
/// point and never refreshed, so every query is a plain read.
///
/// Tags are kept in ascending [`Tag`] order. This order is used by [`TagCount::tags()`], by
/// [`TagCount::write()`], and to break ties in [`TagCount::first_tag()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagCount {
    counts: BTreeMap<Tag, u32>,
    tags: Vec<Tag>,
    sum: u64,
    ambiguity_class_id: i32,
}

impl Default for TagCount {
    fn default() -> Self {
        Self::from_map(BTreeMap::new())
    }
}

impl TagCount {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an object from pairs of a tag and its count.
    ///
    /// Counts given for the same tag more than once are added together. Tags with a count of zero
    /// are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagfreq::{Tag, TagCount};
    ///
    /// let tc = TagCount::from_counts([("DT", 10), ("NN", 1)]);
    ///
    /// assert_eq!(11, tc.sum());
    /// assert_eq!(Some(&Tag::text("DT")), tc.first_tag());
    /// ```
    pub fn from_counts<I, T>(counts: I) -> Self
    where
        I: IntoIterator<Item = (T, u32)>,
        T: Into<Tag>,
    {
        let mut map = BTreeMap::new();
        for (tag, count) in counts {
            let c = map.entry(tag.into()).or_insert(0u32);
            *c = c.saturating_add(count);
        }
        Self::from_map(map)
    }

    fn from_map(counts: BTreeMap<Tag, u32>) -> Self {
        let tags = counts.keys().cloned().collect();
        let sum = counts.values().map(|&c| u64::from(c)).sum();
        Self {
            counts,
            tags,
            sum,
            ambiguity_class_id: UNASSIGNED_AMBIGUITY_CLASS,
        }
    }

    /// Returns the number of total occurrences of the word.
    pub const fn sum(&self) -> u64 {
        self.sum
    }

    /// Returns the number of occurrences with `tag`, or 0 if the word never had it.
    pub fn get(&self, tag: &Tag) -> u32 {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Same as [`TagCount::get()`] for a text tag.
    pub fn get_text(&self, tag: &str) -> u32 {
        self.get(&Tag::text(tag))
    }

    /// Returns the number of distinct tags.
    pub fn num_tags(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the tags the word has had.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns an iterator over tags and their counts in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, u32)> + '_ {
        self.counts.iter().map(|(tag, &count)| (tag, count))
    }

    /// Returns the most frequent tag.
    ///
    /// When several tags share the highest count, the smallest one in [`Tag`] order wins.
    /// `None` is returned if no tag has a positive count, including when the object is empty.
    /// [`Tag::Absent`] is returned as `Some` when it is the most frequent tag.
    pub fn first_tag(&self) -> Option<&Tag> {
        let mut max_tag = None;
        let mut max = 0;
        for (tag, &count) in &self.counts {
            if count > max {
                max_tag = Some(tag);
                max = count;
            }
        }
        max_tag
    }

    pub const fn ambiguity_class_id(&self) -> i32 {
        self.ambiguity_class_id
    }

    /// Sets the ambiguity class ID. The value is neither validated nor serialized.
    pub fn set_ambiguity_class_id(&mut self, id: i32) {
        self.ambiguity_class_id = id;
    }

    /// Exports the counts at the current position of `wtr`.
    ///
    /// The stream is not flushed, so that more records can follow.
    ///
    /// # Errors
    ///
    /// [`TagFreqError::InvalidArgument`] is returned without writing anything if a text tag is
    /// equal to [`NULL_SYMBOL`]. [`TagFreqError::CastError`] is returned without writing anything
    /// if a count exceeds `i32::MAX`. Errors from `wtr` are returned as is, and the record may be
    /// partially written in that case.
    pub fn write<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        for (tag, &count) in &self.counts {
            if tag.is_reserved() {
                return Err(TagFreqError::invalid_argument(
                    "tag",
                    format!("{NULL_SYMBOL} is reserved for the absent tag"),
                ));
            }
            i32::try_from(count)?;
        }
        utils::write_i32_from(&mut wtr, self.counts.len())?;
        for (tag, &count) in &self.counts {
            utils::write_java_utf(&mut wtr, tag.wire_text())?;
            utils::write_i32_from(&mut wtr, count)?;
        }
        Ok(())
    }

    /// Creates an object from a record written by [`TagCount::write()`].
    ///
    /// Exactly one record is consumed from `rdr`. The ambiguity class ID of the result is
    /// [`UNASSIGNED_AMBIGUITY_CLASS`].
    ///
    /// # Errors
    ///
    /// [`TagFreqError::InvalidModel`] is returned if the record contains a negative number, a
    /// malformed string, or the same tag twice. A truncated stream results in
    /// [`TagFreqError::IOError`].
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let n_tags = utils::read_non_negative_i32(&mut rdr, "number of tags")?;
        let mut counts = BTreeMap::new();
        for _ in 0..n_tags {
            let tag = Tag::from_wire_text(utils::read_java_utf(&mut rdr)?);
            let count = utils::read_non_negative_i32(&mut rdr, "tag count")?;
            match counts.entry(tag) {
                Entry::Vacant(e) => {
                    e.insert(count);
                }
                Entry::Occupied(e) => {
                    return Err(TagFreqError::invalid_model(format!(
                        "duplicate tag: {}",
                        e.key()
                    )));
                }
            }
        }
        Ok(Self::from_map(counts))
    }
}

impl<T> FromIterator<(T, u32)> for TagCount
where
    T: Into<Tag>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, u32)>,
    {
        Self::from_counts(iter)
    }
}

impl fmt::Display for TagCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (tag, count)) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tag}={count}")?;
        }
        write!(f, "}}")
    }
}
