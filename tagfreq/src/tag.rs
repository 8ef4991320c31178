use std::fmt;

/// Text that stands for [`Tag::Absent`] in serialized records.
///
/// A real tag spelled like this cannot be stored, because it would be read back as the absent
/// tag.
pub const NULL_SYMBOL: &str = "<<NULL>>";

/// A part-of-speech tag observed for a word.
///
/// Tags are ordered with [`Tag::Absent`] first, followed by text tags in byte order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    /// No tag applies to the occurrence.
    Absent,

    /// A tag label such as `NN`.
    Text(String),
}

impl Tag {
    /// Creates a text tag.
    pub fn text<S>(tag: S) -> Self
    where
        S: Into<String>,
    {
        Self::Text(tag.into())
    }

    /// Returns the label, or `None` for the absent tag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Text(tag) => Some(tag),
        }
    }

    /// Returns the text written to serialized records.
    pub fn wire_text(&self) -> &str {
        self.as_str().unwrap_or(NULL_SYMBOL)
    }

    /// Creates a tag from serialized text, mapping [`NULL_SYMBOL`] to [`Tag::Absent`].
    pub fn from_wire_text(text: String) -> Self {
        if text == NULL_SYMBOL {
            Self::Absent
        } else {
            Self::Text(text)
        }
    }

    /// Returns `true` if this is a text tag that collides with [`NULL_SYMBOL`].
    pub fn is_reserved(&self) -> bool {
        self.as_str() == Some(NULL_SYMBOL)
    }
}

impl From<&str> for Tag {
    fn from(tag: &str) -> Self {
        Self::Text(tag.to_string())
    }
}

impl From<String> for Tag {
    fn from(tag: String) -> Self {
        Self::Text(tag)
    }
}

impl<T> From<Option<T>> for Tag
where
    T: Into<String>,
{
    fn from(tag: Option<T>) -> Self {
        tag.map_or(Self::Absent, |tag| Self::Text(tag.into()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.wire_text())
    }
}
