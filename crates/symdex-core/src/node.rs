use crate::error::IndexError;

/// Number of positions addressable by the 8-bit link field.
pub const MAX_SYMBOLS: usize = u8::MAX as usize + 1;

/// Child link
/// a position in the same table, or [`Link::ABSENT`].
/// Position 0 always holds the root, so no node can link to it as a child.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link(pub(crate) u8);

impl Link {
    pub const ABSENT: Link = Link(0);

    pub const fn new(raw: u8) -> Self {
        Link(raw)
    }

    /// Link to `position`, failing when it does not fit in the link field.
    pub fn to(position: usize) -> Result<Self, IndexError> {
        u8::try_from(position)
            .map(Link)
            .map_err(|_| IndexError::TooManySymbols {
                count: position + 1,
                max: MAX_SYMBOLS,
            })
    }

    /// return raw link as u8
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_absent(self) -> bool {
        self.0 == 0
    }

    pub const fn get(self) -> Option<usize> {
        if self.is_absent() {
            None
        } else {
            Some(self.0 as usize)
        }
    }
}

/// One record of the generated table.
///
/// `S` is the text storage: `String` while generating, `&'static str` for
/// tables embedded as static data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexNode<S = String> {
    pub hash: u16,
    pub left: Link,
    pub right: Link,
    pub text: S,
}

impl<S> IndexNode<S> {
    /// Build a record from its raw fields, in emission order.
    pub const fn new(hash: u16, left: u8, right: u8, text: S) -> Self {
        Self {
            hash,
            left: Link::new(left),
            right: Link::new(right),
            text,
        }
    }

    pub(crate) fn leaf(hash: u16, text: S) -> Self {
        Self {
            hash,
            left: Link::ABSENT,
            right: Link::ABSENT,
            text,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_absent() && self.right.is_absent()
    }
}

impl<S: AsRef<str>> IndexNode<S> {
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }
}
