use std::fs;
use std::path::Path;

use crate::builtin::builtin_symbols;
use crate::error::VocabError;

/// An ordered list of symbol names.
///
/// Order is preserved exactly as given; it never affects the shape of the
/// generated index but does decide which name is reported first when two of
/// them collide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    names: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The runtime's built-in symbols.
    pub fn builtin() -> Self {
        builtin_symbols().collect()
    }

    /// Load a vocabulary file.
    ///
    /// `.yaml` and `.yml` files hold a sequence of strings. Any other file is
    /// read as one name per line; blank lines and lines starting with `#` are
    /// skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| VocabError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        let vocabulary = if is_yaml {
            Self::from_yaml_str(&text)?
        } else {
            Self::from_lines(&text)
        };

        tracing::debug!(
            path = %path.display(),
            symbols = vocabulary.len(),
            "loaded vocabulary"
        );
        Ok(vocabulary)
    }

    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, VocabError> {
        let names: Vec<String> = serde_yaml::from_str(text)?;
        let vocabulary = Self { names };
        vocabulary.check_names()?;
        Ok(vocabulary)
    }

    /// Reject empty names, which no runtime lookup can ask for.
    pub fn check_names(&self) -> Result<(), VocabError> {
        match self.names.iter().position(String::is_empty) {
            Some(index) => Err(VocabError::EmptyName { index }),
            None => Ok(()),
        }
    }

    pub fn append(&mut self, name: impl Into<String>) -> &mut Self {
        self.names.push(name.into());
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Vocabulary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Vocabulary {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl AsRef<[String]> for Vocabulary {
    fn as_ref(&self) -> &[String] {
        &self.names
    }
}
