//! Watch-list loading

use crate::config::ConfigError;
use std::fs;
use std::path::Path;

/// Ordered set of target phrases, lowercased at load so the matcher only has
/// to fold the OCR side of each comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchList {
    phrases: Vec<String>,
}

impl WatchList {
    /// Load phrases from a UTF-8 text file, one per line. Lines are trimmed
    /// and blank lines skipped; an empty result is a configuration error
    /// since the watcher would never fire.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::WatchListUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::from_phrases(raw.lines());
        if list.is_empty() {
            return Err(ConfigError::WatchListEmpty {
                path: path.to_path_buf(),
            });
        }
        Ok(list)
    }

    /// Build from in-memory phrases, applying the same folding as [`load`].
    ///
    /// [`load`]: WatchList::load
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_lowercase())
                }
            })
            .collect();
        Self { phrases }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_folds_and_skips_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watch_list.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Exalted Orb").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  DIVINE ORB  ").unwrap();

        let list = WatchList::load(&path).unwrap();
        assert_eq!(list.phrases(), ["exalted orb", "divine orb"]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = WatchList::load("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, ConfigError::WatchListUnreadable { .. }));
    }

    #[test]
    fn test_blank_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watch_list.txt");
        fs::write(&path, "\n\n  \n").unwrap();

        let err = WatchList::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::WatchListEmpty { .. }));
    }
}
