//! Reading word lists into the store.

use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::bundled;
use crate::words::{parse, WordPair, WordStore};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no bundled word list named '{name}'")]
    UnknownList { name: String },
}

/// Invalid UTF-8 is decoded with replacement characters rather than rejected.
pub fn read_word_file(path: &Path) -> Result<Vec<WordPair>, UploadError> {
    let bytes = fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&String::from_utf8_lossy(&bytes)))
}

/// Replaces the store's list with the pairs from `path`.
///
/// The store is left as it was if the file cannot be read.
pub fn upload_file(store: &WordStore, path: &Path) -> Result<usize, UploadError> {
    let words = read_word_file(path).inspect_err(|err| tracing::warn!(%err, "upload failed"))?;
    Ok(store_words(store, words, &path.display().to_string()))
}

pub fn upload_bundled(store: &WordStore, name: &str) -> Result<usize, UploadError> {
    let text = bundled::get(name).ok_or_else(|| UploadError::UnknownList {
        name: name.to_string(),
    })?;
    Ok(store_words(store, parse(text), name))
}

fn store_words(store: &WordStore, words: Vec<WordPair>, origin: &str) -> usize {
    store.set_words(words);
    let count = store.len();
    tracing::info!(origin, count, "word list uploaded");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn temp_words(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn uploads_file_into_store() {
        let file = temp_words("cat - кот\nnoise\ndog - собака\n".as_bytes());
        let store = WordStore::new();
        let count = upload_file(&store, file.path()).expect("upload");
        assert_eq!(count, 2);
        assert_eq!(
            &*store.words(),
            &[WordPair::new("cat", "кот"), WordPair::new("dog", "собака")]
        );
    }

    #[test]
    fn missing_file_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let store = WordStore::new();
        store.set_words(vec![WordPair::new("a", "b")]);
        let err = upload_file(&store, &dir.path().join("none.txt")).unwrap_err();
        assert!(matches!(err, UploadError::Read { .. }));
        assert_eq!(&*store.words(), &[WordPair::new("a", "b")]);
    }

    #[test]
    fn invalid_utf8_keeps_good_lines() {
        let file = temp_words(b"cat - kot\ncaf\xe9 - kafe\ndog - sobaka\n");
        let store = WordStore::new();
        assert_eq!(upload_file(&store, file.path()).expect("upload"), 3);
        let words = store.words();
        assert_eq!(words[0], WordPair::new("cat", "kot"));
        assert_eq!(words[1], WordPair::new("caf\u{FFFD}", "kafe"));
        assert_eq!(words[2], WordPair::new("dog", "sobaka"));
    }

    #[test]
    fn empty_file_clears_store() {
        let file = temp_words(b"");
        let store = WordStore::new();
        store.set_words(vec![WordPair::new("a", "b")]);
        assert_eq!(upload_file(&store, file.path()).expect("upload"), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn last_upload_wins() {
        let store = WordStore::new();
        upload_bundled(&store, "en-ru").expect("en-ru");
        upload_bundled(&store, "en-de").expect("en-de");
        assert_eq!(store.words()[0], WordPair::new("cat", "Katze"));
    }

    #[test]
    fn unknown_bundled_list() {
        let store = WordStore::new();
        let err = upload_bundled(&store, "xx-yy").unwrap_err();
        assert_eq!(err.to_string(), "no bundled word list named 'xx-yy'");
        assert!(store.is_empty());
    }
}
