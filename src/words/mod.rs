use serde::{Deserialize, Serialize};
use std::{cell::RefCell, rc::Rc};

mod parse;

pub use parse::parse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub source: String,
    pub target: String,
}

impl WordPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The word list shared by the upload and match screens for one session.
///
/// Replace-only: `set_words` swaps the whole list, readers get a snapshot.
#[derive(Debug)]
pub struct WordStore {
    words: RefCell<Rc<[WordPair]>>,
}

impl Default for WordStore {
    fn default() -> Self {
        Self {
            words: RefCell::new(Rc::from(Vec::new())),
        }
    }
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_words(&self, words: Vec<WordPair>) {
        *self.words.borrow_mut() = words.into();
    }

    pub fn words(&self) -> Rc<[WordPair]> {
        Rc::clone(&self.words.borrow())
    }

    pub fn len(&self) -> usize {
        self.words.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_empty() {
        let store = WordStore::new();
        assert!(store.is_empty());
        assert!(store.words().is_empty());
    }

    #[test]
    fn set_words_is_visible_to_readers() {
        let store = WordStore::new();
        store.set_words(vec![WordPair::new("a", "b")]);
        assert_eq!(&*store.words(), &[WordPair::new("a", "b")]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_words_replaces_instead_of_merging() {
        let store = WordStore::new();
        store.set_words(vec![WordPair::new("a", "b"), WordPair::new("c", "d")]);
        store.set_words(vec![WordPair::new("x", "y")]);
        assert_eq!(&*store.words(), &[WordPair::new("x", "y")]);
    }

    #[test]
    fn earlier_snapshot_keeps_old_list() {
        let store = WordStore::new();
        store.set_words(vec![WordPair::new("a", "b")]);
        let before = store.words();
        store.set_words(Vec::new());
        assert_eq!(&*before, &[WordPair::new("a", "b")]);
        assert!(store.is_empty());
    }
}
