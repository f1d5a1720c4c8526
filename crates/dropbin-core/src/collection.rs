//! File Collection Store: the ordered list of selected files.
//!
//! A [`FileCollection`] is an immutable, cheaply clonable snapshot.
//! Every mutation builds a new collection instead of editing the shared
//! storage, so consumers can detect changes by identity
//! ([`FileCollection::ptr_eq`]) and a snapshot handed to an in-flight
//! upload is never affected by later edits.

use std::fmt;
use std::rc::Rc;

/// Errors from collection mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// `remove` was called with an index past the end.
    ///
    /// The UI only passes indices from its own render loop, so this
    /// signals a caller bug.
    #[error("index {index} out of range for collection of {len} files")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },

    /// The selection was edited while a submission of it is in flight.
    #[error("selection is locked while a submission is pending")]
    SubmissionPending,
}

/// Insertion-ordered sequence of selected files.
///
/// Keys are positional. Equality is identity: two collections compare
/// equal only when they share the same storage.
pub struct FileCollection<F> {
    files: Rc<[F]>,
}

impl<F> FileCollection<F> {
    /// An empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            files: Rc::from(Vec::new()),
        }
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no file is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The file at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&F> {
        self.files.get(index)
    }

    /// All files in arrival order.
    #[must_use]
    pub fn as_slice(&self) -> &[F] {
        &self.files
    }

    /// Iterate over the files in arrival order.
    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.files.iter()
    }

    /// Whether both collections share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.files, &other.files)
    }
}

impl<F: Clone> FileCollection<F> {
    /// Append `new_files` after the existing ones.
    ///
    /// No de-duplication: adding the same file twice yields two entries.
    #[must_use]
    pub fn add(&self, new_files: impl IntoIterator<Item = F>) -> Self {
        let files: Vec<F> = self.files.iter().cloned().chain(new_files).collect();
        Self::from(files)
    }

    /// Remove the file at `index`, shifting later files left by one.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] when `index >= len`.
    pub fn remove(&self, index: usize) -> Result<Self, CollectionError> {
        if index >= self.files.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.files.len(),
            });
        }
        let files: Vec<F> = self
            .files
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, f)| f.clone())
            .collect();
        Ok(Self::from(files))
    }
}

impl<F> From<Vec<F>> for FileCollection<F> {
    fn from(files: Vec<F>) -> Self {
        Self {
            files: Rc::from(files),
        }
    }
}

impl<F> Clone for FileCollection<F> {
    fn clone(&self) -> Self {
        Self {
            files: Rc::clone(&self.files),
        }
    }
}

impl<F> Default for FileCollection<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F> PartialEq for FileCollection<F> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<F: fmt::Debug> fmt::Debug for FileCollection<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.files.iter()).finish()
    }
}

impl<'a, F> IntoIterator for &'a FileCollection<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owner of the current collection and the value `reset` restores.
#[derive(Debug)]
pub struct FileStore<F> {
    initial: FileCollection<F>,
    current: FileCollection<F>,
}

impl<F: Clone> FileStore<F> {
    /// Create a store whose initial (and reset) value is `initial`.
    #[must_use]
    pub fn new(initial: FileCollection<F>) -> Self {
        Self {
            current: initial.clone(),
            initial,
        }
    }

    /// The current collection.
    #[must_use]
    pub fn files(&self) -> &FileCollection<F> {
        &self.current
    }

    /// Append files; see [`FileCollection::add`].
    pub fn add(&mut self, new_files: impl IntoIterator<Item = F>) {
        self.current = self.current.add(new_files);
    }

    /// Remove one file; see [`FileCollection::remove`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] and leaves the
    /// store unchanged when `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Result<(), CollectionError> {
        self.current = self.current.remove(index)?;
        Ok(())
    }

    /// Restore the initial collection.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }
}

impl<F: Clone> Default for FileStore<F> {
    fn default() -> Self {
        Self::new(FileCollection::empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn names(c: &FileCollection<&'static str>) -> Vec<&'static str> {
        c.iter().copied().collect()
    }

    #[test]
    fn add_preserves_arrival_order() {
        let c = FileCollection::empty().add(["a", "b"]).add(["c"]);
        assert_eq!(names(&c), ["a", "b", "c"]);
    }

    #[test]
    fn add_keeps_duplicates() {
        let c = FileCollection::empty().add(["a"]).add(["a"]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn mutations_produce_new_storage() {
        let a = FileCollection::from(vec!["x"]);
        let b = a.add(["y"]);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, b);
        // The original snapshot is untouched.
        assert_eq!(names(&a), ["x"]);

        let c = b.clone();
        assert!(b.ptr_eq(&c));
        assert_eq!(b, c);
    }

    #[test]
    fn remove_shifts_later_elements_left() {
        let c = FileCollection::from(vec!["a", "b", "c", "d"]);
        let removed = c.remove(1).unwrap();
        assert_eq!(names(&removed), ["a", "c", "d"]);

        assert_eq!(names(&c.remove(0).unwrap()), ["b", "c", "d"]);
        assert_eq!(names(&c.remove(3).unwrap()), ["a", "b", "c"]);
    }

    #[test]
    fn remove_every_position() {
        let items = ["a", "b", "c", "d", "e"];
        let c = FileCollection::from(items.to_vec());
        for i in 0..items.len() {
            let out = c.remove(i).unwrap();
            assert_eq!(out.len(), items.len() - 1);
            // Prefix before i is unchanged.
            assert_eq!(&out.as_slice()[..i], &items[..i]);
            // Suffix shifted left by one.
            assert_eq!(&out.as_slice()[i..], &items[i + 1..]);
        }
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let c = FileCollection::from(vec!["a"]);
        assert_eq!(
            c.remove(1),
            Err(CollectionError::IndexOutOfRange { index: 1, len: 1 })
        );
        let empty: FileCollection<&str> = FileCollection::empty();
        assert!(empty.remove(0).is_err());
    }

    #[test]
    fn store_length_tracks_adds_minus_removes() {
        let mut store = FileStore::default();
        let mut expected = 0usize;
        // A deterministic mix of adds, valid removes and invalid removes.
        for step in 0..50usize {
            match step % 5 {
                0 | 1 | 3 => {
                    store.add([step]);
                    expected += 1;
                }
                2 => {
                    if store.remove(0).is_ok() {
                        expected -= 1;
                    }
                }
                _ => {
                    let bogus = store.files().len() + 3;
                    assert!(store.remove(bogus).is_err());
                }
            }
            assert_eq!(store.files().len(), expected);
        }
    }

    #[test]
    fn reset_restores_initial_value() {
        let initial = FileCollection::from(vec!["seed"]);
        let mut store = FileStore::new(initial.clone());
        store.add(["a", "b"]);
        store.remove(0).unwrap();
        store.reset();
        assert!(store.files().ptr_eq(&initial));

        let mut empty = FileStore::default();
        empty.add(["a"]);
        empty.reset();
        assert!(empty.files().is_empty());
    }

    #[test]
    fn failed_remove_leaves_store_unchanged() {
        let mut store = FileStore::default();
        store.add(["a"]);
        let before = store.files().clone();
        assert!(store.remove(5).is_err());
        assert!(store.files().ptr_eq(&before));
    }

    #[test]
    fn error_display() {
        let err = CollectionError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 4 out of range for collection of 2 files"
        );
    }
}
