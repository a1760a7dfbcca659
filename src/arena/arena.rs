use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Index, IndexMut},
};

/// Typed index into an [`Arena`].
///
/// The type parameter only tags the handle. Two handles compare equal when
/// their raw indices do.
#[repr(transparent)]
pub struct Idx<T> {
    raw: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Idx<T> {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Idx {
            raw,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.raw
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.raw as usize
    }

    /// Reinterprets the handle as pointing at a `U`.
    #[inline]
    pub const fn cast<U>(self) -> Idx<U> {
        Idx::from_raw(self.raw)
    }
}

impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Idx<T> {}

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Idx<T> {}

impl<T> Hash for Idx<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Idx({})", self.raw)
    }
}

/// High-water mark of an [`Arena`], as returned by [`Arena::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(u32);

impl Mark {
    pub fn position(self) -> usize {
        self.0 as usize
    }
}

/// Append-only storage with checkpoint and rollback.
///
/// Allocation pushes at the end. Rolling back to a mark discards everything
/// allocated after it, so nodes built by an abandoned parse attempt vanish
/// in one truncate.
pub struct Arena<T> {
    items: Vec<T>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn alloc(&mut self, item: T) -> Idx<T> {
        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(item);
        idx
    }

    pub fn checkpoint(&self) -> Mark {
        Mark(self.items.len() as u32)
    }

    /// Discards everything allocated after `mark`.
    ///
    /// # Panics
    ///
    /// Panics if `mark` lies past the current end, which means it came from
    /// a state that was already rolled back.
    pub fn rollback(&mut self, mark: Mark) {
        assert!(
            mark.position() <= self.items.len(),
            "rollback to {:?} past arena end {}",
            mark,
            self.items.len()
        );
        self.items.truncate(mark.position());
    }

    pub fn get(&self, idx: Idx<T>) -> Option<&T> {
        self.items.get(idx.index())
    }

    pub fn get_mut(&mut self, idx: Idx<T>) -> Option<&mut T> {
        self.items.get_mut(idx.index())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items allocated since `mark`.
    pub fn since(&self, mark: Mark) -> &[T] {
        &self.items[mark.position()..]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = (Idx<T>, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (Idx::from_raw(i as u32), item))
    }
}

impl<T: Copy> Arena<T> {
    /// Appends a copy of `items`, returning the mark they start at.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Mark {
        let start = self.checkpoint();
        self.items.extend_from_slice(items);
        start
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Idx<T>> for Arena<T> {
    type Output = T;

    fn index(&self, idx: Idx<T>) -> &T {
        &self.items[idx.index()]
    }
}

impl<T> IndexMut<Idx<T>> for Arena<T> {
    fn index_mut(&mut self, idx: Idx<T>) -> &mut T {
        &mut self.items[idx.index()]
    }
}

impl<T: fmt::Debug> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
