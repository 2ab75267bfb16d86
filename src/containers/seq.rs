//! Seq: growable sequence views over shared backing storage
//!
//! A `Seq<T>` is a header `(storage, offset, len, cap)` over a reference
//! counted allocation. Sub-views and header clones alias the same storage, so
//! element writes through one view show up in every overlapping view. An
//! append that fits in the view's capacity writes into the shared storage; an
//! append that does not fit copies the visible elements into a fresh
//! allocation and the returned view no longer aliases anything.

use crate::config::{Config, GrowthPolicy};
use crate::error::{check_index, check_range, Result, ViewkitError};
use std::cell::RefCell;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::rc::Rc;

type Storage<T> = Rc<RefCell<Vec<T>>>;

/// Growable sequence view with aliasing semantics
///
/// # Examples
///
/// ```rust
/// use viewkit::Seq;
///
/// let base = Seq::<i32>::make(0, 4)?.append(&[1, 2, 3])?;
/// let head = base.view(0, 2)?;
///
/// // `head` still has spare capacity inside `base`'s storage
/// let head = head.append(&[30])?;
/// assert_eq!(base, [1, 2, 30]);
/// assert!(head.shares_storage_with(&base));
/// # Ok::<(), viewkit::ViewkitError>(())
/// ```
pub struct Seq<T> {
    storage: Storage<T>,
    offset: usize,
    len: usize,
    cap: usize,
    policy: GrowthPolicy,
}

fn allocate<T>(capacity: usize) -> Result<Vec<T>> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|_| ViewkitError::out_of_memory(capacity))?;
    Ok(storage)
}

impl<T> Seq<T> {
    /// Create an empty sequence with no storage (length 0, capacity 0)
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: Rc::new(RefCell::new(Vec::new())),
            offset: 0,
            len: 0,
            cap: 0,
            policy: GrowthPolicy::default(),
        }
    }

    /// Take ownership of `elements`; length and capacity both equal its length
    pub fn from_vec(elements: Vec<T>) -> Self {
        let len = elements.len();
        Self {
            storage: Rc::new(RefCell::new(elements)),
            offset: 0,
            len,
            cap: len,
            policy: GrowthPolicy::default(),
        }
    }

    /// Replace the growth policy used by later reallocations
    pub fn with_policy(mut self, policy: GrowthPolicy) -> Result<Self> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    /// Number of visible elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the view is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum length reachable by appends before reallocation
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Position of the first visible element inside the backing storage
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Growth policy applied when an append reallocates
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Whether both views are backed by the same allocation
    #[inline]
    pub fn shares_storage_with(&self, other: &Seq<T>) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }

    /// Number of live views referencing this view's storage
    #[inline]
    pub fn alias_count(&self) -> usize {
        Rc::strong_count(&self.storage)
    }

    /// Sub-view `[lo, hi)` sharing storage; capacity extends to the end of
    /// this view's capacity
    pub fn view(&self, lo: usize, hi: usize) -> Result<Seq<T>> {
        check_range(lo, hi, self.len)?;
        Ok(self.header(self.offset + lo, hi - lo, self.cap - lo))
    }

    /// Range form of [`view`](Self::view): `s.slice(..2)`, `s.slice(3..)`
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<Seq<T>> {
        let lo = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n
                .checked_add(1)
                .ok_or_else(|| ViewkitError::out_of_range(n, n, self.len))?,
            Bound::Unbounded => 0,
        };
        let hi = match range.end_bound() {
            Bound::Included(&n) => n
                .checked_add(1)
                .ok_or_else(|| ViewkitError::out_of_range(lo, n, self.len))?,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len,
        };
        self.view(lo, hi)
    }

    fn header(&self, offset: usize, len: usize, cap: usize) -> Seq<T> {
        Seq {
            storage: Rc::clone(&self.storage),
            offset,
            len,
            cap,
            policy: self.policy,
        }
    }
}

impl<T: Default> Seq<T> {
    /// Create a sequence of `length` default-valued elements with room for
    /// `capacity` elements before reallocation
    pub fn make(length: usize, capacity: usize) -> Result<Self> {
        Self::make_with_policy(length, capacity, GrowthPolicy::default())
    }

    /// [`make`](Self::make) with an explicit growth policy
    pub fn make_with_policy(length: usize, capacity: usize, policy: GrowthPolicy) -> Result<Self> {
        if length > capacity {
            return Err(ViewkitError::invalid_argument(format!(
                "length {} exceeds capacity {}",
                length, capacity
            )));
        }
        policy.validate()?;

        let mut storage = allocate(capacity)?;
        storage.resize_with(length, T::default);
        Ok(Self {
            storage: Rc::new(RefCell::new(storage)),
            offset: 0,
            len: length,
            cap: capacity,
            policy,
        })
    }

    /// Sub-view `[lo, hi)` whose capacity is cut at `cap_hi`, so appends past
    /// it reallocate instead of overwriting the parent's elements
    ///
    /// `hi` may reach into spare capacity; elements there that were never
    /// written read as `T::default()`.
    pub fn view_capped(&self, lo: usize, hi: usize, cap_hi: usize) -> Result<Seq<T>> {
        if lo > hi || hi > cap_hi || cap_hi > self.cap {
            return Err(ViewkitError::out_of_range(lo, cap_hi.max(hi), self.cap));
        }
        let end = self.offset + hi;
        {
            let mut storage = self.storage.borrow_mut();
            if storage.len() < end {
                storage.resize_with(end, T::default);
            }
        }
        Ok(self.header(self.offset + lo, hi - lo, cap_hi - lo))
    }
}

impl<T: Clone> Seq<T> {
    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        Ok(self.storage.borrow()[self.offset + index].clone())
    }

    /// Overwrite the element at `index`; visible through every aliasing view
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len)?;
        self.storage.borrow_mut()[self.offset + index] = value;
        Ok(())
    }

    /// First visible element
    pub fn first(&self) -> Option<T> {
        self.get(0).ok()
    }

    /// Last visible element
    pub fn last(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Append `items`, returning the resulting view
    ///
    /// When the items fit in the remaining capacity they are written into the
    /// shared storage and the result aliases `self`. Otherwise the visible
    /// elements and `items` are copied into a new allocation sized by the
    /// growth policy.
    pub fn append(&self, items: &[T]) -> Result<Seq<T>> {
        let required = self
            .len
            .checked_add(items.len())
            .ok_or_else(|| ViewkitError::out_of_memory(usize::MAX))?;

        if required <= self.cap {
            self.write_in_place(items);
            return Ok(self.header(self.offset, required, self.cap));
        }

        let new_cap = self.policy.next_capacity(self.cap, required);
        let mut fresh = allocate(new_cap)?;
        fresh.extend_from_slice(&self.storage.borrow()[self.offset..self.offset + self.len]);
        fresh.extend_from_slice(items);

        log::debug!(
            "seq reallocated: capacity {} -> {} for {} elements",
            self.cap,
            new_cap,
            required
        );

        Ok(Seq {
            storage: Rc::new(RefCell::new(fresh)),
            offset: 0,
            len: required,
            cap: new_cap,
            policy: self.policy,
        })
    }

    /// Append the visible elements of another view (which may alias `self`)
    pub fn append_seq(&self, other: &Seq<T>) -> Result<Seq<T>> {
        let items = other.to_vec();
        self.append(&items)
    }

    /// Append one element in place, i.e. `s = append(s, item)`
    pub fn push(&mut self, item: T) -> Result<()> {
        *self = self.append(std::slice::from_ref(&item))?;
        Ok(())
    }

    /// Append a slice in place
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<()> {
        *self = self.append(items)?;
        Ok(())
    }

    /// Copy `min(self.len(), src.len())` elements from `src` to the start of
    /// this view and return the count. Never resizes or reallocates; the
    /// views may overlap.
    pub fn copy_from(&self, src: &Seq<T>) -> usize {
        let n = self.len.min(src.len);
        if n == 0 {
            return 0;
        }

        if Rc::ptr_eq(&self.storage, &src.storage) {
            let (dst_off, src_off) = (self.offset, src.offset);
            let mut storage = self.storage.borrow_mut();
            if dst_off < src_off {
                for i in 0..n {
                    let value = storage[src_off + i].clone();
                    storage[dst_off + i] = value;
                }
            } else if dst_off > src_off {
                for i in (0..n).rev() {
                    let value = storage[src_off + i].clone();
                    storage[dst_off + i] = value;
                }
            }
        } else {
            let source = src.storage.borrow();
            let mut dest = self.storage.borrow_mut();
            dest[self.offset..self.offset + n]
                .clone_from_slice(&source[src.offset..src.offset + n]);
        }
        n
    }

    /// Owned copy of the visible elements
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.borrow()[self.offset..self.offset + self.len].to_vec()
    }

    /// Iterate over clones of the visible elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { seq: self, front: 0, back: self.len }
    }

    fn write_in_place(&self, items: &[T]) {
        let mut storage = self.storage.borrow_mut();
        let start = self.offset + self.len;
        debug_assert!(start <= storage.len());
        for (i, item) in items.iter().enumerate() {
            let pos = start + i;
            if pos < storage.len() {
                storage[pos] = item.clone();
            } else {
                storage.push(item.clone());
            }
        }
    }
}

/// Copy from `src` into `dst`; see [`Seq::copy_from`]
pub fn copy_into<T: Clone>(dst: &Seq<T>, src: &Seq<T>) -> usize {
    dst.copy_from(src)
}

/// Iterator over a [`Seq`], yielding cloned elements
pub struct Iter<'a, T> {
    seq: &'a Seq<T>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.seq.storage.borrow()[self.seq.offset + self.front].clone();
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.seq.storage.borrow()[self.seq.offset + self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Clone> IntoIterator for &'a Seq<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Header copy: the clone aliases the same storage.
impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        self.header(self.offset, self.len, self.cap)
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let storage = self.storage.borrow();
        f.debug_list()
            .entries(&storage[self.offset..self.offset + self.len])
            .finish()
    }
}

/// Space separated elements in brackets: `[a b c]`
impl<T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let storage = self.storage.borrow();
        write!(f, "[")?;
        for (i, item) in storage[self.offset..self.offset + self.len].iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        let a = self.storage.borrow();
        let b = other.storage.borrow();
        a[self.offset..self.offset + self.len] == b[other.offset..other.offset + other.len]
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: PartialEq> PartialEq<[T]> for Seq<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.storage.borrow()[self.offset..self.offset + self.len] == *other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for Seq<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.storage.borrow()[self.offset..self.offset + self.len] == **other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Seq<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.storage.borrow()[self.offset..self.offset + self.len] == other[..]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Seq<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.storage.borrow()[self.offset..self.offset + self.len] == other[..]
    }
}
