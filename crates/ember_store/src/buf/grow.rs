use std::ptr;
use std::slice;

use tracing::{debug, trace};

use super::raw::RawBuf;
use super::StoreError;

/// Fixed growth increment, in elements.
///
/// Growth is linear on purpose: reallocation counts are observable through
/// [`GrowBuf::as_ptr`], and downstream code calibrates against them, so
/// this is not a doubling vector.
const GROWTH_STEP: usize = 4;

/// Default initial capacity, in elements.
const DEFAULT_CAPACITY: usize = 4;

/// Owning growable contiguous buffer of trivially-copyable elements.
///
/// The buffer is raw-allocated so that out-of-memory is reportable as
/// [`StoreError::AllocationFailed`] instead of an abort. A full
/// [`GrowBuf::push`] grows the allocation by [`GROWTH_STEP`] elements and
/// copies the existing prefix over; any pointer previously taken from
/// [`GrowBuf::as_ptr`] is invalid after a push that grows.
///
/// Indexed access comes in two flavors: checked accessors returning
/// `Option`/`bool`, and `unsafe` unchecked ones for inner loops that
/// maintain their own bounds.
pub struct GrowBuf<T: Copy> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T: Copy> GrowBuf<T> {
    /// Buffer with the default initial capacity of 4 elements.
    pub fn new() -> Result<Self, StoreError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Buffer sized for `capacity` elements up front.
    pub fn with_capacity(capacity: usize) -> Result<Self, StoreError> {
        Ok(Self {
            buf: RawBuf::allocate(capacity)?,
            len: 0,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Append `value`, growing the buffer when full.
    ///
    /// Atomic from the caller's view: either the value is stored and `len`
    /// incremented, or growth allocation failed and the old buffer,
    /// contents and `len` are untouched.
    pub fn push(&mut self, value: T) -> Result<(), StoreError> {
        if self.len == self.buf.capacity() {
            self.grow()?;
        }
        // SAFETY: len < capacity after the growth check, so the slot is in
        // bounds of the allocation.
        unsafe {
            ptr::write(self.buf.as_ptr().add(self.len), value);
        }
        self.len += 1;
        Ok(())
    }

    fn grow(&mut self) -> Result<(), StoreError> {
        let new_cap = self.buf.capacity() + GROWTH_STEP;
        let new_buf = match RawBuf::allocate(new_cap) {
            Ok(buf) => buf,
            Err(err) => {
                debug!(requested = new_cap, "buffer growth failed");
                return Err(err);
            }
        };
        // SAFETY: both allocations hold at least `len` elements and do not
        // overlap; `T: Copy`, so a bitwise copy is a complete copy.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_ptr(), self.len);
        }
        trace!(old = self.buf.capacity(), new = new_cap, "grow buffer");
        // The old buffer is released here, exactly once, by RawBuf::drop.
        self.buf = new_buf;
        Ok(())
    }

    /// Element at `index`, bounds-checked.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // SAFETY: index is within the initialized prefix.
            Some(unsafe { &*self.buf.as_ptr().add(index) })
        } else {
            None
        }
    }

    /// Mutable element at `index`, bounds-checked.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            // SAFETY: index is within the initialized prefix.
            Some(unsafe { &mut *self.buf.as_ptr().add(index) })
        } else {
            None
        }
    }

    /// Overwrite the element at `index`. Returns `false` past the end.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        if index < self.len {
            // SAFETY: index is within the initialized prefix.
            unsafe {
                ptr::write(self.buf.as_ptr().add(index), value);
            }
            true
        } else {
            false
        }
    }

    /// Element at `index` with no bounds check.
    ///
    /// # Safety
    /// `index` must be less than [`GrowBuf::len`]; anything past the
    /// initialized prefix is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        &*self.buf.as_ptr().add(index)
    }

    /// Mutable element at `index` with no bounds check.
    ///
    /// # Safety
    /// `index` must be less than [`GrowBuf::len`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        &mut *self.buf.as_ptr().add(index)
    }

    /// Overwrite the element at `index` with no bounds check.
    ///
    /// # Safety
    /// `index` must be less than [`GrowBuf::len`].
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index < self.len);
        ptr::write(self.buf.as_ptr().add(index), value);
    }

    /// Initialized elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Initialized elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Raw pointer to the underlying storage, for bulk or interop access.
    ///
    /// Invalidated by any [`GrowBuf::push`] that grows the buffer;
    /// re-acquire after appending past the current capacity.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable raw pointer to the underlying storage. Same invalidation
    /// rule as [`GrowBuf::as_ptr`].
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }
}
