use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use super::StoreError;

/// Owning raw allocation for `cap` elements of `T`.
///
/// Tracks no initialization and drops no elements; [`super::GrowBuf`]
/// layers the length bookkeeping on top and restricts `T` to `Copy`.
/// Zero-sized types and zero capacities never allocate.
pub(super) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Allocate space for `cap` elements. Allocation failure is reported,
    /// never aborted on.
    pub(super) fn allocate(cap: usize) -> Result<Self, StoreError> {
        if mem::size_of::<T>() == 0 || cap == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            });
        }

        let bytes = mem::size_of::<T>().saturating_mul(cap);
        let layout =
            Layout::array::<T>(cap).map_err(|_| StoreError::AllocationFailed { bytes })?;
        // SAFETY: the layout has non-zero size, checked above.
        let raw = unsafe { alloc::alloc(layout) };
        match NonNull::new(raw as *mut T) {
            Some(ptr) => {
                #[cfg(test)]
                note_alloc();
                Ok(Self {
                    ptr,
                    cap,
                    _marker: PhantomData,
                })
            }
            None => Err(StoreError::AllocationFailed {
                bytes: layout.size(),
            }),
        }
    }

    #[inline]
    pub(super) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(super) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if mem::size_of::<T>() == 0 || self.cap == 0 {
            return;
        }
        let layout = Layout::array::<T>(self.cap).expect("layout validated at allocation");
        // SAFETY: `ptr` came from `alloc` with this exact layout and is
        // released exactly once, here.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
        #[cfg(test)]
        note_release();
    }
}

#[cfg(test)]
use std::cell::Cell;

#[cfg(test)]
thread_local! {
    static BUFS_ALLOCATED: Cell<u64> = Cell::new(0);
    static BUFS_RELEASED: Cell<u64> = Cell::new(0);
}

#[cfg(test)]
fn note_alloc() {
    BUFS_ALLOCATED.with(|c| c.set(c.get() + 1));
}

#[cfg(test)]
fn note_release() {
    BUFS_RELEASED.with(|c| c.set(c.get() + 1));
}

/// Buffer allocate/release counts observed on this thread (test builds only).
#[cfg(test)]
pub(super) fn alloc_counts() -> (u64, u64) {
    (
        BUFS_ALLOCATED.with(Cell::get),
        BUFS_RELEASED.with(Cell::get),
    )
}
