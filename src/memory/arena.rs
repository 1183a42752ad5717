use std::alloc::{self, Layout};
use std::cell::Cell;
use std::ptr::{self, NonNull};

use crate::memory::stats::ArenaStats;
use crate::memory::ArenaConfig;

/// Capacity used when an arena is created with a capacity of zero.
pub const DEFAULT_CAPACITY: usize = 4 * 1024;

/// Alignment of the backing buffer and of untyped allocations.
pub const DEFAULT_ALIGNMENT: usize = 16;

/// Errors that can occur during arena operations
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("Arena exhausted: requested {requested} bytes, available {available} bytes")]
    Exhausted { requested: usize, available: usize },

    #[error("Invalid alignment: {alignment} is not a power of 2")]
    InvalidAlignment { alignment: usize },

    #[error("Allocation failed: {0}")]
    AllocationFailed(String),
}

/// Bump allocator over a single fixed buffer.
///
/// Allocations hand out monotonically increasing, zero-initialized regions of
/// the buffer and are reclaimed only in bulk by [`Arena::reset`]. Because
/// `reset` takes `&mut self`, every reference handed out by the arena must be
/// dead before the memory can be reused.
///
/// Values placed in the arena are never dropped, so typed allocation is
/// restricted to `Copy` types.
pub struct Arena {
    /// Start of the backing buffer
    buffer: NonNull<u8>,
    /// Layout used for the backing buffer
    layout: Layout,
    /// Next free offset into the buffer
    offset: Cell<usize>,
    /// Alignment used by [`Arena::allocate`]
    default_alignment: usize,
    /// Statistics tracking, `None` when disabled
    stats: Option<Cell<ArenaStats>>,
}

impl Arena {
    /// Create an arena with the default capacity of 4 KiB.
    ///
    /// # Examples
    /// ```
    /// # use mia::memory::arena::Arena;
    /// let arena = Arena::new().unwrap();
    /// assert_eq!(arena.capacity(), 4096);
    /// ```
    pub fn new() -> Result<Self, ArenaError> {
        Self::with_capacity(0)
    }

    /// Create an arena holding `capacity` bytes. Zero selects the default
    /// capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArenaError> {
        Self::with_config(&ArenaConfig {
            default_capacity: capacity,
            ..ArenaConfig::default()
        })
    }

    /// Create an arena from a configuration.
    pub fn with_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        let alignment = config.default_alignment;
        if !alignment.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment { alignment });
        }

        let capacity = if config.default_capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            config.default_capacity
        };

        let layout = Layout::from_size_align(capacity, alignment)
            .map_err(|e| ArenaError::AllocationFailed(format!("Invalid layout: {}", e)))?;

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let buffer = NonNull::new(raw).ok_or_else(|| {
            ArenaError::AllocationFailed(format!("Failed to allocate {} bytes", capacity))
        })?;

        tracing::debug!(capacity, alignment, "created arena");

        Ok(Self {
            buffer,
            layout,
            offset: Cell::new(0),
            default_alignment: alignment,
            stats: config.enable_stats.then(|| Cell::new(ArenaStats::new())),
        })
    }

    /// Allocate `size` zeroed bytes at the arena's default alignment.
    pub fn allocate(&self, size: usize) -> Result<NonNull<u8>, ArenaError> {
        self.allocate_aligned(size, self.default_alignment)
    }

    /// Allocate `size` zeroed bytes aligned to `align`.
    ///
    /// The returned pointer stays valid until the next [`Arena::reset`] or
    /// until the arena is dropped.
    pub fn allocate_aligned(&self, size: usize, align: usize) -> Result<NonNull<u8>, ArenaError> {
        if !align.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment { alignment: align });
        }

        let base = self.buffer.as_ptr() as usize;
        let current = self.offset.get();
        let capacity = self.capacity();

        // Padding is computed against the real address so alignments larger
        // than the buffer's own are honoured.
        let start = (base + current)
            .checked_next_multiple_of(align)
            .map(|address| address - base);
        let end = start.and_then(|start| start.checked_add(size));

        let (start, end) = match (start, end) {
            (Some(start), Some(end)) if end <= capacity => (start, end),
            _ => {
                let available = capacity - current;
                tracing::warn!(requested = size, available, "arena exhausted");
                return Err(ArenaError::Exhausted {
                    requested: size,
                    available,
                });
            }
        };

        // SAFETY: `start..end` lies inside the buffer and no live reference
        // covers it: the offset only grows until `reset`, which needs `&mut self`.
        let ptr = unsafe {
            let ptr = self.buffer.as_ptr().add(start);
            ptr::write_bytes(ptr, 0, size);
            NonNull::new_unchecked(ptr)
        };

        self.offset.set(end);
        if let Some(stats) = &self.stats {
            let mut updated = stats.get();
            updated.record_allocation(size, align, end);
            stats.set(updated);
        }

        Ok(ptr)
    }

    /// Move `value` into the arena and return a reference to it.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc<T: Copy>(&self, value: T) -> Result<&mut T, ArenaError> {
        let ptr = self
            .allocate_aligned(std::mem::size_of::<T>(), std::mem::align_of::<T>())?
            .cast::<T>();

        // SAFETY: the region is freshly reserved, sized and aligned for `T`,
        // and borrowed for no longer than `self`.
        unsafe {
            ptr.as_ptr().write(value);
            Ok(&mut *ptr.as_ptr())
        }
    }

    /// Copy `values` into the arena as one contiguous slice.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_slice_copy<T: Copy>(&self, values: &[T]) -> Result<&mut [T], ArenaError> {
        let size = std::mem::size_of_val(values);
        let ptr = self
            .allocate_aligned(size, std::mem::align_of::<T>())?
            .cast::<T>();

        // SAFETY: as in `alloc`, for `values.len()` consecutive elements.
        unsafe {
            ptr::copy_nonoverlapping(values.as_ptr(), ptr.as_ptr(), values.len());
            Ok(std::slice::from_raw_parts_mut(ptr.as_ptr(), values.len()))
        }
    }

    /// Invalidate every allocation. The buffer is kept for reuse.
    pub fn reset(&mut self) {
        tracing::debug!(released = self.offset.get(), "reset arena");
        self.offset.set(0);
        if let Some(stats) = &self.stats {
            let mut updated = stats.get();
            updated.record_reset();
            stats.set(updated);
        }
    }

    /// Total size of the buffer.
    pub fn capacity(&self) -> usize {
        self.layout.size()
    }

    /// Bytes handed out so far, padding included.
    pub fn offset(&self) -> usize {
        self.offset.get()
    }

    pub fn available(&self) -> usize {
        self.capacity() - self.offset()
    }

    pub fn is_empty(&self) -> bool {
        self.offset() == 0
    }

    /// Statistics snapshot, `None` when collection is disabled.
    pub fn stats(&self) -> Option<ArenaStats> {
        self.stats.as_ref().map(Cell::get)
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        // SAFETY: `buffer` was allocated with `layout` in `with_config`.
        unsafe {
            alloc::dealloc(self.buffer.as_ptr(), self.layout);
        }
    }
}

// SAFETY: the arena owns its buffer exclusively; references it hands out
// borrow the arena, so moving it to another thread moves all access with it.
unsafe impl Send for Arena {}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity())
            .field("offset", &self.offset())
            .field("default_alignment", &self.default_alignment)
            .finish()
    }
}
