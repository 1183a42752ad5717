// File: src/memory/stats.rs

/// Allocation statistics for an [`Arena`](super::arena::Arena).
///
/// Tracks request counts and sizes so callers can size arenas for their
/// workloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    /// Total number of allocation requests
    pub total_allocations: u64,
    /// Total bytes requested across all allocations
    pub total_bytes_allocated: u64,
    /// Number of resets performed
    pub reset_count: u64,
    /// Largest single allocation size
    pub largest_allocation: usize,
    /// Smallest non-zero allocation size
    pub smallest_allocation: usize,
    /// Highest offset reached, padding included
    pub peak_usage_bytes: usize,
    /// Alignment requests, bucketed by power of two: 1, 2, 4, 8, 16, 32, 64, 128+
    pub alignment_histogram: [u64; 8],
}

impl ArenaStats {
    pub fn new() -> Self {
        Self {
            total_allocations: 0,
            total_bytes_allocated: 0,
            reset_count: 0,
            largest_allocation: 0,
            smallest_allocation: usize::MAX,
            peak_usage_bytes: 0,
            alignment_histogram: [0; 8],
        }
    }

    /// Record an allocation of `size` bytes that ended at `end_offset`.
    pub fn record_allocation(&mut self, size: usize, alignment: usize, end_offset: usize) {
        self.total_allocations += 1;
        self.total_bytes_allocated += size as u64;

        self.largest_allocation = self.largest_allocation.max(size);
        if size > 0 {
            self.smallest_allocation = self.smallest_allocation.min(size);
        }
        self.peak_usage_bytes = self.peak_usage_bytes.max(end_offset);

        let bucket = (alignment.trailing_zeros() as usize).min(7);
        self.alignment_histogram[bucket] += 1;
    }

    pub fn record_reset(&mut self) {
        self.reset_count += 1;
    }

    /// Mean requested size, zero before the first allocation.
    pub fn average_allocation_size(&self) -> f64 {
        if self.total_allocations == 0 {
            0.0
        } else {
            self.total_bytes_allocated as f64 / self.total_allocations as f64
        }
    }

    /// Most frequently requested alignment (8 when nothing was recorded).
    pub fn most_common_alignment(&self) -> usize {
        let (index, count) = self
            .alignment_histogram
            .iter()
            .enumerate()
            .max_by_key(|(_, &count)| count)
            .unwrap_or((3, &0));

        if *count == 0 {
            8
        } else {
            1 << index
        }
    }

    /// Fraction of `capacity` reached at peak (0.0 to 1.0).
    pub fn efficiency(&self, capacity: usize) -> f32 {
        if capacity == 0 {
            1.0
        } else {
            self.peak_usage_bytes as f32 / capacity as f32
        }
    }

    /// Human-readable summary.
    pub fn format_summary(&self) -> String {
        let smallest = if self.smallest_allocation == usize::MAX {
            0
        } else {
            self.smallest_allocation
        };
        format!(
            "Arena Statistics:\n\
             - Allocations: {}\n\
             - Total requested: {} bytes\n\
             - Peak usage: {} bytes\n\
             - Average allocation: {:.1} bytes\n\
             - Size range: {} - {} bytes\n\
             - Resets: {}",
            self.total_allocations,
            self.total_bytes_allocated,
            self.peak_usage_bytes,
            self.average_allocation_size(),
            smallest,
            self.largest_allocation,
            self.reset_count
        )
    }
}

impl Default for ArenaStats {
    fn default() -> Self {
        Self::new()
    }
}
