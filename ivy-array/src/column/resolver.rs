use std::sync::Arc;

/// Maps a logical row index onto the chunk holding it.
///
/// The resolver caches the prefix sums of the chunk lengths, so `chunk_offsets()[c]` is the first
/// logical index of chunk `c` and the last offset is the total number of rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkResolver {
    offsets: Arc<[usize]>,
}

impl ChunkResolver {
    pub fn new<I: IntoIterator<Item = usize>>(chunk_lens: I) -> Self {
        let offsets = [0]
            .into_iter()
            .chain(chunk_lens.into_iter().scan(0, |acc, len| {
                *acc += len;
                Some(*acc)
            }))
            .collect();
        Self { offsets }
    }

    /// The total number of rows across all chunks.
    #[inline]
    pub fn num_rows(&self) -> usize {
        // Offsets always start with a leading zero.
        self.offsets[self.offsets.len() - 1]
    }

    #[inline]
    pub fn nchunks(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn chunk_offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Resolve `index` into `(chunk index, offset within chunk)`.
    ///
    /// `index` must be less than [`ChunkResolver::num_rows`]; callers check bounds.
    pub fn resolve(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.num_rows(), "index {index} out of bounds");

        if self.nchunks() == 1 {
            return (0, index);
        }

        // Empty chunks repeat an offset, so take the last chunk starting at or before `index`.
        let chunk = self.offsets.partition_point(|&offset| offset <= index) - 1;
        (chunk, index - self.offsets[chunk])
    }
}
