use std::fmt::Debug;
use std::sync::Arc;

use arrow_array::{Array, ArrayRef};
use arrow_schema::DataType;
use ivy_dtype::PType;
use ivy_error::{IvyResult, ivy_bail, ivy_err};

use crate::column::ChunkResolver;

/// A read-only handle onto externally owned chunked storage.
///
/// This is the shape the ingestion layer hands over: a declared type plus a number of chunks,
/// each an Arrow array of that type.
pub trait ChunkSource: Debug {
    /// The declared storage type shared by every chunk.
    fn data_type(&self) -> &DataType;

    fn nchunks(&self) -> usize;

    /// The chunk at `idx`, failing when `idx >= nchunks()`.
    fn chunk(&self, idx: usize) -> IvyResult<ArrayRef>;

    fn chunk_len(&self, idx: usize) -> IvyResult<usize> {
        self.chunk(idx).map(|c| c.len())
    }
}

/// An immutable column made of Arrow chunks that all share one declared type.
///
/// Cloning is cheap: chunks are reference counted and never copied.
#[derive(Clone, Debug)]
pub struct ChunkedColumn {
    data_type: DataType,
    chunks: Arc<[ArrayRef]>,
    resolver: ChunkResolver,
}

impl ChunkedColumn {
    pub fn try_new(chunks: Vec<ArrayRef>, data_type: DataType) -> IvyResult<Self> {
        for chunk in &chunks {
            if chunk.data_type() != &data_type {
                ivy_bail!(MismatchedTypes: data_type, chunk.data_type());
            }
        }

        let resolver = ChunkResolver::new(chunks.iter().map(|c| c.len()));
        Ok(Self {
            data_type,
            chunks: chunks.into(),
            resolver,
        })
    }

    /// Adopt the chunks of any [`ChunkSource`], sharing their buffers.
    pub fn try_from_source(source: &dyn ChunkSource) -> IvyResult<Self> {
        let chunks = (0..source.nchunks())
            .map(|idx| source.chunk(idx))
            .collect::<IvyResult<Vec<_>>>()?;
        Self::try_new(chunks, source.data_type().clone())
    }

    /// A column of `data_type` without any rows.
    pub fn empty(data_type: DataType) -> Self {
        Self {
            data_type,
            chunks: Arc::new([]),
            resolver: ChunkResolver::new([]),
        }
    }

    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// The primitive type of the column, if its storage type has a value mapping.
    pub fn ptype(&self) -> IvyResult<PType> {
        PType::try_from(&self.data_type)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.resolver.num_rows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn nchunks(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn chunk(&self, idx: usize) -> IvyResult<&ArrayRef> {
        self.chunks
            .get(idx)
            .ok_or_else(|| ivy_err!(OutOfBounds: idx, 0, self.nchunks()))
    }

    /// The number of null slots across all chunks.
    pub fn null_count(&self) -> usize {
        self.chunks.iter().map(|c| c.null_count()).sum()
    }

    /// Whether both columns hold the very same chunks, without comparing any elements.
    pub fn shares_chunks(&self, other: &Self) -> bool {
        self.data_type == other.data_type
            && self.nchunks() == other.nchunks()
            && self
                .chunks
                .iter()
                .zip(other.chunks.iter())
                .all(|(l, r)| Arc::ptr_eq(l, r))
    }

    pub fn chunks(&self) -> impl Iterator<Item = &ArrayRef> + '_ {
        self.chunks.iter()
    }

    #[inline]
    pub fn resolver(&self) -> &ChunkResolver {
        &self.resolver
    }

    /// Resolve a logical row index, failing when it lies outside the column.
    pub fn find_chunk_idx(&self, index: usize) -> IvyResult<(usize, usize)> {
        if index >= self.len() {
            ivy_bail!(OutOfBounds: index, 0, self.len());
        }
        Ok(self.resolver.resolve(index))
    }

    /// A zero-copy column over rows `[begin, end)`.
    pub fn slice(&self, begin: usize, end: usize) -> IvyResult<Self> {
        if end > self.len() || begin > end {
            ivy_bail!(InvalidRange: begin, end, self.len());
        }
        if begin == 0 && end == self.len() {
            return Ok(self.clone());
        }
        if begin == end {
            return Ok(Self::empty(self.data_type.clone()));
        }

        let (first_chunk, offset_in_first) = self.resolver.resolve(begin);
        let (last_chunk, offset_in_last) = self.resolver.resolve(end - 1);

        if first_chunk == last_chunk {
            let chunk = self.chunk(first_chunk)?;
            return Self::try_new(
                vec![chunk.slice(offset_in_first, end - begin)],
                self.data_type.clone(),
            );
        }

        let mut chunks = self.chunks[first_chunk..=last_chunk].to_vec();
        if let Some(c) = chunks.first_mut() {
            *c = c.slice(offset_in_first, c.len() - offset_in_first);
        }
        if let Some(c) = chunks.last_mut() {
            *c = c.slice(0, offset_in_last + 1);
        }
        Self::try_new(chunks, self.data_type.clone())
    }
}
