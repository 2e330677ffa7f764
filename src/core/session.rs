//! Loaded-map state for a genome pair
//!
//! A [`GenomePair`] owns the two direction maps of one assembly pair.
//! Each direction is explicitly either loaded or absent; query paths
//! receive `Option<&BlockMap>` and surface a `NO_BLOCKS` status rather
//! than panicking on an unloaded direction. Loading a direction replaces
//! its slot atomically on success and leaves it untouched on failure, so
//! a failed reload never clobbers a previously usable map and the two
//! directions stay independent.

use crate::core::error::BlocksResult;
use crate::core::index::BlockMap;
use crate::core::roundtrip::RoundTripValidator;
use std::path::Path;

/// The two direction maps (A→B and B→A) of one assembly pair
#[derive(Debug, Default)]
pub struct GenomePair {
    forward: Option<BlockMap>,
    reverse: Option<BlockMap>,
}

impl GenomePair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both directions concurrently
    ///
    /// The fetches are independent: each returns its own block count or
    /// error, and one direction failing does not affect the other.
    pub fn load(
        &mut self,
        forward_path: &Path,
        reverse_path: &Path,
    ) -> (BlocksResult<usize>, BlocksResult<usize>) {
        let (fwd, rev) = rayon::join(
            || BlockMap::from_path(forward_path),
            || BlockMap::from_path(reverse_path),
        );
        (self.install_forward(fwd), self.install_reverse(rev))
    }

    /// Load or reload the A→B direction
    pub fn load_forward(&mut self, path: &Path) -> BlocksResult<usize> {
        self.install_forward(BlockMap::from_path(path))
    }

    /// Load or reload the B→A direction
    pub fn load_reverse(&mut self, path: &Path) -> BlocksResult<usize> {
        self.install_reverse(BlockMap::from_path(path))
    }

    fn install_forward(&mut self, loaded: BlocksResult<BlockMap>) -> BlocksResult<usize> {
        let map = loaded?;
        let count = map.total_blocks();
        self.forward = Some(map);
        Ok(count)
    }

    fn install_reverse(&mut self, loaded: BlocksResult<BlockMap>) -> BlocksResult<usize> {
        let map = loaded?;
        let count = map.total_blocks();
        self.reverse = Some(map);
        Ok(count)
    }

    /// The A→B map, if loaded
    pub fn forward(&self) -> Option<&BlockMap> {
        self.forward.as_ref()
    }

    /// The B→A map, if loaded
    pub fn reverse(&self) -> Option<&BlockMap> {
        self.reverse.as_ref()
    }

    /// A validator over both directions, once both are loaded
    pub fn validator(&self) -> Option<RoundTripValidator<'_>> {
        Some(RoundTripValidator::new(
            self.forward.as_ref()?,
            self.reverse.as_ref()?,
        ))
    }
}
