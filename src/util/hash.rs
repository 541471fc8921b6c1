use std::hash::{BuildHasher, Hasher};

/// The number of distinct hashes [`BucketHasher`] can produce.
pub const BUCKETS: u64 = 3;

/// A [`Hasher`] which folds every input into one of [`BUCKETS`] values, so that distinct keys
/// collide constantly in the backing table.
#[derive(Debug)]
pub struct BucketHasher {
    state: u64,
}

impl Hasher for BucketHasher {
    fn finish(&self) -> u64 {
        self.state % BUCKETS
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_add(*byte as u64);
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct BucketHasherBuilder;

impl BuildHasher for BucketHasherBuilder {
    type Hasher = BucketHasher;

    fn build_hasher(&self) -> Self::Hasher {
        BucketHasher {
            state: 0
        }
    }
}
