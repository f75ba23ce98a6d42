//! In-memory course index: a fixed-size hash table with chained buckets.
//!
//! Keys are canonical course numbers (see [`canonicalize`]). The bucket count
//! is chosen at construction and never changes; collisions are resolved by a
//! linear scan of the bucket, which keeps insertion order.

pub mod hash;

use serde::Serialize;

use crate::course::{canonicalize, Course};
use crate::error::{CatalogError, Result};

pub use hash::{bucket_for, hash_key};

/// Bucket count used when none is configured.
pub const DEFAULT_BUCKET_COUNT: usize = 20;

/// Hash table of courses keyed by canonical course number.
#[derive(Debug, Clone)]
pub struct CourseIndex {
    buckets: Vec<Vec<Course>>,
    len: usize,
}

/// Occupancy snapshot, logged after each load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexStats {
    pub courses: usize,
    pub buckets: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

impl CourseIndex {
    pub fn new() -> Self {
        Self::build(DEFAULT_BUCKET_COUNT)
    }

    /// Create an index with `bucket_count` buckets.
    ///
    /// A bucket count of 1 puts every course in the same chain.
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(CatalogError::InvalidConfig(
                "bucket count must be at least 1".into(),
            ));
        }
        Ok(Self::build(bucket_count))
    }

    fn build(bucket_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count],
            len: 0,
        }
    }

    /// Insert a course unless its canonical number is already present.
    ///
    /// On a duplicate the table is left unchanged (first write wins) and
    /// `DuplicateKey` is returned carrying the rejected number as written.
    pub fn insert(&mut self, course: Course) -> Result<()> {
        let key = course.key();
        let slot = bucket_for(&key, self.buckets.len());
        let bucket = &mut self.buckets[slot];

        if bucket.iter().any(|c| c.key() == key) {
            tracing::warn!("Duplicate course '{}' found, skipping", course.number);
            return Err(CatalogError::DuplicateKey {
                number: course.number,
            });
        }

        tracing::debug!(number = %course.number, "indexed course");
        bucket.push(course);
        self.len += 1;
        Ok(())
    }

    /// Look up a course by number, ignoring case and surrounding whitespace.
    pub fn search(&self, number: &str) -> Option<&Course> {
        let key = canonicalize(number);
        self.buckets[bucket_for(&key, self.buckets.len())]
            .iter()
            .find(|c| c.key() == key)
    }

    /// Copy out every stored course, bucket by bucket in insertion order.
    ///
    /// This order follows the hash layout and is not meaningful; sort it.
    pub fn all_courses(&self) -> Vec<Course> {
        self.iter().cloned().collect()
    }

    /// Iterate stored courses without copying, in the same order as `all_courses`.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.buckets.iter().flatten()
    }

    /// Remove every course. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            courses: self.len,
            buckets: self.buckets.len(),
            occupied_buckets: self.buckets.iter().filter(|b| !b.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
            load_factor: self.len as f64 / self.buckets.len() as f64,
        }
    }
}

impl Default for CourseIndex {
    fn default() -> Self {
        Self::new()
    }
}
