//! Best-effort byte-size estimation for cached values.
//!
//! The cache accounts entries against its budget by an estimate of their
//! heap footprint. Estimates are deliberately approximate: they exist to
//! keep the budget meaningful, not to mirror the allocator. Estimating a
//! value never fails — when a container is too large to walk in full, the
//! first [`CONTAINER_SAMPLE_LIMIT`] elements are measured and extrapolated,
//! which bounds estimation cost itself.

use crate::core::chemistry::properties::AminoAcid;
use crate::core::chemistry::sequence::{Composition, IsoelectricPoint};
use crate::core::geometry::bounds::BoundingBox;
use nalgebra::{Point3, Vector3};
use std::collections::{BTreeMap, HashMap};
use std::mem;
use tracing::trace;

/// Elements of a container measured exactly before extrapolating.
pub const CONTAINER_SAMPLE_LIMIT: usize = 64;

/// Per-entry bookkeeping overhead assumed for map-like containers.
const MAP_ENTRY_OVERHEAD: usize = 16;

/// A best-effort estimate of a value's total byte footprint.
pub trait EstimateSize {
    fn estimated_bytes(&self) -> usize;
}

macro_rules! impl_estimate_for_primitives {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EstimateSize for $ty {
                fn estimated_bytes(&self) -> usize {
                    mem::size_of::<$ty>()
                }
            }
        )*
    };
}

impl_estimate_for_primitives!(
    bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64
);

impl EstimateSize for String {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<String>() + self.len()
    }
}

impl EstimateSize for &str {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<&str>() + self.len()
    }
}

impl EstimateSize for Point3<f64> {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<Point3<f64>>()
    }
}

impl EstimateSize for Vector3<f64> {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<Vector3<f64>>()
    }
}

impl EstimateSize for AminoAcid {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<Self>()
    }
}

impl EstimateSize for IsoelectricPoint {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<Self>()
    }
}

impl EstimateSize for BoundingBox {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<Self>()
    }
}

impl EstimateSize for Composition {
    fn estimated_bytes(&self) -> usize {
        self.counts.estimated_bytes()
            + self.percentages.estimated_bytes()
            + mem::size_of::<usize>()
    }
}

impl<T: EstimateSize> EstimateSize for Option<T> {
    fn estimated_bytes(&self) -> usize {
        match self {
            Some(value) => mem::size_of::<Self>() + value.estimated_bytes(),
            None => mem::size_of::<Self>(),
        }
    }
}

impl<T: EstimateSize> EstimateSize for Vec<T> {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<Self>() + sample_elements(self.len(), self.iter())
    }
}

impl<K: EstimateSize, V: EstimateSize> EstimateSize for BTreeMap<K, V> {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<Self>() + sample_entries(self.len(), self.iter())
    }
}

impl<K: EstimateSize, V: EstimateSize> EstimateSize for HashMap<K, V> {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<Self>() + sample_entries(self.len(), self.iter())
    }
}

/// Sums element estimates, extrapolating past the sample limit.
fn sample_elements<'a, T: EstimateSize + 'a>(
    len: usize,
    iter: impl Iterator<Item = &'a T>,
) -> usize {
    extrapolate(len, iter.take(CONTAINER_SAMPLE_LIMIT).map(T::estimated_bytes))
}

/// Sums key/value estimates plus per-entry overhead, extrapolating past the
/// sample limit.
fn sample_entries<'a, K: EstimateSize + 'a, V: EstimateSize + 'a>(
    len: usize,
    iter: impl Iterator<Item = (&'a K, &'a V)>,
) -> usize {
    extrapolate(
        len,
        iter.take(CONTAINER_SAMPLE_LIMIT)
            .map(|(k, v)| k.estimated_bytes() + v.estimated_bytes() + MAP_ENTRY_OVERHEAD),
    )
}

fn extrapolate(len: usize, sampled: impl Iterator<Item = usize>) -> usize {
    let sampled_total: usize = sampled.sum();
    if len <= CONTAINER_SAMPLE_LIMIT {
        return sampled_total;
    }
    trace!(
        len,
        sample = CONTAINER_SAMPLE_LIMIT,
        "size estimate capped; extrapolating from sample"
    );
    let average = sampled_total as f64 / CONTAINER_SAMPLE_LIMIT as f64;
    (average * len as f64) as usize
}
