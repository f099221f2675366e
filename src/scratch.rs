//! Fallible auxiliary storage.
//!
//! Algorithms that want extra memory ask a [`ScratchAlloc`] for it instead of calling
//! `Vec::with_capacity`, so that running out of memory is an ordinary `Err` they can recover from.

use std::mem;

use crate::error::ScratchError;

/// Source of empty vectors with a guaranteed capacity.
pub trait ScratchAlloc {
    /// Returns an empty vector that can hold at least `len` elements without reallocating.
    fn try_alloc<E>(&mut self, len: usize) -> Result<Vec<E>, ScratchError>;
}

impl<A: ScratchAlloc + ?Sized> ScratchAlloc for &mut A {
    #[inline]
    fn try_alloc<E>(&mut self, len: usize) -> Result<Vec<E>, ScratchError> {
        (**self).try_alloc(len)
    }
}

/// Allocates from the global allocator, reporting failure instead of aborting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Global;

impl ScratchAlloc for Global {
    #[inline]
    fn try_alloc<E>(&mut self, len: usize) -> Result<Vec<E>, ScratchError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)?;
        Ok(buf)
    }
}

/// Global allocation capped at a fixed number of bytes over the lifetime of the value.
///
/// `Budget::new(0)` refuses every non-empty request of a sized type, which is how the allocation
/// failure paths get exercised.
#[derive(Debug, Clone)]
pub struct Budget {
    remaining: usize,
}

impl Budget {
    pub fn new(bytes: usize) -> Self {
        Self { remaining: bytes }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl ScratchAlloc for Budget {
    fn try_alloc<E>(&mut self, len: usize) -> Result<Vec<E>, ScratchError> {
        let requested = len.saturating_mul(mem::size_of::<E>());
        if requested > self.remaining {
            return Err(ScratchError::BudgetExceeded {
                requested,
                remaining: self.remaining,
            });
        }

        let buf = Global.try_alloc(len)?;
        self.remaining -= requested;
        Ok(buf)
    }
}
