//! Block trait — the unit the external scheduler drives
//!
//! A pipeline is a directed graph of blocks connected by stream buffers.
//! The driver loop (outside this crate) calls [`Block::step`] on each block
//! repeatedly, in some order, forever. A step never blocks, sleeps, or
//! waits: it consumes whatever contiguous input is available, produces
//! whatever fits in the available output space, and returns. Insufficient
//! data or space is backpressure, expressed by processing zero elements and
//! being retried on a later pass.

/// A stateful streaming transformation invoked repeatedly by a scheduler.
pub trait Block {
    /// Process the largest prefix the connected buffers currently allow,
    /// possibly zero elements, then return. Must never block.
    fn step(&mut self);

    /// Human-readable name, for diagnostics only.
    fn name(&self) -> &str;
}
