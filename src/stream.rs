//! Stream Buffer — bounded FIFO with independent read/write cursors
//!
//! The sole data-passing mechanism between blocks. A buffer holds one fixed
//! element type and is observed through exactly two handles: a
//! [`StreamWriter`] owned by the producer block and a [`StreamReader`] owned
//! by the consumer block. Both are created together, once, and neither is
//! `Clone` — single-producer/single-consumer is a compile-time property, not
//! a runtime check.
//!
//! ## Cursor model
//!
//! ```text
//!   0            rd              wr         capacity
//!   ├── drained ──┼── in-flight ──┼── free ──┤
//!                 └─ read_view() ─┘└─ write_view() ─┘
//! ```
//!
//! The invariant `rd <= wr <= capacity` holds at all times. Consumed
//! elements are never re-read. When the producer needs space and drained
//! elements sit at the front, the in-flight region is packed back to offset
//! zero, so both views are always contiguous slices.
//!
//! The whole pipeline is single-threaded and cooperatively scheduled, so
//! there are no locks and no atomics here; interior mutability is a plain
//! `RefCell`.
//!
//! ## Example
//!
//! ```rust
//! use iqflow::stream::StreamBuffer;
//!
//! let (mut tx, mut rx) = StreamBuffer::<f64>::new(8, "demo");
//! let n = tx.writable().min(3);
//! tx.write_view()[..n].copy_from_slice(&[1.0, 2.0, 3.0]);
//! tx.written(n);
//!
//! assert_eq!(rx.readable(), 3);
//! assert_eq!(&rx.read_view()[..], &[1.0, 2.0, 3.0]);
//! rx.read(3);
//! assert_eq!(rx.readable(), 0);
//! ```

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

struct Inner<T> {
    data: Vec<T>,
    rd: usize,
    wr: usize,
    name: String,
}

impl<T: Default + Clone + Copy> Inner<T> {
    /// Move the in-flight region back to offset zero.
    fn pack(&mut self) {
        if self.rd > 0 {
            self.data.copy_within(self.rd..self.wr, 0);
            self.wr -= self.rd;
            self.rd = 0;
        }
    }
}

/// Constructor for a writer/reader handle pair over one shared buffer.
pub struct StreamBuffer<T> {
    _marker: std::marker::PhantomData<T>,
}

impl<T: Default + Clone> StreamBuffer<T> {
    /// Create a buffer of the given capacity and return its unique
    /// producer/consumer handles. Capacity is clamped to at least 1.
    /// The name is for diagnostics only.
    pub fn new(capacity: usize, name: &str) -> (StreamWriter<T>, StreamReader<T>) {
        let capacity = capacity.max(1);
        tracing::debug!(name, capacity, "creating stream buffer");
        let inner = Rc::new(RefCell::new(Inner {
            data: vec![T::default(); capacity],
            rd: 0,
            wr: 0,
            name: name.to_string(),
        }));
        (
            StreamWriter { inner: Rc::clone(&inner) },
            StreamReader { inner },
        )
    }
}

/// Consumer-side cursor handle.
pub struct StreamReader<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Default + Clone> StreamReader<T> {
    /// Number of elements available starting at the read cursor.
    pub fn readable(&self) -> usize {
        let b = self.inner.borrow();
        b.wr - b.rd
    }

    /// Borrow the readable region. Valid until the next cursor movement on
    /// either handle; holding it across one will panic the `RefCell`.
    pub fn read_view(&self) -> Ref<'_, [T]> {
        Ref::map(self.inner.borrow(), |b| &b.data[b.rd..b.wr])
    }

    /// Advance the read cursor by `n` elements. `n` must not exceed
    /// [`readable`](Self::readable).
    pub fn read(&mut self, n: usize) {
        let mut b = self.inner.borrow_mut();
        assert!(
            n <= b.wr - b.rd,
            "{}: read {} past {} readable",
            b.name,
            n,
            b.wr - b.rd
        );
        b.rd += n;
        // Fully drained: reset both cursors so the writer sees the whole
        // capacity without a memmove.
        if b.rd == b.wr {
            b.rd = 0;
            b.wr = 0;
        }
    }

    /// True when no elements are in flight.
    pub fn is_empty(&self) -> bool {
        self.readable() == 0
    }

    /// Diagnostic name of the underlying buffer.
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }
}

/// Producer-side cursor handle.
pub struct StreamWriter<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Default + Clone + Copy> StreamWriter<T> {
    /// Number of elements of free space starting at the write cursor.
    /// Packs drained elements out of the way first.
    pub fn writable(&self) -> usize {
        let mut b = self.inner.borrow_mut();
        b.pack();
        b.data.len() - b.wr
    }

    /// Borrow the writable region. Same validity rule as
    /// [`StreamReader::read_view`].
    pub fn write_view(&mut self) -> RefMut<'_, [T]> {
        let mut b = self.inner.borrow_mut();
        b.pack();
        RefMut::map(b, |b| {
            let wr = b.wr;
            &mut b.data[wr..]
        })
    }

    /// Commit `n` newly written elements, advancing the write cursor.
    /// `n` must not exceed [`writable`](Self::writable).
    pub fn written(&mut self, n: usize) {
        let mut b = self.inner.borrow_mut();
        assert!(
            b.wr + n <= b.data.len(),
            "{}: wrote {} past {} writable",
            b.name,
            n,
            b.data.len() - b.wr
        );
        b.wr += n;
    }

    /// Total capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.inner.borrow().data.len()
    }

    /// Diagnostic name of the underlying buffer.
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(tx: &mut StreamWriter<i32>, vals: &[i32]) {
        assert!(tx.writable() >= vals.len());
        tx.write_view()[..vals.len()].copy_from_slice(vals);
        tx.written(vals.len());
    }

    #[test]
    fn fifo_order() {
        let (mut tx, mut rx) = StreamBuffer::<i32>::new(8, "fifo");
        push(&mut tx, &[1, 2, 3]);
        assert_eq!(&rx.read_view()[..], &[1, 2, 3]);
        rx.read(2);
        assert_eq!(&rx.read_view()[..], &[3]);
        push(&mut tx, &[4, 5]);
        assert_eq!(&rx.read_view()[..], &[3, 4, 5]);
    }

    #[test]
    fn packing_reclaims_drained_space() {
        let (mut tx, mut rx) = StreamBuffer::<i32>::new(4, "pack");
        push(&mut tx, &[1, 2, 3, 4]);
        assert_eq!(tx.writable(), 0);
        rx.read(3);
        // Drained prefix is reclaimed, in-flight tail survives the move.
        assert_eq!(tx.writable(), 3);
        assert_eq!(&rx.read_view()[..], &[4]);
        push(&mut tx, &[5, 6, 7]);
        assert_eq!(&rx.read_view()[..], &[4, 5, 6, 7]);
    }

    #[test]
    fn full_drain_resets_cursors() {
        let (mut tx, mut rx) = StreamBuffer::<i32>::new(4, "reset");
        push(&mut tx, &[1, 2, 3, 4]);
        rx.read(4);
        assert_eq!(rx.readable(), 0);
        assert_eq!(tx.writable(), 4);
    }

    #[test]
    fn zero_capacity_clamped() {
        let (tx, _rx) = StreamBuffer::<i32>::new(0, "tiny");
        assert_eq!(tx.capacity(), 1);
    }

    #[test]
    #[should_panic]
    fn overread_panics() {
        let (mut tx, mut rx) = StreamBuffer::<i32>::new(4, "over");
        push(&mut tx, &[1]);
        rx.read(2);
    }

    #[test]
    #[should_panic]
    fn overwrite_panics() {
        let (mut tx, _rx) = StreamBuffer::<i32>::new(2, "over");
        tx.written(3);
    }
}
