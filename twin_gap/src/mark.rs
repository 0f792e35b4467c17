// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

//! Positional handles into a [GapBuffer](crate::GapBuffer).
//!
//! A [Mark] names a position in the buffer's logical sequence without borrowing the buffer. It
//! stores an index into one of the two segments plus a snapshot of where the `before` segment
//! ended when the mark was made. That snapshot is all a mark needs to step across the cursor
//! boundary, so marks can be moved around freely and handed back to the buffer later.
//!
//! The snapshot goes stale as soon as the buffer changes shape. Every structural operation on
//! the buffer (inserting, erasing, moving the cursor, resizing, clearing, swapping) bumps a
//! generation counter, and passing a mark from an older generation back to the buffer is a
//! contract violation that trips a debug assertion.

use std::{cmp::Ordering, marker::PhantomData};

mod sealed {
    pub trait Sealed {}

    /// Physical home of an element: the segment it lives in and its index there.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Slot {
        Before(usize),
        After(usize),
    }

    pub trait Locate {
        /// Slot of the element named, or None for a handle one past the front of the buffer.
        fn element_slot(&self) -> Option<Slot>;
        fn generation(&self) -> u64;
    }
}

pub(crate) use sealed::{Locate as LocateSlot, Slot};

/// Access level of a mark.
///
/// Marks made from a shared borrow of the buffer ([Shared]) can only read through
/// [GapBuffer::at](crate::GapBuffer::at). Marks made from a mutable borrow ([Exclusive]) may
/// also write through [GapBuffer::at_mut](crate::GapBuffer::at_mut) and address insertions
/// and erasures.
pub trait Access: sealed::Sealed {}

/// Read-only access. See [Access].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shared;

/// Read-write access. See [Access].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Exclusive;

impl sealed::Sealed for Shared {}
impl sealed::Sealed for Exclusive {}
impl Access for Shared {}
impl Access for Exclusive {}

/// Anything that names an element of a [GapBuffer](crate::GapBuffer): a [Mark] or a
/// [RevMark].
pub trait Locate: sealed::Locate {
    /// Access level of this handle.
    type Access: Access;
}

/// Forward position in a [GapBuffer](crate::GapBuffer).
///
/// Stepping a mark forward walks the `before` segment and then jumps to the start of the
/// `after` segment. A mark sitting exactly on the cursor is always stored in its canonical
/// form: index 0 of the `after` segment.
///
/// ### Examples
/// ```
/// use twin_gap::GapBuffer;
///
/// let mut buffer = GapBuffer::from(['a', 'b', 'c', 'd']);
/// buffer.set_cursor(2);
///
/// let mut mark = buffer.begin();
/// mark.increment();
/// mark.increment();
/// assert_eq!(mark, buffer.here());
/// assert_eq!(buffer.at(&mark), Some(&'c'));
///
/// assert_eq!(mark.distance_to(&buffer.end()), 2);
/// assert_eq!(buffer.begin().distance_to(&buffer.end()), 4);
/// ```
#[derive(Debug)]
pub struct Mark<A = Shared> {
    location: usize,
    is_before: bool,
    before_end: usize,
    generation: u64,
    access: PhantomData<A>,
}

/// Read-only forward mark.
pub type ConstMark = Mark<Shared>;
/// Read-write forward mark.
pub type MutMark = Mark<Exclusive>;

impl<A: Access> Mark<A> {
    /// Builds a mark, folding the end of `before` onto the canonical start of `after`.
    pub(crate) fn new(location: usize, is_before: bool, before_end: usize, generation: u64) -> Self {
        let mut mark = Self {
            location,
            is_before,
            before_end,
            generation,
            access: PhantomData,
        };
        mark.canonicalize();
        mark
    }

    fn canonicalize(&mut self) {
        if self.is_before && self.location == self.before_end {
            self.location = 0;
            self.is_before = false;
        }
    }

    /// Steps one element toward the end of the buffer.
    ///
    /// Stepping past [GapBuffer::end](crate::GapBuffer::end) is a contract violation.
    pub fn increment(&mut self) {
        self.location += 1;
        self.canonicalize();
    }

    /// Steps one element toward the start of the buffer.
    ///
    /// Stepping before [GapBuffer::begin](crate::GapBuffer::begin) is a contract violation.
    pub fn decrement(&mut self) {
        if !self.is_before && self.location == 0 {
            debug_assert!(self.before_end > 0, "Decremented a mark before the start of its buffer");
            self.location = self.before_end;
            self.is_before = true;
        }
        self.location -= 1;
    }

    /// Moves the mark `n` elements, toward the end for positive `n` and toward the start for
    /// negative `n`.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([10, 20, 30, 40, 50]);
    /// buffer.set_cursor(1);
    ///
    /// let mut mark = buffer.begin();
    /// mark.advance(3);
    /// assert_eq!(buffer.at(&mark), Some(&40));
    ///
    /// mark.advance(-3);
    /// assert_eq!(mark, buffer.begin());
    /// ```
    pub fn advance(&mut self, n: isize) {
        let mut steps = n.unsigned_abs();
        if n >= 0 {
            if self.is_before {
                let remaining = self.before_end - self.location;
                if remaining <= steps {
                    steps -= remaining;
                    self.location = 0;
                    self.is_before = false;
                }
            }
            self.location += steps;
        } else {
            if !self.is_before && self.location < steps {
                steps -= self.location;
                self.location = self.before_end;
                self.is_before = true;
            }
            self.location -= steps;
        }
    }

    /// Number of increments needed to get from this mark to `other`. Negative when `other`
    /// comes first.
    ///
    /// Both marks must come from the same buffer generation.
    pub fn distance_to(&self, other: &Self) -> isize {
        match (self.is_before, other.is_before) {
            (true, true) | (false, false) => signed(other.location) - signed(self.location),
            (true, false) => signed(self.before_end - self.location + other.location),
            (false, true) => -other.distance_to(self),
        }
    }

    /// Index of the mark in the buffer's logical sequence.
    pub fn offset(&self) -> usize {
        if self.is_before {
            self.location
        } else {
            self.before_end + self.location
        }
    }

    /// True for the mark sitting on the cursor.
    pub fn is_at_cursor(&self) -> bool {
        !self.is_before && self.location == 0
    }
}

fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

impl<A> Clone for Mark<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Mark<A> {}

// Positions compare by physical location. The two segments index independently, so the
// segment flag is part of that location.
impl<A> PartialEq for Mark<A> {
    fn eq(&self, other: &Self) -> bool {
        self.is_before == other.is_before && self.location == other.location
    }
}

impl<A> Eq for Mark<A> {}

impl<A: Access> PartialOrd for Mark<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Access> Ord for Mark<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset().cmp(&other.offset())
    }
}

impl From<Mark<Exclusive>> for Mark<Shared> {
    fn from(value: Mark<Exclusive>) -> Self {
        Self {
            location: value.location,
            is_before: value.is_before,
            before_end: value.before_end,
            generation: value.generation,
            access: PhantomData,
        }
    }
}

impl<A> Mark<A> {
    pub(crate) fn slot(&self) -> Slot {
        if self.is_before {
            Slot::Before(self.location)
        } else {
            Slot::After(self.location)
        }
    }
}

impl<A> sealed::Locate for Mark<A> {
    fn element_slot(&self) -> Option<Slot> {
        Some(self.slot())
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl<A: Access> Locate for Mark<A> {
    type Access = A;
}

/// Reverse position in a [GapBuffer](crate::GapBuffer).
///
/// A reverse mark wraps a forward [Mark] (its [base](RevMark::base)) and names the element just
/// before it, so walking a reverse mark forward walks the buffer from back to front.
///
/// ### Examples
/// ```
/// use twin_gap::GapBuffer;
///
/// let mut buffer = GapBuffer::from("abcd".chars().collect::<Vec<_>>());
/// buffer.set_cursor(1);
///
/// let mut mark = buffer.rbegin();
/// let mut reversed = String::new();
/// while mark != buffer.rend() {
///     reversed.push(*buffer.at(&mark).unwrap());
///     mark.increment();
/// }
/// assert_eq!(reversed, "dcba");
///
/// assert_eq!(buffer.at(&buffer.rhere()), Some(&'a'));
/// ```
#[derive(Debug)]
pub struct RevMark<A = Shared> {
    base: Mark<A>,
}

/// Read-only reverse mark.
pub type ConstRevMark = RevMark<Shared>;
/// Read-write reverse mark.
pub type MutRevMark = RevMark<Exclusive>;

impl<A: Access> RevMark<A> {
    pub(crate) fn new(base: Mark<A>) -> Self {
        Self { base }
    }

    /// The forward mark one past the element this reverse mark names.
    pub fn base(&self) -> Mark<A> {
        self.base
    }

    /// Steps one element toward the start of the buffer.
    pub fn increment(&mut self) {
        self.base.decrement();
    }

    /// Steps one element toward the end of the buffer.
    pub fn decrement(&mut self) {
        self.base.increment();
    }

    /// Moves the mark `n` elements toward the start of the buffer (toward the end for negative
    /// `n`).
    pub fn advance(&mut self, n: isize) {
        self.base.advance(-n);
    }

    /// Number of increments needed to get from this mark to `other`.
    pub fn distance_to(&self, other: &Self) -> isize {
        other.base.distance_to(&self.base)
    }
}

impl<A> Clone for RevMark<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for RevMark<A> {}

impl<A> PartialEq for RevMark<A> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<A> Eq for RevMark<A> {}

impl From<RevMark<Exclusive>> for RevMark<Shared> {
    fn from(value: RevMark<Exclusive>) -> Self {
        Self {
            base: value.base.into(),
        }
    }
}

impl<A: Access> sealed::Locate for RevMark<A> {
    fn element_slot(&self) -> Option<Slot> {
        if self.base.offset() == 0 {
            return None;
        }

        let mut element = self.base;
        element.decrement();
        Some(element.slot())
    }

    fn generation(&self) -> u64 {
        self.base.generation
    }
}

impl<A: Access> Locate for RevMark<A> {
    type Access = A;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(location: usize, is_before: bool, before_end: usize) -> ConstMark {
        Mark::new(location, is_before, before_end, 0)
    }

    #[test]
    fn end_of_before_folds_onto_start_of_after() {
        assert_eq!(mark(3, true, 3), mark(0, false, 3));
        assert!(mark(3, true, 3).is_at_cursor());
        assert_ne!(mark(0, true, 3), mark(0, false, 3));
    }

    #[test]
    fn increment_jumps_the_cursor() {
        let mut walker = mark(1, true, 2);
        walker.increment();
        assert_eq!(walker.slot(), Slot::After(0));
        walker.increment();
        assert_eq!(walker.slot(), Slot::After(1));
    }

    #[test]
    fn decrement_jumps_back_over_the_cursor() {
        let mut walker = mark(0, false, 2);
        walker.decrement();
        assert_eq!(walker.slot(), Slot::Before(1));
        walker.decrement();
        assert_eq!(walker.slot(), Slot::Before(0));
    }

    #[test]
    fn advance_crosses_in_both_directions() {
        let mut walker = mark(0, true, 4);
        walker.advance(4);
        assert!(walker.is_at_cursor());
        walker.advance(3);
        assert_eq!(walker.slot(), Slot::After(3));
        assert_eq!(walker.offset(), 7);

        walker.advance(-3);
        assert!(walker.is_at_cursor());
        walker.advance(-1);
        assert_eq!(walker.slot(), Slot::Before(3));
        walker.advance(-3);
        assert_eq!(walker.offset(), 0);

        walker.advance(0);
        assert_eq!(walker.offset(), 0);
    }

    #[test]
    fn distance_is_signed_across_segments() {
        let start = mark(1, true, 3);
        let later = mark(2, false, 3);
        assert_eq!(start.distance_to(&later), 4);
        assert_eq!(later.distance_to(&start), -4);
        assert_eq!(later.distance_to(&later), 0);
        assert_eq!(mark(2, true, 3).distance_to(&mark(0, true, 3)), -2);
    }

    #[test]
    fn reverse_marks_name_the_element_before_their_base() {
        let rev = RevMark::new(mark(0, false, 2));
        assert_eq!(rev.element_slot(), Some(Slot::Before(1)));

        let rev = RevMark::new(mark(2, false, 2));
        assert_eq!(rev.element_slot(), Some(Slot::After(1)));

        let mut walker = RevMark::new(mark(2, false, 2));
        let end = RevMark::new(mark(0, true, 2));
        assert_eq!(walker.distance_to(&end), 4);
        walker.advance(4);
        assert_eq!(walker, end);
    }

    #[test]
    fn reverse_mark_past_the_front_names_nothing() {
        assert_eq!(RevMark::new(mark(0, true, 2)).element_slot(), None);
        assert_eq!(RevMark::new(mark(0, false, 0)).element_slot(), None);
        assert_eq!(RevMark::new(mark(1, true, 2)).element_slot(), Some(Slot::Before(0)));
    }

    #[test]
    fn exclusive_marks_convert_to_shared() {
        let exclusive: MutMark = Mark::new(1, true, 2, 7);
        let shared: ConstMark = exclusive.into();
        assert_eq!(shared.offset(), 1);
        assert_eq!(sealed::Locate::generation(&shared), 7);

        let rev: ConstRevMark = RevMark::new(exclusive).into();
        assert_eq!(rev.base(), shared);
    }
}
