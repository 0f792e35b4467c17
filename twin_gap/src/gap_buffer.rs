// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{
    cmp::Ordering,
    collections::VecDeque,
    fmt,
    hash::{Hash, Hasher},
    iter,
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut},
};

use tracing::trace;

use crate::{
    iter::{IntoIter, Iter, IterMut},
    mark::{
        Access, ConstMark, ConstRevMark, Exclusive, Locate, LocateSlot, Mark, MutMark,
        MutRevMark, RevMark, Slot,
    },
    segment::Segment,
};

/// A growable gap buffer holding elements of type T in two segments of type S.
///
/// Intended for efficient insertion and removal of elements at the buffer's movable cursor.
/// The elements before the cursor live in one segment and the elements after it in another;
/// their concatenation is the buffer's content.
///
/// # Examples
/// ```
/// use twin_gap::GapBuffer;
///
/// let mut buffer: GapBuffer<char> = "this is a test".chars().collect();
/// assert_eq!(buffer.position(), 14);
///
/// buffer.advance(-4);
/// buffer.insert_iter("fine ".chars());
/// assert_eq!(buffer.to_string(), "this is a fine test");
/// assert_eq!(buffer.position(), 15);
///
/// buffer.erase(-5);
/// buffer.erase(4);
/// assert_eq!(buffer.to_string(), "this is a ");
/// assert_eq!(buffer.position(), 10);
/// ```
///
/// # Cursor
///
/// The cursor sits between two elements. The convention of this crate is that a cursor at
/// position `I` sits between element `I - 1` and element `I`, so the cursor can be anywhere
/// from `0` to `len()` inclusive. The cursor position is always the length of the `before`
/// segment.
///
/// With "_" indicating the cursor at position 2:
/// ```text
///       Cursor
///        |
///        v
/// [0, 1, _ 2, 3]
/// ```
///
/// Inserting at the cursor ([insert](GapBuffer::insert), [insert_iter](GapBuffer::insert_iter))
/// pushes onto the back of `before` and moves the cursor past the new elements. Erasing at the
/// cursor ([erase](GapBuffer::erase)) removes from whichever side the sign of its argument
/// names and leaves the cursor where it is. Moving the cursor a distance `d` with
/// [advance](GapBuffer::advance) relocates `d` elements from one segment to the other.
///
/// # Equality and ordering
///
/// Comparisons look at the logical content only. Two buffers holding the same elements are
/// equal no matter where their cursors are.
///
/// ```
/// use twin_gap::GapBuffer;
///
/// let mut left = GapBuffer::from([1, 2, 3]);
/// let right = GapBuffer::from([1, 2, 3]);
/// left.set_cursor(1);
/// assert_eq!(left, right);
/// assert!(left < GapBuffer::from([1, 2, 4]));
/// ```
///
/// # Marks
///
/// [Mark]s and [RevMark]s name positions in the buffer without borrowing it. They are made by
/// [begin](GapBuffer::begin), [end](GapBuffer::end), [here](GapBuffer::here) and their reverse
/// and `_mut` counterparts, and they address [insert_at](GapBuffer::insert_at),
/// [erase_at](GapBuffer::erase_at) and friends. Any structural change to the buffer invalidates
/// every mark taken before it.
pub struct GapBuffer<T, S = VecDeque<T>> {
    before: S,
    after: S,
    generation: u64,
    element: PhantomData<T>,
}

impl<T> GapBuffer<T> {
    /// Creates a new empty GapBuffer with cursor at 0, backed by [VecDeque] segments.
    ///
    /// Use [Default] or [from_segments](GapBuffer::from_segments) for other segment types.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let buffer = GapBuffer::<i32>::new();
    ///
    /// assert_eq!(buffer.position(), 0);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, S: Segment<T>> GapBuffer<T, S> {
    /// Creates a GapBuffer from its two segments. The cursor lands between them.
    ///
    /// ### Examples
    /// ```
    /// use std::collections::LinkedList;
    /// use twin_gap::GapBuffer;
    ///
    /// let buffer: GapBuffer<i32, LinkedList<i32>> = GapBuffer::from_segments(
    ///     LinkedList::from([1, 2]),
    ///     LinkedList::from([3]),
    /// );
    /// assert_eq!(buffer.position(), 2);
    /// assert_eq!(buffer, [1, 2, 3]);
    /// ```
    pub fn from_segments(before: S, after: S) -> Self {
        Self {
            before,
            after,
            generation: 0,
            element: PhantomData,
        }
    }

    /// Splits the GapBuffer back into its `before` and `after` segments.
    pub fn into_segments(self) -> (S, S) {
        (self.before, self.after)
    }

    /// Borrows the `before` and `after` segments.
    pub fn segments(&self) -> (&S, &S) {
        (&self.before, &self.after)
    }

    /// Creates a GapBuffer holding `len` copies of `value` with the cursor at the end.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let buffer: GapBuffer<char> = GapBuffer::filled(3, 'z');
    ///
    /// assert_eq!(buffer.to_string(), "zzz");
    /// assert_eq!(buffer.position(), 3);
    /// ```
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut before = S::default();
        before.resize(len, value);
        Self::from_segments(before, S::default())
    }

    /// Returns the number of elements currently stored in the gap buffer.
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    /// Returns true if the gap buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    /// Returns the largest number of elements the gap buffer could hold.
    ///
    /// The `before` segment can end up holding every element (the cursor may sit at the end),
    /// so its limit bounds the whole buffer.
    pub fn max_len(&self) -> usize {
        self.before.max_len()
    }

    /// Exchanges the content and cursor of two gap buffers. Costs whatever swapping the segment
    /// values costs, which is O(1) for every segment this crate implements.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut first = GapBuffer::from([1, 2, 3]);
    /// let mut second = GapBuffer::from([4, 5]);
    /// second.set_cursor(0);
    ///
    /// first.swap(&mut second);
    ///
    /// assert_eq!(first, [4, 5]);
    /// assert_eq!(first.position(), 0);
    /// assert_eq!(second, [1, 2, 3]);
    /// assert_eq!(second.position(), 3);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.before, &mut other.before);
        mem::swap(&mut self.after, &mut other.after);
        trace!(
            position = self.position(),
            other_position = other.position(),
            "swapped gap buffers"
        );
        self.bump_generation();
        other.bump_generation();
    }

    /// Returns the first element of the gap buffer, or None if it is empty.
    pub fn front(&self) -> Option<&T> {
        self.before.front().or_else(|| self.after.front())
    }

    /// Mutable version of [front](GapBuffer::front).
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.before.is_empty() {
            self.after.front_mut()
        } else {
            self.before.front_mut()
        }
    }

    /// Returns the last element of the gap buffer, or None if it is empty.
    pub fn back(&self) -> Option<&T> {
        self.after.back().or_else(|| self.before.back())
    }

    /// Mutable version of [back](GapBuffer::back).
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.after.is_empty() {
            self.before.back_mut()
        } else {
            self.after.back_mut()
        }
    }

    /// Removes every element and moves the cursor to 0.
    pub fn clear(&mut self) {
        self.before.clear();
        self.after.clear();
        self.bump_generation();
    }

    /// Resizes the gap buffer to `len` elements. Growing pads the end with copies of `value`;
    /// shrinking drops elements from the end.
    ///
    /// The cursor only moves when the new length falls before it, in which case it lands at the
    /// new end.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([1, 2, 3, 4]);
    /// buffer.set_cursor(2);
    ///
    /// buffer.resize(6, 0);
    /// assert_eq!(buffer, [1, 2, 3, 4, 0, 0]);
    /// assert_eq!(buffer.position(), 2);
    ///
    /// buffer.resize(3, 0);
    /// assert_eq!(buffer, [1, 2, 3]);
    /// assert_eq!(buffer.position(), 2);
    ///
    /// buffer.resize(1, 0);
    /// assert_eq!(buffer, [1]);
    /// assert_eq!(buffer.position(), 1);
    /// ```
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        if len <= self.before.len() || self.after.is_empty() {
            self.after.clear();
            self.before.resize(len, value);
        } else {
            let after_len = len - self.before.len();
            self.after.resize(after_len, value);
        }
        trace!(len, position = self.position(), "resized gap buffer");
        self.bump_generation();
    }

    /// Returns the current cursor position, which is the number of elements before it.
    pub fn position(&self) -> usize {
        self.before.len()
    }

    /// Moves the cursor `delta` positions without changing the content. Negative values move
    /// toward the start of the buffer. Runs in O(|delta|).
    ///
    /// Panics if the move would leave the bounds of the buffer.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    ///
    /// buffer.advance(-3);
    /// assert_eq!(buffer.position(), 1);
    /// assert_eq!(buffer.precursor(), Some(&0));
    ///
    /// buffer.advance(2);
    /// assert_eq!(buffer.position(), 3);
    /// assert_eq!(buffer, [0, 1, 2, 3]);
    /// ```
    pub fn advance(&mut self, delta: isize) {
        let distance = delta.unsigned_abs();
        match delta.cmp(&0) {
            Ordering::Less => self.move_cursor_left(distance),
            Ordering::Greater => self.move_cursor_right(distance),
            Ordering::Equal => (),
        }
    }

    /// Moves the cursor to `index`. Runs in O(|I-N|) where I is the current cursor position
    /// and N is the new one.
    ///
    /// Panics if the index is an invalid cursor position (i.e., is strictly greater than the
    /// length of the buffer).
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0]);
    /// buffer.push_before_cursor(1);
    /// assert_eq!(buffer, [0, 1]);
    ///
    /// buffer.set_cursor(0);
    /// buffer.push_before_cursor(2);
    /// assert_eq!(buffer, [2, 0, 1]);
    /// assert_eq!(buffer.position(), 1);
    /// ```
    pub fn set_cursor(&mut self, index: usize) {
        if index > self.len() {
            panic!(
                "Expected cursor index ({}) for set_cursor to be within the bounds of GapBuffer (len: {})",
                index,
                self.len()
            );
        }

        let position = self.position();
        match index.cmp(&position) {
            Ordering::Less => self.move_cursor_left(position - index),
            Ordering::Greater => self.move_cursor_right(index - position),
            Ordering::Equal => (),
        }
    }

    /// Removes `|delta|` elements next to the cursor without moving it. Negative values remove
    /// the elements just before the cursor, positive values the elements just after it.
    ///
    /// Panics if there are fewer than `|delta|` elements on that side of the cursor.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);
    /// buffer.set_cursor(3);
    ///
    /// buffer.erase(2);
    /// assert_eq!(buffer, [0, 1, 2, 5]);
    /// assert_eq!(buffer.position(), 3);
    ///
    /// buffer.erase(-2);
    /// assert_eq!(buffer, [0, 5]);
    /// assert_eq!(buffer.position(), 1);
    /// ```
    pub fn erase(&mut self, delta: isize) {
        let distance = delta.unsigned_abs();
        match delta.cmp(&0) {
            Ordering::Less => {
                let before_len = self.before.len();
                assert!(
                    distance <= before_len,
                    "Expected to erase at most {} elements before the cursor of GapBuffer, got {}",
                    before_len,
                    distance
                );
                self.before.truncate(before_len - distance);
            }
            Ordering::Greater => {
                let after_len = self.after.len();
                assert!(
                    distance <= after_len,
                    "Expected to erase at most {} elements after the cursor of GapBuffer, got {}",
                    after_len,
                    distance
                );
                self.after.remove_range(0..distance);
            }
            Ordering::Equal => return,
        }
        self.bump_generation();
    }

    /// Inserts a value at the cursor and moves the cursor past it. Returns the new cursor
    /// position.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// assert_eq!(buffer.insert('x'), 1);
    /// assert_eq!(buffer.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> usize {
        self.before.push_back(value);
        self.bump_generation();
        self.position()
    }

    /// Inserts every value of `values` at the cursor, in order, and moves the cursor past them.
    /// Returns the new cursor position.
    pub fn insert_iter<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.before.extend(values);
        self.bump_generation();
        self.position()
    }

    /// Adds a value to the GapBuffer at the index immediately after the cursor. Does not move
    /// the cursor itself.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// buffer.push_after_cursor(0);
    /// buffer.push_after_cursor(1);
    ///
    /// assert_eq!(buffer.position(), 0);
    /// assert_eq!(buffer, [1, 0]);
    /// ```
    pub fn push_after_cursor(&mut self, value: T) {
        self.after.push_front(value);
        self.bump_generation();
    }

    /// Adds a value to the GapBuffer at the index immediately before the cursor. Moves the
    /// cursor one element forward to stay ahead of the newly inserted element.
    pub fn push_before_cursor(&mut self, value: T) {
        self.insert(value);
    }

    /// Removes the value immediately after the cursor. Does not move the cursor. Returns the
    /// popped value if one exists.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(2);
    ///
    /// assert_eq!(buffer.pop_after_cursor(), Some(2));
    /// assert_eq!(buffer.pop_after_cursor(), Some(3));
    /// assert_eq!(buffer.pop_after_cursor(), None);
    ///
    /// assert_eq!(buffer.position(), 2);
    /// assert_eq!(buffer, [0, 1]);
    /// ```
    pub fn pop_after_cursor(&mut self) -> Option<T> {
        let popped = self.after.pop_front();
        if popped.is_some() {
            self.bump_generation();
        }
        popped
    }

    /// Removes the value immediately before the cursor, moving the cursor back one index to
    /// take its place. Returns the popped value if one exists.
    pub fn pop_before_cursor(&mut self) -> Option<T> {
        let popped = self.before.pop_back();
        if popped.is_some() {
            self.bump_generation();
        }
        popped
    }

    /// Returns the value immediately before the cursor if one exists.
    pub fn precursor(&self) -> Option<&T> {
        self.before.back()
    }

    /// Returns the value immediately after the cursor if one exists.
    pub fn postcursor(&self) -> Option<&T> {
        self.after.front()
    }

    /// Returns the value `index` steps back from the cursor. The value immediately before the
    /// cursor is precursor element 0, which makes `get_precursor(position() - 1)` the first
    /// element of the buffer.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([1, 2, 3]);
    /// buffer.set_cursor(2);
    ///
    /// assert_eq!(buffer.get_precursor(0), Some(&2));
    /// assert_eq!(buffer.get_precursor(1), Some(&1));
    /// assert_eq!(buffer.get_precursor(2), None);
    /// ```
    pub fn get_precursor(&self, index: usize) -> Option<&T> {
        let before_len = self.before.len();
        if index >= before_len {
            None
        } else {
            self.before.get(before_len - index - 1)
        }
    }

    /// Returns the value `index` steps forward from the cursor. The value immediately after the
    /// cursor is postcursor element 0.
    pub fn get_postcursor(&self, index: usize) -> Option<&T> {
        self.after.get(index)
    }

    /// Returns a reference to the element at `index`, or None if the index is out of bounds.
    ///
    /// Index is with respect to the beginning of the gap buffer data, not to the cursor.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(2);
    ///
    /// assert_eq!(buffer.get(2), Some(&2));
    /// assert_eq!(buffer.get(4), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        let before_len = self.before.len();
        if index < before_len {
            self.before.get(index)
        } else {
            self.after.get(index - before_len)
        }
    }

    /// Returns a mutable reference to the element at `index`, or None if the index is out of
    /// bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let before_len = self.before.len();
        if index < before_len {
            self.before.get_mut(index)
        } else {
            self.after.get_mut(index - before_len)
        }
    }

    /// Returns an iterator over the gap buffer in logical order, regardless of the cursor.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.set_cursor(1);
    ///
    /// let collected: Vec<_> = buffer.iter().collect();
    /// assert_eq!(collected, [&0, &1, &2]);
    ///
    /// let reversed: Vec<_> = buffer.iter().rev().collect();
    /// assert_eq!(reversed, [&2, &1, &0]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter::new(&self.before, &self.after)
    }

    /// Returns an iterator that allows modifying each element, in logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, S> {
        IterMut::new(&mut self.before, &mut self.after)
    }

    /// Returns an iterator over only the elements before the cursor.
    pub fn precursor_iter(&self) -> S::Iter<'_> {
        self.before.iter()
    }

    /// Returns an iterator over only the elements after the cursor.
    pub fn postcursor_iter(&self) -> S::Iter<'_> {
        self.after.iter()
    }
}

/// Marks
impl<T, S: Segment<T>> GapBuffer<T, S> {
    /// Mark on the first element.
    pub fn begin(&self) -> ConstMark {
        self.mark_at(Slot::Before(0))
    }

    /// Mark one past the last element.
    pub fn end(&self) -> ConstMark {
        self.mark_at(Slot::After(self.after.len()))
    }

    /// Mark on the cursor, naming the first element after it.
    pub fn here(&self) -> ConstMark {
        self.mark_at(Slot::After(0))
    }

    /// Reverse mark on the last element.
    pub fn rbegin(&self) -> ConstRevMark {
        RevMark::new(self.end())
    }

    /// Reverse mark one before the first element.
    pub fn rend(&self) -> ConstRevMark {
        RevMark::new(self.begin())
    }

    /// Reverse mark on the cursor, naming the first element before it.
    pub fn rhere(&self) -> ConstRevMark {
        RevMark::new(self.here())
    }

    /// Exclusive version of [begin](GapBuffer::begin), accepted by the editing operations.
    pub fn begin_mut(&mut self) -> MutMark {
        self.mark_at(Slot::Before(0))
    }

    /// See [end](GapBuffer::end).
    pub fn end_mut(&mut self) -> MutMark {
        self.mark_at(Slot::After(self.after.len()))
    }

    /// See [here](GapBuffer::here).
    pub fn here_mut(&mut self) -> MutMark {
        self.mark_at(Slot::After(0))
    }

    /// See [rbegin](GapBuffer::rbegin).
    pub fn rbegin_mut(&mut self) -> MutRevMark {
        RevMark::new(self.end_mut())
    }

    /// See [rend](GapBuffer::rend).
    pub fn rend_mut(&mut self) -> MutRevMark {
        RevMark::new(self.begin_mut())
    }

    /// See [rhere](GapBuffer::rhere).
    pub fn rhere_mut(&mut self) -> MutRevMark {
        RevMark::new(self.here_mut())
    }

    /// Returns the element a mark names, or None for a mark one past either end.
    pub fn at<M: Locate>(&self, mark: &M) -> Option<&T> {
        self.check_mark(mark);
        match mark.element_slot()? {
            Slot::Before(index) => self.before.get(index),
            Slot::After(index) => self.after.get(index),
        }
    }

    /// Returns the element an exclusive mark names, mutably.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([1, 2, 3]);
    /// let mark = buffer.rbegin_mut();
    /// if let Some(last) = buffer.at_mut(&mark) {
    ///     *last = 30;
    /// }
    /// assert_eq!(buffer, [1, 2, 30]);
    /// ```
    pub fn at_mut<M: Locate<Access = Exclusive>>(&mut self, mark: &M) -> Option<&mut T> {
        self.check_mark(mark);
        match mark.element_slot()? {
            Slot::Before(index) => self.before.get_mut(index),
            Slot::After(index) => self.after.get_mut(index),
        }
    }

    /// Inserts `value` at `mark` and returns a mark just past it.
    ///
    /// Inserting at a mark that sits before the cursor moves the cursor forward. A mark on the
    /// cursor inserts exactly as [insert](GapBuffer::insert) does, so the cursor moves past the
    /// new element as well. Inserting after the cursor leaves it alone.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from(['a', 'c']);
    /// buffer.set_cursor(1);
    ///
    /// let mark = buffer.here_mut();
    /// let next = buffer.insert_at(mark, 'b');
    /// assert_eq!(buffer.to_string(), "abc");
    /// assert_eq!(buffer.position(), 2);
    /// assert_eq!(buffer.at(&next), Some(&'c'));
    /// ```
    pub fn insert_at(&mut self, mark: MutMark, value: T) -> MutMark {
        self.insert_iter_at(mark, iter::once(value))
    }

    /// Inserts `count` copies of `value` at `mark`. See [insert_at](GapBuffer::insert_at).
    pub fn insert_n_at(&mut self, mark: MutMark, count: usize, value: T) -> MutMark
    where
        T: Clone,
    {
        self.insert_iter_at(mark, iter::repeat(value).take(count))
    }

    /// Inserts every value of `values` at `mark`, in order. See [insert_at](GapBuffer::insert_at).
    pub fn insert_iter_at<I>(&mut self, mark: MutMark, values: I) -> MutMark
    where
        I: IntoIterator<Item = T>,
    {
        self.check_mark(&mark);
        let next = match mark.slot() {
            Slot::After(0) => {
                self.before.extend(values);
                Slot::After(0)
            }
            Slot::Before(index) => {
                let inserted = self.before.insert_iter(index, values);
                Slot::Before(index + inserted)
            }
            Slot::After(index) => {
                let inserted = self.after.insert_iter(index, values);
                Slot::After(index + inserted)
            }
        };
        self.bump_generation();
        self.mark_at(next)
    }

    /// Removes the element at `mark` and returns a mark on the element that followed it.
    ///
    /// Erasing the last element before the cursor returns the mark on the cursor.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([1, 2, 3]);
    /// buffer.set_cursor(2);
    ///
    /// let mut mark = buffer.begin_mut();
    /// mark.increment();
    /// let next = buffer.erase_at(mark);
    /// assert_eq!(buffer, [1, 3]);
    /// assert_eq!(buffer.position(), 1);
    /// assert!(next.is_at_cursor());
    /// ```
    pub fn erase_at(&mut self, mark: MutMark) -> MutMark {
        self.check_mark(&mark);
        let (removed, next) = match mark.slot() {
            Slot::Before(index) => (self.before.remove(index), Slot::Before(index)),
            Slot::After(index) => (self.after.remove(index), Slot::After(index)),
        };
        debug_assert!(removed.is_some(), "Erased past the end of a GapBuffer");
        self.bump_generation();
        self.mark_at(next)
    }

    /// Removes the elements from `first` up to but not including `last`, and returns a mark on
    /// the element that followed them.
    ///
    /// A range that reaches the cursor from before it returns the mark on the cursor.
    ///
    /// ### Examples
    /// ```
    /// use twin_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);
    /// buffer.set_cursor(3);
    ///
    /// let mut first = buffer.begin_mut();
    /// first.advance(1);
    /// let mut last = first;
    /// last.advance(3);
    ///
    /// let next = buffer.erase_range(first, last);
    /// assert_eq!(buffer, [0, 4, 5]);
    /// assert_eq!(buffer.position(), 1);
    /// assert!(next.is_at_cursor());
    /// assert_eq!(buffer.at(&next), Some(&4));
    /// ```
    pub fn erase_range(&mut self, first: MutMark, last: MutMark) -> MutMark {
        self.check_mark(&first);
        self.check_mark(&last);
        let next = match (first.slot(), last.slot()) {
            (Slot::Before(start), Slot::Before(end)) => {
                self.before.remove_range(start..end);
                Slot::Before(start)
            }
            (Slot::Before(start), Slot::After(end)) => {
                let before_len = self.before.len();
                self.before.remove_range(start..before_len);
                self.after.remove_range(0..end);
                Slot::After(0)
            }
            (Slot::After(start), Slot::After(end)) => {
                self.after.remove_range(start..end);
                Slot::After(start)
            }
            (Slot::After(_), Slot::Before(_)) => panic!(
                "Expected the start of an erased range ({}) to precede its end ({})",
                first.offset(),
                last.offset()
            ),
        };
        trace!(
            first = first.offset(),
            last = last.offset(),
            position = self.position(),
            "erased range from gap buffer"
        );
        self.bump_generation();
        self.mark_at(next)
    }
}

impl<T, S: Segment<T>> GapBuffer<T, S> {
    fn move_cursor_left(&mut self, distance: usize) {
        let before_len = self.before.len();
        assert!(
            distance <= before_len,
            "Expected cursor to move at most {} positions left within GapBuffer, got {}",
            before_len,
            distance
        );

        let moved = self.before.split_off(before_len - distance);
        self.after.prepend(moved);
        trace!(distance, position = self.position(), "moved cursor left");
        self.bump_generation();
    }

    fn move_cursor_right(&mut self, distance: usize) {
        let after_len = self.after.len();
        assert!(
            distance <= after_len,
            "Expected cursor to move at most {} positions right within GapBuffer, got {}",
            after_len,
            distance
        );

        self.after.move_front_to(distance, &mut self.before);
        trace!(distance, position = self.position(), "moved cursor right");
        self.bump_generation();
    }

    fn mark_at<A: Access>(&self, slot: Slot) -> Mark<A> {
        let before_end = self.before.len();
        match slot {
            Slot::Before(index) => Mark::new(index, true, before_end, self.generation),
            Slot::After(index) => Mark::new(index, false, before_end, self.generation),
        }
    }

    fn check_mark<M: LocateSlot>(&self, mark: &M) {
        debug_assert_eq!(
            mark.generation(),
            self.generation,
            "Mark used after its GapBuffer was structurally modified"
        );
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<T, S: Segment<T>> Default for GapBuffer<T, S> {
    fn default() -> Self {
        Self::from_segments(S::default(), S::default())
    }
}

impl<T, S: Segment<T> + Clone> Clone for GapBuffer<T, S> {
    fn clone(&self) -> Self {
        Self::from_segments(self.before.clone(), self.after.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.before.clone_from(&source.before);
        self.after.clone_from(&source.after);
        self.bump_generation();
    }
}

impl<T, S: fmt::Debug> fmt::Debug for GapBuffer<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GapBuffer")
            .field("before", &self.before)
            .field("after", &self.after)
            .finish()
    }
}

impl<S: Segment<char>> fmt::Display for GapBuffer<char, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.iter() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl<T: PartialEq, S: Segment<T>> PartialEq for GapBuffer<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S: Segment<T>> Eq for GapBuffer<T, S> {}

impl<T: PartialEq, S: Segment<T>> PartialEq<[T]> for GapBuffer<T, S> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, S: Segment<T>, const N: usize> PartialEq<[T; N]> for GapBuffer<T, S> {
    fn eq(&self, other: &[T; N]) -> bool {
        self == other.as_slice()
    }
}

impl<T: PartialOrd, S: Segment<T>> PartialOrd for GapBuffer<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, S: Segment<T>> Ord for GapBuffer<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, S: Segment<T>> Hash for GapBuffer<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|value| value.hash(state));
    }
}

impl<T, S: Segment<T>> Index<usize> for GapBuffer<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
            .expect("Out of bounds index provided to GapBuffer")
    }
}

impl<T, S: Segment<T>> IndexMut<usize> for GapBuffer<T, S> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
            .expect("Out of bounds index provided to GapBuffer")
    }
}

impl<T, S: Segment<T>> Extend<T> for GapBuffer<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_iter(iter);
    }
}

impl<'a, T: Copy + 'a, S: Segment<T>> Extend<&'a T> for GapBuffer<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_iter(iter.into_iter().copied());
    }
}

impl<T, S: Segment<T>> FromIterator<T> for GapBuffer<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut before = S::default();
        before.extend(iter);
        Self::from_segments(before, S::default())
    }
}

impl<T> From<VecDeque<T>> for GapBuffer<T> {
    fn from(value: VecDeque<T>) -> Self {
        Self::from_segments(value, VecDeque::new())
    }
}

impl<T> From<Vec<T>> for GapBuffer<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from(VecDeque::from(value))
    }
}

impl<T> From<&[T]> for GapBuffer<T>
where
    T: Clone,
{
    fn from(value: &[T]) -> Self {
        Self::from(value.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for GapBuffer<T> {
    fn from(value: [T; N]) -> Self {
        Self::from(VecDeque::from(value))
    }
}

impl<'a, T, S: Segment<T>> IntoIterator for &'a GapBuffer<T, S> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S: Segment<T>> IntoIterator for &'a mut GapBuffer<T, S> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, S: Segment<T>> IntoIterator for GapBuffer<T, S> {
    type Item = T;

    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.before, self.after)
    }
}
