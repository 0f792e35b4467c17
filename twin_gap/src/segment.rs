// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{
    collections::{linked_list, vec_deque, LinkedList, VecDeque},
    iter, mem,
    ops::Range,
    slice,
};

/// An ordered, mutable sequence that can hold one side of a [GapBuffer](crate::GapBuffer).
///
/// A gap buffer owns two segments: the elements before its cursor and the elements after it.
/// Any sequence able to insert and remove at both ends and at arbitrary indices, iterate in
/// both directions, and move contiguous runs of elements to another instance of itself can
/// serve as a segment.
///
/// The choice of segment trades costs against each other:
/// - [VecDeque] (the default) gives O(1) edits at both ends and O(1) indexing.
/// - [Vec] gives O(1) edits at its back only. The `after` segment of a buffer pays O(n) for
///   every element moved in front of it.
/// - [LinkedList] gives O(1) splicing when the cursor moves, at the cost of O(n) indexing.
///
/// ### Examples
/// ```
/// use std::collections::LinkedList;
/// use twin_gap::Segment;
///
/// fn squash<S: Segment<u8>>(mut segment: S) -> Vec<u8> {
///     segment.remove_range(1..3);
///     segment.iter().copied().collect()
/// }
///
/// assert_eq!(squash(vec![1, 2, 3, 4]), [1, 4]);
/// assert_eq!(squash(LinkedList::from([1, 2, 3, 4])), [1, 4]);
/// ```
pub trait Segment<T>: Default + Extend<T> + IntoIterator<Item = T> {
    /// Borrowing iterator over the segment, front to back.
    type Iter<'a>: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    /// Mutably borrowing iterator over the segment, front to back.
    type IterMut<'a>: DoubleEndedIterator<Item = &'a mut T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    /// Number of elements held.
    fn len(&self) -> usize;

    /// Upper bound on the number of elements this segment could ever hold.
    fn max_len(&self) -> usize;

    /// Element at `index`, or None past the end.
    fn get(&self, index: usize) -> Option<&T>;

    /// Mutable element at `index`, or None past the end.
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Iterates the segment front to back.
    fn iter(&self) -> Self::Iter<'_>;

    /// Mutably iterates the segment front to back.
    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Adds `value` after the last element.
    fn push_back(&mut self, value: T);

    /// Adds `value` before the first element.
    fn push_front(&mut self, value: T);

    /// Removes the last element.
    fn pop_back(&mut self) -> Option<T>;

    /// Removes the first element.
    fn pop_front(&mut self) -> Option<T>;

    /// Inserts `value` so that it ends up at `index`. Panics if `index > len`.
    fn insert(&mut self, index: usize, value: T);

    /// Removes and returns the element at `index`, or None past the end.
    fn remove(&mut self, index: usize) -> Option<T>;

    /// Splits the segment in two at `at`, returning everything from `at` onward.
    /// Panics if `at > len`.
    fn split_off(&mut self, at: usize) -> Self;

    /// Moves every element of `other` onto the back of this segment, leaving `other` empty.
    fn append(&mut self, other: &mut Self);

    /// Drops every element.
    fn clear(&mut self);

    /// True if the segment holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First element, if any.
    fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Mutable first element, if any.
    fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Last element, if any.
    fn back(&self) -> Option<&T> {
        let last = self.len().checked_sub(1)?;
        self.get(last)
    }

    /// Mutable last element, if any.
    fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// Moves every element of `front` onto the front of this segment, keeping their order.
    fn prepend(&mut self, mut front: Self) {
        front.append(self);
        *self = front;
    }

    /// Moves the first `count` elements onto the back of `back`, keeping their order. Panics if
    /// `count > len`.
    fn move_front_to(&mut self, count: usize, back: &mut Self) {
        let rest = self.split_off(count);
        let mut moved = mem::replace(self, rest);
        back.append(&mut moved);
    }

    /// Drops every element from `len` onward. Does nothing if `len` is not less than the
    /// current length.
    fn truncate(&mut self, len: usize) {
        if len < self.len() {
            drop(self.split_off(len));
        }
    }

    /// Drops the elements in `range`. Panics if the range is out of bounds or reversed.
    fn remove_range(&mut self, range: Range<usize>) {
        let mut tail = self.split_off(range.end);
        self.truncate(range.start);
        self.append(&mut tail);
    }

    /// Inserts every value of `values` starting at `index`, keeping their order. Returns the
    /// number of values inserted.
    fn insert_iter<I>(&mut self, index: usize, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = self.split_off(index);
        let len = self.len();
        self.extend(values);
        let inserted = self.len() - len;
        self.append(&mut tail);
        inserted
    }

    /// Grows the segment to `len` by pushing copies of `value` onto its back, or shrinks it by
    /// dropping from its back.
    fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        let current = self.len();
        if len <= current {
            self.truncate(len);
        } else {
            self.extend(iter::repeat(value).take(len - current));
        }
    }
}

fn array_max_len<T>() -> usize {
    isize::MAX.unsigned_abs() / mem::size_of::<T>().max(1)
}

impl<T> Segment<T> for Vec<T> {
    type Iter<'a> = slice::Iter<'a, T> where T: 'a;
    type IterMut<'a> = slice::IterMut<'a, T> where T: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn max_len(&self) -> usize {
        array_max_len::<T>()
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        <[T]>::iter_mut(self)
    }

    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn push_front(&mut self, value: T) {
        Vec::insert(self, 0, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn pop_front(&mut self) -> Option<T> {
        if Vec::is_empty(self) {
            None
        } else {
            Some(Vec::remove(self, 0))
        }
    }

    fn insert(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| Vec::remove(self, index))
    }

    fn split_off(&mut self, at: usize) -> Self {
        Vec::split_off(self, at)
    }

    fn append(&mut self, other: &mut Self) {
        Vec::append(self, other);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }

    fn move_front_to(&mut self, count: usize, back: &mut Self) {
        back.extend(self.drain(..count));
    }

    fn insert_iter<I>(&mut self, index: usize, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let len = Vec::len(self);
        self.splice(index..index, values);
        Vec::len(self) - len
    }

    fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        Vec::resize(self, len, value);
    }
}

impl<T> Segment<T> for VecDeque<T> {
    type Iter<'a> = vec_deque::Iter<'a, T> where T: 'a;
    type IterMut<'a> = vec_deque::IterMut<'a, T> where T: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn max_len(&self) -> usize {
        array_max_len::<T>()
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        VecDeque::iter_mut(self)
    }

    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    fn insert(&mut self, index: usize, value: T) {
        VecDeque::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }

    fn split_off(&mut self, at: usize) -> Self {
        VecDeque::split_off(self, at)
    }

    fn append(&mut self, other: &mut Self) {
        VecDeque::append(self, other);
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn prepend(&mut self, front: Self) {
        self.reserve(front.len());
        for value in front.into_iter().rev() {
            VecDeque::push_front(self, value);
        }
    }

    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len);
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }

    fn move_front_to(&mut self, count: usize, back: &mut Self) {
        back.extend(self.drain(..count));
    }

    fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        VecDeque::resize(self, len, value);
    }
}

impl<T> Segment<T> for LinkedList<T> {
    type Iter<'a> = linked_list::Iter<'a, T> where T: 'a;
    type IterMut<'a> = linked_list::IterMut<'a, T> where T: 'a;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn max_len(&self) -> usize {
        usize::MAX
    }

    fn get(&self, index: usize) -> Option<&T> {
        LinkedList::iter(self).nth(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        LinkedList::iter_mut(self).nth(index)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        LinkedList::iter_mut(self)
    }

    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        LinkedList::pop_back(self)
    }

    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }

    fn insert(&mut self, index: usize, value: T) {
        let mut tail = LinkedList::split_off(self, index);
        tail.push_front(value);
        LinkedList::append(self, &mut tail);
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= LinkedList::len(self) {
            return None;
        }

        let mut tail = LinkedList::split_off(self, index);
        let removed = tail.pop_front();
        LinkedList::append(self, &mut tail);
        removed
    }

    fn split_off(&mut self, at: usize) -> Self {
        LinkedList::split_off(self, at)
    }

    fn append(&mut self, other: &mut Self) {
        LinkedList::append(self, other);
    }

    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    fn back(&self) -> Option<&T> {
        LinkedList::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        LinkedList::back_mut(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collected<S: Segment<i32>>(segment: &S) -> Vec<i32> {
        segment.iter().copied().collect()
    }

    fn exercise_edits<S: Segment<i32>>() {
        let mut segment = S::default();
        segment.extend([1, 2, 3, 4, 5]);

        segment.insert(2, 10);
        assert_eq!(collected(&segment), [1, 2, 10, 3, 4, 5]);

        assert_eq!(segment.remove(0), Some(1));
        assert_eq!(segment.remove(5), None);
        assert_eq!(collected(&segment), [2, 10, 3, 4, 5]);

        segment.remove_range(1..3);
        assert_eq!(collected(&segment), [2, 4, 5]);

        assert_eq!(segment.insert_iter(1, [7, 8]), 2);
        assert_eq!(collected(&segment), [2, 7, 8, 4, 5]);

        assert_eq!(segment.insert_iter(5, []), 0);
        assert_eq!(segment.len(), 5);
    }

    fn exercise_splicing<S: Segment<i32>>() {
        let mut segment = S::default();
        segment.extend([3, 4]);

        let mut front = S::default();
        front.extend([1, 2]);
        segment.prepend(front);
        assert_eq!(collected(&segment), [1, 2, 3, 4]);

        let mut tail = segment.split_off(3);
        assert_eq!(collected(&tail), [4]);
        segment.append(&mut tail);
        assert!(tail.is_empty());
        assert_eq!(collected(&segment), [1, 2, 3, 4]);

        assert_eq!(segment.front(), Some(&1));
        assert_eq!(segment.back(), Some(&4));
        if let Some(back) = segment.back_mut() {
            *back = 40;
        }
        assert_eq!(segment.pop_back(), Some(40));
        assert_eq!(segment.pop_front(), Some(1));
        assert_eq!(collected(&segment), [2, 3]);

        let mut back = S::default();
        back.extend([0, 1]);
        segment.extend([4, 5]);
        segment.move_front_to(3, &mut back);
        assert_eq!(collected(&back), [0, 1, 2, 3, 4]);
        assert_eq!(collected(&segment), [5]);

        segment.move_front_to(0, &mut back);
        assert_eq!(back.len(), 5);
        segment.move_front_to(1, &mut back);
        assert!(segment.is_empty());
        assert_eq!(back.back(), Some(&5));
    }

    fn exercise_resize<S: Segment<i32>>() {
        let mut segment = S::default();
        segment.resize(3, 9);
        assert_eq!(collected(&segment), [9, 9, 9]);

        segment.truncate(5);
        assert_eq!(segment.len(), 3);

        segment.resize(1, 0);
        assert_eq!(collected(&segment), [9]);

        segment.clear();
        assert!(segment.is_empty());
        assert_eq!(segment.back(), None);
    }

    #[test]
    fn vec_segment() {
        exercise_edits::<Vec<i32>>();
        exercise_splicing::<Vec<i32>>();
        exercise_resize::<Vec<i32>>();
    }

    #[test]
    fn vec_deque_segment() {
        exercise_edits::<VecDeque<i32>>();
        exercise_splicing::<VecDeque<i32>>();
        exercise_resize::<VecDeque<i32>>();
    }

    #[test]
    fn linked_list_segment() {
        exercise_edits::<LinkedList<i32>>();
        exercise_splicing::<LinkedList<i32>>();
        exercise_resize::<LinkedList<i32>>();
    }

    #[test]
    fn max_len_scales_with_element_size() {
        assert!(Vec::<u64>::new().max_len() < Vec::<u8>::new().max_len());
        assert_eq!(Vec::<()>::new().max_len(), isize::MAX.unsigned_abs());
        assert_eq!(LinkedList::<u8>::new().max_len(), usize::MAX);
    }
}
