// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::marker::PhantomData;

use crate::segment::Segment;

/// Borrowing iterator over a [GapBuffer](crate::GapBuffer) in logical order.
///
/// Walks the `before` segment and then the `after` segment. Walking from the back does the
/// reverse, so `.rev()` gives reverse traversal.
pub struct Iter<'a, T: 'a, S: Segment<T> + 'a> {
    before: S::Iter<'a>,
    after: S::Iter<'a>,
}

impl<'a, T: 'a, S: Segment<T> + 'a> Iter<'a, T, S> {
    pub(crate) fn new(before: &'a S, after: &'a S) -> Self {
        Self {
            before: before.iter(),
            after: after.iter(),
        }
    }
}

impl<'a, T: 'a, S: Segment<T> + 'a> Iterator for Iter<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.before.next().or_else(|| self.after.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.before.len() + self.after.len();
        (len, Some(len))
    }
}

impl<'a, T: 'a, S: Segment<T> + 'a> DoubleEndedIterator for Iter<'a, T, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.after.next_back().or_else(|| self.before.next_back())
    }
}

impl<'a, T: 'a, S: Segment<T> + 'a> ExactSizeIterator for Iter<'a, T, S> {}

/// Mutably borrowing iterator over a [GapBuffer](crate::GapBuffer) in logical order.
pub struct IterMut<'a, T: 'a, S: Segment<T> + 'a> {
    before: S::IterMut<'a>,
    after: S::IterMut<'a>,
}

impl<'a, T: 'a, S: Segment<T> + 'a> IterMut<'a, T, S> {
    pub(crate) fn new(before: &'a mut S, after: &'a mut S) -> Self {
        Self {
            before: before.iter_mut(),
            after: after.iter_mut(),
        }
    }
}

impl<'a, T: 'a, S: Segment<T> + 'a> Iterator for IterMut<'a, T, S> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.before.next().or_else(|| self.after.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.before.len() + self.after.len();
        (len, Some(len))
    }
}

impl<'a, T: 'a, S: Segment<T> + 'a> DoubleEndedIterator for IterMut<'a, T, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.after.next_back().or_else(|| self.before.next_back())
    }
}

impl<'a, T: 'a, S: Segment<T> + 'a> ExactSizeIterator for IterMut<'a, T, S> {}

/// Owning iterator over a [GapBuffer](crate::GapBuffer) in logical order.
pub struct IntoIter<T, S: Segment<T>> {
    before: S::IntoIter,
    after: S::IntoIter,
    element: PhantomData<T>,
}

impl<T, S: Segment<T>> IntoIter<T, S> {
    pub(crate) fn new(before: S, after: S) -> Self {
        Self {
            before: before.into_iter(),
            after: after.into_iter(),
            element: PhantomData,
        }
    }
}

impl<T, S: Segment<T>> Iterator for IntoIter<T, S> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.before.next().or_else(|| self.after.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (before_low, before_high) = self.before.size_hint();
        let (after_low, after_high) = self.after.size_hint();
        let high = before_high.zip(after_high).and_then(|(b, a)| b.checked_add(a));
        (before_low.saturating_add(after_low), high)
    }
}

impl<T, S> DoubleEndedIterator for IntoIter<T, S>
where
    S: Segment<T>,
    S::IntoIter: DoubleEndedIterator,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.after.next_back().or_else(|| self.before.next_back())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    use crate::GapBuffer;

    #[test]
    fn iterates_across_the_cursor_from_both_ends() {
        let mut buffer: GapBuffer<i32, LinkedList<i32>> = (1..=5).collect();
        buffer.set_cursor(2);

        let mut iter = buffer.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_mut_reaches_both_segments() {
        let mut buffer = GapBuffer::from([1, 2, 3, 4]);
        buffer.set_cursor(1);

        for value in buffer.iter_mut().rev() {
            *value *= 10;
        }

        assert_eq!(buffer, [10, 20, 30, 40]);
        assert_eq!(buffer.position(), 1);
    }

    #[test]
    fn into_iter_keeps_logical_order() {
        let mut buffer = GapBuffer::from(['x', 'y', 'z']);
        buffer.set_cursor(0);

        let reversed: String = buffer.clone().into_iter().rev().collect();
        assert_eq!(reversed, "zyx");

        let collected: Vec<_> = buffer.into_iter().collect();
        assert_eq!(collected, ['x', 'y', 'z']);
    }
}
