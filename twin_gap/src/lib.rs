// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

//! A gap buffer generic over the sequence type holding each side of its cursor.
//!
//! [GapBuffer] is built for cheap insertion and removal of elements at a movable cursor, such
//! as the point where text is typed in an editor. It keeps the elements before the cursor and
//! the elements after it in two separate [Segment]s. Edits at the cursor only touch the ends
//! of those segments; moving the cursor moves elements from one segment to the other.
//!
//! Positions other than the cursor are named with [Mark]s (and [RevMark]s for reverse
//! traversal), which step across the cursor boundary transparently.
//!
//! Contract violations (moving or erasing past either end of the buffer) panic. Using a mark
//! after the buffer has changed shape is a contract violation that debug builds catch.

#![warn(missing_docs)]

pub use gap_buffer::*;
pub use iter::{IntoIter, Iter, IterMut};
pub use mark::{
    Access, ConstMark, ConstRevMark, Exclusive, Locate, Mark, MutMark, MutRevMark, RevMark,
    Shared,
};
pub use segment::Segment;

mod gap_buffer;
mod iter;
mod mark;
mod segment;
