use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a doubly linked list in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum ListOp<T> {
    /// Add the value after the tail
    Append(T),
    /// Add the value before the head
    Prepend(T),
    /// Delete the node at this position, wrapped around the list's length
    Delete(usize),
}

impl<T> Arbitrary for ListOp<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => ListOp::Append(T::arbitrary(g)),
            1 => ListOp::Prepend(T::arbitrary(g)),
            2 => ListOp::Delete(usize::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
