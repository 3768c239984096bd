use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Delete the T from the data structure
    Delete(T),
    /// Compare traversals
    Traverse,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation.
    /// Inserts are twice as likely as deletes so trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 5 {
            0 | 1 => Op::Insert(T::arbitrary(g)),
            2 => Op::Delete(T::arbitrary(g)),
            _ => Op::Traverse,
        }
    }
}
