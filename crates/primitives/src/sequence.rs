/// A contiguous range of batches submitted together for verification.
///
/// Sequences are keyed by [`Sequence::from_batch_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Sequence {
    /// The first batch of the sequence.
    pub from_batch_number: u64,
    /// The last batch of the sequence.
    pub to_batch_number: u64,
}

impl Sequence {
    /// Returns a new [`Sequence`] covering `from..=to`.
    pub const fn new(from_batch_number: u64, to_batch_number: u64) -> Self {
        Self { from_batch_number, to_batch_number }
    }
}
