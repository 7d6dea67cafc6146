//! Target qubit identification

/// Index of a target qubit in an operation's ordered target tuple
///
/// A newtype over the raw index so target tuples cannot be confused with
/// other integer sequences (dimensions, eigenvalue counts) at the
/// validation boundary. The dispatcher builds these from the instruction's
/// raw target list; the evolution engine reads them back with
/// [`QubitId::index`].
///
/// # Example
/// ```
/// use qop_core::QubitId;
///
/// let targets: Vec<QubitId> = [0, 1].iter().map(|&i| QubitId::new(i)).collect();
/// assert_eq!(targets[1].index(), 1);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a qubit identifier from a raw index
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}
