use core::iter::FusedIterator;

/// An iterator over an error and all of its sources, outermost first.
///
/// The iterator follows [`core::error::Error::source`], so levels that are
/// not [`Error`](crate::Error)s are visited as well. It always yields at
/// least one item.
///
/// # Examples
///
/// ```
/// use factum::{Chain, Error};
///
/// let error = Error::new("outer", ()).with_cause(Error::new("inner", ()));
/// let messages: Vec<String> = error.chain().map(|e| e.to_string()).collect();
/// assert_eq!(messages, ["outer", "inner"]);
///
/// let parse_error = "x".parse::<u8>().unwrap_err();
/// assert_eq!(Chain::new(&parse_error).count(), 1);
/// ```
#[derive(Copy, Clone)]
#[must_use]
pub struct Chain<'a> {
    next: Option<&'a (dyn core::error::Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Creates an iterator starting at `head`.
    pub fn new(head: &'a (dyn core::error::Error + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn core::error::Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

impl core::fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(*self).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn test_chain_length() {
        let mut error = Error::new("level 0", ());
        assert_eq!(error.chain().count(), 1);

        for depth in 1..5 {
            error = Error::new("level", ()).with_cause(error);
            assert_eq!(error.chain().count(), depth + 1);
        }
    }

    #[test]
    fn test_chain_is_fused() {
        let error = Error::new("only", ());
        let mut chain = error.chain();
        assert!(chain.next().is_some());
        assert!(chain.next().is_none());
        assert!(chain.next().is_none());
    }
}
