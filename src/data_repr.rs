use std::sync::Arc;

/// Shared storage of an array.
///
/// *Don't use this type directly, use [`ArcArray`](crate::ArcArray).*
// Every handle holds its own shape and strides plus one of these; cloning
// never copies elements, and the buffer lives as long as the last handle.
#[derive(Debug)]
pub struct SharedRepr<A> {
    data: Arc<Vec<A>>,
}

impl<A> SharedRepr<A> {
    pub(crate) fn from(v: Vec<A>) -> Self {
        SharedRepr { data: Arc::new(v) }
    }

    pub(crate) fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Return true if `self` and `other` are the same allocation.
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Number of handles currently sharing the buffer.
    pub(crate) fn handle_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    /// Return a mutable slice, copying the buffer first if it is shared.
    ///
    /// Element positions are unchanged by the copy, so strides stay valid.
    pub(crate) fn make_mut(&mut self) -> &mut [A]
    where
        A: Clone,
    {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }
}

impl<A> Clone for SharedRepr<A> {
    fn clone(&self) -> Self {
        SharedRepr {
            data: Arc::clone(&self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SharedRepr;

    #[test]
    fn clones_alias_until_written() {
        let a = SharedRepr::from(vec![1, 2, 3]);
        let mut b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.handle_count(), 2);

        b.make_mut()[0] = 10;
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[10, 2, 3]);
    }
}
