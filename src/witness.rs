use std::{
    any::TypeId,
    fmt::{self, Debug, Formatter},
    sync::atomic::{AtomicU64, Ordering},
};

/// The identity of a single decoder registration and its payload type.
///
/// Two witnesses compare equal exactly when they originate from the same
/// [`Decoder`][crate::Decoder] construction, or clones of it. The built-in
/// decoders are constructed once per process, so every call to
/// [`decoders::int`][crate::decoders::int] and friends yields the same
/// witness. Witness equality is the router's evidence that a value decoded
/// while walking the trie has the static type the matched route's handler
/// expects; see [`DecodedValue::downcast`][crate::DecodedValue::downcast].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Witness {
    token: u64,
    type_id: TypeId,
}

impl Witness {
    pub(crate) fn fresh<T: 'static>() -> Self {
        static NEXT_TOKEN: AtomicU64 = AtomicU64::new(0);
        Self {
            token: NEXT_TOKEN.fetch_add(1, Ordering::Relaxed),
            type_id: TypeId::of::<T>(),
        }
    }

    /// The [`TypeId`] of the payload type this witness identifies.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl Debug for Witness {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Witness").field(&self.token).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_registrations_never_compare_equal() {
        let first = Witness::fresh::<u32>();
        let second = Witness::fresh::<u32>();
        assert_eq!(first, first);
        assert_ne!(first, second);
        assert_eq!(first.type_id(), second.type_id());
    }

    #[test]
    fn distinct_payload_types_never_compare_equal() {
        assert_ne!(Witness::fresh::<u32>(), Witness::fresh::<String>());
    }
}
