use crate::Witness;
use smallvec::SmallVec;
use smartstring::alias::String as SmartString;
use std::{
    any::Any,
    fmt::{self, Debug, Formatter},
    sync::{Arc, OnceLock},
};

/// A named, typed parser from a single URI token to an optional value.
///
/// Routes consume tokens through decoders: a [`Var`][crate::Var] segment
/// accepts a token exactly when its decoder returns `Some`, and the decoded
/// value becomes one argument of the route's handler. Rejecting a token is
/// not an error, it just means the edge does not match and the next sibling
/// edge is consulted.
///
/// Cloning a decoder shares its [`Witness`], so clones are interchangeable
/// when routes are merged into the trie.
///
/// ```
/// use waymark::Decoder;
///
/// let hex = Decoder::new("hex", |token| u32::from_str_radix(token, 16).ok());
/// assert_eq!(hex.decode("ff"), Some(255));
/// assert_eq!(hex.decode("coffee table"), None);
/// ```
pub struct Decoder<T> {
    name: SmartString,
    witness: Witness,
    decode: Arc<dyn Fn(&str) -> Option<T> + Send + Sync>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            witness: self.witness,
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T: Send + Sync + 'static> Decoder<T> {
    /// Construct a decoder from a name and a decode function.
    ///
    /// The name is used for diagnostics only. The decode function must be
    /// pure and must never panic; returning `None` is the only way to
    /// reject a token. Every call to `new` registers a fresh [`Witness`],
    /// so two decoders with the same payload type still occupy separate
    /// trie edges.
    pub fn new(
        name: impl Into<SmartString>,
        decode: impl Fn(&str) -> Option<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            witness: Witness::fresh::<T>(),
            decode: Arc::new(decode),
        }
    }

    /// Decode one token.
    pub fn decode(&self, token: &str) -> Option<T> {
        (self.decode)(token)
    }

    /// The diagnostic name this decoder was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The witness identifying this decoder registration.
    #[must_use]
    pub fn witness(&self) -> Witness {
        self.witness
    }

    pub(crate) fn erase(&self) -> ErasedDecoder {
        let decode = Arc::clone(&self.decode);
        let witness = self.witness;
        ErasedDecoder {
            name: self.name.clone(),
            witness,
            decode: Arc::new(move |token: &str| {
                decode(token).map(|value| DecodedValue {
                    witness,
                    value: Box::new(value),
                })
            }),
        }
    }
}

impl<T> Debug for Decoder<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("name", &self.name)
            .field("witness", &self.witness)
            .finish_non_exhaustive()
    }
}

/// The type-erased face of a [`Decoder`], as stored on a trie edge.
///
/// Decoded payloads are boxed behind [`Any`] and tagged with the decoder's
/// witness; [`DecodedValue::downcast`] recovers them at dispatch time.
#[derive(Clone)]
pub struct ErasedDecoder {
    name: SmartString,
    witness: Witness,
    decode: Arc<dyn Fn(&str) -> Option<DecodedValue> + Send + Sync>,
}

impl ErasedDecoder {
    /// The diagnostic name of the underlying decoder.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The witness of the underlying decoder registration.
    #[must_use]
    pub fn witness(&self) -> Witness {
        self.witness
    }

    pub(crate) fn decode(&self, token: &str) -> Option<DecodedValue> {
        (self.decode)(token)
    }
}

impl Debug for ErasedDecoder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedDecoder")
            .field("name", &self.name)
            .field("witness", &self.witness)
            .finish_non_exhaustive()
    }
}

/// One value decoded while walking the trie, tagged with the witness of the
/// decoder that produced it.
pub struct DecodedValue {
    witness: Witness,
    value: Box<dyn Any + Send + Sync>,
}

impl DecodedValue {
    /// The witness of the decoder that produced this value.
    #[must_use]
    pub fn witness(&self) -> Witness {
        self.witness
    }

    /// Recover the typed payload.
    ///
    /// # Panics
    ///
    /// Panics when `expected` is not the witness this value was decoded
    /// under. A router only ever pairs a value with the variable that
    /// produced it, so hitting this panic means the router's state is
    /// corrupt, not that the URI failed to match.
    #[must_use]
    pub fn downcast<T: Any>(self, expected: Witness) -> T {
        assert_eq!(
            self.witness, expected,
            "decoded value does not correspond to the expected variable; the router is corrupt"
        );
        *self
            .value
            .downcast()
            .expect("witness equality guarantees the payload type")
    }
}

impl Debug for DecodedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedValue")
            .field("witness", &self.witness)
            .finish_non_exhaustive()
    }
}

/// The decoded values collected along one trie walk, in traversal order.
pub(crate) type Bundle = SmallVec<[DecodedValue; 4]>;

/// The canonical `i64` decoder, accepting whatever `str::parse::<i64>`
/// accepts. Referenced from route specifications as `:int`.
#[must_use]
pub fn int() -> Decoder<i64> {
    static INT: OnceLock<Decoder<i64>> = OnceLock::new();
    INT.get_or_init(|| Decoder::new("int", |token| token.parse().ok()))
        .clone()
}

/// An alias for [`int`]. `:int64` routes share trie edges with `:int`
/// routes rather than shadowing them.
#[must_use]
pub fn int64() -> Decoder<i64> {
    int()
}

/// The canonical `i32` decoder, for `:int32` variables.
#[must_use]
pub fn int32() -> Decoder<i32> {
    static INT32: OnceLock<Decoder<i32>> = OnceLock::new();
    INT32
        .get_or_init(|| Decoder::new("int32", |token| token.parse().ok()))
        .clone()
}

/// The canonical `f64` decoder, accepting whatever `str::parse::<f64>`
/// accepts. Referenced from route specifications as `:float`.
#[must_use]
pub fn float() -> Decoder<f64> {
    static FLOAT: OnceLock<Decoder<f64>> = OnceLock::new();
    FLOAT
        .get_or_init(|| Decoder::new("float", |token| token.parse().ok()))
        .clone()
}

/// The canonical `bool` decoder, accepting exactly `true` and `false`.
/// Referenced from route specifications as `:bool`.
#[must_use]
pub fn boolean() -> Decoder<bool> {
    static BOOLEAN: OnceLock<Decoder<bool>> = OnceLock::new();
    BOOLEAN
        .get_or_init(|| Decoder::new("bool", |token| token.parse().ok()))
        .clone()
}

/// The canonical `String` decoder. Accepts every token, including the
/// empty one. Referenced from route specifications as `:string`, and the
/// decoder behind the `*` wildcard.
#[must_use]
pub fn string() -> Decoder<String> {
    static STRING: OnceLock<Decoder<String>> = OnceLock::new();
    STRING
        .get_or_init(|| Decoder::new("string", |token| Some(token.to_string())))
        .clone()
}
