use crate::{
    decoder::{self, DecodedValue},
    Decoder, Descriptor,
};
use smartstring::alias::String as SmartString;
use std::fmt::{self, Debug, Formatter};

/// A route shape: the typed, ordered list of components a route matches.
///
/// Shapes are built back-to-front from a terminator ([`End`],
/// [`TrailingSlash`], or [`FullSplat`]) by prepending [`Lit`] and [`Var`]
/// components with [`lit`] and [`var`]. The associated [`Args`][Self::Args]
/// type threads the payload type of every variable through to the handler
/// as a nested pair list, in declaration order. This is what lets
/// [`route`][crate::route] reject a handler whose arity or argument types
/// disagree with its shape at compile time.
///
/// ```
/// use waymark::{decoders, lit, route, trailing_slash, var, Router};
///
/// // the shape of "/home/:int/"
/// let shape = lit("home", var(decoders::int(), trailing_slash()));
/// let router = Router::build([route(shape, |id: i64| id * 2)])?;
/// assert_eq!(router.dispatch("/home/21/"), Some(42));
/// assert_eq!(router.dispatch("/home/21"), None);
/// # Ok::<(), waymark::SpecError>(())
/// ```
pub trait Segments: Send + Sync + 'static {
    /// The handler argument list contributed by this shape, encoded as
    /// nested pairs terminated by `()`.
    type Args;

    /// Append this shape's component descriptors, in match order.
    fn descriptors(&self, out: &mut Vec<Descriptor>);

    /// Rebuild the handler argument list from the values decoded during a
    /// match.
    ///
    /// # Panics
    ///
    /// Panics when the values do not line up, one for one and witness for
    /// witness, with this shape's variables. A router never produces such
    /// a sequence; hitting this panic means its state is corrupt.
    fn extract(&self, values: &mut dyn Iterator<Item = DecodedValue>) -> Self::Args;
}

/// Terminator for a path without a trailing slash.
///
/// Matches once every token is consumed, so `/home/about` matches a shape
/// ending here while `/home/about/` does not (the terminating slash leaves
/// an empty token behind).
#[derive(Clone, Copy, Debug)]
pub struct End;

/// Terminator for a path with a trailing slash.
///
/// Consumes the empty token a terminating `/` produces, and nothing else:
/// `/home/` matches, `/home` does not.
#[derive(Clone, Copy, Debug)]
pub struct TrailingSlash;

/// Terminator that consumes every remaining token.
///
/// The rest of the path and the entire query are discarded without
/// inspection, and no argument is passed to the handler.
#[derive(Clone, Copy, Debug)]
pub struct FullSplat;

/// A literal segment followed by the rest of the shape.
#[derive(Clone, Debug)]
pub struct Lit<R> {
    segment: SmartString,
    rest: R,
}

/// A typed variable followed by the rest of the shape.
///
/// Contributes one argument of the decoder's payload type to the handler.
pub struct Var<T, R> {
    decoder: Decoder<T>,
    rest: R,
}

impl<T, R: Clone> Clone for Var<T, R> {
    fn clone(&self) -> Self {
        Self {
            decoder: self.decoder.clone(),
            rest: self.rest.clone(),
        }
    }
}

impl<T, R: Debug> Debug for Var<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Var")
            .field("decoder", &self.decoder)
            .field("rest", &self.rest)
            .finish()
    }
}

impl Segments for End {
    type Args = ();

    fn descriptors(&self, _out: &mut Vec<Descriptor>) {}

    fn extract(&self, _values: &mut dyn Iterator<Item = DecodedValue>) -> Self::Args {}
}

impl Segments for TrailingSlash {
    type Args = ();

    fn descriptors(&self, out: &mut Vec<Descriptor>) {
        out.push(Descriptor::TrailingSlash);
    }

    fn extract(&self, _values: &mut dyn Iterator<Item = DecodedValue>) -> Self::Args {}
}

impl Segments for FullSplat {
    type Args = ();

    fn descriptors(&self, out: &mut Vec<Descriptor>) {
        out.push(Descriptor::FullSplat);
    }

    fn extract(&self, _values: &mut dyn Iterator<Item = DecodedValue>) -> Self::Args {}
}

impl<R: Segments> Segments for Lit<R> {
    type Args = R::Args;

    fn descriptors(&self, out: &mut Vec<Descriptor>) {
        out.push(Descriptor::Literal(self.segment.clone()));
        self.rest.descriptors(out);
    }

    fn extract(&self, values: &mut dyn Iterator<Item = DecodedValue>) -> Self::Args {
        self.rest.extract(values)
    }
}

impl<T: Send + Sync + 'static, R: Segments> Segments for Var<T, R> {
    type Args = (T, R::Args);

    fn descriptors(&self, out: &mut Vec<Descriptor>) {
        out.push(Descriptor::Variable(self.decoder.erase()));
        self.rest.descriptors(out);
    }

    fn extract(&self, values: &mut dyn Iterator<Item = DecodedValue>) -> Self::Args {
        let value = values
            .next()
            .expect("matched route is missing a decoded value for one of its variables");
        let head = value.downcast(self.decoder.witness());
        (head, self.rest.extract(values))
    }
}

/// The bare terminator: a shape that matches once every token is consumed.
#[must_use]
pub fn end() -> End {
    End
}

/// The trailing-slash terminator. See [`TrailingSlash`].
#[must_use]
pub fn trailing_slash() -> TrailingSlash {
    TrailingSlash
}

/// The full-splat terminator. See [`FullSplat`].
#[must_use]
pub fn full_splat() -> FullSplat {
    FullSplat
}

/// Prepend a literal segment to a shape.
#[must_use]
pub fn lit<R: Segments>(segment: impl Into<SmartString>, rest: R) -> Lit<R> {
    Lit {
        segment: segment.into(),
        rest,
    }
}

/// Prepend a typed variable to a shape, growing the handler's argument
/// list by one argument of the decoder's payload type.
#[must_use]
pub fn var<T: Send + Sync + 'static, R: Segments>(decoder: Decoder<T>, rest: R) -> Var<T, R> {
    Var { decoder, rest }
}

/// Prepend a single-token wildcard: a [`string`][crate::decoders::string]
/// variable, accepting any one token and passing it through verbatim.
#[must_use]
pub fn wildcard<R: Segments>(rest: R) -> Var<String, R> {
    var(decoder::string(), rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_flatten_in_declaration_order() {
        let shape = lit("contact", wildcard(var(decoder::int(), end())));
        let mut descriptors = Vec::new();
        shape.descriptors(&mut descriptors);
        assert_eq!(
            descriptors,
            vec![
                Descriptor::Literal("contact".into()),
                Descriptor::Variable(decoder::string().erase()),
                Descriptor::Variable(decoder::int().erase()),
            ]
        );
    }

    #[test]
    fn terminators_contribute_descriptors_but_no_arguments() {
        let mut descriptors = Vec::new();
        lit("a", trailing_slash()).descriptors(&mut descriptors);
        lit("b", full_splat()).descriptors(&mut descriptors);
        lit("c", end()).descriptors(&mut descriptors);
        assert_eq!(
            descriptors,
            vec![
                Descriptor::Literal("a".into()),
                Descriptor::TrailingSlash,
                Descriptor::Literal("b".into()),
                Descriptor::FullSplat,
                Descriptor::Literal("c".into()),
            ]
        );
    }

    #[test]
    fn extract_rebuilds_arguments_in_declaration_order() {
        let shape = var(decoder::string(), var(decoder::int(), trailing_slash()));
        let bundle = vec![
            decoder::string().erase().decode("bikal").unwrap(),
            decoder::int().erase().decode("123456").unwrap(),
        ];
        let (name, (number, ())) = shape.extract(&mut bundle.into_iter());
        assert_eq!(name, "bikal");
        assert_eq!(number, 123_456);
    }

    #[test]
    #[should_panic(expected = "missing a decoded value")]
    fn extract_with_a_short_bundle_is_fatal() {
        let shape = var(decoder::int(), end());
        let _ = shape.extract(&mut Vec::<DecodedValue>::new().into_iter());
    }
}
