use crate::decoder::ErasedDecoder;
use smartstring::alias::String as SmartString;
use std::fmt::{self, Display, Formatter};

/// One edge label in the routing trie.
///
/// A route's shape flattens to a sequence of descriptors, and sibling trie
/// edges are deduplicated by descriptor equality: literals compare by text,
/// variables by the [`Witness`][crate::Witness] of their decoder, and the
/// two terminal markers each compare only to themselves. Two routes whose
/// descriptors share a prefix therefore share trie nodes for that prefix.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Descriptor {
    /// matches exactly this token
    Literal(SmartString),
    /// consumes one token by offering it to a decoder
    Variable(ErasedDecoder),
    /// matches the empty token produced by a terminating `/`
    TrailingSlash,
    /// consumes every remaining token, path and query alike
    FullSplat,
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Variable(a), Self::Variable(b)) => a.witness() == b.witness(),
            (Self::TrailingSlash, Self::TrailingSlash) | (Self::FullSplat, Self::FullSplat) => true,
            _ => false,
        }
    }
}

impl Eq for Descriptor {}

impl Display for Descriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "/{text}"),
            Self::Variable(decoder) => write!(f, "/:{}", decoder.name()),
            Self::TrailingSlash => f.write_str("/"),
            Self::FullSplat => f.write_str("/**"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decoder, Decoder};

    #[test]
    fn literals_compare_by_text() {
        assert_eq!(
            Descriptor::Literal("home".into()),
            Descriptor::Literal("home".into())
        );
        assert_ne!(
            Descriptor::Literal("home".into()),
            Descriptor::Literal("about".into())
        );
    }

    #[test]
    fn variables_compare_by_witness() {
        let int = Descriptor::Variable(decoder::int().erase());
        let also_int = Descriptor::Variable(decoder::int().erase());
        let float = Descriptor::Variable(decoder::float().erase());
        assert_eq!(int, also_int);
        assert_ne!(int, float);

        let custom = Decoder::new("even", |token: &str| token.parse::<i64>().ok());
        assert_ne!(int, Descriptor::Variable(custom.erase()));
    }

    #[test]
    fn kinds_never_cross_compare() {
        assert_ne!(Descriptor::TrailingSlash, Descriptor::FullSplat);
        assert_ne!(Descriptor::Literal("x".into()), Descriptor::TrailingSlash);
        assert_ne!(
            Descriptor::Literal("int".into()),
            Descriptor::Variable(decoder::int().erase())
        );
    }

    #[test]
    fn renders_in_specification_form() {
        assert_eq!(Descriptor::Literal("home".into()).to_string(), "/home");
        assert_eq!(
            Descriptor::Variable(decoder::int().erase()).to_string(),
            "/:int"
        );
        assert_eq!(Descriptor::TrailingSlash.to_string(), "/");
        assert_eq!(Descriptor::FullSplat.to_string(), "/**");
    }
}
