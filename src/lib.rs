#![forbid(unsafe_code)]
#![deny(
    clippy::dbg_macro,
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    nonstandard_style,
    unused_qualifications
)]
#![warn(missing_docs, clippy::pedantic, clippy::perf)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

/*!
# Welcome to the `waymark` crate!

Waymark is a typed URI router. A routing table declares its routes up
front, each route carries statically typed path variables, and the table is
compiled into an immutable trie. Matching a URI walks the trie once,
decodes each variable token, and hands the decoded values to the route's
handler as ordinary typed arguments. The handler's signature is checked
against the route's shape when the route is constructed, not when it
matches.

```
use waymark::{route, uri, Router};

let router = Router::build([
    route(uri!(/ "home" / "about"), || String::from("about page")),
    route(uri!(/ "home" / :int /), |id: i64| format!("product {id}")),
    route(uri!(/ "home" / * / **), |section: String| format!("somewhere in {section}")),
    route(uri!(/), || String::from("404 Not found")),
])?;

assert_eq!(router.dispatch("/home/about").as_deref(), Some("about page"));
assert_eq!(router.dispatch("/home/100001/").as_deref(), Some("product 100001"));
assert_eq!(router.dispatch("/home/garden/gnomes").as_deref(), Some("somewhere in garden"));
assert_eq!(router.dispatch("/").as_deref(), Some("404 Not found"));
assert_eq!(router.dispatch("/elsewhere"), None);
# Ok::<(), waymark::SpecError>(())
```

## Precedence

Routes are tried in declaration order and the matcher commits to the first
edge that accepts each token, without backtracking. Declare specific routes
(literals, narrow decoders) before general ones (strings, wildcards,
splats), and catch-alls last.

## Tokens

A URI is flattened to one token stream before matching: path segments
first, then query components (`k=v` contributes the two tokens `k` and `v`,
a bare key contributes one). A terminating `/` leaves an empty token that
only a trailing-slash route consumes, so `/home` and `/home/` are distinct
routes.

## Decoders

Variables decode their token through a [`Decoder`]: the built-ins live in
[`decoders`], and [`Decoder::new`] makes user decoders out of any pure
`Fn(&str) -> Option<T>`. A decoder rejecting a token just sends the matcher
on to the next sibling edge.
*/

mod decoder;
mod descriptor;
mod error;
mod handler;
mod macros;
mod path;
mod route;
mod router;
mod tokenize;
mod trie;
mod witness;

pub use decoder::{DecodedValue, Decoder, ErasedDecoder};
pub use descriptor::Descriptor;
pub use error::{Result, SpecError};
pub use handler::Handler;
pub use path::{
    end, full_splat, lit, trailing_slash, var, wildcard, End, FullSplat, Lit, Segments,
    TrailingSlash, Var,
};
pub use route::{route, Route};
pub use router::Router;
pub use witness::Witness;

/// The built-in token decoders.
///
/// Each is constructed once per process, so every call returns a decoder
/// with the same [`Witness`][crate::Witness] and routes using them share
/// trie edges. The [`uri!`][crate::uri] macro resolves `:int`, `:float`,
/// `:bool`, `:string`, `:int32`, and `:int64` here.
pub mod decoders {
    pub use crate::decoder::{boolean, float, int, int32, int64, string};
}
