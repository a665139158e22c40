/**
Builds a typed route shape from a path specification.

This is sugar over the shape constructors ([`lit`][crate::lit],
[`var`][crate::var], [`wildcard`][crate::wildcard], and the three
terminators); the expansion is checked by the type system, so a malformed
specification fails to compile instead of failing at runtime.

| syntax | meaning |
|---|---|
| `/ "foo"` | literal segment `foo` |
| `/ :int`, `/ :int32`, `/ :int64`, `/ :float`, `/ :bool`, `/ :string` | built-in typed variables |
| `/ [expr]` | variable through any [`Decoder`][crate::Decoder] expression |
| `/ *` | one-token wildcard, decoded as `String` |
| `/ **` | full splat; consumes everything left (terminal) |
| trailing `/` | trailing slash (terminal) |
| `? "k" = :int & "q" = "yes"` | query pairs, flattened to literal and variable tokens |
| `? "k"` | bare query key |

```
use waymark::{route, uri, Decoder, Router};

let hex = Decoder::new("hex", |token| u32::from_str_radix(token, 16).ok());

let router = Router::build([
    route(uri!(/ "home" / :int /), |id: i64| format!("product {id}")),
    route(uri!(/ "color" / [hex]), |rgb: u32| format!("#{rgb:06x}")),
    route(uri!(/ "search" ? "q" = :string), |query: String| query),
    route(uri!(/ "files" / **), || String::from("files")),
])?;

assert_eq!(router.dispatch("/home/7/").as_deref(), Some("product 7"));
assert_eq!(router.dispatch("/color/ff8800").as_deref(), Some("#ff8800"));
assert_eq!(router.dispatch("/search?q=cats").as_deref(), Some("cats"));
assert_eq!(router.dispatch("/files/a/b/c?x=1").as_deref(), Some("files"));
# Ok::<(), waymark::SpecError>(())
```
*/
#[macro_export]
macro_rules! uri {
    () => { $crate::end() };
    (/) => { $crate::trailing_slash() };
    (/ * *) => { $crate::full_splat() };
    (/ * $($rest:tt)*) => {
        $crate::wildcard($crate::uri!($($rest)*))
    };
    (/ : bool $($rest:tt)*) => {
        $crate::var($crate::decoders::boolean(), $crate::uri!($($rest)*))
    };
    (/ : $decoder:ident $($rest:tt)*) => {
        $crate::var($crate::decoders::$decoder(), $crate::uri!($($rest)*))
    };
    (/ [$decoder:expr] $($rest:tt)*) => {
        $crate::var($decoder, $crate::uri!($($rest)*))
    };
    (/ $segment:literal $($rest:tt)*) => {
        $crate::lit($segment, $crate::uri!($($rest)*))
    };
    (? $($pair:tt)+) => { $crate::uri!(@pair $($pair)+) };
    (& $($pair:tt)+) => { $crate::uri!(@pair $($pair)+) };
    (@pair $key:literal = : bool $($rest:tt)*) => {
        $crate::lit($key, $crate::var($crate::decoders::boolean(), $crate::uri!($($rest)*)))
    };
    (@pair $key:literal = : $decoder:ident $($rest:tt)*) => {
        $crate::lit($key, $crate::var($crate::decoders::$decoder(), $crate::uri!($($rest)*)))
    };
    (@pair $key:literal = [$decoder:expr] $($rest:tt)*) => {
        $crate::lit($key, $crate::var($decoder, $crate::uri!($($rest)*)))
    };
    (@pair $key:literal = $value:literal $($rest:tt)*) => {
        $crate::lit($key, $crate::lit($value, $crate::uri!($($rest)*)))
    };
    (@pair $key:literal $($rest:tt)*) => {
        $crate::lit($key, $crate::uri!($($rest)*))
    };
}
