use crate::{
    error::{Result, SpecError},
    tokenize::tokenize,
    trie::{CompiledNode, TrieNode},
    Descriptor, Route,
};
use std::fmt::{self, Debug, Formatter};

/**
# The compiled router

A routing table frozen into an immutable trie. Build one from routes with
[`Router::build`], then match URIs against it with [`Router::dispatch`].

Matching commits to the first accepting edge at every trie node, scanning
sibling edges in the order their routes were declared, and never backtracks
once committed. Declaration order is therefore the precedence policy: put
more specific routes (literals, narrower decoders) before more general ones
(strings, splats).

A compiled router is immutable and freely shareable across threads; adding
routes after the fact means building a new one.

```
use waymark::{route, uri, Router};

let router = Router::build([
    route(uri!(/ "home" / "about"), || "about page"),
    route(uri!(/), || "not found"),
])?;

assert_eq!(router.dispatch("/home/about"), Some("about page"));
assert_eq!(router.dispatch("/"), Some("not found"));
assert_eq!(router.dispatch("/home/elsewhere"), None);
# Ok::<(), waymark::SpecError>(())
```
*/
pub struct Router<Res> {
    root: CompiledNode<Res>,
}

impl<Res: 'static> Router<Res> {
    /**
    Build a router from routes, in precedence order.

    Earlier routes win whenever more than one accepts a URI, so list
    catch-alls last.

    ```
    use waymark::{route, uri, Router};

    let router = Router::build([
        route(uri!(/ "home" / :int /), |id: i64| format!("product {id}")),
        route(uri!(/ "home" / *), |section: String| format!("section {section}")),
    ])?;

    assert_eq!(router.dispatch("/home/7/").as_deref(), Some("product 7"));
    assert_eq!(router.dispatch("/home/news").as_deref(), Some("section news"));
    assert_eq!(router.dispatch("/home/7/extra"), None);
    # Ok::<(), waymark::SpecError>(())
    ```

    # Errors

    Returns a [`SpecError`] when a route's literal segment is empty or
    contains a character no token can contain:

    ```
    use waymark::{end, lit, route, Router, SpecError};

    let err = Router::build([route(lit("a/b", end()), || ())]).unwrap_err();
    assert!(matches!(err, SpecError::UnmatchableLiteral { .. }));
    ```
    */
    pub fn build<I>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Route<Res>>,
    {
        let mut root = TrieNode::new();
        for route in routes {
            validate(route.descriptors())?;
            root.insert(route);
        }
        Ok(Self {
            root: root.compile(),
        })
    }

    /**
    Match a URI against the routing table and run the matched route's
    handler on the decoded path variables.

    Returns `None` when no route accepts the URI. That includes a URI that
    trims to the empty string, which has no token stream at all.

    ```
    use waymark::{route, uri, Router};

    let router = Router::build([
        route(uri!(/ "hello" / :string), |name: String| format!("hello, {name}")),
    ])?;

    assert_eq!(router.dispatch("/hello/world").as_deref(), Some("hello, world"));
    assert_eq!(router.dispatch("/goodbye/world"), None);
    assert_eq!(router.dispatch(""), None);
    # Ok::<(), waymark::SpecError>(())
    ```
    */
    #[must_use]
    pub fn dispatch(&self, uri: &str) -> Option<Res> {
        let tokens = tokenize(uri)?;
        match self.root.find(&tokens) {
            Some((route, bundle)) => {
                log::debug!("{uri} matched {route}");
                Some(route.run(bundle))
            }
            None => {
                log::debug!("{uri} did not match any route");
                None
            }
        }
    }
}

fn validate(descriptors: &[Descriptor]) -> Result<()> {
    for descriptor in descriptors {
        if let Descriptor::Literal(text) = descriptor {
            if text.is_empty() {
                return Err(SpecError::EmptyLiteral);
            }
            if let Some(character) = text.chars().find(|c| matches!(c, '/' | '?')) {
                return Err(SpecError::UnmatchableLiteral {
                    segment: text.to_string(),
                    character,
                });
            }
        }
    }
    Ok(())
}

struct RouteForDisplay<'a, Res>(&'a Route<Res>);

impl<Res> Debug for RouteForDisplay<'_, Res> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<Res> Debug for Router<Res> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Router ")?;
        let mut set = f.debug_set();
        for route in self.root.routes() {
            set.entry(&RouteForDisplay(route));
        }
        set.finish()
    }
}
