use crate::{decoder::Bundle, Descriptor, Handler, Segments};
use std::{
    fmt::{self, Debug, Display, Formatter},
    sync::Arc,
};

/// A shape paired with the handler it dispatches to.
///
/// Routes are value types; [`Router::build`][crate::Router::build] moves
/// each one into the terminal trie node its shape walks to. Cloning a route
/// shares the underlying handler.
pub struct Route<Res> {
    descriptors: Vec<Descriptor>,
    runner: Arc<dyn Fn(Bundle) -> Res + Send + Sync>,
}

/// Pair a shape with a handler.
///
/// The handler's arity and argument types are dictated by the shape's
/// variables, and the correspondence is checked here, at construction, by
/// the type system. A handler that disagrees with its shape does not
/// compile:
///
/// ```compile_fail
/// use waymark::{route, uri};
///
/// // the shape supplies one i64, but this handler wants a bool as well
/// route(uri!(/ "home" / :int), |id: i64, other: bool| id);
/// ```
///
/// ```
/// use waymark::{route, uri, Router};
///
/// let router = Router::build([
///     route(uri!(/ "home" / :int), |id: i64| id * 2),
/// ])?;
/// assert_eq!(router.dispatch("/home/21"), Some(42));
/// # Ok::<(), waymark::SpecError>(())
/// ```
pub fn route<S, F, Res>(shape: S, handler: F) -> Route<Res>
where
    S: Segments,
    F: Handler<S::Args, Res> + Send + Sync + 'static,
    Res: 'static,
{
    let mut descriptors = Vec::new();
    shape.descriptors(&mut descriptors);
    let runner: Arc<dyn Fn(Bundle) -> Res + Send + Sync> = Arc::new(move |bundle: Bundle| {
        let mut values = bundle.into_iter();
        let args = shape.extract(&mut values);
        debug_assert!(
            values.next().is_none(),
            "matched route received more decoded values than its shape has variables"
        );
        handler.call(args)
    });
    Route {
        descriptors,
        runner,
    }
}

impl<Res> Route<Res> {
    pub(crate) fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub(crate) fn run(&self, bundle: Bundle) -> Res {
        (self.runner)(bundle)
    }
}

impl<Res> Clone for Route<Res> {
    fn clone(&self) -> Self {
        Self {
            descriptors: self.descriptors.clone(),
            runner: Arc::clone(&self.runner),
        }
    }
}

impl<Res> Display for Route<Res> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for descriptor in &self.descriptors {
            Display::fmt(descriptor, f)?;
        }
        Ok(())
    }
}

impl<Res> Debug for Route<Res> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Route({self})")
    }
}
