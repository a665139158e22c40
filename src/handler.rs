/// Applies a matched route's decoded arguments to a handler function.
///
/// `Args` is the nested-pair argument encoding produced by
/// [`Segments::Args`][crate::Segments::Args]. Implementations exist for
/// plain functions and closures of up to eight arguments, so handlers are
/// written as ordinary `Fn`s whose parameter list mirrors the shape's
/// variables in declaration order:
///
/// ```
/// use waymark::{route, uri, Router};
///
/// let router = Router::build([route(
///     uri!(/ "contact" / :string / :bool),
///     |name: String, call_me_later: bool| format!("{name}: {call_me_later}"),
/// )])?;
/// assert_eq!(
///     router.dispatch("/contact/bob/false").as_deref(),
///     Some("bob: false")
/// );
/// # Ok::<(), waymark::SpecError>(())
/// ```
pub trait Handler<Args, Res> {
    /// Invoke the handler on a fully decoded argument list.
    fn call(&self, args: Args) -> Res;
}

macro_rules! arg_list {
    () => { () };
    ($head:ident $($tail:ident)*) => { ($head, arg_list!($($tail)*)) };
}

macro_rules! impl_handler {
    ($(($ty:ident $var:ident))*) => {
        impl<Fun, Res, $($ty),*> Handler<arg_list!($($ty)*), Res> for Fun
        where
            Fun: Fn($($ty),*) -> Res,
        {
            fn call(&self, args: arg_list!($($ty)*)) -> Res {
                $(let ($var, args) = args;)*
                let () = args;
                self($($var),*)
            }
        }
    };
}

impl_handler!();
impl_handler!((A a));
impl_handler!((A a) (B b));
impl_handler!((A a) (B b) (C c));
impl_handler!((A a) (B b) (C c) (D d));
impl_handler!((A a) (B b) (C c) (D d) (E e));
impl_handler!((A a) (B b) (C c) (D d) (E e) (F f));
impl_handler!((A a) (B b) (C c) (D d) (E e) (F f) (G g));
impl_handler!((A a) (B b) (C c) (D d) (E e) (F f) (G g) (H h));
