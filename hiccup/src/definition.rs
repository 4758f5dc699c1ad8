//! Element-defining functions that accept an optional attributes map.
//!
//! A function built with [`defelem()`] takes an extra leading `Option<Attrs>`. When the
//! map is present and not empty it is merged into the element the function returns:
//! into the element's own map if it has one, with the caller's keys winning, or as a
//! new map right after the tag otherwise.

use bumpalo::collections::Vec as BumpVec;

use crate::{debug, Attrs, Compiler, Node, RenderOptions, Result};

/// Merge `attrs` into the element list `node`.
///
/// ```
/// use hiccup::{bumpalo::Bump, hiccup, merge_attrs, Attrs};
///
/// let bump = Bump::new();
/// let link = hiccup! { in &bump; ["a", {href: "/", class: "nav"}, "Home"] };
/// let merged = merge_attrs(link, Some(Attrs::from_iter_in(&bump, [("class", "active")])));
/// assert_eq!(merged, hiccup! { in &bump; ["a", {href: "/", class: "active"}, "Home"] });
/// ```
pub fn merge_attrs<'bump>(node: Node<'bump>, attrs: Option<Attrs<'bump>>) -> Node<'bump> {
    let Some(attrs) = attrs.filter(|attrs| !attrs.is_empty()) else {
        return node;
    };
    match node {
        Node::List(mut list) if !list.is_empty() => {
            match list.get_mut(1) {
                Some(Node::Attrs(own)) => own.update(attrs),
                _ => list.insert(1, Node::Attrs(attrs)),
            }
            Node::List(list)
        }
        other => {
            debug!(node = ?other, ?attrs, "attributes not merged into a non-element");
            other
        }
    }
}

/// Remove a leading attributes map from `args`.
pub fn split_attrs<'bump>(
    mut args: BumpVec<'bump, Node<'bump>>,
) -> (Option<Attrs<'bump>>, BumpVec<'bump, Node<'bump>>) {
    if matches!(args.first(), Some(Node::Attrs(_))) {
        if let Node::Attrs(attrs) = args.remove(0) {
            return (Some(attrs), args);
        }
    }
    (None, args)
}

/// Wrap `f` so that it takes an optional attributes map before its own argument.
///
/// `A` is whatever `f` takes: a single value, a tuple of positional arguments, or a
/// struct of named ones.
///
/// ```
/// use hiccup::{bumpalo::Bump, defelem, hiccup, Attrs, Node};
///
/// let bump = Bump::new();
/// let heading = defelem(|text: &str| hiccup! { in &bump; ["h1", text] });
/// let attrs = Attrs::from_iter_in(&bump, [("id", "title")]);
/// assert_eq!(
///     heading(Some(attrs), "Hello"),
///     hiccup! { in &bump; ["h1", {id: "title"}, "Hello"] }
/// );
/// assert_eq!(heading(None, "Hello"), hiccup! { in &bump; ["h1", "Hello"] });
/// ```
pub fn defelem<'bump, A, F>(f: F) -> impl Fn(Option<Attrs<'bump>>, A) -> Node<'bump>
where
    F: Fn(A) -> Node<'bump>,
{
    move |attrs: Option<Attrs<'bump>>, args: A| merge_attrs(f(args), attrs)
}

/// Like [`defelem()`], for functions taking a receiver. The receiver comes first and is
/// never taken for the attributes map.
pub fn defelem_method<'bump, S, A, F>(
    f: F,
) -> impl Fn(&S, Option<Attrs<'bump>>, A) -> Node<'bump>
where
    S: ?Sized,
    F: Fn(&S, A) -> Node<'bump>,
{
    move |receiver: &S, attrs: Option<Attrs<'bump>>, args: A| {
        merge_attrs(f(receiver, args), attrs)
    }
}

/// Wrap a function taking any number of nodes. A leading [`Node::Attrs`] among the
/// arguments is removed and merged into the result.
///
/// A function whose own first argument may be an attributes map cannot tell it apart
/// from the caller's; use [`defelem()`] for those.
pub fn defelem_variadic<'bump, F>(f: F) -> impl Fn(BumpVec<'bump, Node<'bump>>) -> Node<'bump>
where
    F: Fn(BumpVec<'bump, Node<'bump>>) -> Node<'bump>,
{
    move |args: BumpVec<'bump, Node<'bump>>| {
        let (attrs, args) = split_attrs(args);
        merge_attrs(f(args), attrs)
    }
}

/// Wrap a node-producing function so that its result is rendered with `options`.
///
/// ```
/// use hiccup::{bumpalo::Bump, defhtml, hiccup, Mode};
///
/// let bump = Bump::new();
/// let page = defhtml(Mode::Html, |name: &str| hiccup! { in &bump; ["p", "Hi ", name] });
/// assert_eq!(page("Ada").unwrap(), "<p>Hi Ada</p>");
/// ```
pub fn defhtml<'bump, A, F>(
    options: impl Into<RenderOptions>,
    f: F,
) -> impl Fn(A) -> Result<String>
where
    F: Fn(A) -> Node<'bump>,
{
    let compiler = Compiler::new(options);
    move |args: A| compiler.compile_html([f(args)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    fn p<'bump>(bump: &'bump Bump, children: &[&str]) -> Node<'bump> {
        Node::list(
            bump,
            std::iter::once("p")
                .chain(children.iter().copied())
                .map(|s| Node::text(bump, s)),
        )
    }

    #[test]
    fn empty_or_missing_maps_change_nothing() {
        let bump = Bump::new();
        assert_eq!(merge_attrs(p(&bump, &["x"]), None), p(&bump, &["x"]));
        assert_eq!(
            merge_attrs(p(&bump, &["x"]), Some(Attrs::new_in(&bump))),
            p(&bump, &["x"])
        );
    }

    #[test]
    fn map_is_inserted_after_the_tag() {
        let bump = Bump::new();
        let merged = merge_attrs(
            p(&bump, &["x"]),
            Some(Attrs::new_in(&bump).with("id", "i")),
        );
        assert_eq!(merged.attrs(), Some(&Attrs::new_in(&bump).with("id", "i")));
        let Node::List(list) = merged else {
            panic!("expected an element list")
        };
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn non_elements_pass_through() {
        let bump = Bump::new();
        let attrs = Attrs::new_in(&bump).with("id", "i");
        assert_eq!(
            merge_attrs(Node::text(&bump, "t"), Some(attrs.clone())),
            Node::text(&bump, "t")
        );
        assert_eq!(
            merge_attrs(Node::list(&bump, []), Some(attrs)),
            Node::list(&bump, [])
        );
    }

    #[test]
    fn variadic_strips_a_leading_map() {
        let bump = Bump::new();
        let para = defelem_variadic(|args| {
            Node::list(&bump, std::iter::once(Node::text(&bump, "p")).chain(args))
        });
        let mut args = BumpVec::new_in(&bump);
        args.push(Node::Attrs(Attrs::new_in(&bump).with("class", "c")));
        args.push(Node::text(&bump, "x"));
        let expected = Node::list(
            &bump,
            [
                Node::text(&bump, "p"),
                Node::Attrs(Attrs::new_in(&bump).with("class", "c")),
                Node::text(&bump, "x"),
            ],
        );
        assert_eq!(para(args), expected);
    }

    #[test]
    fn split_leaves_other_arguments_alone() {
        let bump = Bump::new();
        let mut args = BumpVec::new_in(&bump);
        args.push(Node::text(&bump, "a"));
        args.push(Node::Attrs(Attrs::new_in(&bump)));
        let (attrs, rest) = split_attrs(args);
        assert_eq!(attrs, None);
        assert_eq!(rest.len(), 2);
    }
}
