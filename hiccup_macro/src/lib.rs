use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{quote, ToTokens};
use syn::{
    braced, bracketed,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_quote,
    punctuated::Punctuated,
    spanned::Spanned,
    Expr, FnArg, GenericArgument, Ident, ItemFn, Lifetime, LitStr, PathArguments, ReturnType,
    Token, Type,
};

/// Input format: `in <allocator>; <node>, <node>, ...`
struct HiccupInput {
    allocator: Expr,
    nodes: Punctuated<MarkupNode, Token![,]>,
}
impl Parse for HiccupInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        input.parse::<Token![in]>()?;
        let allocator = input.parse::<Expr>()?;
        input.parse::<Token![;]>()?;
        let nodes = Punctuated::parse_terminated(input)?;
        Ok(HiccupInput { allocator, nodes })
    }
}

enum MarkupNode {
    /// `[tag, attrs?, children...]`
    List(Punctuated<MarkupNode, Token![,]>),
    /// `{key: value, ..spliced}`
    Attrs(Punctuated<AttrEntry, Token![,]>),
    /// `..iterable`
    Lazy(Expr),
    Expr(Expr),
}
impl Parse for MarkupNode {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(syn::token::Bracket) {
            let content;
            bracketed!(content in input);
            Ok(MarkupNode::List(Punctuated::parse_terminated(&content)?))
        } else if input.peek(syn::token::Brace) {
            let content;
            braced!(content in input);
            Ok(MarkupNode::Attrs(Punctuated::parse_terminated(&content)?))
        } else if input.peek(Token![..]) {
            input.parse::<Token![..]>()?;
            Ok(MarkupNode::Lazy(input.parse()?))
        } else {
            Ok(MarkupNode::Expr(input.parse()?))
        }
    }
}

enum AttrEntry {
    Pair { key: LitStr, value: Expr },
    Splice(Expr),
}
impl Parse for AttrEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![..]) {
            input.parse::<Token![..]>()?;
            return Ok(AttrEntry::Splice(input.parse()?));
        }
        // Keywords such as `type` and `for` are common attribute names.
        let key = if input.peek(LitStr) {
            input.parse::<LitStr>()?
        } else {
            let ident = Ident::parse_any(input)?.unraw();
            LitStr::new(&ident.to_string(), ident.span())
        };
        input.parse::<Token![:]>()?;
        let value = input.parse()?;
        Ok(AttrEntry::Pair { key, value })
    }
}

// Wrapper to allow code generation with the bound allocator
struct NodeWithBump<'a> {
    bump: &'a Ident,
    node: &'a MarkupNode,
}
impl ToTokens for NodeWithBump<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        node_to_tokens(self.bump, self.node, tokens);
    }
}

fn node_to_tokens(bump: &Ident, node: &MarkupNode, tokens: &mut TokenStream2) {
    match node {
        MarkupNode::List(items) => {
            let items = items.iter().map(|node| NodeWithBump { bump, node });
            tokens.extend(quote! {{
                #[allow(unused_mut)]
                let mut __list = ::hiccup::bumpalo::collections::Vec::new_in(#bump);
                #(__list.push(#items);)*
                ::hiccup::Node::List(__list)
            }});
        }
        MarkupNode::Attrs(entries) => {
            let statements = entries.iter().map(|entry| match entry {
                AttrEntry::Pair { key, value } => quote! {
                    __attrs.set(#key, #value);
                },
                AttrEntry::Splice(expr) => quote! {
                    __attrs.update(#expr);
                },
            });
            tokens.extend(quote! {{
                #[allow(unused_mut)]
                let mut __attrs = ::hiccup::Attrs::new_in(#bump);
                #(#statements)*
                ::hiccup::Node::Attrs(__attrs)
            }});
        }
        MarkupNode::Lazy(expr) => {
            tokens.extend(quote! {
                ::hiccup::Node::lazy(#bump, #expr)
            });
        }
        MarkupNode::Expr(expr) => {
            tokens.extend(quote! {
                ::hiccup::IntoNode::into_node(#expr, #bump)
            });
        }
    }
}

#[proc_macro]
/// Constructs a [`hiccup::Node`] from literal markup data.
///
/// # Syntax
///
/// ```ignore
/// hiccup! { in <allocator>; <node>, <node>, ... }
/// ```
///
/// The allocator is a reference to a [`bumpalo::Bump`] allocator that will be used
/// for all allocations. Each node is one of:
///
/// - `[tag, attrs?, children...]`: an element list.
/// - `{key: value, "data-key": value, ..other}`: an attributes map. `..other` copies
///   another `Attrs` into the map.
/// - `..iterable`: a lazy sequence, converting each item when it is rendered.
/// - any other expression, converted with `IntoNode`.
///
/// Several top-level nodes produce a sequence of them.
///
/// # Example
///
/// ```ignore
/// use hiccup::{bumpalo::Bump, hiccup};
///
/// let bump = Bump::new();
/// let items = ["one", "two"];
/// let node = hiccup! { in &bump;
///     ["ul#menu", {class: "wide"},
///         ..items.iter().map(|item| hiccup! { in &bump; ["li", *item] })]
/// };
/// ```
pub fn hiccup(input: TokenStream) -> TokenStream {
    let HiccupInput { allocator, nodes } = syn::parse_macro_input!(input as HiccupInput);
    let bump = Ident::new("__hiccup_bump", Span::call_site());

    let body = if nodes.len() == 1 {
        NodeWithBump {
            bump: &bump,
            node: &nodes[0],
        }
        .into_token_stream()
    } else {
        let nodes = nodes.iter().map(|node| NodeWithBump { bump: &bump, node });
        quote! { ::hiccup::Node::fragment(#bump, [#(#nodes),*]) }
    };

    quote! {{
        let #bump: &::hiccup::bumpalo::Bump = #allocator;
        #body
    }}
    .into()
}

/// A `Node<'x>` return type and its lifetime `'x`.
fn node_return(output: &ReturnType) -> Option<(&Type, &Lifetime)> {
    let ReturnType::Type(_, ty) = output else {
        return None;
    };
    let Type::Path(path) = ty.as_ref() else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Node" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let lifetime = args.args.iter().find_map(|arg| match arg {
        GenericArgument::Lifetime(lifetime) if lifetime.ident != "_" => Some(lifetime),
        _ => None,
    })?;
    Some((ty, lifetime))
}

#[proc_macro_attribute]
/// Lets an element-building function take an optional attributes map.
///
/// The function must return `Node<'x>` with a named lifetime. It gains an
/// `Option<Attrs<'x>>` parameter, first or right after the receiver, which is merged
/// into the returned element with `hiccup::merge_attrs`. The parameter's binding is
/// hidden, so the function's own parameters may use any name.
///
/// ```ignore
/// #[defelem]
/// fn card<'b>(bump: &'b Bump, title: &str) -> Node<'b> {
///     hiccup! { in bump; ["div.card", ["h2", title]] }
/// }
///
/// card(Some(attrs), &bump, "Hello");
/// ```
pub fn defelem(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(
            TokenStream2::from(args).span(),
            "#[defelem] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let mut function = syn::parse_macro_input!(item as ItemFn);

    let Some((return_type, lifetime)) = node_return(&function.sig.output) else {
        return syn::Error::new(
            function.sig.output.span(),
            "#[defelem] functions must return `Node<'x>` with a named lifetime",
        )
        .to_compile_error()
        .into();
    };
    let (return_type, lifetime) = (return_type.clone(), lifetime.clone());

    let attrs_arg: FnArg = parse_quote! {
        __hiccup_attrs: ::core::option::Option<::hiccup::Attrs<#lifetime>>
    };
    let position = match function.sig.inputs.first() {
        Some(FnArg::Receiver(_)) => 1,
        _ => 0,
    };
    function.sig.inputs.insert(position, attrs_arg);

    let block = &function.block;
    function.block = Box::new(parse_quote! {{
        let __node: #return_type = (|| -> #return_type #block)();
        ::hiccup::merge_attrs(__node, __hiccup_attrs)
    }});
    function
        .attrs
        .push(parse_quote!(#[allow(clippy::redundant_closure_call)]));

    function.into_token_stream().into()
}
