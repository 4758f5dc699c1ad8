use hiccup::{
    bumpalo::{collections::Vec as BumpVec, Bump},
    defelem, defelem_method, defelem_variadic, defhtml, hiccup, render, Attrs, Mode, Node,
};

#[defelem]
fn card<'b>(bump: &'b Bump, title: &str) -> Node<'b> {
    hiccup! { in bump; ["div.card", {title: title}, ["h2", title]] }
}

#[defelem]
fn badge<'b>(bump: &'b Bump, count: Option<u32>) -> Node<'b> {
    let Some(count) = count else {
        return hiccup! { in bump; ["span.badge.empty"] };
    };
    hiccup! { in bump; ["span.badge", count] }
}

#[defelem]
fn quoted<'b>(bump: &'b Bump, attrs: &str) -> Node<'b> {
    hiccup! { in bump; ["code", attrs] }
}

struct Theme {
    accent: &'static str,
}
impl Theme {
    #[defelem]
    fn button<'b>(&self, bump: &'b Bump, label: &str) -> Node<'b> {
        hiccup! { in bump; ["button", {class: self.accent}, label] }
    }
}

#[test]
fn test_wrapped_function_gets_leading_attributes() {
    let bump = Bump::new();
    let two_args = defelem(|(a, b): (i32, i32)| hiccup! { in &bump; [b, a, 3i32] });
    let attrs = Attrs::from_iter_in(&bump, [("foo", "bar")]);
    assert_eq!(
        two_args(Some(attrs), (0, 1)),
        hiccup! { in &bump; [1i32, {foo: "bar"}, 0i32, 3i32] }
    );
    assert_eq!(two_args(None, (0, 1)), hiccup! { in &bump; [1i32, 0i32, 3i32] });
}

#[test]
fn test_caller_attributes_win() {
    let bump = Bump::new();
    let attrs = Attrs::from_iter_in(&bump, [("title", "Override"), ("id", "main")]);
    assert_eq!(
        render([card(Some(attrs), &bump, "Hello")]).unwrap(),
        r#"<div class="card" id="main" title="Override"><h2>Hello</h2></div>"#
    );
    assert_eq!(
        render([card(None, &bump, "Hello")]).unwrap(),
        r#"<div class="card" title="Hello"><h2>Hello</h2></div>"#
    );
}

#[test]
fn test_early_return_is_merged_too() {
    let bump = Bump::new();
    let attrs = Attrs::from_iter_in(&bump, [("role", "status")]);
    assert_eq!(
        render([badge(Some(attrs), &bump, None)]).unwrap(),
        r#"<span class="badge empty" role="status"></span>"#
    );
    assert_eq!(
        render([badge(None, &bump, Some(3))]).unwrap(),
        r#"<span class="badge">3</span>"#
    );
}

#[test]
fn test_own_parameter_named_attrs() {
    let bump = Bump::new();
    let attrs = Attrs::from_iter_in(&bump, [("class", "inline")]);
    assert_eq!(
        render([quoted(Some(attrs), &bump, "{k: v}")]).unwrap(),
        r#"<code class="inline">{k: v}</code>"#
    );
}

#[test]
fn test_method_takes_attributes_after_receiver() {
    let bump = Bump::new();
    let theme = Theme { accent: "blue" };
    let attrs = Attrs::from_iter_in(&bump, [("type", "submit")]);
    assert_eq!(
        render([theme.button(Some(attrs), &bump, "Send")]).unwrap(),
        r#"<button class="blue" type="submit">Send</button>"#
    );
}

#[test]
fn test_defelem_method_combinator() {
    let bump = Bump::new();
    let theme = Theme { accent: "red" };
    let tag = defelem_method(|theme: &Theme, text: &str| {
        hiccup! { in &bump; ["em", {class: theme.accent}, text] }
    });
    let attrs = Attrs::from_iter_in(&bump, [("class", "loud")]);
    assert_eq!(
        render([tag(&theme, Some(attrs), "hey")]).unwrap(),
        r#"<em class="loud">hey</em>"#
    );
}

#[test]
fn test_variadic_takes_a_leading_map() {
    let bump = Bump::new();
    let paragraph = defelem_variadic(|children| {
        let mut list = BumpVec::new_in(&bump);
        list.push(Node::text(&bump, "p"));
        list.extend(children);
        Node::List(list)
    });

    let mut args = BumpVec::new_in(&bump);
    args.push(Node::Attrs(Attrs::from_iter_in(&bump, [("class", "lead")])));
    args.push(Node::text(&bump, "Hi"));
    assert_eq!(
        render([paragraph(args)]).unwrap(),
        r#"<p class="lead">Hi</p>"#
    );

    let mut args = BumpVec::new_in(&bump);
    args.push(Node::text(&bump, "Hi"));
    assert_eq!(render([paragraph(args)]).unwrap(), "<p>Hi</p>");
}

#[test]
fn test_defhtml_renders_with_its_mode() {
    let bump = Bump::new();
    let line_break = defhtml(Mode::Html, |count: usize| {
        Node::fragment(&bump, (0..count).map(|_| hiccup! { in &bump; ["br"] }))
    });
    assert_eq!(line_break(2).unwrap(), "<br><br>");
}
