use hiccup::{
    bumpalo::Bump, builder::Builder, hiccup, render, uri::url, Attrs, Context, SelectOption,
};

#[test]
fn test_signup_form() {
    let bump = Bump::new();
    let context = Context::new().with_base_url("/app/");
    let b = Builder::with_context(&bump, &context);
    let user = b.group("user");
    let address = user.group("address");
    let countries = [SelectOption::from(("Norway", "no")), ("Chile", "cl").into()];

    let form = b.form_to(
        None,
        ("put", "/users/7"),
        [
            user.label(None, "name", "Name"),
            user.text_field(None, "name", "Ada"),
            address.drop_down(None, "country", &countries, Some("cl")),
            user.check_box(None, "terms", true, None),
            b.submit_button(None, "Save"),
        ],
    );

    assert_eq!(
        render([form]).unwrap(),
        concat!(
            r#"<form action="/app/users/7" method="POST">"#,
            r#"<input id="_method" name="_method" type="hidden" value="PUT" />"#,
            r#"<label for="user-name">Name</label>"#,
            r#"<input id="user-name" name="user[name]" type="text" value="Ada" />"#,
            r#"<select id="user-address-country" name="user[address][country]">"#,
            r#"<option value="no">Norway</option>"#,
            r#"<option selected="selected" value="cl">Chile</option>"#,
            "</select>",
            r#"<input checked="checked" id="user-terms" name="user[terms]" type="checkbox" value="true" />"#,
            r#"<input type="submit" value="Save" />"#,
            "</form>"
        )
    );
}

#[test]
fn test_helpers_accept_attributes() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let attrs = Attrs::from_iter_in(&bump, [("class", "big"), ("maxlength", "10")]);
    assert_eq!(
        render([b.password_field(Some(attrs), "pin", None::<&str>)]).unwrap(),
        r#"<input class="big" id="pin" maxlength="10" name="pin" type="password" />"#
    );
    let attrs = Attrs::from_iter_in(&bump, [("placeholder", "you@example.com")]);
    assert_eq!(
        render([b.email_field(Some(attrs), "email", None::<&str>)]).unwrap(),
        r#"<input id="email" name="email" placeholder="you@example.com" type="email" />"#
    );
}

#[test]
fn test_page_with_navigation() {
    let bump = Bump::new();
    let context = Context::new().with_base_url("/docs");
    let b = Builder::with_context(&bump, &context);
    let nav = b.unordered_list(
        Some(b.attrs([("class", "nav")])),
        [b.link_to(None, "/", "Home"), b.link_to(None, "/api", "API")],
    );
    let head = b.el("head", [b.include_css(["/style.css"]), b.include_js(["/app.js"])]);
    let page = b.html5(None, Some("en"), false, b.fragment([head, b.el("body", [nav])]));

    assert_eq!(
        render([page.unwrap()]).unwrap(),
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head>"#,
            r#"<link href="/docs/style.css" rel="stylesheet" type="text/css">"#,
            r#"<script src="/docs/app.js" type="text/javascript"></script>"#,
            "</head><body>",
            r#"<ul class="nav">"#,
            r#"<li><a href="/docs/">Home</a></li>"#,
            r#"<li><a href="/docs/api">API</a></li>"#,
            "</ul></body></html>"
        )
    );
}

#[test]
fn test_urls_with_queries() {
    let bump = Bump::new();
    let href = url(["/search/", "all"], [("q", "fish & chips"), ("page", "2")]);
    let link = hiccup! { in &bump; ["a", {href: href}, "Search"] };
    assert_eq!(
        render([link]).unwrap(),
        r#"<a href="/search/all?q=fish+%26+chips&amp;page=2">Search</a>"#
    );
}
