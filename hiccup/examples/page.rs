use hiccup::{bumpalo::Bump, builder::Builder, defelem, hiccup, render, Context, Node};

#[defelem]
fn article<'b>(bump: &'b Bump, title: &str, body: &str) -> Node<'b> {
    hiccup! { in bump;
        ["article.post",
            ["h2", title],
            ["p", body]]
    }
}

fn main() -> hiccup::Result<()> {
    let bump = Bump::new();
    let context = Context::new().with_base_url("/blog");
    let b = Builder::with_context(&bump, &context);

    let posts = [
        ("First post", "Escaped <markup> & all."),
        ("Second post", "Rendered as it's read."),
    ];
    let featured = b.attrs([("class", "featured")]);

    let body = hiccup! { in &bump;
        ["body",
            ["header", b.link_to(None, "/", "Home")],
            ["main#content",
                article(Some(featured), &bump, posts[0].0, posts[0].1),
                ..posts[1..].iter().map(|(title, body)| article(None, &bump, title, body))],
            b.form_to(None, ("post", "/subscribe"), [
                b.email_field(None, "email", None::<&str>),
                b.submit_button(None, "Subscribe"),
            ])]
    };
    let page = b.html5(None, Some("en"), false, body)?;
    println!("{}", render([page])?);
    Ok(())
}
