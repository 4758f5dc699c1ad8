//! Helpers for forms and their fields.
//!
//! Field names and ids follow the builder's field group: inside
//! `b.group("user").group("address")`, a field `city` is named
//! `user[address][city]` and has the id `user-address-city`.

use std::iter;

use crate::{builder::Builder, hiccup, Attrs, IntoAttrValue, IntoNode, Node, Uri};

/// An entry of a `select` element.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOption<'a> {
    /// An option whose label is also its value.
    Label(&'a str),
    /// An option with a separate value.
    Valued {
        /// The displayed text.
        label: &'a str,
        /// The submitted value.
        value: &'a str,
    },
    /// An `optgroup` around nested options.
    Group {
        /// The group's label.
        label: &'a str,
        /// The options inside the group.
        options: Vec<SelectOption<'a>>,
    },
}
impl<'a> From<&'a str> for SelectOption<'a> {
    fn from(label: &'a str) -> Self {
        SelectOption::Label(label)
    }
}
impl<'a> From<(&'a str, &'a str)> for SelectOption<'a> {
    fn from((label, value): (&'a str, &'a str)) -> Self {
        SelectOption::Valued { label, value }
    }
}
impl<'a> From<(&'a str, Vec<SelectOption<'a>>)> for SelectOption<'a> {
    fn from((label, options): (&'a str, Vec<SelectOption<'a>>)) -> Self {
        SelectOption::Group { label, options }
    }
}

impl<'bump> Builder<'bump> {
    /// An `input` of type `kind`, named and identified by the current group.
    pub fn input_field(
        &self,
        kind: &str,
        name: &str,
        value: impl IntoAttrValue<'bump>,
    ) -> Node<'bump> {
        hiccup! { in self.bump();
            ["input", {
                type: kind,
                name: self.make_name(name),
                id: self.make_id(name),
                value: value,
            }]
        }
    }

    /// A hidden input.
    #[hiccup_macro::defelem]
    pub fn hidden_field(&self, name: &str, value: impl IntoAttrValue<'bump>) -> Node<'bump> {
        self.input_field("hidden", name, value)
    }

    /// A text input.
    #[hiccup_macro::defelem]
    pub fn text_field(&self, name: &str, value: impl IntoAttrValue<'bump>) -> Node<'bump> {
        self.input_field("text", name, value)
    }

    /// A password input.
    #[hiccup_macro::defelem]
    pub fn password_field(&self, name: &str, value: impl IntoAttrValue<'bump>) -> Node<'bump> {
        self.input_field("password", name, value)
    }

    /// An email input.
    #[hiccup_macro::defelem]
    pub fn email_field(&self, name: &str, value: impl IntoAttrValue<'bump>) -> Node<'bump> {
        self.input_field("email", name, value)
    }

    /// A check box. Its value is `"true"` unless one is given.
    #[hiccup_macro::defelem]
    pub fn check_box(&self, name: &str, checked: bool, value: Option<&str>) -> Node<'bump> {
        hiccup! { in self.bump();
            ["input", {
                type: "checkbox",
                name: self.make_name(name),
                id: self.make_id(name),
                value: value.unwrap_or("true"),
                checked: checked,
            }]
        }
    }

    /// A radio button in `group`. Its id combines the group and the value.
    #[hiccup_macro::defelem]
    pub fn radio_button(&self, group: &str, checked: bool, value: Option<&str>) -> Node<'bump> {
        let value = value.unwrap_or("true");
        hiccup! { in self.bump();
            ["input", {
                type: "radio",
                name: self.make_name(group),
                id: self.make_id(&format!("{group}-{value}")),
                value: value,
                checked: checked,
            }]
        }
    }

    /// `option` elements for `options`, with `optgroup`s for groups. An option is
    /// selected when its value, or its label if it has no value, equals `selected`.
    pub fn select_options(
        &self,
        options: &[SelectOption<'_>],
        selected: Option<&str>,
    ) -> Node<'bump> {
        self.fragment(options.iter().map(|option| self.select_option(option, selected)))
    }

    fn select_option(&self, option: &SelectOption<'_>, selected: Option<&str>) -> Node<'bump> {
        match option {
            SelectOption::Label(label) => hiccup! { in self.bump();
                ["option", {selected: selected == Some(*label)}, *label]
            },
            SelectOption::Valued { label, value } => hiccup! { in self.bump();
                ["option", {value: *value, selected: selected == Some(*value)}, *label]
            },
            SelectOption::Group { label, options } => hiccup! { in self.bump();
                ["optgroup", {label: *label}, self.select_options(options, selected)]
            },
        }
    }

    /// A `select` element with the given options.
    #[hiccup_macro::defelem]
    pub fn drop_down(
        &self,
        name: &str,
        options: &[SelectOption<'_>],
        selected: Option<&str>,
    ) -> Node<'bump> {
        hiccup! { in self.bump();
            ["select", {name: self.make_name(name), id: self.make_id(name)},
                self.select_options(options, selected)]
        }
    }

    /// A `textarea`.
    #[hiccup_macro::defelem]
    pub fn text_area(&self, name: &str, value: Option<&str>) -> Node<'bump> {
        hiccup! { in self.bump();
            ["textarea", {name: self.make_name(name), id: self.make_id(name)}, value]
        }
    }

    /// A file upload input.
    #[hiccup_macro::defelem]
    pub fn file_upload(&self, name: &str) -> Node<'bump> {
        self.input_field("file", name, None::<&str>)
    }

    /// A `label` for the field `name`.
    #[hiccup_macro::defelem]
    pub fn label(&self, name: &str, text: impl IntoNode<'bump>) -> Node<'bump> {
        hiccup! { in self.bump(); ["label", {for: self.make_id(name)}, text] }
    }

    /// A submit button.
    #[hiccup_macro::defelem]
    pub fn submit_button(&self, text: &str) -> Node<'bump> {
        hiccup! { in self.bump(); ["input", {type: "submit", value: text}] }
    }

    /// A reset button.
    #[hiccup_macro::defelem]
    pub fn reset_button(&self, text: &str) -> Node<'bump> {
        hiccup! { in self.bump(); ["input", {type: "reset", value: text}] }
    }

    /// A `form` sending to `action` with `method`.
    ///
    /// Browsers only submit forms with GET and POST, so any other method is sent as
    /// POST with the real method in a hidden `_method` field.
    #[hiccup_macro::defelem]
    pub fn form_to<I>(&self, (method, action): (&str, impl Into<Uri>), body: I) -> Node<'bump>
    where
        I: IntoIterator,
        I::Item: IntoNode<'bump>,
    {
        let bump = self.bump();
        let method = method.to_ascii_uppercase();
        let action = self.context().uri(action);
        let (form_method, override_field) = match method.as_str() {
            "GET" | "POST" => (method.as_str(), Node::Null),
            _ => {
                // The override field is never part of a group.
                let top = Builder::with_context(bump, self.context());
                ("POST", top.hidden_field(None, "_method", method.as_str()))
            }
        };
        let attrs = Attrs::new_in(bump)
            .with("method", form_method)
            .with("action", action);
        let body = body.into_iter().map(|child| child.into_node(bump));
        self.el_with("form", attrs, iter::once(override_field).chain(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bumpalo::Bump, render};

    #[test]
    fn fields_follow_the_group() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let user = b.group("user");
        assert_eq!(
            render([user.text_field(None, "name", "Ada")]).unwrap(),
            r#"<input id="user-name" name="user[name]" type="text" value="Ada" />"#
        );
        assert_eq!(
            render([user.group("address").hidden_field(None, "city", None::<&str>)]).unwrap(),
            r#"<input id="user-address-city" name="user[address][city]" type="hidden" />"#
        );
        assert_eq!(
            render([b.text_field(None, "q", None::<&str>)]).unwrap(),
            r#"<input id="q" name="q" type="text" />"#
        );
    }

    #[test]
    fn check_boxes_default_to_true() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            render([b.check_box(None, "agree", true, None)]).unwrap(),
            r#"<input checked="checked" id="agree" name="agree" type="checkbox" value="true" />"#
        );
        assert_eq!(
            render([b.check_box(None, "agree", false, Some("yes"))]).unwrap(),
            r#"<input id="agree" name="agree" type="checkbox" value="yes" />"#
        );
    }

    #[test]
    fn radio_ids_include_the_value() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            render([b.radio_button(None, "size", false, Some("large"))]).unwrap(),
            r#"<input id="size-large" name="size" type="radio" value="large" />"#
        );
    }

    #[test]
    fn options_are_selected_by_value_or_label() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let options: Vec<SelectOption> = vec![
            "red".into(),
            ("Green", "g").into(),
            ("More", vec!["blue".into()]).into(),
        ];
        assert_eq!(
            render([b.select_options(&options, Some("g"))]).unwrap(),
            concat!(
                "<option>red</option>",
                r#"<option selected="selected" value="g">Green</option>"#,
                r#"<optgroup label="More"><option>blue</option></optgroup>"#
            )
        );
        assert_eq!(
            render([b.select_options(&options, Some("blue"))]).unwrap(),
            concat!(
                "<option>red</option>",
                r#"<option value="g">Green</option>"#,
                r#"<optgroup label="More"><option selected="selected">blue</option></optgroup>"#
            )
        );
    }

    #[test]
    fn drop_down_wraps_options() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let attrs = Attrs::new_in(&bump).with("class", "picker");
        assert_eq!(
            render([b.drop_down(Some(attrs), "colour", &[SelectOption::Label("red")], None)]).unwrap(),
            r#"<select class="picker" id="colour" name="colour"><option>red</option></select>"#
        );
    }

    #[test]
    fn text_areas_labels_and_buttons() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            render([b.text_area(None, "bio", None)]).unwrap(),
            r#"<textarea id="bio" name="bio"></textarea>"#
        );
        assert_eq!(
            render([b.text_area(None, "bio", Some("a < b"))]).unwrap(),
            r#"<textarea id="bio" name="bio">a &lt; b</textarea>"#
        );
        assert_eq!(
            render([b.group("user").label(None, "bio", "About")]).unwrap(),
            r#"<label for="user-bio">About</label>"#
        );
        assert_eq!(
            render([b.file_upload(None, "avatar")]).unwrap(),
            r#"<input id="avatar" name="avatar" type="file" />"#
        );
        assert_eq!(
            render([b.submit_button(None, "Go"), b.reset_button(None, "Clear")]).unwrap(),
            r#"<input type="submit" value="Go" /><input type="reset" value="Clear" />"#
        );
    }

    #[test]
    fn forms_override_unsupported_methods() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            render([b.form_to(None, ("post", "/save"), [b.submit_button(None, "Save")])])
                .unwrap(),
            r#"<form action="/save" method="POST"><input type="submit" value="Save" /></form>"#
        );
        assert_eq!(
            render([b.group("item").form_to(None, ("delete", "/items/1"), [(); 0])]).unwrap(),
            concat!(
                r#"<form action="/items/1" method="POST">"#,
                r#"<input id="_method" name="_method" type="hidden" value="DELETE" />"#,
                "</form>"
            )
        );
    }
}
