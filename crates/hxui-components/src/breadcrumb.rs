//! Breadcrumb
//!
//! `nav > ol > li` trail. The current page is a `<span aria-current="page">`
//! and separators default to a chevron.

use hxui_dom::attributes::{aria, class, href, role};
use hxui_dom::elements::span;
use hxui_dom::{group, text, Node};

use crate::icons;
use crate::props::{part, Props};

pub fn new(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("nav", "breadcrumb", "", &props, [aria("label", "breadcrumb"), group(children)])
}

pub fn list(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part(
        "ol",
        "breadcrumb-list",
        "text-muted-foreground flex flex-wrap items-center gap-1.5 text-sm break-words sm:gap-2.5",
        &props,
        children,
    )
}

pub fn item(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("li", "breadcrumb-item", "inline-flex items-center gap-1.5", &props, children)
}

pub fn link(props: Props, url: &str, children: impl IntoIterator<Item = Node>) -> Node {
    part(
        "a",
        "breadcrumb-link",
        "hover:text-foreground transition-colors",
        &props,
        [href(url), group(children)],
    )
}

pub fn page(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part(
        "span",
        "breadcrumb-page",
        "text-foreground font-normal",
        &props,
        [
            role("link"),
            aria("disabled", "true"),
            aria("current", "page"),
            group(children),
        ],
    )
}

/// Separator; a chevron when `children` is empty
pub fn separator(props: Props, children: Vec<Node>) -> Node {
    let content = if children.is_empty() {
        vec![icons::chevron_right("size-3.5")]
    } else {
        children
    };
    part(
        "li",
        "breadcrumb-separator",
        "[&>svg]:size-3.5",
        &props,
        [role("presentation"), aria("hidden", "true"), group(content)],
    )
}

pub fn ellipsis(props: Props) -> Node {
    part(
        "span",
        "breadcrumb-ellipsis",
        "flex size-9 items-center justify-center",
        &props,
        [
            role("presentation"),
            aria("hidden", "true"),
            icons::more_horizontal(""),
            span([class("sr-only"), text("More")]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::render_to_string;

    #[test]
    fn test_trail() {
        let node = new(Props::default(), [list(Props::default(), [
            item(Props::default(), [link(Props::default(), "/", [text("Home")])]),
            separator(Props::default(), vec![]),
            item(Props::default(), [ellipsis(Props::default())]),
            separator(Props::default(), vec![text("/")]),
            item(Props::default(), [page(Props::default(), [text("Breadcrumb")])]),
        ])]);
        let html = render_to_string(&node).unwrap();
        assert!(html.starts_with(r#"<nav data-slot="breadcrumb" aria-label="breadcrumb"><ol"#));
        assert!(html.contains(r#"<a data-slot="breadcrumb-link" class="hover:text-foreground transition-colors" href="/">Home</a>"#));
        assert!(html.contains(r#"aria-current="page">Breadcrumb</span>"#));
        assert!(html.contains(r#"aria-hidden="true">/</li>"#));
        assert_eq!(html.matches("data-slot=\"breadcrumb-separator\"").count(), 2);
        assert!(html.contains(r#"<span class="sr-only">More</span>"#));
    }
}
