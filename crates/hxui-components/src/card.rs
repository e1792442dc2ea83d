//! Card
//!
//! Container with header, title, description, action, content and footer parts.

use hxui_dom::Node;

use crate::props::{part, Props};

pub fn new(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part(
        "div",
        "card",
        "bg-card text-card-foreground flex flex-col gap-6 rounded-xl border py-6 shadow-sm",
        &props,
        children,
    )
}

pub fn header(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part(
        "div",
        "card-header",
        "@container/card-header grid auto-rows-min grid-rows-[auto_auto] items-start gap-1.5 px-6 has-data-[slot=card-action]:grid-cols-[1fr_auto] [.border-b]:pb-6",
        &props,
        children,
    )
}

pub fn title(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("div", "card-title", "leading-none font-semibold", &props, children)
}

pub fn description(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("div", "card-description", "text-muted-foreground text-sm", &props, children)
}

pub fn action(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part(
        "div",
        "card-action",
        "col-start-2 row-span-2 row-start-1 self-start justify-self-end",
        &props,
        children,
    )
}

pub fn content(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("div", "card-content", "px-6", &props, children)
}

pub fn footer(props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    part("div", "card-footer", "flex items-center px-6 [.border-t]:pt-6", &props, children)
}
