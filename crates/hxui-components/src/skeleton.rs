//! Skeleton placeholder

use hxui_dom::Node;

use crate::props::{part, Props};

pub fn new(props: Props) -> Node {
    part("div", "skeleton", "bg-accent animate-pulse rounded-md", &props, [])
}
