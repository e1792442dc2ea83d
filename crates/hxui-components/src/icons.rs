//! Icon glyphs
//!
//! Lucide-style stroke icons assembled from typed SVG shapes. Every icon is
//! `aria-hidden` and sized by its caller through `class`.

use hxui_dom::attributes::{aria, class};
use hxui_dom::elements::svg::{circle, path, rect, svg};
use hxui_dom::{attr, cn, group, Node};

fn icon(extra: &str, shapes: impl IntoIterator<Item = Node>) -> Node {
    svg([
        attr("xmlns", "http://www.w3.org/2000/svg"),
        attr("width", "24"),
        attr("height", "24"),
        attr("viewBox", "0 0 24 24"),
        attr("fill", "none"),
        attr("stroke", "currentColor"),
        attr("stroke-width", "2"),
        attr("stroke-linecap", "round"),
        attr("stroke-linejoin", "round"),
        class(cn(["size-4", extra])),
        aria("hidden", "true"),
        group(shapes),
    ])
}

fn d(data: &str) -> Node {
    path([attr("d", data)])
}

fn dot(cx: u32, cy: u32, r: u32) -> Node {
    circle([
        attr("cx", cx.to_string()),
        attr("cy", cy.to_string()),
        attr("r", r.to_string()),
    ])
}

pub fn chevron_left(extra: &str) -> Node {
    icon(extra, [d("m15 18-6-6 6-6")])
}

pub fn chevron_right(extra: &str) -> Node {
    icon(extra, [d("m9 18 6-6-6-6")])
}

pub fn chevron_down(extra: &str) -> Node {
    icon(extra, [d("m6 9 6 6 6-6")])
}

pub fn chevrons_up_down(extra: &str) -> Node {
    icon(extra, [d("m7 15 5 5 5-5"), d("m7 9 5-5 5 5")])
}

pub fn check(extra: &str) -> Node {
    icon(extra, [d("M20 6 9 17l-5-5")])
}

pub fn x(extra: &str) -> Node {
    icon(extra, [d("M18 6 6 18"), d("m6 6 12 12")])
}

/// Filled dot used by radio indicators
pub fn circle_dot(extra: &str) -> Node {
    icon(extra, [dot(12, 12, 10)])
}

pub fn search(extra: &str) -> Node {
    icon(extra, [dot(11, 11, 8), d("m21 21-4.3-4.3")])
}

pub fn calendar(extra: &str) -> Node {
    icon(extra, [
        d("M8 2v4"),
        d("M16 2v4"),
        rect([
            attr("width", "18"),
            attr("height", "18"),
            attr("x", "3"),
            attr("y", "4"),
            attr("rx", "2"),
        ]),
        d("M3 10h18"),
    ])
}

pub fn more_horizontal(extra: &str) -> Node {
    icon(extra, [dot(12, 12, 1), dot(19, 12, 1), dot(5, 12, 1)])
}
