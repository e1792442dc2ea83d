//! Comprehensive tests for hxui-dom
//!
//! Builds realistic fragments and checks the serialized output.

use hxui_dom::attributes::{aria, class, data_slot, disabled, href, id, role, type_};
use hxui_dom::elements::{a, button, div, input, li, p, span, svg, ul};
use hxui_dom::{
    attr, cn, element, group, map, rawf, render, render_to_string, text, textf, when, Node,
    Variant, VariantConfig,
};

fn html(node: &Node) -> String {
    render_to_string(node).unwrap()
}

#[test]
fn test_nested_structure() {
    let node = div([
        class("card"),
        id("main"),
        p([text("Intro")]),
        ul([map(["One", "Two", "Three"], |item| li([text(item)]))]),
    ]);
    assert_eq!(
        html(&node),
        r#"<div class="card" id="main"><p>Intro</p><ul><li>One</li><li>Two</li><li>Three</li></ul></div>"#
    );
}

#[test]
fn test_attributes_after_children_are_hoisted() {
    let node = button([text("Save"), type_("button"), disabled()]);
    assert_eq!(html(&node), r#"<button type="button" disabled>Save</button>"#);
}

#[test]
fn test_caller_overrides_default_attribute() {
    // Components emit defaults first; callers append overrides
    let node = a([href("/default"), role("link"), group([href("/override")]), text("Go")]);
    assert_eq!(html(&node), r#"<a href="/override" role="link">Go</a>"#);
}

#[test]
fn test_aria_and_data_slot() {
    let node = div([data_slot("menu"), aria("expanded", "false"), span([])]);
    assert_eq!(
        html(&node),
        r#"<div data-slot="menu" aria-expanded="false"><span></span></div>"#
    );
}

#[test]
fn test_inline_svg_mixed_case_attribute() {
    let node = svg::svg([
        attr("viewBox", "0 0 24 24"),
        svg::path([attr("d", "m15 18-6-6 6-6")]),
    ]);
    assert_eq!(
        html(&node),
        r#"<svg viewBox="0 0 24 24"><path d="m15 18-6-6 6-6"></path></svg>"#
    );
}

#[test]
fn test_formatting_macros() {
    let count = 3;
    let node = group([textf!("{} < {}", count, 4), rawf!("<b>{}</b>", count)]);
    assert_eq!(html(&node), "3 &lt; 4<b>3</b>");
}

#[test]
fn test_when_and_input() {
    let checked = true;
    let node = input([type_("checkbox"), when(checked, attr("aria-checked", "true"), attr("aria-checked", "false"))]);
    assert_eq!(html(&node), r#"<input type="checkbox" aria-checked="true">"#);
}

#[test]
fn test_aliasing_subtree_equals_inlining() {
    let shared = span([text("x")]);
    let aliased = div([shared.clone(), shared]);
    let inlined = div([span([text("x")]), span([text("x")])]);
    assert_eq!(html(&aliased), html(&inlined));
}

#[test]
fn test_variant_table_with_cn() {
    const SIZES: VariantConfig = VariantConfig {
        base: "inline-flex",
        variants: &[Variant {
            name: "size",
            default: "default",
            choices: &[("default", "h-9"), ("sm", "h-8")],
        }],
    };
    let classes = SIZES.resolve(&[("size", "sm")], &cn(["mt-2", ""]));
    assert_eq!(classes, "inline-flex h-8 mt-2");
}

#[test]
fn test_render_into_vec_sink() {
    let mut sink = Vec::new();
    render(&p([text("ok")]), &mut sink).unwrap();
    assert_eq!(sink, b"<p>ok</p>");
}

#[test]
fn test_custom_element_name() {
    let node = element("my-widget", [text("w")]);
    assert_eq!(html(&node), "<my-widget>w</my-widget>");
}
