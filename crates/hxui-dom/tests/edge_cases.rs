//! Edge case tests for hxui-dom
//!
//! Sink failures, unusual payloads and construction errors.

use std::io::{self, Write};

use hxui_dom::elements::{div, p};
use hxui_dom::{attr, element, raw, render, render_with, text, void_element, RenderConfig, RenderError};

/// Sink that fails once `limit` bytes have been accepted
struct FailingSink {
    written: Vec<u8>,
    limit: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() >= self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"));
        }
        let n = buf.len().min(self.limit - self.written.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// SINK FAILURES
// ============================================================================

#[test]
fn test_sink_error_aborts_walk() {
    let node = div((0..50).map(|i| p([text(format!("paragraph {i}"))])));
    let mut sink = FailingSink { written: Vec::new(), limit: 20 };
    let err = render_with(&node, &mut sink, &RenderConfig { buffer_capacity: 0 }).unwrap_err();
    assert!(matches!(err, RenderError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    // Partial output is not rolled back
    assert_eq!(sink.written.len(), 20);
}

#[test]
fn test_sink_error_through_buffer() {
    let node = div((0..500).map(|i| p([text(format!("paragraph {i}"))])));
    let mut sink = FailingSink { written: Vec::new(), limit: 100 };
    assert!(render(&node, &mut sink).is_err());
}

#[test]
fn test_nul_attribute_writes_nothing_for_that_element() {
    let node = div([attr("data-x", "\0")]);
    let mut sink = Vec::new();
    let err = render(&node, &mut sink).unwrap_err();
    assert!(matches!(err, RenderError::NulInAttribute { .. }));
    assert!(sink.is_empty());
}

// ============================================================================
// PAYLOADS
// ============================================================================

#[test]
fn test_unicode_text() {
    let mut sink = Vec::new();
    render(&p([text("Hello 世界 🚀 Ñoño")]), &mut sink).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), "<p>Hello 世界 🚀 Ñoño</p>");
}

#[test]
fn test_text_nul_is_passed_through() {
    let mut sink = Vec::new();
    render(&text("a\0b"), &mut sink).unwrap();
    assert_eq!(sink, b"a\0b");
}

#[test]
fn test_empty_text_and_empty_element() {
    let mut sink = Vec::new();
    render(&div([text("")]), &mut sink).unwrap();
    assert_eq!(sink, b"<div></div>");
}

#[test]
fn test_deep_nesting() {
    let mut node = text("leaf");
    for _ in 0..200 {
        node = div([node]);
    }
    let mut sink = Vec::new();
    render(&node, &mut sink).unwrap();
    assert_eq!(sink.len(), 200 * "<div></div>".len() + "leaf".len());
}

#[test]
fn test_raw_inside_void_is_rejected() {
    let result = std::panic::catch_unwind(|| void_element("img", [raw("<b>")]));
    assert!(result.is_err());
}

// ============================================================================
// CONSTRUCTION ERRORS
// ============================================================================

#[test]
#[should_panic(expected = "invalid element tag name")]
fn test_tag_with_space_panics() {
    element("my tag", []);
}

#[test]
#[should_panic(expected = "invalid attribute name")]
fn test_non_ascii_attribute_name_panics() {
    attr("dätä", "x");
}

#[test]
#[should_panic(expected = "cannot have children")]
fn test_element_with_void_tag_and_children_panics() {
    element("br", [text("x")]);
}
