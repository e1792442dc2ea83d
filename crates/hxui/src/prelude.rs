//! Commonly used items
//!
//! `use hxui::prelude::*;` brings in the node builders, the interactive
//! protocol types and every component module.

pub use hxui_dom::{
    attr, attr_bool, cn, cn_if, element, group, raw, render, render_to_string, render_with, text, Node,
    RenderConfig, RenderError,
};
pub use hxui_dom::{attributes, elements};

pub use hxui_htmx::{
    Endpoint, HandlerError, InteractiveBinding, MemoryStore, Method, Payload, Request, Router, StateStore, SwapMode,
    Trigger,
};

pub use hxui_components::{
    accordion, alert, badge, breadcrumb, button, calendar, card, collapsible, combobox, command, date_picker, dialog,
    dropdown, form, icons, popover, separator, sheet, skeleton, tabs, toast,
};
pub use hxui_components::{ButtonProps, ButtonSize, ButtonVariant, Props, Side, Align};
