//! End-to-end scenarios for hxui-components
//!
//! Each test builds a component (or drives its handlers through a router)
//! and checks the rendered fragment.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use hxui_components::{
    accordion, button, calendar, command, dialog, dropdown, AccordionItem, AccordionProps, AccordionState,
    AccordionType, ButtonProps, CalendarProps, CalendarState, CommandGroup, CommandItem, CommandProps, CommandState,
    DialogProps, DropdownProps, DropdownState, MenuCheckbox, MenuEntry, YearMonth,
};
use hxui_dom::{render_to_string, text};
use hxui_htmx::{Endpoint, InteractiveBinding, MemoryStore, Request, Router};

// ============================================================================
// S1: BUTTON
// ============================================================================

#[test]
fn test_default_button_save() {
    let html = render_to_string(&button::new(ButtonProps::default(), [text("Save")])).unwrap();
    assert!(html.contains("<button"));
    assert!(html.contains(r#"type="button""#));
    assert!(html.contains("Save"));
    assert!(html.contains("bg-primary text-primary-foreground"));
    assert!(html.contains("inline-flex items-center justify-center"));
}

// ============================================================================
// S2: ACCORDION
// ============================================================================

#[test]
fn test_accordion_single_collapsible_default_item_2() {
    let props = AccordionProps {
        type_: AccordionType::Single,
        collapsible: true,
        default_value: vec!["item-2".into()],
        ..Default::default()
    };
    let items = vec![
        AccordionItem::new("item-1", vec![text("Is it accessible?")], vec![text("Yes.")]),
        AccordionItem::new("item-2", vec![text("Is it styled?")], vec![text("Yes.")]),
    ];
    let html = render_to_string(&accordion::new(props, items)).unwrap();
    assert!(html.contains(r#"data-accordion-type="single""#));
    assert!(html.contains(r#"data-accordion-collapsible="true""#));
    assert!(html.contains(r#"data-accordion-default="item-2""#));
    assert!(html.contains(r#"data-accordion-value="item-1""#));
    assert!(html.contains(r#"data-accordion-value="item-2""#));
    assert!(html.contains(r#"data-accordion-value="item-2" data-state="open""#));
    assert!(html.contains(r#"data-accordion-value="item-1" data-state="closed""#));
}

#[test]
fn test_accordion_toggle_through_router() {
    let binding = InteractiveBinding::new("faq").with_toggle(Endpoint::post("/faq/toggle"));
    let props = AccordionProps {
        collapsible: true,
        ..Default::default()
    };
    let items = || {
        vec![
            AccordionItem::new("a", vec![text("A")], vec![text("Alpha")]),
            AccordionItem::new("b", vec![text("B")], vec![text("Beta")]),
        ]
    };
    let store = MemoryStore::<AccordionState>::new();
    let mut router = Router::new();
    let (view_binding, view_props) = (binding.clone(), props.clone());
    accordion::register(&mut router, &binding, &props, vec!["a".into(), "b".into()], store.clone(), move |state| {
        let props = AccordionProps {
            value: Some(state.open.clone()),
            ..view_props.clone()
        };
        accordion::interactive(props, &view_binding, items())
    });

    let html = router.render(&Request::post("/faq/toggle", "item=b")).unwrap();
    assert!(html.contains(r#"data-accordion-value="b" data-state="open""#));
    let html = router.render(&Request::post("/faq/toggle", "item=b")).unwrap();
    assert!(html.contains(r#"data-accordion-value="b" data-state="closed""#));
    assert!(router.render(&Request::post("/faq/toggle", "item=c")).is_err());
}

// ============================================================================
// S3: DIALOG TOGGLE PROTOCOL
// ============================================================================

fn dialog_router() -> Router {
    let binding = InteractiveBinding::with_paths("dialog-example", "/dialog");
    let view_binding = binding.clone();
    let mut router = Router::new();
    dialog::register(&mut router, &binding, MemoryStore::<dialog::DialogState>::new(), move |state| {
        let props = DialogProps {
            open: state.open,
            title: "Edit profile".into(),
            description: "Make changes to your profile here.".into(),
            ..Default::default()
        };
        dialog::interactive(props, &view_binding, [text("Form goes here")])
    });
    router
}

#[test]
fn test_dialog_open_and_close_endpoints() {
    let router = dialog_router();

    let open = router.render(&Request::get("/dialog/open")).unwrap();
    assert!(open.contains(r#"id="dialog-example""#));
    assert!(open.contains(r#"data-state="open""#));
    assert!(open.contains(r#"role="dialog""#));
    assert!(open.contains("Form goes here"));

    let closed = router.render(&Request::get("/dialog/close")).unwrap();
    assert_eq!(closed.trim(), r#"<div id="dialog-example" data-state="closed"></div>"#);
}

// ============================================================================
// S4: CALENDAR NAVIGATION
// ============================================================================

fn prev_link(html: &str) -> &str {
    let start = html.find(r#"<a href=""#).unwrap() + r#"<a href=""#.len();
    let rest = &html[start..];
    &rest[..rest.find('"').unwrap()]
}

#[test]
fn test_calendar_previous_month_query() {
    let march = CalendarProps {
        month: YearMonth::new(2024, 3),
        ..Default::default()
    };
    let html = render_to_string(&calendar::new(march)).unwrap();
    assert_eq!(prev_link(&html), "?month=2&amp;year=2024");

    let january = CalendarProps {
        month: YearMonth::new(2024, 1),
        ..Default::default()
    };
    let html = render_to_string(&calendar::new(january)).unwrap();
    assert_eq!(prev_link(&html), "?month=12&amp;year=2023");
}

#[test]
fn test_calendar_interactive_navigation() {
    let binding = InteractiveBinding::new("cal")
        .with_action("nav", Endpoint::get("/cal/nav"))
        .with_action("select", Endpoint::post("/cal/select"));
    let base = CalendarProps {
        month: YearMonth::new(2024, 1),
        today: NaiveDate::from_ymd_opt(2024, 1, 15),
        ..Default::default()
    };
    let mut router = Router::new();
    let (view_binding, view_base) = (binding.clone(), base.clone());
    calendar::register(&mut router, &binding, &base, MemoryStore::<CalendarState>::new(), move |state| {
        calendar::interactive(state.props(&view_base), &view_binding)
    });

    let initial = render_to_string(&calendar::interactive(base, &binding)).unwrap();
    assert!(initial.contains(r#"hx-get="/cal/nav?month=12&amp;year=2023""#));

    let html = router.render(&Request::get("/cal/nav?month=12&year=2023")).unwrap();
    assert!(html.starts_with(r#"<div id="cal" data-state="2023-12""#));
    assert!(html.contains(">December 2023</div>"));

    let html = router.render(&Request::post("/cal/select", "date=2023-12-24")).unwrap();
    assert!(html.contains(r#"data-day="2023-12-24" aria-selected="true""#));
}

// ============================================================================
// S5: COMMAND PALETTE FILTER
// ============================================================================

fn palette_groups() -> Vec<CommandGroup> {
    vec![
        CommandGroup::new("Actions", vec![
            CommandItem::new("Copy", "copy").with_description("Copy selection"),
            CommandItem::new("Paste", "paste").with_description("Paste from clipboard"),
            CommandItem::new("Cut", "cut").with_description("Cut selection"),
        ]),
        CommandGroup::new("Navigation", vec![
            CommandItem::new("Go Home", "home").with_category("nav"),
            CommandItem::new("Go Back", "back").with_category("nav"),
        ]),
    ]
}

fn labels(groups: &[CommandGroup], query: &str) -> Vec<String> {
    command::filter(groups, query)
        .into_iter()
        .flat_map(|(_, items)| items)
        .map(|item| item.label.clone())
        .collect()
}

#[test]
fn test_command_filter_cases() {
    let groups = palette_groups();
    assert_eq!(labels(&groups, "clipboard"), vec!["Paste"]);
    assert_eq!(labels(&groups, "nav"), vec!["Go Home", "Go Back"]);
    assert_eq!(labels(&groups, "").len(), 5);
    assert_eq!(labels(&groups, "COPY"), vec!["Copy"]);
}

#[test]
fn test_command_search_through_router() {
    let groups = palette_groups();
    let binding = InteractiveBinding::new("palette").with_action("search", Endpoint::get("/palette/search"));
    let mut router = Router::new();
    let (view_binding, view_groups) = (binding.clone(), groups.clone());
    command::register(&mut router, &binding, groups, MemoryStore::<CommandState>::new(), move |state| {
        command::interactive(CommandProps::default().with_state(state), &view_binding, &view_groups)
    });

    let html = router.render(&Request::get("/palette/search?query=clipboard")).unwrap();
    assert_eq!(html.matches(r#"role="option""#).count(), 1);
    assert!(html.contains(r#"data-value="paste""#));
    assert!(!html.contains(">Navigation<"));

    let html = router.render(&Request::get("/palette/search?query=xyz")).unwrap();
    assert!(html.contains(r#"data-slot="command-empty""#));
}

// ============================================================================
// S6: DROPDOWN CHECKBOX TOGGLE
// ============================================================================

#[test]
fn test_dropdown_checkbox_toggle() {
    let binding = InteractiveBinding::with_paths("view-menu", "/menu").with_action("check", Endpoint::post("/menu/check"));
    let entries = vec![
        MenuEntry::Label("Appearance".into()),
        MenuEntry::Separator,
        MenuEntry::Checkbox(MenuCheckbox::new("statusBar", "Status Bar")),
        MenuEntry::Checkbox(MenuCheckbox::new("activityBar", "Activity Bar")),
    ];
    let initial = DropdownState {
        open: true,
        checkboxes: BTreeMap::from([("statusBar".to_string(), true), ("activityBar".to_string(), false)]),
        ..Default::default()
    };
    let store = MemoryStore::with_initial(initial);
    let mut router = Router::new();
    let view_binding = binding.clone();
    dropdown::register(&mut router, &binding, store.clone(), move |state| {
        let props = DropdownProps {
            state: state.clone(),
            ..Default::default()
        };
        dropdown::interactive(props, &view_binding, [text("View")], &entries)
    });

    let html = router.render(&Request::post("/menu/check", "name=activityBar&checked=true")).unwrap();
    assert!(html.contains(r#"aria-checked="true" data-state="checked" data-value="activityBar""#));
    assert!(html.contains(r#"aria-checked="true" data-state="checked" data-value="statusBar""#));
    assert_eq!(store.get("default").checkboxes.get("activityBar"), Some(&true));
}
