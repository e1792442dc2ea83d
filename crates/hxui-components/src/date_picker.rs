//! Date picker
//!
//! Read-only text input showing the chosen date, opening a popover with an
//! embedded calendar. The calendar's navigation and day requests target the
//! picker's root, so the whole picker re-renders on every step.
//!
//! Binding actions: `nav` (`{month, year}`) and `select` (`{date}`, closes).

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::NaiveDate;
use hxui_dom::attributes::{aria, bool_str, class, data_slot, id, name, placeholder, readonly, role, type_, value};
use hxui_dom::elements::{div, input, span};
use hxui_dom::{cn, group, if_with, Node};
use hxui_htmx::{hx, stateful, HandlerError, InteractiveBinding, Request, Router, StateStore, Trigger};
use serde::{Deserialize, Serialize};

use crate::calendar::{self, parse_date, parse_month, CalendarMode, CalendarProps, WeekStart, YearMonth};
use crate::disclosure::{register_transitions, Disclosure};
use crate::icons;
use crate::popover::placement;
use crate::props::{open_state, resolve_id, Align, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerProps {
    pub id: Option<String>,
    /// Extra classes for the text input
    pub class: String,
    pub open: bool,
    pub value: Option<NaiveDate>,
    /// Month shown in the popover; defaults to the value's month
    pub month: Option<YearMonth>,
    pub placeholder: String,
    /// chrono format string for the displayed value
    pub format: String,
    /// Form field carrying the ISO date
    pub name: Option<String>,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    pub today: Option<NaiveDate>,
    pub week_start: WeekStart,
}

impl Default for DatePickerProps {
    fn default() -> Self {
        Self {
            id: None,
            class: String::new(),
            open: false,
            value: None,
            month: None,
            placeholder: "Pick a date".to_string(),
            format: "%B %-d, %Y".to_string(),
            name: None,
            min: None,
            max: None,
            today: None,
            week_start: WeekStart::default(),
        }
    }
}

impl DatePickerProps {
    fn calendar(&self) -> CalendarProps {
        CalendarProps {
            mode: CalendarMode::Single,
            month: self.month,
            selected: self.value,
            min: self.min,
            max: self.max,
            today: self.today,
            week_start: self.week_start,
            ..Default::default()
        }
    }

    /// Apply session state on top of these props
    pub fn with_state(&self, state: &DatePickerState) -> Self {
        Self {
            open: state.open,
            value: state.value.or(self.value),
            month: state.month.or(self.month),
            ..self.clone()
        }
    }
}

/// Per-session picker state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePickerState {
    pub open: bool,
    pub value: Option<NaiveDate>,
    pub month: Option<YearMonth>,
}

impl DatePickerState {
    /// `{month, year}`
    pub fn apply_nav(&mut self, req: &Request) -> Result<(), HandlerError> {
        self.month = Some(parse_month(req)?);
        Ok(())
    }

    /// `{date}`: stores the value and closes the popover
    pub fn apply_select(&mut self, req: &Request, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<(), HandlerError> {
        let date = parse_date(req, "date")?;
        if min.is_some_and(|min| date < min) || max.is_some_and(|max| date > max) {
            return Err(HandlerError::InvalidField {
                name: "date".to_string(),
                value: date.to_string(),
                reason: "date is outside the selectable range".to_string(),
            });
        }
        self.value = Some(date);
        self.month = Some(YearMonth::of(date));
        self.open = false;
        Ok(())
    }
}

impl Disclosure for DatePickerState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

/// Static picker
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(props: DatePickerProps) -> Node {
    let id = resolve_id(props.id.as_deref(), "date-picker", props.name.as_deref().unwrap_or(""));
    interactive(props, &InteractiveBinding::new(id))
}

/// `date` in `format`, or ISO `YYYY-MM-DD` when `format` is not a valid
/// chrono format string
fn display_value(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

pub fn interactive(props: DatePickerProps, binding: &InteractiveBinding) -> Node {
    let open = props.open;
    let popover_id = binding.part_id("popover");
    let display = props
        .value
        .map(|date| display_value(date, &props.format))
        .unwrap_or_default();

    binding.root(open_state(open), [
        data_slot("date-picker"),
        class("relative inline-block"),
        props.name.as_ref().map(|field| {
            input([
                type_("hidden"),
                name(field.clone()),
                value(props.value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()),
            ])
        }).into(),
        div([
            class("relative"),
            input([
                type_("text"),
                id(binding.part_id("input")),
                data_slot("date-picker-input"),
                readonly(),
                value(display),
                placeholder(props.placeholder.as_str()),
                aria("haspopup", "dialog"),
                aria("expanded", bool_str(open)),
                aria("controls", popover_id.as_str()),
                class(cn([
                    "border-input flex h-9 w-[240px] cursor-pointer rounded-md border bg-transparent py-1 pr-9 pl-3 text-sm shadow-xs outline-none",
                    props.class.as_str(),
                ])),
                group([binding.transition_request(!open), hx::trigger(&Trigger::click())]),
            ]),
            span([
                class("text-muted-foreground pointer-events-none absolute top-1/2 right-3 -translate-y-1/2"),
                icons::calendar(""),
            ]),
        ]),
        if_with(open, || {
            div([
                id(popover_id.clone()),
                role("dialog"),
                aria("label", "Choose date"),
                data_slot("date-picker-content"),
                class(placement(
                    Side::Bottom,
                    Align::Start,
                    "bg-popover text-popover-foreground w-auto rounded-md border p-0 shadow-md",
                )),
                calendar::render(&props.calendar(), &binding.part_id("calendar"), Some(binding)),
            ])
        }),
    ])
}

/// Wire open/close/toggle plus the `nav` and `select` actions
pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, props: &DatePickerProps, store: S, view: V)
where
    S: StateStore<DatePickerState>,
    V: Fn(&DatePickerState) -> Node + Send + Sync + 'static,
{
    let view = Arc::new(view);
    {
        let view = view.clone();
        register_transitions(router, binding, store.clone(), move |state: &DatePickerState| view(state));
    }
    if let Some(endpoint) = binding.action("nav") {
        let view = view.clone();
        router.endpoint(
            endpoint,
            stateful(store.clone(), DatePickerState::apply_nav, move |state: &DatePickerState| view(state)),
        );
    }
    if let Some(endpoint) = binding.action("select") {
        let (min, max) = (props.min, props.max);
        router.endpoint(
            endpoint,
            stateful(
                store,
                move |state: &mut DatePickerState, req| state.apply_select(req, min, max),
                move |state: &DatePickerState| view(state),
            ),
        );
    }
}
