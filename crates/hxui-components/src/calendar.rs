//! Calendar
//!
//! Month grid with previous/next navigation and single or range selection.
//!
//! Navigation links carry `month` and `year` query fields (1-based month), so
//! the static form works as plain links and the interactive form sends the
//! same fields through the binding's `nav` action. Day buttons send `{date}`
//! (ISO `YYYY-MM-DD`) to the `select` action.
//!
//! Rendering is pure except for one documented case: with no `month`,
//! `selected` or `today` prop the grid shows the current wall-clock month.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use hxui_dom::attributes::{aria, class, data, data_slot, data_state, disabled, href, id, name, role, type_, value};
use hxui_dom::elements::{a, button as button_tag, div, nav, table, tbody, td, th, thead, tr};
use hxui_dom::{attr, cn, element, if_, map, text, Node};
use hxui_htmx::{stateful, Endpoint, HandlerError, InteractiveBinding, Payload, Request, Router, StateStore};
use serde::{Deserialize, Serialize};

use crate::button::{self, ButtonSize, ButtonVariant};
use crate::icons;
use crate::props::resolve_id;

/// Weeks shown per month
pub const WEEKS: usize = 6;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `None` unless `month` is 1..=12 and the year is representable
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month on the local clock
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// `March 2024`
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// `month`/`year` query pairs
    pub fn query(&self) -> [(&'static str, String); 2] {
        [("month", self.month.to_string()), ("year", self.year.to_string())]
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    #[default]
    Single,
    Range,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarProps {
    pub id: Option<String>,
    pub class: String,
    pub mode: CalendarMode,
    /// Month on display. Unset: the selected date's month, then `today`'s,
    /// then the wall-clock month.
    pub month: Option<YearMonth>,
    /// Selected date, or the range start
    pub selected: Option<NaiveDate>,
    /// Range end (range mode)
    pub range_end: Option<NaiveDate>,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    /// Date marked as today; never read from the clock
    pub today: Option<NaiveDate>,
    pub week_start: WeekStart,
    pub hide_outside_days: bool,
    /// Base URL of the static form's navigation links
    pub nav_url: String,
}

impl CalendarProps {
    /// Month on display
    pub fn display_month(&self) -> YearMonth {
        self.month
            .or_else(|| self.selected.map(YearMonth::of))
            .or_else(|| self.today.map(YearMonth::of))
            .unwrap_or_else(YearMonth::current)
    }

    fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }
}

/// First cell of the 6-week grid for `month`
pub fn grid_start(month: YearMonth, week_start: WeekStart) -> NaiveDate {
    let first = month.first_day();
    let offset = (7 + first.weekday().num_days_from_monday() - week_start.weekday().num_days_from_monday()) % 7;
    first.checked_sub_days(Days::new(u64::from(offset))).unwrap_or(first)
}

/// The 42 dates shown for `month`
pub fn grid_days(month: YearMonth, week_start: WeekStart) -> Vec<NaiveDate> {
    grid_start(month, week_start).iter_days().take(WEEKS * 7).collect()
}

/// Per-session calendar state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    pub month: Option<YearMonth>,
    pub selected: Option<NaiveDate>,
    pub range_end: Option<NaiveDate>,
}

impl CalendarState {
    /// `{month, year}`
    pub fn apply_nav(&mut self, req: &Request) -> Result<(), HandlerError> {
        self.month = Some(parse_month(req)?);
        Ok(())
    }

    /// `{date}`; rejects dates outside `min..=max`
    pub fn apply_select(&mut self, req: &Request, props: &CalendarProps) -> Result<(), HandlerError> {
        let date = parse_date(req, "date")?;
        if props.is_disabled(date) {
            return Err(HandlerError::InvalidField {
                name: "date".to_string(),
                value: date.to_string(),
                reason: "date is outside the selectable range".to_string(),
            });
        }
        self.select(date, props.mode);
        Ok(())
    }

    /// Select a date: replaces the single selection, or extends/restarts a range
    pub fn select(&mut self, date: NaiveDate, mode: CalendarMode) {
        match (mode, self.selected, self.range_end) {
            (CalendarMode::Range, Some(start), None) if date >= start => self.range_end = Some(date),
            (CalendarMode::Range, Some(start), None) => {
                self.range_end = Some(start);
                self.selected = Some(date);
            }
            _ => {
                self.selected = Some(date);
                self.range_end = None;
            }
        }
    }

    /// `base` with this state's month and selection
    pub fn props(&self, base: &CalendarProps) -> CalendarProps {
        CalendarProps {
            month: self.month.or(base.month),
            selected: self.selected.or(base.selected),
            range_end: self.range_end.or(base.range_end),
            ..base.clone()
        }
    }
}

pub(crate) fn parse_month(req: &Request) -> Result<YearMonth, HandlerError> {
    let month: u32 = req.parse_field("month")?;
    let year: i32 = req.parse_field("year")?;
    YearMonth::new(year, month).ok_or_else(|| HandlerError::InvalidField {
        name: "month".to_string(),
        value: month.to_string(),
        reason: "month must be between 1 and 12".to_string(),
    })
}

pub(crate) fn parse_date(req: &Request, field: &str) -> Result<NaiveDate, HandlerError> {
    req.parse_field::<NaiveDate>(field)
}

/// Static calendar
///
/// # Panics
///
/// Panics when `props.id` contains whitespace.
pub fn new(props: CalendarProps) -> Node {
    let id = resolve_id(props.id.as_deref(), "calendar", "");
    render(&props, &id, None)
}

/// Calendar wired to the binding's `nav` and `select` actions
pub fn interactive(props: CalendarProps, binding: &InteractiveBinding) -> Node {
    render(&props, binding.id(), Some(binding))
}

/// Render with `root_id` as the root's id; requests (if any) go through `wire`,
/// which may target an enclosing component
pub(crate) fn render(props: &CalendarProps, root_id: &str, wire: Option<&InteractiveBinding>) -> Node {
    let month = props.display_month();
    let caption_id = format!("{root_id}-caption");

    element("div", [
        id(root_id),
        data_state(month.to_string()),
        data_slot("calendar"),
        class(cn(["bg-background w-fit p-3", props.class.as_str()])),
        div([
            class("relative flex flex-col gap-4"),
            nav([
                class("absolute inset-x-0 top-0 flex w-full items-center justify-between gap-1"),
                nav_link(props, wire, month.prev(), "calendar-prev", "Go to the Previous Month", icons::chevron_left("")),
                nav_link(props, wire, month.next(), "calendar-next", "Go to the Next Month", icons::chevron_right("")),
            ]),
            div([
                id(caption_id.as_str()),
                data_slot("calendar-caption"),
                role("presentation"),
                aria("live", "polite"),
                class("flex h-8 w-full items-center justify-center px-8 text-sm font-medium select-none"),
                text(month.label()),
            ]),
            table([
                role("grid"),
                aria("labelledby", caption_id.as_str()),
                if_(props.mode == CalendarMode::Range, aria("multiselectable", "true")),
                class("w-full border-collapse"),
                thead([
                    aria("hidden", "true"),
                    tr([class("flex"), map(weekday_headers(props.week_start), |(short, long)| {
                        th([
                            attr("scope", "col"),
                            aria("label", long),
                            class("text-muted-foreground flex-1 rounded-md text-[0.8rem] font-normal select-none"),
                            text(short),
                        ])
                    })]),
                ]),
                tbody([map(grid_days(month, props.week_start).chunks(7), |week| {
                    tr([class("mt-2 flex w-full"), map(week, |day| day_cell(props, wire, month, *day))])
                })]),
            ]),
        ]),
    ])
}

fn weekday_headers(start: WeekStart) -> Vec<(&'static str, &'static str)> {
    const DAYS: [(&str, &str); 7] = [
        ("Su", "Sunday"),
        ("Mo", "Monday"),
        ("Tu", "Tuesday"),
        ("We", "Wednesday"),
        ("Th", "Thursday"),
        ("Fr", "Friday"),
        ("Sa", "Saturday"),
    ];
    let skip = match start {
        WeekStart::Sunday => 0,
        WeekStart::Monday => 1,
    };
    DAYS.iter().cycle().skip(skip).take(7).copied().collect()
}

fn nav_link(
    props: &CalendarProps,
    wire: Option<&InteractiveBinding>,
    target: YearMonth,
    slot: &'static str,
    label: &'static str,
    glyph: Node,
) -> Node {
    let query = target.query();
    let (url, request) = match wire.and_then(|b| b.action("nav").map(|endpoint| (b, endpoint))) {
        Some((binding, endpoint)) => {
            let endpoint = endpoint.with_query(&query);
            let request = binding.request(&endpoint, &Payload::new());
            (endpoint.url, request)
        }
        None => (Endpoint::get(props.nav_url.as_str()).with_query(&query).url, Node::Nil),
    };
    a([
        href(url),
        data_slot(slot),
        aria("label", label),
        class(button::classes(ButtonVariant::Ghost, ButtonSize::Icon, "size-8 p-0 select-none")),
        request,
        glyph,
    ])
}

fn day_cell(props: &CalendarProps, wire: Option<&InteractiveBinding>, month: YearMonth, day: NaiveDate) -> Node {
    let outside = !month.contains(day);
    if outside && props.hide_outside_days {
        return td([role("gridcell"), class("flex-1")]);
    }
    let iso = day.format("%Y-%m-%d").to_string();
    let is_disabled = props.is_disabled(day);
    let today = props.today == Some(day);
    let (start, end) = match (props.selected, props.range_end) {
        (Some(start), Some(end)) if props.mode == CalendarMode::Range => (Some(start), Some(end)),
        (start, _) => (start, None),
    };
    let is_start = start == Some(day);
    let is_end = end == Some(day);
    let in_range = matches!((start, end), (Some(s), Some(e)) if day > s && day < e);
    let selected = is_start || is_end || in_range;

    let request = match wire.and_then(|b| b.action("select").map(|endpoint| (b, endpoint))) {
        Some((binding, endpoint)) if !is_disabled => binding.request(endpoint, &Payload::new().with("date", iso.as_str())),
        _ => Node::Nil,
    };

    td([
        role("gridcell"),
        data("day", iso.as_str()),
        if_(selected, aria("selected", "true")),
        if_(outside, data("outside", "true")),
        if_(today, data("today", "true")),
        if_(is_disabled, data("disabled", "true")),
        class(cn([
            "relative flex-1 p-0 text-center text-sm select-none",
            if in_range { "bg-accent" } else { "" },
            if is_start && end.is_some() { "bg-accent rounded-l-md" } else { "" },
            if is_end { "bg-accent rounded-r-md" } else { "" },
        ])),
        button_tag([
            type_("button"),
            name("day"),
            value(iso.as_str()),
            data_slot("calendar-day"),
            if_(is_start && end.is_none(), data("selected-single", "true")),
            if_(is_start && end.is_some(), data("range-start", "true")),
            if_(is_end, data("range-end", "true")),
            if_(in_range, data("range-middle", "true")),
            aria("label", day.format("%A, %B %-d, %Y").to_string()),
            if_(today, aria("current", "date")),
            if_(is_disabled, disabled()),
            class(button::classes(
                ButtonVariant::Ghost,
                ButtonSize::Icon,
                &cn([
                    "size-8 font-normal",
                    if outside { "text-muted-foreground" } else { "" },
                    if today && !selected { "bg-accent text-accent-foreground" } else { "" },
                    if is_start || is_end { "bg-primary text-primary-foreground hover:bg-primary hover:text-primary-foreground" } else { "" },
                ]),
            )),
            request,
            text(day.day().to_string()),
        ]),
    ])
}

/// Wire the `nav` and `select` actions. `props` supplies the mode and the
/// selectable range; `view` renders the calendar for the session's state.
pub fn register<S, V>(router: &mut Router, binding: &InteractiveBinding, props: &CalendarProps, store: S, view: V)
where
    S: StateStore<CalendarState>,
    V: Fn(&CalendarState) -> Node + Send + Sync + 'static,
{
    let view = Arc::new(view);
    if let Some(endpoint) = binding.action("nav") {
        let view = view.clone();
        router.endpoint(
            endpoint,
            stateful(store.clone(), CalendarState::apply_nav, move |state: &CalendarState| view(state)),
        );
    }
    if let Some(endpoint) = binding.action("select") {
        let props = props.clone();
        router.endpoint(
            endpoint,
            stateful(
                store,
                move |state: &mut CalendarState, req| state.apply_select(req, &props),
                move |state: &CalendarState| view(state),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxui_dom::render_to_string;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march() -> CalendarProps {
        CalendarProps {
            month: YearMonth::new(2024, 3),
            today: Some(date(2024, 3, 14)),
            ..Default::default()
        }
    }

    #[test]
    fn test_month_arithmetic() {
        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.prev(), YearMonth::new(2023, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
        assert_eq!(YearMonth::new(2024, 13), None);
        assert_eq!(jan.to_string(), "2024-01");
        assert_eq!(YearMonth::new(2024, 3).unwrap().label(), "March 2024");
    }

    #[test]
    fn test_grid_starts_on_week_start() {
        let march = YearMonth::new(2024, 3).unwrap();
        // 2024-03-01 is a Friday
        assert_eq!(grid_start(march, WeekStart::Sunday), date(2024, 2, 25));
        assert_eq!(grid_start(march, WeekStart::Monday), date(2024, 2, 26));
        let days = grid_days(march, WeekStart::Sunday);
        assert_eq!(days.len(), 42);
        assert_eq!(days[41], date(2024, 4, 6));
    }

    #[test]
    fn test_static_render() {
        let html = render_to_string(&new(march())).unwrap();
        assert!(html.starts_with(r#"<div id="calendar" data-state="2024-03" data-slot="calendar""#));
        assert!(html.contains(">March 2024</div>"));
        assert_eq!(html.matches("<tr class=\"mt-2 flex w-full\">").count(), WEEKS);
        assert!(html.contains(r#"href="?month=2&amp;year=2024""#));
        assert!(html.contains(r#"data-day="2024-03-14" data-today="true""#));
        assert!(html.contains(r#"data-day="2024-02-25" data-outside="true""#));
        assert!(!html.contains("hx-"));
    }

    #[test]
    fn test_min_max_disable_days() {
        let props = CalendarProps {
            min: Some(date(2024, 3, 10)),
            ..march()
        };
        let html = render_to_string(&new(props)).unwrap();
        assert!(html.contains(r#"data-day="2024-03-09" data-disabled="true""#));
        assert!(!html.contains(r#"data-day="2024-03-10" data-disabled"#));
    }

    #[test]
    fn test_range_selection() {
        let mut state = CalendarState::default();
        state.select(date(2024, 3, 10), CalendarMode::Range);
        state.select(date(2024, 3, 5), CalendarMode::Range);
        assert_eq!((state.selected, state.range_end), (Some(date(2024, 3, 5)), Some(date(2024, 3, 10))));
        state.select(date(2024, 3, 20), CalendarMode::Range);
        assert_eq!((state.selected, state.range_end), (Some(date(2024, 3, 20)), None));

        let props = CalendarProps {
            mode: CalendarMode::Range,
            selected: Some(date(2024, 3, 5)),
            range_end: Some(date(2024, 3, 7)),
            ..march()
        };
        let html = render_to_string(&new(props)).unwrap();
        assert!(html.contains(r#"data-range-start="true""#));
        assert!(html.contains(r#"data-range-middle="true""#));
        assert!(html.contains(r#"data-range-end="true""#));
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 3);
    }

    #[test]
    fn test_select_outside_range_is_rejected() {
        let props = CalendarProps {
            max: Some(date(2024, 3, 31)),
            ..march()
        };
        let mut state = CalendarState::default();
        let req = Request::post("/cal/select", "date=2024-04-02");
        assert!(state.apply_select(&req, &props).is_err());
        assert_eq!(state.selected, None);
        let req = Request::post("/cal/select", "date=not-a-date");
        assert!(state.apply_select(&req, &props).is_err());
    }

    #[test]
    fn test_nav_delta() {
        let mut state = CalendarState::default();
        state.apply_nav(&Request::get("/cal/nav?month=12&year=2023")).unwrap();
        assert_eq!(state.month, YearMonth::new(2023, 12));
        assert!(state.apply_nav(&Request::get("/cal/nav?month=0&year=2023")).is_err());
    }
}
