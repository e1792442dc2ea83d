//! hxui components
//!
//! shadcn/ui style components built on the hxui node tree.
//!
//! Features:
//! - Static components: button, badge, alert, card, form controls,
//!   separator, breadcrumb, skeleton, toast, icons
//! - Stateful components with a static form and an interactive form that
//!   swaps itself through an `InteractiveBinding`: dialog, sheet/drawer,
//!   popover, dropdown menu, collapsible, accordion, tabs, calendar,
//!   date picker, command palette, combobox
//! - Per-component state records and `register` helpers wiring their
//!   endpoints into a `Router`
//!
//! Every constructor takes a props record plus children, leaves the props
//! untouched and returns one root node. `props.class` is appended to the
//! component's own classes; `props.id` overrides the generated id.

pub mod props;
pub mod icons;

pub mod alert;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod card;
pub mod form;
pub mod separator;
pub mod skeleton;
pub mod toast;

pub mod disclosure;

pub mod accordion;
pub mod calendar;
pub mod collapsible;
pub mod combobox;
pub mod command;
pub mod date_picker;
pub mod dialog;
pub mod dropdown;
pub mod popover;
pub mod sheet;
pub mod tabs;

pub use props::{resolve_id, slugify, Align, Props, Side};
pub use disclosure::{Disclosure, OpenState};
pub use button::{ButtonProps, ButtonSize, ButtonType, ButtonVariant};
pub use accordion::{AccordionItem, AccordionProps, AccordionState, AccordionType};
pub use calendar::{CalendarMode, CalendarProps, CalendarState, WeekStart, YearMonth};
pub use combobox::{ComboboxOption, ComboboxProps, ComboboxState};
pub use command::{CommandGroup, CommandItem, CommandProps, CommandState};
pub use date_picker::{DatePickerProps, DatePickerState};
pub use collapsible::CollapsibleProps;
pub use dialog::DialogProps;
pub use dropdown::{DropdownProps, DropdownState, MenuCheckbox, MenuEntry, MenuItem, MenuRadioGroup, MenuSub};
pub use popover::PopoverProps;
pub use sheet::SheetProps;
pub use tabs::{TabItem, TabsProps, TabsState};
