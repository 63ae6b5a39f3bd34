// ui/src/components/date_picker.rs
#![allow(non_snake_case)]

use crate::calendar;
use crate::components::pico::{Button, ButtonType};
use crate::ui_store::use_ui_store;
use chrono::Datelike;
use chrono::NaiveDate;
use dioxus::prelude::*;

const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

#[derive(Props, PartialEq, Clone)]
pub struct DatePickerProps {
    /// Extra style applied to the outer element.
    #[props(optional)]
    pub style: Option<String>,
}

/// A month calendar bound to the store's selected date.
///
/// Days rejected by the trading-day predicate are rendered disabled and
/// ignore clicks.
pub fn DatePicker(props: DatePickerProps) -> Element {
    let mut store = use_ui_store();
    let selected = store.selected_date();
    let mut shown_month = use_signal(|| calendar::first_of_month(selected));

    // Follow external changes of the selection, e.g. after trading days load.
    use_effect(move || {
        let first = calendar::first_of_month(store.selected_date());
        if *shown_month.peek() != first {
            shown_month.set(first);
        }
    });

    let month = shown_month();
    let today = calendar::local_today();
    let can_go_forward = calendar::shift_month(month, 1) <= today;
    let weeks = calendar::month_grid(month);

    rsx! {
        div {
            class: "date-picker",
            style: "{props.style.as_deref().unwrap_or(\"\")}",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 0.5rem;",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Previous month",
                    on_click: move |_| shown_month.set(calendar::shift_month(month, -1)),
                    "‹"
                }
                strong { "{month.format(\"%Y-%m\")}" }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Next month",
                    disabled: !can_go_forward,
                    on_click: move |_| shown_month.set(calendar::shift_month(month, 1)),
                    "›"
                }
            }
            table {
                class: "date-picker-grid",
                thead {
                    tr {
                        for label in WEEKDAY_LABELS {
                            th { "{label}" }
                        }
                    }
                }
                tbody {
                    for (i, week) in weeks.into_iter().enumerate() {
                        tr {
                            key: "{i}",
                            for (j, cell) in week.into_iter().enumerate() {
                                td {
                                    key: "{j}",
                                    if let Some(day) = cell {
                                        DayCell {
                                            day,
                                            disabled: store.disabled_date(day),
                                            selected: day == selected,
                                            on_pick: move |day: NaiveDate| store.set_selected_date(day),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DayCell(day: NaiveDate, disabled: bool, selected: bool, on_pick: EventHandler<NaiveDate>) -> Element {
    let class = match (selected, disabled) {
        (true, _) => "day selected",
        (false, true) => "day disabled",
        (false, false) => "day",
    };
    rsx! {
        a {
            class: "{class}",
            href: "#",
            "aria-disabled": if disabled { "true" } else { "false" },
            "aria-current": if selected { "date" } else { "false" },
            onclick: move |event| {
                event.prevent_default();
                if !disabled {
                    on_pick.call(day);
                }
            },
            "{day.day()}"
        }
    }
}
