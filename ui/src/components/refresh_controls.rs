// ui/src/components/refresh_controls.rs
#![allow(non_snake_case)]

use crate::components::pico::Switch;
use crate::ui_store::use_ui_store;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use std::num::NonZeroU32;

/// Parses the interval field. Only positive whole milliseconds are accepted.
fn parse_interval_ms(input: &str) -> Option<NonZeroU32> {
    input.trim().parse::<NonZeroU32>().ok()
}

/// Auto-refresh toggle plus the refresh interval in milliseconds.
///
/// Input that does not parse is left in the field and not committed.
#[component]
pub fn RefreshControls() -> Element {
    let mut store = use_ui_store();
    let auto_refresh = store.auto_refresh();
    let interval_ms = store.refresh_interval();

    rsx! {
        fieldset {
            Switch {
                label: "Auto refresh",
                checked: auto_refresh,
                on_change: move |enabled| store.set_auto_refresh(enabled),
            }
            label {
                "Interval (ms)"
                input {
                    r#type: "number",
                    min: "1",
                    step: "100",
                    value: "{interval_ms}",
                    disabled: !auto_refresh,
                    onchange: move |evt| match parse_interval_ms(&evt.value()) {
                        Some(interval_ms) => store.set_refresh_interval(interval_ms),
                        None => debug!("ignoring refresh interval {:?}", evt.value()),
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_intervals_are_kept_exactly() {
        assert_eq!(parse_interval_ms("500").map(NonZeroU32::get), Some(500));
        assert_eq!(parse_interval_ms(" 5000 ").map(NonZeroU32::get), Some(5000));
    }

    #[test]
    fn non_positive_or_garbage_is_rejected() {
        for bad in ["0", "-1", "1.5", "", "fast"] {
            assert_eq!(parse_interval_ms(bad), None, "{bad:?}");
        }
    }
}
