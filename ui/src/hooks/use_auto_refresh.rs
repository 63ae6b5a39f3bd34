use crate::compat;
use crate::ui_store::use_ui_store;
use dioxus::prelude::*;

/// Ticks the store's refresh counter every refresh interval while auto
/// refresh is on.
///
/// Settings are re-read on every pass, so a new interval applies from the
/// next tick on.
pub fn use_auto_refresh() {
    let mut store = use_ui_store();

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            let (_, period) = store.peek_refresh();
            compat::sleep(period).await;

            let (enabled, _) = store.peek_refresh();
            if enabled {
                store.bump_refresh_tick();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_store::test_support::use_test_store;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use std::cell::Cell;
    use std::time::Duration;

    thread_local! {
        static LAST_TICK: Cell<u64> = const { Cell::new(0) };
    }

    #[component]
    fn RefreshHarness(auto_refresh: bool) -> Element {
        let store = use_test_store(auto_refresh);
        use_auto_refresh();
        let tick = store.refresh_tick();
        LAST_TICK.with(|t| t.set(tick));
        rsx! { "{tick}" }
    }

    async fn run(auto_refresh: bool, steps: usize) -> u64 {
        let mut dom = VirtualDom::new_with_props(RefreshHarness, RefreshHarnessProps { auto_refresh });
        dom.rebuild_in_place();

        for _ in 0..steps {
            tokio::time::advance(Duration::from_millis(1)).await;
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(10)) => {}
            }
            dom.render_immediate(&mut NoOpMutations);
        }
        LAST_TICK.with(Cell::get)
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_while_enabled() {
        assert!(run(true, 10).await > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stays_put_while_disabled() {
        assert_eq!(run(false, 10).await, 0);
    }
}
