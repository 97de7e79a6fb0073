//! Host-side UI seam and condition bookkeeping.

use glam::Vec2;
use hashbrown::HashSet;
use tracing::debug;

use crate::args::ApplyCond;

/// Immediate-mode UI calls the script bridge forwards to the host.
///
/// The host implements this against its actual UI library; the bridge never
/// owns UI state beyond what a single frame's calls carry.
pub trait UiBackend {
    /// Position the next window to be begun.
    fn set_next_window_pos(&mut self, pos: Vec2, cond: ApplyCond);
    /// Size the next window to be begun.
    fn set_next_window_size(&mut self, size: Vec2, cond: ApplyCond);
    /// Begin a window; returns whether it is open.
    fn begin_window(&mut self, title: &str) -> bool;
    /// End the current window.
    fn end_window(&mut self);
    /// Draw a button; returns whether it was clicked this frame.
    fn button(&mut self, label: &str) -> bool;
    /// Draw a line of text.
    fn text(&mut self, text: &str);
}

/// First-call-per-key bookkeeping for conditional applies.
///
/// Backends pick the key (typically the title of the window the call
/// targets). `Always` applies unconditionally; the other conditions apply
/// only the first time a key is seen. Without window-visibility tracking,
/// `Appearing` and `FirstUseEver` behave like `Once` within a run.
#[derive(Debug, Default)]
pub struct CondFilter {
    seen: HashSet<String>,
}

impl CondFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a call with `cond` should take effect for `key`,
    /// recording the key for conditional calls.
    pub fn should_apply(&mut self, key: &str, cond: ApplyCond) -> bool {
        match cond {
            ApplyCond::Always => true,
            ApplyCond::Once | ApplyCond::FirstUseEver | ApplyCond::Appearing => {
                if self.seen.contains(key) {
                    false
                } else {
                    self.seen.insert(key.to_string());
                    true
                }
            }
        }
    }

    /// Forget all keys (a fresh run).
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

/// Fallback panel drawn when the script defines no `_render`.
pub fn draw_missing_script_panel(ui: &mut dyn UiBackend) {
    ui.set_next_window_pos(Vec2::new(10.0, 10.0), ApplyCond::Once);
    ui.set_next_window_size(Vec2::new(400.0, 100.0), ApplyCond::Once);
    ui.begin_window("Lua UI missing");
    ui.text("Add a function _render() in your script.lua");
    ui.end_window();
}

/// Backend that logs every call to the diagnostic stream.
///
/// Useful for headless runs; windows report open, buttons report unclicked.
/// Conditional position/size calls are honored through a [`CondFilter`].
#[derive(Debug, Default)]
pub struct TracingUi {
    filter: CondFilter,
}

impl TracingUi {
    /// Create a logging backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UiBackend for TracingUi {
    fn set_next_window_pos(&mut self, pos: Vec2, cond: ApplyCond) {
        if self.filter.should_apply("next-window-pos", cond) {
            debug!("ui: next window pos ({}, {}) {cond:?}", pos.x, pos.y);
        }
    }

    fn set_next_window_size(&mut self, size: Vec2, cond: ApplyCond) {
        if self.filter.should_apply("next-window-size", cond) {
            debug!("ui: next window size ({}, {}) {cond:?}", size.x, size.y);
        }
    }

    fn begin_window(&mut self, title: &str) -> bool {
        debug!("ui: begin window '{title}'");
        true
    }

    fn end_window(&mut self) {
        debug!("ui: end window");
    }

    fn button(&mut self, label: &str) -> bool {
        debug!("ui: button '{label}'");
        false
    }

    fn text(&mut self, text: &str) {
        debug!("ui: text '{text}'");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// One recorded UI call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum UiCall {
        Pos(Vec2, ApplyCond),
        Size(Vec2, ApplyCond),
        Begin(String),
        End,
        Button(String),
        Text(String),
    }

    /// Backend that records every call for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingUi {
        pub calls: Vec<UiCall>,
    }

    impl UiBackend for RecordingUi {
        fn set_next_window_pos(&mut self, pos: Vec2, cond: ApplyCond) {
            self.calls.push(UiCall::Pos(pos, cond));
        }

        fn set_next_window_size(&mut self, size: Vec2, cond: ApplyCond) {
            self.calls.push(UiCall::Size(size, cond));
        }

        fn begin_window(&mut self, title: &str) -> bool {
            self.calls.push(UiCall::Begin(title.to_string()));
            true
        }

        fn end_window(&mut self) {
            self.calls.push(UiCall::End);
        }

        fn button(&mut self, label: &str) -> bool {
            self.calls.push(UiCall::Button(label.to_string()));
            false
        }

        fn text(&mut self, text: &str) {
            self.calls.push(UiCall::Text(text.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{RecordingUi, UiCall};
    use super::*;

    #[test]
    fn always_applies_every_call() {
        let mut filter = CondFilter::new();
        assert!(filter.should_apply("main", ApplyCond::Always));
        assert!(filter.should_apply("main", ApplyCond::Always));
    }

    #[test]
    fn once_applies_first_call_per_key() {
        let mut filter = CondFilter::new();
        assert!(filter.should_apply("main", ApplyCond::Once));
        assert!(!filter.should_apply("main", ApplyCond::Once));

        // A different window is unaffected.
        assert!(filter.should_apply("sidebar", ApplyCond::Once));

        filter.reset();
        assert!(filter.should_apply("main", ApplyCond::Once));
    }

    #[test]
    fn fallback_panel_shape() {
        let mut ui = RecordingUi::default();
        draw_missing_script_panel(&mut ui);

        assert_eq!(
            ui.calls,
            vec![
                UiCall::Pos(Vec2::new(10.0, 10.0), ApplyCond::Once),
                UiCall::Size(Vec2::new(400.0, 100.0), ApplyCond::Once),
                UiCall::Begin("Lua UI missing".to_string()),
                UiCall::Text("Add a function _render() in your script.lua".to_string()),
                UiCall::End,
            ]
        );
    }
}
