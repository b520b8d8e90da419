use wasm_bindgen::JsValue;
use web_sys::js_sys;

use crate::widgets::counter::CounterTiming;
use crate::widgets::preview::RotationTiming;
use crate::widgets::terminal::TypingTiming;

pub fn get_telegram_handle() -> &'static str {
    option_env!("CYBERDARK_TELEGRAM_HANDLE").unwrap_or("Four04unkown")
}

pub fn get_service_worker_path() -> &'static str {
    option_env!("CYBERDARK_SERVICE_WORKER_PATH").unwrap_or("/sw.js")
}

/// Device class the page is tuned for. Each one replaces a forked copy of
/// the page script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiProfile {
    Desktop,
    Touch,
    Lite,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub profile: UiProfile,
    /// Bind `touchend` on the menu controls in addition to `click`.
    pub touch_events: bool,
    /// Extra pixels subtracted from scroll targets on top of the header height.
    pub header_offset_adjust: f64,
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub counter: CounterTiming,
    pub rotation: RotationTiming,
    pub typing: TypingTiming,
    pub scroll_throttle_ms: f64,
    pub matrix_rain: bool,
    pub matrix_tick_ms: u32,
    pub matrix_font_size: f64,
    pub parallax: bool,
}

impl UiProfile {
    /// Pick a profile from browser capabilities. Falls back to `Desktop`
    /// when the window is unavailable.
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return UiProfile::Desktop;
        };
        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        let has_touch_points = js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("maxTouchPoints"))
            .unwrap_or(false)
            && window.navigator().max_touch_points() > 0;
        Self::from_capabilities(has_touch_points, reduced_motion)
    }

    pub fn from_capabilities(touch: bool, reduced_motion: bool) -> Self {
        if reduced_motion {
            UiProfile::Lite
        } else if touch {
            UiProfile::Touch
        } else {
            UiProfile::Desktop
        }
    }

    pub fn config(self) -> UiConfig {
        let base = UiConfig {
            profile: self,
            touch_events: false,
            header_offset_adjust: 0.0,
            counter_threshold: 0.5,
            reveal_threshold: 0.1,
            counter: CounterTiming::default(),
            rotation: RotationTiming::default(),
            typing: TypingTiming::default(),
            scroll_throttle_ms: 100.0,
            matrix_rain: true,
            matrix_tick_ms: 50,
            matrix_font_size: 14.0,
            parallax: true,
        };
        match self {
            UiProfile::Desktop => base,
            UiProfile::Touch => UiConfig {
                touch_events: true,
                header_offset_adjust: 10.0,
                counter_threshold: 0.3,
                matrix_font_size: 12.0,
                parallax: false,
                ..base
            },
            UiProfile::Lite => UiConfig {
                touch_events: true,
                counter_threshold: 0.3,
                matrix_rain: false,
                matrix_tick_ms: 100,
                parallax: false,
                ..base
            },
        }
    }
}
