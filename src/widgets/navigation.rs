/// Section ids in page order. Number keys 1-5 jump to these.
pub const NAV_SECTIONS: &[&str] = &["home", "bots", "apps", "tools", "contact"];

/// How far above a section's top the highlight switches to it.
const ACTIVE_LEAD_PX: f64 = 100.0;

/// Id targeted by an in-page link, or `None` for the bare `#` placeholder
/// and for links leaving the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Scroll position that puts a section right under the fixed header.
pub fn scroll_offset(section_top: f64, header_height: f64, adjust: f64) -> f64 {
    section_top - header_height - adjust
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Section to highlight for the given scroll position. When bounds overlap
/// the later section wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - ACTIVE_LEAD_PX;
            scroll_y > top && scroll_y <= top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

/// Section bound to a number key, ignoring chorded presses.
pub fn quick_nav_section(key: &str, ctrl: bool, alt: bool) -> Option<&'static str> {
    if ctrl || alt {
        return None;
    }
    let digit: usize = match key {
        "1" | "2" | "3" | "4" | "5" => key.parse().ok()?,
        _ => return None,
    };
    NAV_SECTIONS.get(digit - 1).copied()
}

/// Lets at most one scroll update through per interval.
#[derive(Debug, Clone)]
pub struct ScrollThrottle {
    interval_ms: f64,
    last: Option<f64>,
}

impl ScrollThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    pub fn allow(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0, 800.0), ("bots", 800.0, 600.0), ("apps", 1400.0, 900.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn placeholder_and_external_links_have_no_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://t.me/x"), None);
        assert_eq!(anchor_target("#apps"), Some("apps"));
    }

    #[test]
    fn offset_subtracts_header_and_adjustment() {
        assert_eq!(scroll_offset(1400.0, 80.0, 0.0), 1320.0);
        assert_eq!(scroll_offset(1400.0, 80.0, 10.0), 1310.0);
    }

    #[test]
    fn highlights_the_section_under_the_lead_line() {
        let sections = sections();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(650.0, &sections), Some("home"));
        assert_eq!(active_section(701.0, &sections), Some("bots"));
        assert_eq!(active_section(1301.0, &sections), Some("apps"));
        assert_eq!(active_section(5_000.0, &sections), None);
    }

    #[test]
    fn number_keys_map_to_sections() {
        assert_eq!(quick_nav_section("1", false, false), Some("home"));
        assert_eq!(quick_nav_section("5", false, false), Some("contact"));
        assert_eq!(quick_nav_section("6", false, false), None);
        assert_eq!(quick_nav_section("0", false, false), None);
        assert_eq!(quick_nav_section("3", true, false), None);
        assert_eq!(quick_nav_section("3", false, true), None);
        assert_eq!(quick_nav_section("Tab", false, false), None);
    }

    #[test]
    fn throttle_lets_one_update_through_per_interval() {
        let mut throttle = ScrollThrottle::new(100.0);
        assert!(throttle.allow(1_000.0));
        assert!(!throttle.allow(1_050.0));
        assert!(!throttle.allow(1_099.0));
        assert!(throttle.allow(1_100.0));
        assert!(!throttle.allow(1_150.0));
    }
}
