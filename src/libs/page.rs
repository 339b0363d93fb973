//! The HTML document served by the countdown endpoint.
//!
//! The entire user interface is one self-contained page: markup, styling,
//! and the script that re-runs both countdown calculations once immediately
//! and then every second until the page is closed. The configured target
//! string is injected into the script as a JSON string literal, so whatever
//! value the operator set cannot break out of the script context.
//!
//! The browser interprets the target with its own `Date` parsing and its own
//! local calendar for day-of-week and midnight boundaries. A missing or
//! unparseable target renders a fixed invalid-configuration message with
//! setup instructions instead of a countdown.

use crate::libs::config::Config;

/// Renders the complete countdown document for the given configuration.
pub fn render(config: &Config) -> String {
    let target = serde_json::to_string(config.target.raw())
        .unwrap_or_else(|_| "\"\"".to_string())
        // Keep '<' out of the inline script so the literal cannot
        // terminate the surrounding <script> element.
        .replace('<', "\\u003c");
    PAGE_TEMPLATE.replace("__TARGET__", &target)
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width,initial-scale=1" />
<title>Countdown</title>
<style>
  :root { color-scheme: light dark; }
  body {
    margin: 0; height: 100vh; display: flex; align-items: center; justify-content: center;
    font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif;
    background: #0b1020; color: #f3f6ff;
  }
  .counter {
    font-weight: 900; letter-spacing: .04em; font-variant-numeric: tabular-nums;
    line-height: 1; text-align: center;
    font-size: clamp(32px, 11vw, 14rem); /* huge */
  }
  .caption {
    text-align: center; opacity: .6;
    font-size: clamp(11px, 1.8vw, 1.4rem); text-transform: uppercase; letter-spacing: .2em;
  }
  .block + .block { margin-top: 2rem; }
  #label { text-align: center; margin-top: 1.5rem; opacity: .75; font-size: clamp(12px, 2.4vw, 2rem); }
  .wrap { text-align: center; }
</style>
</head>
<body>
  <div class="wrap">
    <div class="block">
      <div class="caption">calendar time</div>
      <div id="countdown" class="counter">--:--:--</div>
    </div>
    <div class="block">
      <div class="caption">weekday time</div>
      <div id="weekdays" class="counter">--:--:--</div>
    </div>
    <div id="label"></div>
  </div>
  <script>
    const TARGET = __TARGET__;
    const el = document.getElementById('countdown');
    const wd = document.getElementById('weekdays');
    const label = document.getElementById('label');
    const targetDate = new Date(TARGET);

    if (!TARGET || isNaN(targetDate.getTime())) {
      el.textContent = 'Invalid DATE_TIME_COUNT';
      label.textContent = 'Set DATE_TIME_COUNT to an ISO date-time (e.g., 2025-12-31T23:59:59Z)';
    } else {
      label.textContent = new Intl.DateTimeFormat(undefined, { dateStyle: 'full', timeStyle: 'long' }).format(targetDate);
      const pad = n => String(n).padStart(2,'0');
      // Weekday-only milliseconds in [from, to): walk one calendar day at a
      // time, skipping whole weekends without accumulating anything.
      function weekdayMillis(from, to) {
        let total = 0;
        let cursor = from;
        while (cursor < to) {
          const day = cursor.getDay();
          if (day === 0 || day === 6) {
            cursor = new Date(cursor.getFullYear(), cursor.getMonth(), cursor.getDate() + (day === 6 ? 2 : 1));
            continue;
          }
          const boundary = new Date(cursor.getFullYear(), cursor.getMonth(), cursor.getDate() + 1);
          const segmentEnd = boundary < to ? boundary : to;
          total += segmentEnd - cursor;
          cursor = segmentEnd;
        }
        return total;
      }
      function render(node, ms) {
        const s = Math.floor(ms / 1000);
        const days = Math.floor(s / 86400);
        const hours = Math.floor((s % 86400) / 3600);
        const mins = Math.floor((s % 3600) / 60);
        const secs = s % 60;
        node.textContent = (days > 0 ? days + 'd ' : '') + pad(hours) + ':' + pad(mins) + ':' + pad(secs);
      }
      function tick() {
        const now = new Date();
        let ms = targetDate - now;
        if (ms < 0) ms = 0;
        render(el, ms);
        render(wd, weekdayMillis(now, targetDate));
      }
      tick();
      setInterval(tick, 1000);
    }
  </script>
</body>
</html>"##;
