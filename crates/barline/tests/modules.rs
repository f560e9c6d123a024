//! Modules rendered through a whole bar line.

use std::fs;

use barline::{Bar, Config, MockEnv};
use barline_render::{EmittedLine, RenderedBlock};
use chrono::{DateTime, TimeZone, Utc};

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

fn blocks(yaml: &str, tz: &str) -> Vec<RenderedBlock> {
    let config = Config::from_yaml(yaml).unwrap();
    let mut bar = Bar::with_env(config, MockEnv::new().with_var("TZ", tz));
    match bar.render_line(noon()) {
        EmittedLine::Blocks(blocks) => blocks,
        EmittedLine::Text(text) => panic!("expected blocks, got {:?}", text),
    }
}

fn text(yaml: &str) -> String {
    let config = Config::from_yaml(yaml).unwrap();
    let mut bar = Bar::with_env(config, MockEnv::new().with_var("TZ", "UTC"));
    match bar.render_line(noon()) {
        EmittedLine::Text(text) => text,
        EmittedLine::Blocks(_) => panic!("expected text"),
    }
}

// ============================================================================
// path_exists / run_watch
// ============================================================================

#[test]
fn test_path_exists_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("tun0");
    fs::write(&present, "").unwrap();
    let absent = dir.path().join("tun1");

    let yaml = format!(
        r##"
modules:
  - type: path_exists
    title: VPN
    path: {}
  - type: path_exists
    title: VPN2
    path: {}
    format_down: "%title is down"
    color_bad: "#AA0000"
"##,
        present.display(),
        absent.display()
    );
    let blocks = blocks(&yaml, "UTC");

    assert_eq!(blocks[0].full_text, "VPN: yes");
    assert_eq!(blocks[0].color.as_deref(), Some("#00FF00"));
    assert_eq!(blocks[0].name.as_deref(), Some("path_exists"));
    assert_eq!(
        blocks[0].instance.as_deref(),
        Some(present.to_str().unwrap())
    );

    assert_eq!(blocks[1].full_text, "VPN2 is down");
    assert_eq!(blocks[1].color.as_deref(), Some("#AA0000"));
}

#[test]
fn test_run_watch_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let alive = dir.path().join("self.pid");
    fs::write(&alive, std::process::id().to_string()).unwrap();

    let yaml = format!(
        r##"
modules:
  - type: run_watch
    title: self
    pidfile: {}
  - type: run_watch
    title: ghost
    pidfile: {}/ghost*.pid
"##,
        alive.display(),
        dir.path().display()
    );
    let blocks = blocks(&yaml, "UTC");

    assert_eq!(blocks[0].full_text, "self: yes");
    assert_eq!(blocks[0].color.as_deref(), Some("#00FF00"));
    assert_eq!(blocks[1].full_text, "ghost: no");
    assert_eq!(blocks[1].color.as_deref(), Some("#FF0000"));
    assert!(blocks[1].instance.as_deref().unwrap().ends_with("ghost*.pid"));
}

// ============================================================================
// time
// ============================================================================

#[test]
fn test_time_in_zone() {
    let blocks = blocks(
        r#"
modules:
  - type: time
    title: Berlin
    timezone: Europe/Berlin
  - type: time
    title: Tokyo
    timezone: Asia/Tokyo
    format: "%H:%M"
"#,
        "UTC",
    );

    assert_eq!(blocks[0].full_text, "2024-01-15 13:00:00");
    assert_eq!(blocks[0].instance.as_deref(), Some("Berlin"));
    assert_eq!(blocks[0].name.as_deref(), Some("time"));
    assert_eq!(blocks[0].color, None);
    assert_eq!(blocks[1].full_text, "21:00");
}

#[test]
fn test_time_restores_original_zone() {
    let blocks = blocks(
        r#"
modules:
  - type: time
    timezone: America/New_York
    format: "%H"
  - type: time
    format: "%H"
  - type: time
    timezone: ""
    format: "%H"
"#,
        "Asia/Tokyo",
    );

    assert_eq!(blocks[0].full_text, "07");
    assert_eq!(blocks[1].full_text, "21");
    assert_eq!(blocks[2].full_text, "21");
}

#[test]
fn test_hide_if_equals_localtime() {
    let blocks = blocks(
        r#"
general:
  progress_bars: true
modules:
  - type: time
    timezone: Europe/Paris
    hide_if_equals_localtime: true
    progress: day
  - type: time
    timezone: Asia/Tokyo
    hide_if_equals_localtime: true
    format: "%H"
"#,
        "Europe/Berlin",
    );

    assert_eq!(blocks[0].full_text, "");
    assert_eq!(blocks[0].progress, None);
    assert_eq!(blocks[1].full_text, "21");
}

#[test]
fn test_format_time_substitution() {
    let blocks = blocks(
        r#"
general:
  markup: pango
modules:
  - type: time
    title: NYC
    timezone: America/New_York
    format: "<b>%title</b> %time"
    format_time: "%H:%M"
"#,
        "UTC",
    );

    // Only %time is substituted in this mode.
    assert_eq!(blocks[0].full_text, "<b>%title</b> 07:00");
    assert_eq!(blocks[0].markup, Some("pango"));
}

#[test]
fn test_time_locale() {
    let blocks = blocks(
        r#"
modules:
  - type: time
    timezone: UTC
    locale: de_DE.UTF-8
    format: "%A, %d. %B"
"#,
        "UTC",
    );
    assert_eq!(blocks[0].full_text, "Montag, 15. Januar");
}

#[test]
fn test_time_progress() {
    let yaml = r##"
general:
  progress_bars: true
  progress_color_default_bg: "#222222"
modules:
  - type: time
    timezone: UTC
    progress: day
  - type: time
    timezone: UTC
    progress: fortnight
"##;
    let blocks = blocks(yaml, "UTC");

    assert_eq!(blocks[0].progress, Some(50));
    assert_eq!(blocks[0].progress_colors.as_deref(), Some("- #222222"));
    assert_eq!(blocks[1].progress, Some(0));
}

#[test]
fn test_full_progress_unit_unquoted() {
    let blocks = blocks(
        "general:\n  progress_bars: true\nmodules:\n  - type: time\n    progress: 100\n",
        "UTC",
    );
    assert_eq!(blocks[0].progress, Some(100));
}

#[test]
fn test_progress_omitted_without_progress_bars() {
    let blocks = blocks(
        "modules:\n  - type: time\n    progress: day\n",
        "UTC",
    );
    assert_eq!(blocks[0].progress, None);
    assert_eq!(blocks[0].progress_colors, None);
}

#[test]
fn test_invalid_time_format_drops_the_block() {
    let blocks = blocks(
        r#"
modules:
  - type: time
    format: "%Q"
  - type: time
    timezone: UTC
    format: "%H"
"#,
        "UTC",
    );
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].full_text, "12");
}

// ============================================================================
// Text formats
// ============================================================================

#[test]
fn test_lemonbar_line() {
    let line = text(
        r#"
general:
  output_format: lemonbar
modules:
  - type: path_exists
    title: root
    path: /
  - type: time
    format: "%H:%M"
"#,
    );
    assert_eq!(line, "%{F#00FF00}root: yes%{F#333333} | 12:00");
}

#[test]
fn test_xmobar_default_separator() {
    let line = text(
        r#"
general:
  output_format: xmobar
  colors: false
modules:
  - type: time
    format: "%H"
  - type: time
    format: "%M"
"#,
    );
    assert_eq!(line, "12<fc=#333333> | </fc>00");
}
