//! Tests for the text component library

use sysprobe_infrastructure::config::Theme;
use sysprobe_server::ComponentLibrary;

#[test]
fn test_plain_heading_is_underlined() {
    let ui = ComponentLibrary::new(Theme::Dark);
    assert_eq!(ui.heading("Home"), "Home\n====\n");
    assert_eq!(ui.subheading("Read"), "Read\n----\n");
}

#[test]
fn test_fields_align_labels() {
    let ui = ComponentLibrary::default();
    let line = ui.field("CPU cores", "8");
    assert_eq!(line, format!("{:<18}: 8\n", "CPU cores"));
    assert_eq!(line.find(':'), ui.field("Memory", "1 GiB").find(':'));
}

#[test]
fn test_ansi_styling_depends_on_theme() {
    let dark = ComponentLibrary::new(Theme::Dark).with_ansi(true);
    let light = ComponentLibrary::new(Theme::Light).with_ansi(true);

    let dark_heading = dark.heading("Home");
    let light_heading = light.heading("Home");
    assert!(dark_heading.contains("\x1b["));
    assert_ne!(dark_heading, light_heading);
    assert!(dark_heading.ends_with("\n====\n"));
}

#[test]
fn test_default_theme_is_dark_without_ansi() {
    let ui = ComponentLibrary::default();
    assert_eq!(ui.theme(), Theme::Dark);
    assert!(!ui.heading("x").contains('\x1b'));
}
