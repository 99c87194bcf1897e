//! Tests for terminal detection and the process-wide console.

use std::sync::{atomic::Ordering, Arc};
use ttybar::{is_interactive_terminal, Console, ConsoleBuilder, StdoutTerminal, Terminal};

mod common;
use common::helpers::*;

#[test]
fn test_interactive_detection_is_stable() {
    let first = is_interactive_terminal();
    for _ in 0..10 {
        assert_eq!(is_interactive_terminal(), first);
    }
    assert_eq!(StdoutTerminal::new().is_interactive(), first);
}

#[test]
fn test_stdout_columns_within_bounds() {
    let console = Console::stdout();
    let columns = console.columns();
    assert!((1..=256).contains(&columns));
    assert!(console.rows() >= 1);
}

#[test]
fn test_global_console_is_shared() {
    assert!(std::ptr::eq(Console::global(), Console::global()));
    assert_eq!(Console::global().is_interactive(), is_interactive_terminal());
}

#[test]
fn test_builder_config() {
    let console = ConsoleBuilder::new()
        .min_bar_width(3)
        .default_columns(100)
        .max_columns(120)
        .default_rows(30)
        .watch_resize(false)
        .build_with(FakeTerminal::piped());

    let config = console.config();
    assert_eq!(config.min_bar_width, 7);
    assert_eq!(config.geometry.default_columns, 100);
    assert_eq!(config.geometry.max_columns, 120);
    assert_eq!(config.geometry.default_rows, 30);
    assert!(!config.watch_resize);
}

#[test]
fn test_builder_caps_max_columns() {
    let console = ConsoleBuilder::new()
        .max_columns(1000)
        .build_with(FakeTerminal::piped());
    assert_eq!(console.config().geometry.max_columns, 256);
}

#[test]
fn test_stdout_consoles_share_one_lock() {
    let first = StdoutTerminal::new().line_lock().unwrap();
    let second = StdoutTerminal::new().line_lock().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let built = ConsoleBuilder::new().watch_resize(false).build();
    let other = Console::stdout();
    first.store(true, Ordering::Release);
    assert!(built.is_locked());
    assert!(other.is_locked());
    assert!(Console::global().is_locked());
    first.store(false, Ordering::Release);
    assert!(!built.is_locked());
}

#[test]
fn test_console_reports_geometry_from_terminal() {
    let (console, terminal) = create_test_console(300);
    assert_eq!(console.columns(), 256);
    assert_eq!(console.rows(), 24);
    assert_eq!(terminal.size_queries(), 2);
}

#[test]
fn test_boxed_terminal() {
    let terminal = FakeTerminal::interactive(40);
    let boxed: Box<dyn Terminal> = Box::new(terminal.clone());
    let console = ConsoleBuilder::new().watch_resize(false).build_with(boxed);

    let progress = console.session();
    progress.render_text_percent(Some("Building"), 50);
    drop(progress);

    assert!(terminal.output().ends_with(b"]  50%\n"));
}
