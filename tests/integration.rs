// SPDX-License-Identifier: MPL-2.0
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tempfile::tempdir;
use undo_bar::application::port::lock_view;
use undo_bar::config::{self, Config, DEFAULT_DURATION_MS};
use undo_bar::diagnostics::{DiagnosticsCollector, UndoBarEvent};
use undo_bar::i18n::fluent::I18n;
use undo_bar::infrastructure::headless::HeadlessHost;
use undo_bar::infrastructure::tokio_scheduler::TokioMainThread;
use undo_bar::ui::undo_bar::{Builder, FnListener, Style};

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.undo_label(), "UNDO");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.undo_label(), "ANNULER");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_builder_from_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let saved = Config {
        language: Some("de".to_string()),
        style: Some(Style::Holo),
        duration_ms: Some(1500),
        animation_duration_ms: Some(0),
        use_english_locale: Some(false),
    };
    config::save_to_path(&saved, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, saved);

    // The host reports no locale, so the config language decides the label.
    let host = HeadlessHost::new().with_locale(None);
    let bar = Builder::from_config(host.clone(), &loaded)
        .message("Gelöscht")
        .show(false);
    host.run_pending();

    assert_eq!(bar.style(), Style::Holo);
    let view = bar.view().expect("window host binds a view");
    assert_eq!(lock_view(&view).button_label(), "RÜCKGÄNGIG");

    host.advance(Duration::from_millis(1500));
    host.run_pending();
    assert!(!bar.is_visible());
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "style = [not toml").expect("Failed to write file");

    let loaded = config::load_from_path(&path).expect("invalid TOML is not an error");
    assert_eq!(loaded, Config::default());
    assert_eq!(loaded.duration().millis(), DEFAULT_DURATION_MS);
}

#[test]
fn test_diagnostics_export_after_undo() {
    let host = HeadlessHost::new();
    let mut collector = DiagnosticsCollector::default();
    let bar = Builder::new(host.clone())
        .style(Style::KitKat)
        .message("Moved to trash")
        .diagnostics(collector.handle())
        .show(true);
    host.run_pending();
    host.click_button();
    host.run_pending();

    collector.process_pending();
    let kinds = collector.kinds();
    assert_eq!(
        kinds.first(),
        Some(&UndoBarEvent::ViewAttached {
            style: Style::KitKat,
            reused: false,
        })
    );
    assert!(kinds.contains(&UndoBarEvent::UndoPressed { has_token: false }));

    let exported = collector.export_toml().expect("events serialize");
    assert!(exported.contains("undo_pressed"));
    assert!(!bar.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_controller_on_tokio_main_thread() {
    let (main, main_loop) = TokioMainThread::new(tokio::runtime::Handle::current());
    tokio::spawn(main_loop.run());
    let host = HeadlessHost::new().with_main_thread(main.clone());

    let hides = Arc::new(AtomicUsize::new(0));
    let hides_in_cb = Arc::clone(&hides);
    let bar = Builder::new(host.clone())
        .message("Archived")
        .duration_ms(1000)
        .listener(FnListener::new(
            move || {
                hides_in_cb.fetch_add(1, Ordering::SeqCst);
            },
            |_| {},
        ))
        .show(false);

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(bar.is_visible());
    assert_eq!(host.bar_count(), 1);
    assert_eq!(main.delayed_count(), 1);

    // Showing again restarts the timer.
    tokio::time::sleep(Duration::from_millis(500)).await;
    bar.show_animated(false);
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(hides.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(hides.load(Ordering::SeqCst), 1);
    assert!(!bar.is_visible());
}
