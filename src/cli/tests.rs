use super::*;
use crate::api::{BackendError, LanguageOption, TranslationResult};
use crate::cli::check::describe_failure;
use crate::cli::language_list::format_languages;
use crate::cli::settings::{apply_set, apply_unset, SettingError};
use crate::cli::theme_list::format_themes;
use crate::cli::translate::{
    build_request, exit_code_for, render_translation, translate_once,
};
use crate::core::notice::Notice;
use crate::utils::test_utils::{sample_languages, FakeBackend};

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }

    pub(super) fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

use test_helpers::{parse_args, words};

#[test]
fn no_subcommand_means_the_form() {
    let args = parse_args(&["translaterm"]);
    assert!(args.command.is_none());
    assert!(args.base_url.is_none());
}

#[test]
fn global_flags_work_after_the_subcommand() {
    let argv = [
        "translaterm",
        "languages",
        "--base-url",
        "http://lan:8000",
        "--trace",
        "trace.log",
    ];
    let args = parse_args(&argv);
    assert!(matches!(args.command, Some(Commands::Languages)));
    assert_eq!(args.base_url.as_deref(), Some("http://lan:8000"));
    assert_eq!(args.trace.as_deref(), Some("trace.log"));
}

#[test]
fn translate_collects_words_and_language_flags() {
    let argv = ["translaterm", "translate", "--to", "ta", "good", "morning"];
    match parse_args(&argv).command {
        Some(Commands::Translate { from, to, text }) => {
            assert_eq!(from, None);
            assert_eq!(to.as_deref(), Some("ta"));
            assert_eq!(text, vec!["good", "morning"]);
        }
        _ => panic!("expected translate command for argv={argv:?}"),
    }
}

#[test]
fn set_accepts_multi_word_values() {
    let argv = ["translaterm", "set", "base-url", "http://x:1"];
    match parse_args(&argv).command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key, "base-url");
            assert_eq!(value, Some(vec!["http://x:1".to_string()]));
        }
        _ => panic!("expected set command"),
    }
}

#[test]
fn blank_text_builds_no_request() {
    let config = Config::default();
    assert!(build_request(&[], None, None, &config).is_none());
    assert!(build_request(&words("   "), None, None, &config).is_none());
}

#[test]
fn request_falls_back_to_configured_languages() {
    let config = Config {
        default_target_language: Some("bn".to_string()),
        ..Default::default()
    };
    let request = build_request(&words("  hello   there "), None, None, &config).expect("request");
    assert_eq!(request.text, "hello there");
    assert_eq!(request.source_language, "en");
    assert_eq!(request.target_language, "bn");

    let request =
        build_request(&words("hello"), Some("ur"), Some("hi"), &config).expect("request");
    assert_eq!(request.source_language, "ur");
    assert_eq!(request.target_language, "hi");
}

#[test]
fn translation_output_puts_pronunciation_under_its_label() {
    let result = TranslationResult {
        translated_text: "नमस्ते".to_string(),
        transliterated_text: "Namaste".to_string(),
    };
    assert_eq!(
        render_translation(&result, "hi"),
        vec![
            "नमस्ते".to_string(),
            String::new(),
            "Hinglish Version (Easy to understand):".to_string(),
            "Namaste".to_string(),
        ]
    );

    let lines = render_translation(&result, "ta");
    assert_eq!(lines[2], "Pronunciation in English Script:");

    let bare = TranslationResult {
        translated_text: "hola".to_string(),
        transliterated_text: String::new(),
    };
    assert_eq!(render_translation(&bare, "es"), vec!["hola".to_string()]);
}

#[tokio::test]
async fn one_shot_failures_map_to_notices_and_exit_codes() {
    let config = Config::default();
    let request = build_request(&words("hello"), None, None, &config).expect("request");

    let quota = FakeBackend::new(
        Ok(Vec::new()),
        Err(BackendError::Status {
            status: 429,
            detail: None,
        }),
    );
    let notice = translate_once(&quota, &request).await.expect_err("quota");
    assert_eq!(notice.message, "API quota exceeded. Please try again later.");
    assert_eq!(exit_code_for(&notice), 2);

    let down = FakeBackend::new(
        Ok(Vec::new()),
        Err(BackendError::Transport {
            message: "refused".to_string(),
            timed_out: false,
        }),
    );
    let notice = translate_once(&down, &request).await.expect_err("network");
    assert_eq!(exit_code_for(&notice), 1);
    assert_eq!(exit_code_for(&Notice::languages_failed()), 1);
}

#[tokio::test]
async fn one_shot_success_returns_the_backend_result() {
    let backend = FakeBackend::new(
        Ok(Vec::new()),
        Ok(TranslationResult {
            translated_text: "வணக்கம்".to_string(),
            transliterated_text: "Vanakkam".to_string(),
        }),
    );
    let config = Config::default();
    let request = build_request(&words("hello"), None, Some("ta"), &config).expect("request");

    let result = translate_once(&backend, &request).await.expect("translation");
    assert_eq!(result.transliterated_text, "Vanakkam");
    assert_eq!(backend.translate_calls(), vec![request]);
}

#[test]
fn language_rows_mark_configured_defaults() {
    let config = Config::default();
    let rows = format_languages(&sample_languages(), &config);
    assert_eq!(rows[0], "en - English (from)");
    assert_eq!(rows[1], "hi - Hindi (to)");
    assert_eq!(rows[2], "bn - Bengali");

    let same = Config {
        default_target_language: Some("en".to_string()),
        ..Default::default()
    };
    let rows = format_languages(&[LanguageOption::new("en", "English")], &same);
    assert_eq!(rows, vec!["en - English (from, to)".to_string()]);
}

#[test]
fn theme_list_marks_current_theme() {
    let lines = format_themes(&Config::default());
    assert!(lines.contains(&"  * dark - Dark Mode".to_string()));
    assert!(lines.contains(&"    light - Light Mode".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("Current: (default: dark)"));

    let light = Config {
        theme: Some("light".to_string()),
        ..Default::default()
    };
    let lines = format_themes(&light);
    assert!(lines.contains(&"  * light - Light Mode".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("Current: light"));
}

#[test]
fn set_and_unset_edit_config_in_memory() {
    let mut config = Config::default();

    let message = apply_set(&mut config, "timeout", &words("30"))
        .expect("valid")
        .expect("message");
    assert_eq!(message, "✅ Set timeout to: 30");
    assert_eq!(config.request_timeout_secs, Some(30));

    let shown = apply_set(&mut config, "theme", &[]).expect("no value");
    assert!(shown.is_none());

    let message = apply_unset(&mut config, "timeout").expect("known key");
    assert_eq!(message, "✅ Unset timeout");
    assert_eq!(config.request_timeout_secs, None);
}

#[test]
fn settings_reject_unknown_keys_and_bad_values() {
    let mut config = Config::default();
    assert!(matches!(
        apply_set(&mut config, "colour", &words("red")),
        Err(SettingError::UnknownKey(key)) if key == "colour"
    ));
    assert!(matches!(
        apply_set(&mut config, "theme", &words("neon")),
        Err(SettingError::InvalidValue { .. })
    ));
    assert!(matches!(
        apply_unset(&mut config, "nope"),
        Err(SettingError::UnknownKey(_))
    ));
    assert_eq!(config, Config::default());
}

#[test]
fn check_separates_error_statuses_from_unreachable_backends() {
    let base = "http://localhost:8000";
    let server_error = BackendError::Status {
        status: 503,
        detail: None,
    };
    assert_eq!(
        describe_failure(base, &server_error),
        "❌ http://localhost:8000 responded with HTTP 503"
    );

    let with_detail = BackendError::Status {
        status: 500,
        detail: Some("model down".to_string()),
    };
    assert_eq!(
        describe_failure(base, &with_detail),
        "❌ http://localhost:8000 responded with HTTP 500: model down"
    );

    let refused = BackendError::Transport {
        message: "connection refused".to_string(),
        timed_out: false,
    };
    let line = describe_failure(base, &refused);
    assert!(line.contains("is not reachable"));
    assert!(line.contains("connection refused"));
}
