//! # CLI Integration Tests / CLI 集成测试
//!
//! These tests run the `langcodex` binary end to end and check the single
//! output line and the exit code of every mode.
//!
//! 这些测试端到端运行 `langcodex` 二进制文件，
//! 并检查每种模式的单行输出和退出码。

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// Builds a `langcodex` command with English UI text.
/// 构建使用英文界面文本的 `langcodex` 命令。
fn langcodex() -> Command {
    let mut cmd = Command::cargo_bin("langcodex").unwrap();
    cmd.arg("--ui-lang").arg("en");
    cmd
}

#[cfg(test)]
mod mode_tests {
    use super::*;

    #[test]
    fn test_bcp47_standardizes_tag() {
        langcodex()
            .args(["en-latn-us", "--bcp47"])
            .assert()
            .success()
            .stdout("\"en-US\"\n");
    }

    #[test]
    fn test_bcp47_replaces_three_letter_code() {
        langcodex()
            .args(["por_br", "--bcp47"])
            .assert()
            .success()
            .stdout("\"pt-BR\"\n");
    }

    #[test]
    fn test_bcp47_is_idempotent() {
        for tag in ["pt-BR", "zh-Hant-TW", "sr-Latn", "en-GB-oxendict"] {
            langcodex()
                .args([tag, "--bcp47"])
                .assert()
                .success()
                .stdout(format!("\"{}\"\n", tag));
        }
    }

    #[test]
    fn test_bcp47_keeps_private_use_tag() {
        langcodex()
            .args(["X-Whatever", "--bcp47"])
            .assert()
            .success()
            .stdout("\"x-whatever\"\n");

        langcodex()
            .args(["x-whatever", "--is-valid-syntax"])
            .assert()
            .success()
            .stdout("1\n");
    }

    #[test]
    fn test_is_valid_syntax_true() {
        for tag in ["en", "pt-BR"] {
            langcodex()
                .args([tag, "--is-valid-syntax"])
                .assert()
                .code(0)
                .stdout("1\n");
        }
    }

    #[test]
    fn test_is_valid_syntax_false() {
        langcodex()
            .args(["???", "--is-valid-syntax"])
            .assert()
            .code(1)
            .stdout("0\n");
    }

    #[test]
    fn test_speaking_population_known() {
        langcodex()
            .args(["en", "--speaking-population"])
            .assert()
            .success()
            .stdout("1636485517\n");
    }

    #[test]
    fn test_speaking_population_unknown_is_null() {
        langcodex()
            .args(["la", "--speaking-population"])
            .assert()
            .success()
            .stdout("null\n");
    }

    #[test]
    fn test_writing_population_of_territory() {
        langcodex()
            .args(["pt-BR", "--writing-population"])
            .assert()
            .success()
            .stdout("194000000\n");
    }

    #[test]
    fn test_info_is_default_mode() {
        let expected = concat!(
            r#"{"language": "Portuguese", "bcp47": "pt", "autonym": "portugu\u00eas", "#,
            r#""speaking_population": 263800000, "writing_population": 210100000, "#,
            r#""is_valid_syntax": true}"#,
            "\n"
        );
        langcodex().arg("pt").assert().success().stdout(expected);
        langcodex().args(["pt", "--info"]).assert().success().stdout(expected);
    }

    #[test]
    fn test_info_in_autonym_renders_german() {
        langcodex()
            .args(["de", "--info-in-autonym"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(r#"{"language": "Deutsch", "bcp47": "de""#));
    }

    #[test]
    fn test_info_in_lang_localizes_all_components() {
        langcodex()
            .args(["pt-BR", "--info-in-lang", "de", "--unicode"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                r#"{"language": "Portugiesisch", "territory": "Brasilien", "bcp47": "pt-BR", "autonym": "português (Brasil)""#,
            ));
    }

    #[test]
    fn test_info_in_lang_autonym_alias() {
        langcodex()
            .args(["fr", "--info-in-lang", "autonym", "--unicode"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(r#"{"language": "français""#));
    }

    #[test]
    fn test_pretty_and_sorted_output() {
        langcodex()
            .args(["la", "--pretty", "--sort-keys"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{\n    \"autonym\": \"lingua Latina\",\n    \"bcp47\": \"la\","));
    }
}

#[cfg(test)]
mod priority_tests {
    use super::*;

    #[test]
    fn test_bcp47_wins_over_info() {
        langcodex()
            .args(["pt", "--bcp47", "--info"])
            .assert()
            .success()
            .stdout("\"pt\"\n");
    }

    #[test]
    fn test_validity_wins_over_population() {
        langcodex()
            .args(["en", "--speaking-population", "--is-valid-syntax"])
            .assert()
            .success()
            .stdout("1\n");
    }

    #[test]
    fn test_legacy_flags_do_not_change_dispatch() {
        langcodex()
            .args(["pt", "--de_codex", "en", "--de_nomen", "English", "--bcp47"])
            .assert()
            .success()
            .stdout("\"pt\"\n");
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_unparseable_tag_fails_without_output() {
        langcodex()
            .args(["???", "--info"])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("???"));
    }

    #[test]
    fn test_invalid_display_language_fails() {
        langcodex()
            .args(["pt", "--info-in-lang", "!!"])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("display language"));
    }

    #[test]
    fn test_no_arguments_prints_help_and_fails() {
        Command::cargo_bin("langcodex")
            .unwrap()
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("--is-valid-syntax"));
    }

    #[test]
    fn test_missing_language_code_fails() {
        langcodex()
            .arg("--bcp47")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("LANGUAGE_CODE"));
    }

    #[test]
    fn test_unknown_flag_fails() {
        langcodex()
            .args(["pt", "--no-such-flag"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--no-such-flag"));
    }

    #[test]
    fn test_help_and_version_succeed() {
        langcodex()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--speaking-population"))
            .stdout(predicate::str::contains("writing population"));

        langcodex()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
