//! # Models Module Unit Tests / Models 模块单元测试
//!
//! This module contains unit tests for the `models.rs` module: mode
//! selection by flag priority, the merged description and the legacy query.
//!
//! 此模块包含 `models.rs` 模块的单元测试：按标志优先级选择模式、
//! 合并后的描述以及旧版查询。

use langcodex::core::metadata::Description;
use langcodex::core::models::{DescribeIn, DescriptionResult, LegacyQuery, Mode, Options};

/// Helper function to create options with every mode flag set
/// 创建设置了所有模式标志的选项的辅助函数
fn all_flags(code: &str) -> Options {
    Options {
        info: true,
        info_in_lang: Some("de".to_string()),
        info_in_autonym: true,
        bcp47: true,
        is_valid_syntax: true,
        speaking_population: true,
        writing_population: true,
        ..Options::new(code)
    }
}

#[cfg(test)]
mod mode_tests {
    use super::*;

    #[test]
    fn test_default_mode_is_info() {
        assert_eq!(Options::new("pt").mode(), Mode::Describe(DescribeIn::Default));
    }

    #[test]
    fn test_priority_order() {
        let mut options = all_flags("pt");
        let expected = [
            Mode::Bcp47,
            Mode::IsValidSyntax,
            Mode::SpeakingPopulation,
            Mode::WritingPopulation,
            Mode::Describe(DescribeIn::Language("de".to_string())),
            Mode::Describe(DescribeIn::Autonym),
            Mode::Describe(DescribeIn::Default),
        ];

        for mode in expected {
            assert_eq!(options.mode(), mode);
            match mode {
                Mode::Bcp47 => options.bcp47 = false,
                Mode::IsValidSyntax => options.is_valid_syntax = false,
                Mode::SpeakingPopulation => options.speaking_population = false,
                Mode::WritingPopulation => options.writing_population = false,
                Mode::Describe(DescribeIn::Language(_)) => options.info_in_lang = None,
                Mode::Describe(DescribeIn::Autonym) => options.info_in_autonym = false,
                Mode::Describe(DescribeIn::Default) => options.info = false,
            }
        }
        assert_eq!(options.mode(), Mode::Describe(DescribeIn::Default));
    }

    #[test]
    fn test_info_in_lang_autonym_alias() {
        let options = Options {
            info_in_lang: Some("autonym".to_string()),
            ..Options::new("de")
        };
        assert_eq!(options.mode(), Mode::Describe(DescribeIn::Autonym));
    }

    #[test]
    fn test_empty_info_in_lang_is_ignored() {
        let options = Options {
            info_in_lang: Some(String::new()),
            ..Options::new("de")
        };
        assert_eq!(options.mode(), Mode::Describe(DescribeIn::Default));
    }

    #[test]
    fn test_legacy_fields_do_not_select_a_mode() {
        let options = Options {
            de_codex: Some("en".to_string()),
            de_nomen: Some("English".to_string()),
            ..Options::new("pt")
        };
        assert_eq!(options.de_codex_norma, "BCP47");
        assert_eq!(options.mode(), Mode::Describe(DescribeIn::Default));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Bcp47.to_string(), "bcp47");
        assert_eq!(
            Mode::Describe(DescribeIn::Language("fr".to_string())).to_string(),
            "info-in-lang=fr"
        );
    }
}

#[cfg(test)]
mod description_result_tests {
    use super::*;

    #[test]
    fn test_serializes_description_first() {
        let result = DescriptionResult {
            description: Description {
                language: Some("Portuguese".to_string()),
                territory: Some("Brazil".to_string()),
                ..Description::default()
            },
            bcp47: "pt-BR".to_string(),
            autonym: "português (Brasil)".to_string(),
            speaking_population: Some(211_000_000),
            writing_population: None,
            is_valid_syntax: true,
        };

        let value = serde_json::to_value(&result).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "language",
                "territory",
                "bcp47",
                "autonym",
                "speaking_population",
                "writing_population",
                "is_valid_syntax"
            ]
        );
        assert!(value["writing_population"].is_null());
    }
}

#[cfg(test)]
mod legacy_query_tests {
    use super::*;

    #[test]
    fn test_minimal_query() {
        let query = LegacyQuery::new().with_de_codex("pt");
        assert_eq!(
            query.to_json().unwrap(),
            r#"{"de_codex": "pt", "de_codex_norma": "BCP47"}"#
        );
    }

    #[test]
    fn test_full_query_keeps_declaration_order() {
        let query = LegacyQuery::new()
            .with_de_codex_norma("ISO 639-3")
            .with_de_exemplum("Olá")
            .with_de_nomen("Português")
            .with_de_codex("por");
        assert_eq!(
            query.to_json().unwrap(),
            r#"{"de_codex": "por", "de_nomen": "Português", "de_exemplum": "Olá", "de_codex_norma": "ISO 639-3"}"#
        );
    }

    #[test]
    fn test_default_query_has_only_standard() {
        assert_eq!(
            LegacyQuery::default().to_json().unwrap(),
            r#"{"de_codex_norma": "BCP47"}"#
        );
    }
}
