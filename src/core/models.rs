//! # Data Models Module / 数据模型模块
//!
//! This module defines the request-scoped data structures of a lookup: the
//! parsed command-line options, the output mode they select, and the merged
//! description that `--info` prints.
//!
//! 此模块定义单次查询范围内的数据结构：解析后的命令行选项、
//! 这些选项所选择的输出模式，以及 `--info` 打印的合并描述。

use serde::Serialize;
use std::fmt;

use crate::core::metadata::Description;

/// Code standard assumed for `--de_codex` when none is given.
pub const DEFAULT_CODE_STANDARD: &str = "BCP47";

/// Selects which language names are rendered in by the description modes.
/// 选择描述模式中名称所使用的语言。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescribeIn {
    /// English names.
    Default,
    /// Names in the given language code.
    Language(String),
    /// Names in the described language itself.
    Autonym,
}

impl DescribeIn {
    /// Interprets a `--info-in-lang` value; the literal `autonym` is an alias
    /// for self-localization.
    pub fn from_lang_arg(value: &str) -> Self {
        if value == "autonym" {
            DescribeIn::Autonym
        } else {
            DescribeIn::Language(value.to_string())
        }
    }
}

/// The single handler chosen for an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Bcp47,
    IsValidSyntax,
    SpeakingPopulation,
    WritingPopulation,
    Describe(DescribeIn),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Bcp47 => write!(f, "bcp47"),
            Mode::IsValidSyntax => write!(f, "is-valid-syntax"),
            Mode::SpeakingPopulation => write!(f, "speaking-population"),
            Mode::WritingPopulation => write!(f, "writing-population"),
            Mode::Describe(DescribeIn::Default) => write!(f, "info"),
            Mode::Describe(DescribeIn::Language(lang)) => write!(f, "info-in-lang={}", lang),
            Mode::Describe(DescribeIn::Autonym) => write!(f, "info-in-autonym"),
        }
    }
}

/// Options parsed from the command line. Several mode flags may be set at
/// once; [`Options::mode`] resolves them to exactly one handler.
///
/// 从命令行解析的选项。可以同时设置多个模式标志；
/// [`Options::mode`] 会将它们解析为唯一的处理程序。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The language tag to look up.
    pub language_code: String,
    pub info: bool,
    pub info_in_lang: Option<String>,
    pub info_in_autonym: bool,
    pub bcp47: bool,
    pub is_valid_syntax: bool,
    pub speaking_population: bool,
    pub writing_population: bool,
    /// Reserved: parsed from `--de_codex`, never dispatched on.
    pub de_codex: Option<String>,
    /// Reserved: parsed from `--de_codex_norma`, never dispatched on.
    pub de_codex_norma: String,
    /// Reserved: parsed from `--de_nomen`, never dispatched on.
    pub de_nomen: Option<String>,
}

impl Options {
    /// Options for `language_code` with every flag unset.
    pub fn new(language_code: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            info: false,
            info_in_lang: None,
            info_in_autonym: false,
            bcp47: false,
            is_valid_syntax: false,
            speaking_population: false,
            writing_population: false,
            de_codex: None,
            de_codex_norma: DEFAULT_CODE_STANDARD.to_string(),
            de_nomen: None,
        }
    }

    /// Resolves the flags by priority:
    /// bcp47 > is-valid-syntax > speaking-population > writing-population >
    /// info-in-lang > info-in-autonym > info. With no flag set the full
    /// description is selected.
    pub fn mode(&self) -> Mode {
        if self.bcp47 {
            Mode::Bcp47
        } else if self.is_valid_syntax {
            Mode::IsValidSyntax
        } else if self.speaking_population {
            Mode::SpeakingPopulation
        } else if self.writing_population {
            Mode::WritingPopulation
        } else if let Some(lang) = self.info_in_lang.as_deref().filter(|l| !l.is_empty()) {
            Mode::Describe(DescribeIn::from_lang_arg(lang))
        } else if self.info_in_autonym {
            Mode::Describe(DescribeIn::Autonym)
        } else {
            Mode::Describe(DescribeIn::Default)
        }
    }
}

/// The object printed by the description modes: the collaborator's
/// description followed by five augmented fields, in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionResult {
    #[serde(flatten)]
    pub description: Description,
    pub bcp47: String,
    pub autonym: String,
    pub speaking_population: Option<u64>,
    pub writing_population: Option<u64>,
    pub is_valid_syntax: bool,
}

/// Legacy query record kept for compatibility with older callers.
///
/// It is constructed directly rather than through the command line, and its
/// JSON form lists only the fields that are set:
///
/// ```
/// use langcodex::core::models::LegacyQuery;
///
/// let query = LegacyQuery::new().with_de_codex("pt");
/// assert_eq!(
///     query.to_json().unwrap(),
///     r#"{"de_codex": "pt", "de_codex_norma": "BCP47"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub de_codex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub de_nomen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub de_exemplum: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub de_codex_norma: String,
}

impl Default for LegacyQuery {
    fn default() -> Self {
        Self {
            de_codex: None,
            de_nomen: None,
            de_exemplum: None,
            de_codex_norma: DEFAULT_CODE_STANDARD.to_string(),
        }
    }
}

impl LegacyQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_de_codex(mut self, code: impl Into<String>) -> Self {
        self.de_codex = Some(code.into());
        self
    }

    pub fn with_de_nomen(mut self, name: impl Into<String>) -> Self {
        self.de_nomen = Some(name.into());
        self
    }

    pub fn with_de_exemplum(mut self, example: impl Into<String>) -> Self {
        self.de_exemplum = Some(example.into());
        self
    }

    pub fn with_de_codex_norma(mut self, standard: impl Into<String>) -> Self {
        self.de_codex_norma = standard.into();
        self
    }

    /// Renders the set fields as one line of JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        crate::reporting::json::render(self, &crate::core::config::JsonStyle::raw_unicode())
    }
}
