//! # Lookup Command Module / 查询命令模块
//!
//! The dispatcher: picks exactly one handler for the parsed options, calls
//! the language-metadata collaborator and produces the single output line.
//! Nothing is written here; the caller prints the returned [`Outcome`], so a
//! failing lookup never leaves partial output behind.
//!
//! 调度器：为解析后的选项选择唯一的处理程序，调用语言元数据协作者，
//! 并生成单行输出。此处不进行任何输出；调用方负责打印返回的 [`Outcome`]，
//! 因此查询失败时不会留下部分输出。

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::{
    config::{JsonStyle, Settings},
    metadata::LanguageMetadata,
    models::{DescribeIn, DescriptionResult, Mode, Options},
};
use crate::reporting::json;
use crate::status::ExitStatus;

/// The line to print and the status to exit with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub line: String,
    pub status: ExitStatus,
}

impl Outcome {
    fn success(line: String) -> Self {
        Self {
            line,
            status: ExitStatus::Success,
        }
    }
}

/// Executes the lookup selected by `options`.
///
/// # Arguments
/// * `options` - Parsed command-line options
/// * `settings` - Process-wide settings (JSON layout)
/// * `metadata` - The language-metadata source to query
///
/// # Returns
/// The output line and exit status, or the collaborator's error when the tag
/// cannot be interpreted.
pub fn execute(
    options: &Options,
    settings: &Settings,
    metadata: &dyn LanguageMetadata,
) -> Result<Outcome> {
    let mode = options.mode();
    let code = options.language_code.as_str();
    info!(%mode, language_code = code, "dispatching lookup");

    match mode {
        Mode::Bcp47 => bcp47(code, &settings.json, metadata),
        Mode::IsValidSyntax => Ok(is_valid_syntax(code, metadata)),
        Mode::SpeakingPopulation => {
            render(&metadata.speaking_population(code)?, &settings.json).map(Outcome::success)
        }
        Mode::WritingPopulation => {
            render(&metadata.writing_population(code)?, &settings.json).map(Outcome::success)
        }
        Mode::Describe(describe_in) => {
            let result = describe(code, &describe_in, metadata)?;
            render(&result, &settings.json).map(Outcome::success)
        }
    }
}

fn bcp47(code: &str, style: &JsonStyle, metadata: &dyn LanguageMetadata) -> Result<Outcome> {
    let canonical = metadata.standardize(code)?;
    render(&canonical, style).map(Outcome::success)
}

/// `1` with a success status for a valid tag, `0` with a failure status otherwise.
fn is_valid_syntax(code: &str, metadata: &dyn LanguageMetadata) -> Outcome {
    let valid = metadata.is_valid(code);
    Outcome {
        line: if valid { "1" } else { "0" }.to_string(),
        status: ExitStatus::from_bool(valid),
    }
}

/// Builds the full description of `code`, augmented with its canonical tag,
/// autonym, population estimates and validity.
pub fn describe(
    code: &str,
    describe_in: &DescribeIn,
    metadata: &dyn LanguageMetadata,
) -> Result<DescriptionResult> {
    let in_language = match describe_in {
        DescribeIn::Default => None,
        DescribeIn::Language(lang) => Some(lang.as_str()),
        DescribeIn::Autonym => Some(code),
    };
    debug!(?in_language, "describing language tag");

    Ok(DescriptionResult {
        description: metadata.describe(code, in_language)?,
        bcp47: metadata.standardize(code)?,
        autonym: metadata.autonym(code)?,
        speaking_population: metadata.speaking_population(code)?,
        writing_population: metadata.writing_population(code)?,
        is_valid_syntax: metadata.is_valid(code),
    })
}

fn render<T: serde::Serialize + ?Sized>(value: &T, style: &JsonStyle) -> Result<String> {
    json::render(value, style).context("Failed to render JSON output")
}
