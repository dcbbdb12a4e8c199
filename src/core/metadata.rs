//! # Language Metadata Module / 语言元数据模块
//!
//! The language-metadata collaborator: canonical tags, validity, localized
//! descriptions, autonyms and population estimates. [`LanguageMetadata`] is
//! the seam the dispatcher talks to; [`EmbeddedMetadata`] answers from the
//! dataset compiled into the binary.
//!
//! 语言元数据协作者：规范标签、有效性、本地化描述、自称名和人口估计。
//! [`LanguageMetadata`] 是调度器使用的接口；[`EmbeddedMetadata`]
//! 基于编译进二进制文件的数据集进行应答。

use serde::Serialize;
use tracing::{debug, trace};

use crate::core::tag::LanguageTag;
use crate::errors::{LookupError, Result};
use crate::infra::dataset::{self, LanguageRecord, NameKind, TerritoryPopulation};

/// Display language used when a description is not localized.
pub const DEFAULT_DISPLAY_LANGUAGE: &str = "en";

/// Territory code meaning "the whole world".
const WORLD: &str = "001";

/// Human-readable names of the components of a language tag.
/// Only components present in the tag are serialized. Variants are not
/// named: they are listed as the raw subtags of the tag (`["1996"]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Description {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

/// Lookups a language-metadata source must provide.
pub trait LanguageMetadata {
    /// Returns the canonical form of `tag`.
    fn standardize(&self, tag: &str) -> Result<String>;

    /// Returns whether `tag` is a well-formed language tag. Never fails.
    fn is_valid(&self, tag: &str) -> bool;

    /// Describes `tag`, with names rendered in `in_language` (English when `None`).
    fn describe(&self, tag: &str, in_language: Option<&str>) -> Result<Description>;

    /// Returns the display name of `tag` in its own language.
    fn autonym(&self, tag: &str) -> Result<String>;

    fn speaking_population(&self, tag: &str) -> Result<Option<u64>>;

    fn writing_population(&self, tag: &str) -> Result<Option<u64>>;
}

/// Metadata backed by the embedded dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMetadata;

impl EmbeddedMetadata {
    pub fn new() -> Self {
        Self
    }

    fn population(
        &self,
        tag: &str,
        worldwide: fn(&LanguageRecord) -> Option<u64>,
        local: fn(&TerritoryPopulation) -> Option<u64>,
    ) -> Result<Option<u64>> {
        let tag = LanguageTag::parse(tag)?;
        let Some(record) = tag.language().and_then(dataset::language) else {
            debug!(tag = %tag, "no registry record for language");
            return Ok(None);
        };

        Ok(match tag.territory() {
            None | Some(WORLD) => worldwide(record),
            Some(territory) => record.territory(territory).and_then(local),
        })
    }
}

impl LanguageMetadata for EmbeddedMetadata {
    fn standardize(&self, tag: &str) -> Result<String> {
        let canonical = LanguageTag::parse(tag)?.standardized().to_string();
        trace!(input = tag, canonical = %canonical, "standardized tag");
        Ok(canonical)
    }

    fn is_valid(&self, tag: &str) -> bool {
        match LanguageTag::parse(tag) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "tag is not valid");
                false
            }
        }
    }

    fn describe(&self, tag: &str, in_language: Option<&str>) -> Result<Description> {
        let tag = LanguageTag::parse(tag)?;
        let display = display_language(in_language)?;

        Ok(Description {
            language: tag.language().map(|code| lookup_name(&display, NameKind::Language, code)),
            script: tag.script().map(|code| lookup_name(&display, NameKind::Script, code)),
            territory: tag
                .territory()
                .map(|code| lookup_name(&display, NameKind::Territory, code)),
            variants: tag.variants(),
        })
    }

    fn autonym(&self, tag: &str) -> Result<String> {
        let tag = LanguageTag::parse(tag)?;
        let display = tag.language_or_und();

        let name = lookup_name(display, NameKind::Language, display);
        let qualifiers: Vec<String> = [
            tag.script().map(|code| lookup_name(display, NameKind::Script, code)),
            tag.territory().map(|code| lookup_name(display, NameKind::Territory, code)),
        ]
        .into_iter()
        .flatten()
        .collect();

        if qualifiers.is_empty() {
            Ok(name)
        } else {
            Ok(format!("{} ({})", name, qualifiers.join(", ")))
        }
    }

    fn speaking_population(&self, tag: &str) -> Result<Option<u64>> {
        self.population(tag, |r| r.speaking_population, |t| t.speaking)
    }

    fn writing_population(&self, tag: &str) -> Result<Option<u64>> {
        self.population(tag, |r| r.writing_population, |t| t.writing)
    }
}

/// Resolves the language names are rendered in.
fn display_language(in_language: Option<&str>) -> Result<String> {
    let Some(code) = in_language else {
        return Ok(DEFAULT_DISPLAY_LANGUAGE.to_string());
    };
    let tag = LanguageTag::parse(code).map_err(|e| LookupError::DisplayLanguage {
        tag: code.to_string(),
        reason: e.to_string(),
    })?;
    Ok(tag.language_or_und().to_string())
}

/// Name of `code` in `display`, falling back to the autonym, then English,
/// then a placeholder that still names the code.
fn lookup_name(display: &str, kind: NameKind, code: &str) -> String {
    dataset::name(display, kind, code)
        .or_else(|| {
            if kind == NameKind::Language && display == code {
                dataset::language(code).map(|record| record.autonym)
            } else {
                None
            }
        })
        .or_else(|| dataset::name(DEFAULT_DISPLAY_LANGUAGE, kind, code))
        .map(str::to_string)
        .unwrap_or_else(|| {
            let noun = match kind {
                NameKind::Language => "language",
                NameKind::Script => "script",
                NameKind::Territory => "region",
            };
            format!("Unknown {} [{}]", noun, code)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autonym_falls_back_to_registry_then_english() {
        assert_eq!(lookup_name("ja", NameKind::Language, "ja"), "日本語");
        assert_eq!(lookup_name("ja", NameKind::Territory, "JP"), "Japan");
    }

    #[test]
    fn unknown_codes_keep_the_code() {
        assert_eq!(lookup_name("en", NameKind::Language, "qaa"), "Unknown language [qaa]");
        assert_eq!(lookup_name("de", NameKind::Territory, "ZZ"), "Unknown region [ZZ]");
    }

    #[test]
    fn display_language_defaults_to_english() {
        assert_eq!(display_language(None).unwrap(), "en");
        assert_eq!(display_language(Some("iw")).unwrap(), "he");
        assert!(matches!(
            display_language(Some("!!")),
            Err(LookupError::DisplayLanguage { .. })
        ));
    }
}
