//! # Language Tag Module / 语言标签模块
//!
//! Parsing and canonicalization of BCP47 language tags. Well-formedness and
//! case normalization come from `icu_locale_core`; alias replacement and
//! script suppression come from the embedded dataset.
//!
//! BCP47 语言标签的解析与规范化。格式校验和大小写规范化由 `icu_locale_core`
//! 提供；别名替换和脚本省略由内嵌数据集提供。

use icu_locale_core::subtags::{Language, Region, Script};
use icu_locale_core::{LanguageIdentifier, Locale};
use std::fmt;
use tracing::debug;

use crate::errors::{LookupError, Result};
use crate::infra::dataset;

/// A parsed language tag with aliases already resolved.
///
/// The script subtag is kept as written; use [`LanguageTag::standardized`]
/// to obtain the canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    locale: Locale,
    /// The tag is a bare private-use sequence (`x-...`), held as `und-x-...`.
    private_use: bool,
}

impl LanguageTag {
    /// Parses `input`, accepting `_` as a separator and replacing deprecated
    /// subtags with their preferred values. A bare private-use tag such as
    /// `x-whatever` is accepted and kept as written.
    ///
    /// # Errors
    /// Returns [`LookupError::Unparseable`] if the tag is not well-formed.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LookupError::Empty);
        }

        let normalized = trimmed.replace('_', "-").to_ascii_lowercase();
        let private_use = normalized.starts_with("x-");
        let source = if private_use {
            format!("und-{}", normalized)
        } else {
            dataset::resolve_tag_alias(&normalized).unwrap_or(normalized)
        };

        let mut locale = Locale::try_from_str(&source).map_err(|e| LookupError::Unparseable {
            tag: input.to_string(),
            reason: e.to_string(),
        })?;

        if let Some(replacement) = dataset::language_alias(locale.id.language.as_str()) {
            debug!(from = %locale.id.language, to = replacement, "replacing language alias");
            apply_language_alias(&mut locale.id, replacement).map_err(|reason| {
                LookupError::Unparseable {
                    tag: input.to_string(),
                    reason,
                }
            })?;
        }

        if let Some(region) = locale.id.region {
            if let Some(replacement) = dataset::region_alias(region.as_str()) {
                debug!(from = %region, to = replacement, "replacing region alias");
                let region = Region::try_from_str(replacement).map_err(|e| {
                    LookupError::Unparseable {
                        tag: input.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                locale.id.region = Some(region);
            }
        }

        Ok(Self {
            locale,
            private_use,
        })
    }

    /// The canonical form of this tag: a script equal to the language's
    /// suppress-script is dropped.
    pub fn standardized(&self) -> Self {
        let mut locale = self.locale.clone();
        let suppressed = self
            .language()
            .and_then(dataset::language)
            .and_then(|record| record.suppress_script);
        if let (Some(script), Some(suppressed)) = (locale.id.script, suppressed) {
            if script.as_str() == suppressed {
                locale.id.script = None;
            }
        }
        Self {
            locale,
            private_use: self.private_use,
        }
    }

    /// The language subtag, or `None` for `und`.
    pub fn language(&self) -> Option<&str> {
        let language = self.locale.id.language.as_str();
        (language != "und").then_some(language)
    }

    pub fn script(&self) -> Option<&str> {
        self.locale.id.script.as_ref().map(|s| s.as_str())
    }

    pub fn territory(&self) -> Option<&str> {
        self.locale.id.region.as_ref().map(|r| r.as_str())
    }

    pub fn variants(&self) -> Vec<String> {
        self.locale.id.variants.iter().map(|v| v.to_string()).collect()
    }

    /// The language subtag as written, `und` included.
    pub fn language_or_und(&self) -> &str {
        self.locale.id.language.as_str()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.locale.to_string();
        if self.private_use {
            f.write_str(rendered.strip_prefix("und-").unwrap_or(&rendered))
        } else {
            f.write_str(&rendered)
        }
    }
}

/// Replaces the language subtag with `replacement`, which may carry its own
/// script or region (`sh` → `sr-Latn`). Subtags already present in the tag win.
fn apply_language_alias(
    id: &mut LanguageIdentifier,
    replacement: &str,
) -> std::result::Result<(), String> {
    let mut parts = replacement.split('-');
    let language = parts.next().unwrap_or(replacement);
    id.language = Language::try_from_str(language).map_err(|e| e.to_string())?;

    for part in parts {
        if part.len() == 4 {
            if id.script.is_none() {
                id.script = Some(Script::try_from_str(part).map_err(|e| e.to_string())?);
            }
        } else if id.region.is_none() {
            id.region = Some(Region::try_from_str(part).map_err(|e| e.to_string())?);
        }
    }
    Ok(())
}
