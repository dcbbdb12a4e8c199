//! # Embedded Dataset Module / 内嵌数据集模块
//!
//! Static language metadata generated by `build.rs` from `data/`, plus the
//! lookup indexes over it. The indexes are built on first use and live for
//! the rest of the process.
//!
//! 由 `build.rs` 从 `data/` 生成的静态语言元数据，以及基于它的查找索引。
//! 索引在首次使用时构建，并在进程的剩余时间内保持有效。

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Population figures of a language within one territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerritoryPopulation {
    pub code: &'static str,
    pub speaking: Option<u64>,
    pub writing: Option<u64>,
}

/// A single language entry of the registry.
/// 注册表中的单个语言条目。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageRecord {
    /// Preferred language subtag, e.g. `pt`.
    pub code: &'static str,
    /// Three-letter codes that map onto `code`, e.g. `por`.
    pub aliases: &'static [&'static str],
    /// The language's name for itself.
    pub autonym: &'static str,
    /// Script omitted from canonical tags of this language.
    pub suppress_script: Option<&'static str>,
    pub speaking_population: Option<u64>,
    pub writing_population: Option<u64>,
    pub territories: &'static [TerritoryPopulation],
}

impl LanguageRecord {
    pub fn territory(&self, code: &str) -> Option<&'static TerritoryPopulation> {
        self.territories.iter().find(|t| t.code == code)
    }
}

/// Localized display names for one display language.
#[derive(Debug, Clone, Copy)]
pub struct NameTable {
    pub display: &'static str,
    pub languages: &'static [(&'static str, &'static str)],
    pub scripts: &'static [(&'static str, &'static str)],
    pub territories: &'static [(&'static str, &'static str)],
}

/// The kind of subtag a display name is looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Language,
    Script,
    Territory,
}

include!(concat!(env!("OUT_DIR"), "/dataset.rs"));

static LANGUAGE_INDEX: Lazy<HashMap<&'static str, &'static LanguageRecord>> =
    Lazy::new(|| LANGUAGES.iter().map(|record| (record.code, record)).collect());

/// Deprecated and three-letter codes mapped to their replacement.
static LANGUAGE_ALIAS_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut index: HashMap<_, _> = LANGUAGE_ALIASES.iter().copied().collect();
    for record in LANGUAGES {
        for alias in record.aliases {
            index.insert(*alias, record.code);
        }
    }
    index
});

static REGION_ALIAS_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| REGION_ALIASES.iter().copied().collect());

/// Whole-tag aliases, longest first so that the most specific prefix wins.
static SORTED_TAG_ALIASES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut aliases = TAG_ALIASES.to_vec();
    aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
    aliases
});

type NamesByKind = HashMap<NameKind, HashMap<&'static str, &'static str>>;

static NAME_INDEX: Lazy<HashMap<&'static str, NamesByKind>> = Lazy::new(|| {
    NAME_TABLES
        .iter()
        .map(|table| {
            let by_kind: NamesByKind = [
                (NameKind::Language, table.languages),
                (NameKind::Script, table.scripts),
                (NameKind::Territory, table.territories),
            ]
            .into_iter()
            .map(|(kind, pairs)| (kind, pairs.iter().copied().collect()))
            .collect();
            (table.display, by_kind)
        })
        .collect()
});

/// Returns the registry record for a preferred language subtag.
pub fn language(code: &str) -> Option<&'static LanguageRecord> {
    LANGUAGE_INDEX.get(code).copied()
}

/// Returns the replacement for a deprecated or three-letter language subtag.
/// The replacement may itself be a short tag such as `sr-Latn`.
pub fn language_alias(code: &str) -> Option<&'static str> {
    LANGUAGE_ALIAS_INDEX.get(code).copied()
}

pub fn region_alias(code: &str) -> Option<&'static str> {
    REGION_ALIAS_INDEX.get(code).copied()
}

/// Rewrites a lowercase tag whose start matches a whole-tag alias.
///
/// The alias must match the entire tag or be followed by a `-` separator,
/// so `zh-cmn-hant` becomes `zh-hant` but `zh-cmnx` is left alone.
pub fn resolve_tag_alias(lowercase_tag: &str) -> Option<String> {
    SORTED_TAG_ALIASES.iter().find_map(|(alias, replacement)| {
        let rest = lowercase_tag.strip_prefix(alias)?;
        if rest.is_empty() || rest.starts_with('-') {
            Some(format!("{}{}", replacement, rest))
        } else {
            None
        }
    })
}

/// Looks up the display name of a subtag in exactly one display language.
pub fn name(display: &str, kind: NameKind, code: &str) -> Option<&'static str> {
    NAME_INDEX.get(display)?.get(&kind)?.get(code).copied()
}
