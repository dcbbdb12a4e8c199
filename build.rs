//! # Build Script for the Language Dataset / 语言数据集构建脚本
//!
//! This build script compiles the embedded language-metadata dataset into Rust
//! code. It parses `data/registry.toml` (language records, populations and
//! aliases) and every `data/names/*.toml` file (localized display names) and
//! generates static tables that `infra::dataset` includes at compile time.
//!
//! 此构建脚本将内嵌的语言元数据数据集编译为 Rust 代码。
//! 它解析 `data/registry.toml`（语言记录、人口和别名）以及所有
//! `data/names/*.toml` 文件（本地化显示名称），并生成供 `infra::dataset`
//! 在编译时包含的静态表。
//!
//! ## Generated Code / 生成的代码
//!
//! - `LANGUAGES` with one `LanguageRecord` per registry entry
//! - `LANGUAGE_ALIASES`, `REGION_ALIASES` and `TAG_ALIASES`
//! - `NAME_TABLES` with one `NameTable` per display language
//!
//! - 每个注册表条目对应一个 `LanguageRecord` 的 `LANGUAGES`
//! - `LANGUAGE_ALIASES`、`REGION_ALIASES` 和 `TAG_ALIASES`
//! - 每种显示语言对应一个 `NameTable` 的 `NAME_TABLES`

use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Registry {
    language: Vec<LanguageEntry>,
    #[serde(default)]
    language_aliases: BTreeMap<String, String>,
    #[serde(default)]
    region_aliases: BTreeMap<String, String>,
    #[serde(default)]
    tag_aliases: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    code: String,
    #[serde(default)]
    aliases: Vec<String>,
    autonym: String,
    suppress_script: Option<String>,
    speaking_population: Option<u64>,
    writing_population: Option<u64>,
    #[serde(default)]
    territories: BTreeMap<String, TerritoryEntry>,
}

#[derive(Debug, Deserialize)]
struct TerritoryEntry {
    speaking: Option<u64>,
    writing: Option<u64>,
}

/// Localized names for one display language.
/// 一种显示语言的本地化名称。
#[derive(Debug, Deserialize)]
struct Names {
    #[serde(default)]
    languages: BTreeMap<String, String>,
    #[serde(default)]
    scripts: BTreeMap<String, String>,
    #[serde(default)]
    territories: BTreeMap<String, String>,
}

fn write_pairs(code: &mut String, pairs: &BTreeMap<String, String>) {
    code.push_str("&[");
    for (key, value) in pairs {
        write!(code, "({:?}, {:?}), ", key, value).unwrap();
    }
    code.push(']');
}

/// Main build script function that generates the dataset tables.
///
/// 生成数据集表的主构建脚本函数。
///
/// # Process / 处理过程
/// 1. Parse the registry and generate language records and alias tables
/// 2. Read all .toml files from `data/names` and generate one name table each
/// 3. Write the generated code to the output directory
///
/// 1. 解析注册表并生成语言记录和别名表
/// 2. 读取 `data/names` 中的所有 .toml 文件，并为每个文件生成名称表
/// 3. 将生成的代码写入输出目录
fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest_path = Path::new(&out_dir).join("dataset.rs");

    let data_dir = Path::new("data");
    let names_dir = data_dir.join("names");

    // 1. 解析注册表
    let registry_content = fs::read_to_string(data_dir.join("registry.toml"))?;
    let registry: Registry =
        toml::from_str(&registry_content).expect("Failed to parse data/registry.toml");

    let mut final_code = String::new();

    writeln!(&mut final_code, "pub static LANGUAGES: &[LanguageRecord] = &[").unwrap();
    for entry in &registry.language {
        write!(
            &mut final_code,
            "    LanguageRecord {{ code: {:?}, aliases: &{:?}, autonym: {:?}, \
             suppress_script: {:?}, speaking_population: {:?}, writing_population: {:?}, \
             territories: &[",
            entry.code,
            entry.aliases,
            entry.autonym,
            entry.suppress_script,
            entry.speaking_population,
            entry.writing_population,
        )
        .unwrap();
        for (territory, figures) in &entry.territories {
            write!(
                &mut final_code,
                "TerritoryPopulation {{ code: {:?}, speaking: {:?}, writing: {:?} }}, ",
                territory, figures.speaking, figures.writing
            )
            .unwrap();
        }
        writeln!(&mut final_code, "] }},").unwrap();
    }
    writeln!(&mut final_code, "];\n").unwrap();

    let alias_tables = [
        ("LANGUAGE_ALIASES", &registry.language_aliases),
        ("REGION_ALIASES", &registry.region_aliases),
        ("TAG_ALIASES", &registry.tag_aliases),
    ];
    for (name, pairs) in alias_tables {
        write!(&mut final_code, "pub static {}: &[(&str, &str)] = ", name).unwrap();
        write_pairs(&mut final_code, pairs);
        writeln!(&mut final_code, ";\n").unwrap();
    }

    // 2. 一次性读取所有名称文件路径，按文件名排序以保证输出稳定
    let mut name_files: Vec<PathBuf> = fs::read_dir(&names_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml"))
        .collect();
    name_files.sort();

    let base_names: Names = toml::from_str(&fs::read_to_string(names_dir.join("en.toml"))?)
        .expect("Failed to parse data/names/en.toml");

    writeln!(&mut final_code, "pub static NAME_TABLES: &[NameTable] = &[").unwrap();
    for path in &name_files {
        let display = path.file_stem().unwrap().to_str().unwrap();
        let content = fs::read_to_string(path)?;
        let names: Names = toml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", path, e));

        for key in names.languages.keys() {
            if !base_names.languages.contains_key(key) {
                println!(
                    "cargo:warning=Language '{}' in {:?} has no English name in en.toml.",
                    key, path
                );
            }
        }

        write!(&mut final_code, "    NameTable {{ display: {:?}, languages: ", display).unwrap();
        write_pairs(&mut final_code, &names.languages);
        final_code.push_str(", scripts: ");
        write_pairs(&mut final_code, &names.scripts);
        final_code.push_str(", territories: ");
        write_pairs(&mut final_code, &names.territories);
        writeln!(&mut final_code, " }},").unwrap();
    }
    writeln!(&mut final_code, "];").unwrap();

    // 3. 写入生成的代码
    fs::write(&dest_path, final_code)?;
    println!("cargo:rerun-if-changed=data/");

    Ok(())
}
