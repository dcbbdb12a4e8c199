// src/cli.rs
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::core::{
    config::{JsonStyle, Settings},
    models::{DEFAULT_CODE_STANDARD, Options},
};
use crate::infra::t;
use crate::status::ExitStatus;

/// Result of parsing the command line.
#[derive(Debug)]
pub enum Parsed {
    /// Run a lookup with these options and settings.
    Run(Options, Settings),
    /// Parsing already produced its output (help, version or a usage error).
    Exit(ExitStatus),
}

/// Pre-parses the command line arguments to find the UI language.
/// This allows the help text to be localized before the full CLI is built.
/// It looks for `--ui-lang <VALUE>` or `--ui-lang=<VALUE>`.
pub fn pre_parse_ui_language(args: &[String]) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--ui-lang" {
            return iter.next().cloned();
        }
        if let Some(value) = arg.strip_prefix("--ui-lang=") {
            return Some(value.to_string());
        }
    }
    None
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("langcodex")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .after_help(t!("cli_after_help", locale = locale).to_string())
        .arg(
            Arg::new("language_code")
                .help(t!("arg_language_code", locale = locale).to_string())
                .value_name("LANGUAGE_CODE")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("de_codex")
                .long("de_codex")
                .help(t!("arg_de_codex", locale = locale).to_string())
                .value_name("CODE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("de_codex_norma")
                .long("de_codex_norma")
                .help(t!("arg_de_codex_norma", locale = locale).to_string())
                .value_name("STANDARD")
                .default_value(DEFAULT_CODE_STANDARD)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("de_nomen")
                .long("de_nomen")
                .help(t!("arg_de_nomen", locale = locale).to_string())
                .value_name("NAME")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .help(t!("arg_info", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("info-in-lang")
                .long("info-in-lang")
                .help(t!("arg_info_in_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("info-in-autonym")
                .long("info-in-autonym")
                .help(t!("arg_info_in_autonym", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bcp47")
                .long("bcp47")
                .help(t!("arg_bcp47", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("is-valid-syntax")
                .long("is-valid-syntax")
                .help(t!("arg_is_valid_syntax", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("speaking-population")
                .long("speaking-population")
                .help(t!("arg_speaking_population", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("writing-population")
                .long("writing-population")
                .help(t!("arg_writing_population", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help(t!("arg_pretty", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sort-keys")
                .long("sort-keys")
                .help(t!("arg_sort_keys", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("unicode")
                .long("unicode")
                .help(t!("arg_unicode", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ui-lang")
                .long("ui-lang")
                .help(t!("arg_ui_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .action(ArgAction::Count),
        )
}

/// Extracts the lookup options from parsed matches.
pub fn options_from_matches(matches: &ArgMatches) -> Options {
    let string = |id: &str| matches.get_one::<String>(id).cloned();

    Options {
        language_code: string("language_code").unwrap_or_default(),
        info: matches.get_flag("info"),
        info_in_lang: string("info-in-lang"),
        info_in_autonym: matches.get_flag("info-in-autonym"),
        bcp47: matches.get_flag("bcp47"),
        is_valid_syntax: matches.get_flag("is-valid-syntax"),
        speaking_population: matches.get_flag("speaking-population"),
        writing_population: matches.get_flag("writing-population"),
        de_codex: string("de_codex"),
        de_codex_norma: string("de_codex_norma")
            .unwrap_or_else(|| DEFAULT_CODE_STANDARD.to_string()),
        de_nomen: string("de_nomen"),
    }
}

/// Builds the process settings from parsed matches.
pub fn settings_from_matches(matches: &ArgMatches, ui_locale: &str) -> Settings {
    Settings {
        ui_locale: ui_locale.to_string(),
        json: JsonStyle {
            indent: matches.get_flag("pretty").then_some(4),
            sort_keys: matches.get_flag("sort-keys"),
            ensure_ascii: !matches.get_flag("unicode"),
        },
        verbosity: matches.get_count("verbose"),
    }
}

/// Parses the full argument list, program name included.
///
/// Help and version output go to stdout with a success status. A missing
/// language code, an unknown flag or an empty command line print usage to
/// stderr with a failure status.
pub fn parse_args(args: &[String]) -> Parsed {
    let ui_locale = crate::resolve_ui_locale(pre_parse_ui_language(args).as_deref());

    if args.len() <= 1 {
        eprintln!("{}", build_cli(&ui_locale).render_help());
        return Parsed::Exit(ExitStatus::Failure);
    }

    match build_cli(&ui_locale).try_get_matches_from(args) {
        Ok(matches) => Parsed::Run(
            options_from_matches(&matches),
            settings_from_matches(&matches, &ui_locale),
        ),
        Err(e) => {
            // Logging is not installed yet and the usage text's own stream
            // has failed, so a write error has nowhere left to go.
            let _ = e.print();
            Parsed::Exit(ExitStatus::from_bool(!e.use_stderr()))
        }
    }
}
