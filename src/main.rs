// SPDX-License-Identifier: MPL-2.0
use iced_changelog::app::{self, paths, Flags};
use std::process::ExitCode;

const HELP: &str = "\
iced_changelog - localized release notes

USAGE:
    iced_changelog [OPTIONS]

OPTIONS:
    --lang <CODE>         Language for the interface and release notes (en, tr, de)
    --catalog <FILE>      TOML release catalog to show instead of the bundled one
    --config-dir <DIR>    Directory holding settings.toml
    --i18n-dir <DIR>      Directory with extra Fluent (.ftl) translations
    -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_str("--catalog")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("[WARN] Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
