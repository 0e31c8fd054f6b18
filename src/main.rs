// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use virtual_studio::app::{self, paths, Flags};

/// Environment variable holding the log filter (`tracing` directives).
const LOG_ENV: &str = "VIRTUAL_STUDIO_LOG";

const HELP: &str = "\
Virtual Studio

USAGE:
  virtual_studio [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --i18n-dir <DIR>      Load Fluent translations from DIR
  --config-dir <DIR>    Read settings.toml from DIR
  -h, --help            Print this help

ENVIRONMENT:
  VIRTUAL_STUDIO_LOG          Log filter (default: info)
  VIRTUAL_STUDIO_CONFIG_DIR   Config directory when --config-dir is absent
  GEMINI_API_KEY              Credential for the generation service
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let flags = Flags {
        lang: option_arg(&mut args, "--lang"),
        i18n_dir: option_arg(&mut args, "--i18n-dir"),
        config_dir: option_arg(&mut args, "--config-dir"),
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads `--name <value>`; malformed values are reported and ignored.
fn option_arg(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(argument = name, error = %err, "ignoring invalid argument");
            None
        }
    }
}
