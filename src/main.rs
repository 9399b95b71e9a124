// SPDX-License-Identifier: MPL-2.0
use scrubline::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
scrubline - video player controls demo

USAGE:
  scrubline [OPTIONS] [PREVIEW_DIR]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --duration <SECONDS>   Length of the simulated media
  -h, --help             Print this help

ARGS:
  PREVIEW_DIR            Folder with preview1.jpg, preview2.jpg, ...
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        duration_secs: args.opt_value_from_str("--duration")?,
        preview_dir: args.opt_free_from_str::<PathBuf>()?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scrubline=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
