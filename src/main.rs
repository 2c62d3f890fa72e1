// SPDX-License-Identifier: MPL-2.0
use flexi_logger::Logger;
use image_preview::app::{self, Flags};

const LOG_SPEC: &str = "info, iced=warn, wgpu_core=error, wgpu_hal=error";

const USAGE: &str = "\
Usage: image_preview [OPTIONS]

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    match Logger::try_with_env_or_str(LOG_SPEC) {
        Ok(logger) => {
            if let Err(err) = logger.start() {
                eprintln!("Failed to start logger: {err}");
            }
        }
        Err(err) => eprintln!("Invalid log specification: {err}"),
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("Ignoring --config-dir: {err}");
        None
    });

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    app::run(Flags { lang, config_dir })
}
