// SPDX-License-Identifier: MPL-2.0
use iced_snap::app::{self, Flags};
use std::path::PathBuf;

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        items: args.opt_value_from_str("--items")?,
        visible_count: args.opt_value_from_str("--visible")?,
        touch_slop: args.opt_value_from_str("--touch-slop")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            log::error!("{err}");
            eprintln!(
                "usage: iced_snap [--items N] [--visible N] [--touch-slop PX] [--config-dir DIR]"
            );
            std::process::exit(2);
        }
    };

    app::run(flags)
}
