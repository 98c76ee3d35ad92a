// SPDX-License-Identifier: MPL-2.0
use aviary::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        catalog_path: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    app::run(flags)
}
