use ezana_kiosk::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        content_path: args.opt_value_from_str("--content").unwrap_or(None),
    };

    app::run(flags)
}
