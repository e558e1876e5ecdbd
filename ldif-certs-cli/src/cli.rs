use clap::{crate_description, crate_name, crate_version, App, Arg};

pub const ARG_INPUT: &str = "input";
pub const ARG_CONFIG: &str = "config";
pub const ARG_LOG_LEVEL: &str = "log-level";
pub const ARG_SKIP_INVALID: &str = "skip-invalid";
pub const ARG_SHOW_CONFIG: &str = "show-config";

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

pub fn app() -> App<'static, 'static> {
    App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name(ARG_INPUT)
                .short("i")
                .long(ARG_INPUT)
                .value_name("DUMP")
                .help("Path to the LDIF dump [default: sts-certificates.txt]")
                .takes_value(true)
                .display_order(0),
        )
        .arg(
            Arg::with_name(ARG_CONFIG)
                .short("c")
                .long(ARG_CONFIG)
                .value_name("FILE")
                .help("YAML configuration file [default: ldif_certs_conf.yaml, if present]")
                .takes_value(true)
                .display_order(1),
        )
        .arg(
            Arg::with_name(ARG_LOG_LEVEL)
                .short("l")
                .long(ARG_LOG_LEVEL)
                .value_name("LEVEL")
                .help("Verbosity of the logs written to stderr")
                .takes_value(true)
                .possible_values(LOG_LEVELS)
                .case_insensitive(true)
                .display_order(2),
        )
        .arg(
            Arg::with_name(ARG_SKIP_INVALID)
                .long(ARG_SKIP_INVALID)
                .help("Log and skip certificates that can't be decoded instead of stopping at the first one")
                .display_order(3),
        )
        .arg(
            Arg::with_name(ARG_SHOW_CONFIG)
                .long(ARG_SHOW_CONFIG)
                .help("Print the resolved configuration and exit")
                .display_order(4),
        )
}
