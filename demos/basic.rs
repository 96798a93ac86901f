use tracing::info;

use json_log_line::{format_message, init, Severity};

fn main() {
    let logger = init("basic-demo", Severity::Info).expect("init logging");

    logger.info("service started");
    logger.debug("not printed: below the configured level");

    // Lines can also be formatted up front and handed to `tracing`.
    info!("{}", format_message(Severity::WARN, "disk usage at 91%"));

    // Keys of foreign JSON lines are normalized on the way out.
    info!("{}", r#"{"Source":"legacy","LogLevel":"INFO","Message":{"Message":"hi"}}"#);
}
