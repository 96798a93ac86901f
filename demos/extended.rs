use std::collections::BTreeMap;
use std::io;

use json_log_line::{init_with_writer, Severity};

fn main() {
    // Write to stderr instead of stdout.
    let logger = init_with_writer("extended-demo", Severity::Debug, io::stderr).expect("init logging");

    let report = BTreeMap::from([
        ("rows".to_string(), "120".to_string()),
        ("elapsed_ms".to_string(), "35".to_string()),
    ]);
    let auth = BTreeMap::from([("user".to_string(), "alice".to_string())]);

    logger.log_extended(
        Severity::Error,
        "import failed",
        Some(&report),
        Some(&auth),
        "E1042",
        "ConstraintViolation",
        "importer::run at src/importer.rs:88",
    );

    // Absent maps are written as null; the error object is always present.
    logger.log_extended(Severity::Info, "import finished", None, None, "", "", "");
}
