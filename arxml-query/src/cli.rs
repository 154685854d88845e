//! CLI argument parsing using clap

use clap::Parser;

/// Evaluate XPath 3.1 expressions against an ARXML file
#[derive(Parser, Debug)]
#[command(name = "arxml-query")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Names of all application software components
    arxml-query EcuExtract.arxml "//*[local-name() = 'APPLICATION-SW-COMPONENT-TYPE']/*[local-name() = 'SHORT-NAME']/text()"

    # Several expressions at once; expressions without a result are left out
    arxml-query EcuExtract.arxml "count(//*[local-name() = 'IMPLEMENTATION-DATA-TYPE'])" "//*[local-name() = 'CATEGORY']"

LOGGING:
    Set RUST_LOG (e.g. RUST_LOG=debug) to see per-expression diagnostics.
"#)]
pub struct Args {
    /// ARXML (or any XML) file to query
    #[arg()]
    pub file: String,

    /// XPath 3.1 expressions, evaluated in order
    #[arg(required = true)]
    pub expressions: Vec<String>,
}
