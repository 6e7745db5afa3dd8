//! Port name extraction from ISO port XML documents.
//!
//! Port elements are looked up under the document root by the first of
//! these tags that matches anything: `port`, `Port`, `PORT`, `portInfo`,
//! `PortInfo`. Each element's name comes from its `name` attribute, else
//! a `<name>` child, else a `<portName>` child.
//!
//! # Example
//!
//! ```
//! let xml = r#"<ports>
//!     <port name="Hamburg"><type>container</type></port>
//!     <port><portName>Harburg</portName><type>bulk</type></port>
//! </ports>"#;
//!
//! assert_eq!(manifest::extract_port_names(xml, None)?, ["Hamburg", "Harburg"]);
//! assert_eq!(manifest::extract_port_names(xml, Some("bulk"))?, ["Harburg"]);
//! # Ok::<(), manifest::Error>(())
//! ```

mod error;
mod extract;

pub use error::{Error, Result};
pub use extract::{PORT_TAGS, extract_port_names};
