//! Tool façade offered to the agent loop.

mod container;
mod country;
mod host;
mod port;
mod tool;
mod types;

pub use container::{CONTAINER_CHECK, ContainerCheckTool};
pub use country::{COUNTRY_DATA, CountryDataTool};
pub use host::ToolHost;
pub use port::{PORT_EXTRACTOR, PortExtractorTool};
pub use tool::Tool;
pub use types::{ToolCall, ToolResult, ToolSpec};
