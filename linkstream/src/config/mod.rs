//! Construction parameters that can be read from configuration files.
//!
//! ```
//! use linkstream::{config::GraphConfig, prelude::*};
//!
//! let config: GraphConfig = serde_json::from_str(r#"{"num_vertex": 4, "window": [0, 100]}"#).unwrap();
//! let ls = LinkStream::from_config(&config);
//! assert_eq!(ls.num_vertices(), 4);
//! assert_eq!(ls.definition_length(), 100);
//! ```

use crate::core::Interval;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Unlabelled vertices created up front.
    pub num_vertex: usize,
    /// Definition window of temporal graphs, `[0, MAX_TIME)` by default.
    pub window: Interval,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            num_vertex: 0,
            window: Interval::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Only the first byte is used.
    pub delimiter: String,
    /// Lines starting with this prefix are skipped.
    pub comment_prefix: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            comment_prefix: "#".to_string(),
        }
    }
}
