
mod adapter;
mod config;
mod cooccurrence;
mod embed;
mod error;
mod labels;
mod matrix;
mod pipeline;
mod rca;

pub use adapter::Adapter;
pub use config::{files_handling, Config, JsonTypes};
pub use cooccurrence::CoOccurrence;
pub use embed::{Embed, EmbedOptions, Network};
pub use error::{ConfigError, EmbedError};
pub use labels::{Label, LabelIndex};
pub use matrix::{Adjacency, MatrixBuilder, Triple};
pub use pipeline::Pipeline;
pub use rca::RcaFilter;
