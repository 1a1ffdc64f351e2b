pub mod assemble;
pub mod enrich;
pub mod orchestrator;
pub mod sink;
pub mod source;

pub use assemble::SchemaAssembler;
pub use orchestrator::{BuildReport, DatasetPipeline};
pub use sink::CsvSink;
pub use source::SourceLoader;
