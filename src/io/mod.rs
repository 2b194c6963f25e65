//! Objects used to read Argumentation frameworks and queries, and to write answers to problems.

mod aspartix_reader;
pub use aspartix_reader::AspartixReader;

mod aspartix_writer;
pub use aspartix_writer::AspartixWriter;

mod query_reader;
pub use query_reader::read_candidate_set;
pub use query_reader::read_query_argument;
pub use query_reader::read_single_argument;

mod specs;
pub use specs::InstanceReader;
pub use specs::ResponseWriter;
pub use specs::WarningHandler;

mod warning_result;
