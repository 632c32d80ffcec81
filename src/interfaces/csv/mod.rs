pub mod record_reader;
pub mod result_writer;
