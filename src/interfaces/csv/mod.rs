pub mod request_reader;
pub mod result_writer;

pub use request_reader::RequestReader;
pub use result_writer::ResultWriter;
