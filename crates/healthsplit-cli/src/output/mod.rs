pub mod console;
pub mod table_writer;
pub mod text;

pub use table_writer::{output_file_name, write_table, write_table_file};
pub use text::render_text;
