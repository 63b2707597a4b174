pub mod formatter;

pub use formatter::{HelperOutput, OutputFormatter};
