use super::{specs, ResponseWriter};
use crate::aa::{Argument, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the answers to the problems.
///
/// Acceptance statuses are written as `YES` or `NO`,
/// and extensions are written as comma-separated lists of labels enclosed by square brackets.
/// Each answer is followed by a newline and the writer is flushed.
///
/// # Example
///
/// ```
/// # use bruteaf::aa::{Argument, ArgumentSet};
/// # use bruteaf::io::{AspartixWriter, ResponseWriter};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let mut buffer = Vec::new();
/// let writer = AspartixWriter::default();
/// writer
///     .write_single_extension(&mut buffer, &arguments.iter().collect::<Vec<&Argument<&str>>>())
///     .unwrap();
/// writer.write_acceptance_status(&mut buffer, true).unwrap();
/// assert_eq!("[a,b]\nYES\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct AspartixWriter;

impl ResponseWriter for AspartixWriter {
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        specs::write_yes_no(writer, false, "while writing problem has no extension")
    }

    fn write_single_extension<T>(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()>
    where
        T: LabelType,
    {
        let context = "while writing an extension";
        let labels = extension
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>();
        writeln!(writer, "[{}]", labels.join(",")).context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        specs::write_yes_no(writer, acceptance_status, "while writing an acceptance status")
    }
}
