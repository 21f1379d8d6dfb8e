mod compare_floats;
pub mod core;
pub mod errors;
pub mod input;
pub mod output;
pub mod savings;
pub mod wrappers;

pub use crate::errors::HescError;
pub use crate::input::Household;
pub use crate::output::Output;
pub use crate::savings::{calculate_savings, Savings};

use std::io::{Read, Write};

/// Reads a household from JSON, calculates its electrification savings and
/// writes the resulting report through the given output.
pub fn run_project(
    input: impl Read,
    output: impl Output,
    pretty: bool,
) -> Result<(), anyhow::Error> {
    let household = Household::from_json(input)?;
    let savings = calculate_savings(&household)?;

    if output.is_noop() {
        return Ok(());
    }

    let mut writer = output.writer_for_report_key("savings")?;
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &savings)?;
    } else {
        serde_json::to_writer(&mut writer, &savings)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::input::Region;
    use crate::output::SinkOutput;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{json, Value};
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct MemoryOutput {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    struct MemoryWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for MemoryWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Output for &MemoryOutput {
        fn writer_for_report_key(&self, _report_key: &str) -> anyhow::Result<impl Write> {
            Ok(MemoryWriter(self.buffer.clone()))
        }
    }

    fn household_json() -> String {
        serde_json::to_string(&Household::default_for(Region::NewSouthWales)).unwrap()
    }

    #[rstest]
    fn should_write_a_savings_report_for_a_household_read_from_json() {
        let output = MemoryOutput::default();

        run_project(Cursor::new(household_json()), &output, false).unwrap();

        let written = output.buffer.lock().unwrap();
        let report: Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(report["opex"]["perYear"]["before"], json!(7097.76));
        assert_eq!(report["upfrontCost"]["battery"], json!(12100.0));
        assert_eq!(report["recommendation"]["action"], json!("SOLAR"));
    }

    #[rstest]
    fn should_indent_the_report_when_asked_for_pretty_output() {
        let output = MemoryOutput::default();

        run_project(Cursor::new(household_json()), &output, true).unwrap();

        let written = output.buffer.lock().unwrap();
        assert!(written.starts_with(b"{\n  \"emissions\""));
    }

    #[rstest]
    fn should_skip_writing_entirely_for_a_noop_output() {
        run_project(Cursor::new(household_json()), SinkOutput, false).unwrap();
    }

    #[rstest]
    fn should_surface_a_validation_failure_from_the_calculation() {
        let mut household = Household::default_for(Region::Victoria);
        household.solar.install_solar = Some(false);
        let json = serde_json::to_string(&household).unwrap();

        let result = run_project(Cursor::new(json), SinkOutput, false);

        assert!(matches!(
            result.unwrap_err().downcast_ref::<HescError>(),
            Some(HescError::InvalidHousehold(
                ValidationError::BatteryRequiresSolar
            ))
        ));
    }

    #[rstest]
    fn should_reject_input_that_is_not_a_household() {
        let result = run_project(Cursor::new("{\"location\":"), SinkOutput, false);

        assert!(result.is_err());
    }
}
