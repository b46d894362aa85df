use serde::Serialize;

use nvc_core::responses::CellOutcome;

use crate::cli::OutputFormat;

/// Render a serializable response for the machine-readable formats.
///
/// `Text` has no generic rendering; callers print their own text and only
/// reach this through [`output`], where it falls back to pretty JSON.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text | OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a cell outcome and turn a failed one into a non-zero exit.
pub fn outcome(outcome: &CellOutcome, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if let Some(text) = &outcome.output {
                print!("{}", with_trailing_newline(text));
            } else if let Some(diagnostic) = &outcome.diagnostic {
                eprint!("{}", with_trailing_newline(diagnostic));
            }
        }
        OutputFormat::Json | OutputFormat::Raw => output(outcome, format)?,
    }

    if outcome.is_success() {
        Ok(())
    } else {
        anyhow::bail!("cell failed after stage {}", outcome.reached)
    }
}

fn with_trailing_newline(text: &str) -> String {
    if text.is_empty() || text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

#[cfg(test)]
mod tests {
    use nvc_core::enums::PipelineStage;
    use nvc_core::responses::CellOutcome;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{outcome, render, with_trailing_newline};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Listing {
        workspace: String,
        sources: Vec<String>,
    }

    fn listing() -> Listing {
        Listing {
            workspace: "/ws".to_string(),
            sources: vec!["/ws/a.cu".to_string()],
        }
    }

    #[test]
    fn raw_is_single_line_json() {
        let rendered = render(&listing(), OutputFormat::Raw).expect("render should work");
        assert_eq!(rendered, r#"{"workspace":"/ws","sources":["/ws/a.cu"]}"#);
    }

    #[test]
    fn json_is_pretty_printed() {
        let rendered = render(&listing(), OutputFormat::Json).expect("render should work");
        assert!(rendered.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["sources"][0], "/ws/a.cu");
    }

    #[test]
    fn failed_outcome_is_an_error() {
        let failed = CellOutcome::failed("error: X".to_string(), PipelineStage::SourceWritten);
        let err = outcome(&failed, OutputFormat::Raw).expect_err("failure should propagate");
        assert_eq!(err.to_string(), "cell failed after stage source_written");
    }

    #[test]
    fn trailing_newline_is_added_once() {
        assert_eq!(with_trailing_newline("hi"), "hi\n");
        assert_eq!(with_trailing_newline("hi\n"), "hi\n");
        assert_eq!(with_trailing_newline(""), "");
    }
}
