use crate::blueprint::ConversionBlueprint;
use crate::cohesion::CohesionSurvey;
use crate::core::errors::Error;
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::plan::ConversionPlan;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_plan(&mut self, plan: &ConversionPlan) -> anyhow::Result<()>;
    fn write_survey(&mut self, survey: &CohesionSurvey) -> anyhow::Result<()>;
    fn write_blueprint(&mut self, blueprint: &ConversionBlueprint) -> anyhow::Result<()>;
}

impl std::fmt::Debug for dyn OutputWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("OutputWriter")
    }
}

/// Writer for the chosen format and destination.
///
/// Json and markdown go to stdout or, with `output`, to a file. Terminal
/// output is stdout-only; pairing it with a file path is a configuration
/// error rather than a silently ignored flag.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match (format, output) {
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(std::io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(File::create(path)?)))
        }
        (OutputFormat::Terminal, None) => Ok(Box::new(TerminalWriter::new())),
        (OutputFormat::Terminal, Some(_)) => Err(Error::Configuration(
            "terminal format writes to stdout; use --format json or markdown with --output"
                .to_string(),
        )
        .into()),
    }
}
