use crate::blueprint::ConversionBlueprint;
use crate::cohesion::CohesionSurvey;
use crate::io::output::OutputWriter;
use crate::plan::ConversionPlan;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_plan(&mut self, plan: &ConversionPlan) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(plan)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_survey(&mut self, survey: &CohesionSurvey) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(survey)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_blueprint(&mut self, blueprint: &ConversionBlueprint) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(blueprint)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModmapConfig;
    use crate::core::ModuleRecord;
    use crate::inventory::InventorySnapshot;
    use crate::plan::build_plan;

    #[test]
    fn plan_serializes_with_camel_case_keys() {
        let snapshot = InventorySnapshot::from_records(
            vec![ModuleRecord {
                id: "codex.ai-analysis".to_string(),
                name: "AI Analysis".to_string(),
                version: "1.0.0".to_string(),
                features: vec!["AI".to_string()],
                is_hot_reloadable: true,
                is_stable: false,
            }],
            Vec::new(),
        );
        let plan = build_plan(&snapshot, &ModmapConfig::default());

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_plan(&plan).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"generatedAt\""));
        assert!(text.contains("\"totalCandidates\""));
        assert!(text.contains("\"isHotReloadable\""));
        assert!(text.contains("\"hot-reload-ready\""));
    }
}
