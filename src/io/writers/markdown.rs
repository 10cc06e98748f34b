use crate::blueprint::{ConversionBlueprint, StepStatus};
use crate::cohesion::{CohesionReport, CohesionSurvey};
use crate::io::output::OutputWriter;
use crate::plan::ConversionPlan;
use crate::priority::consolidation::ConsolidationSuggestion;
use crate::priority::planner::ConversionPhase;
use im::Vector;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_plan(&mut self, plan: &ConversionPlan) -> anyhow::Result<()> {
        self.write_plan_header(plan)?;
        self.write_overview(plan)?;
        self.write_phases(&plan.phases)?;
        self.write_candidates(plan)?;
        self.write_consolidation(&plan.consolidation)?;
        self.write_recommendations(&plan.recommendations)?;
        Ok(())
    }

    fn write_survey(&mut self, survey: &CohesionSurvey) -> anyhow::Result<()> {
        writeln!(self.writer, "# Route Analysis Report")?;
        writeln!(self.writer)?;
        self.write_moves(survey)?;
        self.write_misnamed(survey)?;
        self.write_cohesion(&survey.reports)?;
        self.write_survey_summary(survey)?;
        Ok(())
    }

    fn write_blueprint(&mut self, blueprint: &ConversionBlueprint) -> anyhow::Result<()> {
        self.write_blueprint_header(blueprint)?;
        self.write_steps(blueprint)?;
        self.write_routes(blueprint)?;
        self.write_criteria(blueprint)?;
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_plan_header(&mut self, plan: &ConversionPlan) -> anyhow::Result<()> {
        writeln!(self.writer, "# Spec-Driven Module Conversion Plan")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            plan.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_overview(&mut self, plan: &ConversionPlan) -> anyhow::Result<()> {
        writeln!(self.writer, "## System Overview")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        let overview = &plan.overview;
        writeln!(self.writer, "| Total Modules | {} |", overview.total_modules)?;
        writeln!(self.writer, "| Total Routes | {} |", overview.total_routes)?;
        writeln!(
            self.writer,
            "| Total Features | {} |",
            overview.total_features
        )?;
        writeln!(
            self.writer,
            "| Hot-Reloadable Modules | {} |",
            overview.hot_reloadable_modules
        )?;
        writeln!(
            self.writer,
            "| Stable Modules | {} |",
            overview.stable_modules
        )?;
        writeln!(
            self.writer,
            "| Conversion Candidates | {} |",
            plan.total_candidates
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_phases(&mut self, phases: &Vector<ConversionPhase>) -> anyhow::Result<()> {
        if phases.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Conversion Phases")?;
        writeln!(self.writer)?;
        for phase in phases {
            writeln!(self.writer, "### Phase {}: {}", phase.index, phase.name)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", phase.description)?;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "Effort: {} | Timeline: {}",
                phase.effort, phase.timeline
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Module | Priority |")?;
            writeln!(self.writer, "|--------|----------|")?;
            for module in &phase.modules {
                writeln!(self.writer, "| {} | {} |", module.name, module.priority)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_candidates(&mut self, plan: &ConversionPlan) -> anyhow::Result<()> {
        if plan.candidates.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Conversion Candidates")?;
        writeln!(self.writer)?;
        if plan.candidates.len() < plan.total_candidates {
            writeln!(
                self.writer,
                "Showing top {} of {} candidates.",
                plan.candidates.len(),
                plan.total_candidates
            )?;
            writeln!(self.writer)?;
        }
        writeln!(
            self.writer,
            "| Module | Priority | Routes | Hot-Reload | Strategy | Reason |"
        )?;
        writeln!(
            self.writer,
            "|--------|----------|--------|------------|----------|--------|"
        )?;
        for candidate in &plan.candidates {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                candidate.name,
                candidate.priority,
                candidate.routes,
                yes_no(candidate.is_hot_reloadable),
                candidate.strategy,
                candidate.reason
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_consolidation(
        &mut self,
        suggestions: &[ConsolidationSuggestion],
    ) -> anyhow::Result<()> {
        if suggestions.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Consolidation Suggestions")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Module | Topic | Target |")?;
        writeln!(self.writer, "|--------|-------|--------|")?;
        for suggestion in suggestions {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                suggestion.module_id, suggestion.topic, suggestion.target_module
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, recommendations: &[String]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        for (i, recommendation) in recommendations.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, recommendation)?;
        }
        Ok(())
    }

    fn write_moves(&mut self, survey: &CohesionSurvey) -> anyhow::Result<()> {
        let moves: Vec<_> = survey.placements.iter().filter(|p| p.should_move).collect();
        if moves.is_empty() {
            return Ok(());
        }

        writeln!(
            self.writer,
            "## Routes That Should Be Moved ({})",
            moves.len()
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Route | Current Module | Suggested Module | Reason |"
        )?;
        writeln!(
            self.writer,
            "|-------|----------------|------------------|--------|"
        )?;
        for placement in moves {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                placement.path,
                placement.current_module,
                placement.suggested_module,
                placement.reason
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_misnamed(&mut self, survey: &CohesionSurvey) -> anyhow::Result<()> {
        let misnamed: Vec<_> = survey
            .placements
            .iter()
            .filter(|p| !p.route_appropriate)
            .collect();
        if misnamed.is_empty() {
            return Ok(());
        }

        writeln!(
            self.writer,
            "## Routes With Inappropriate Names ({})",
            misnamed.len()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Route | Name | Suggested Route |")?;
        writeln!(self.writer, "|-------|------|-----------------|")?;
        for placement in misnamed {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                placement.path, placement.name, placement.route_suggestion
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cohesion(&mut self, reports: &[CohesionReport]) -> anyhow::Result<()> {
        if reports.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Module Cohesion")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Module | Routes | Concerns | Score | Issues |"
        )?;
        writeln!(
            self.writer,
            "|--------|--------|----------|-------|--------|"
        )?;
        for report in reports {
            let concerns = if report.concerns.is_empty() {
                "None".to_string()
            } else {
                report
                    .concerns
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(
                self.writer,
                "| {} | {} | {} | {}/10 | {} |",
                report.module_id,
                report.route_count,
                concerns,
                report.cohesion_score,
                report.issues.join("; ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_survey_summary(&mut self, survey: &CohesionSurvey) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Total Routes | {} |",
            survey.summary.total_routes
        )?;
        writeln!(
            self.writer,
            "| Routes to Move | {} |",
            survey.summary.routes_to_move
        )?;
        writeln!(
            self.writer,
            "| Inappropriate Names | {} |",
            survey.summary.inappropriate_names
        )?;
        writeln!(
            self.writer,
            "| Total Issues | {} |",
            survey.summary.total_issues
        )?;
        Ok(())
    }

    fn write_blueprint_header(&mut self, blueprint: &ConversionBlueprint) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", blueprint.name)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", blueprint.description)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Field | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Blueprint | {} |", blueprint.id)?;
        writeln!(
            self.writer,
            "| Spec Reference | {} |",
            blueprint.spec_reference
        )?;
        writeln!(
            self.writer,
            "| Conversion Type | {} |",
            blueprint.conversion_type
        )?;
        writeln!(self.writer, "| Strategy | {} |", blueprint.strategy)?;
        writeln!(self.writer, "| Priority | {} |", blueprint.priority)?;
        writeln!(self.writer, "| Effort | {} |", blueprint.effort)?;
        writeln!(
            self.writer,
            "| Hot-Reload Ready | {} |",
            yes_no(blueprint.hot_reload_ready)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Reason: {}", blueprint.reason)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_steps(&mut self, blueprint: &ConversionBlueprint) -> anyhow::Result<()> {
        writeln!(self.writer, "## Conversion Steps")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Step | Status | Estimated Time |")?;
        writeln!(self.writer, "|---|------|--------|----------------|")?;
        for step in &blueprint.steps {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                step.step,
                step.name,
                step.status.as_str(),
                step.estimated_time
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_routes(&mut self, blueprint: &ConversionBlueprint) -> anyhow::Result<()> {
        if blueprint.routes.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Routes ({})", blueprint.routes.len())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Method | Path | Status |")?;
        writeln!(self.writer, "|--------|------|--------|")?;
        for route in &blueprint.routes {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                route.method,
                route.path,
                route.conversion_status.as_str()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_criteria(&mut self, blueprint: &ConversionBlueprint) -> anyhow::Result<()> {
        writeln!(self.writer, "## Validation Criteria")?;
        writeln!(self.writer)?;
        for criterion in &blueprint.validation_criteria {
            writeln!(self.writer, "- [ ] {criterion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModmapConfig;
    use crate::core::{ModuleRecord, RouteRecord};
    use crate::inventory::InventorySnapshot;
    use crate::plan::build_plan;

    fn snapshot() -> InventorySnapshot {
        let module = ModuleRecord {
            id: "codex.ai-analysis".to_string(),
            name: "AI Analysis".to_string(),
            version: "1.0.0".to_string(),
            features: vec!["AI".to_string()],
            is_hot_reloadable: true,
            is_stable: false,
        };
        let route = RouteRecord {
            id: "ai.analyze".to_string(),
            path: "/ai/analyze".to_string(),
            method: "POST".to_string(),
            module_id: "codex.ai-analysis".to_string(),
            name: "analyze".to_string(),
            description: String::new(),
        };
        InventorySnapshot::from_records(vec![module], vec![route])
    }

    #[test]
    fn plan_report_contains_expected_sections() {
        let plan = build_plan(&snapshot(), &ModmapConfig::default());
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_plan(&plan).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Spec-Driven Module Conversion Plan"));
        assert!(text.contains("## System Overview"));
        assert!(text.contains("### Phase 1: Quick Wins - Hot-Reload Ready"));
        assert!(text.contains("| AI Analysis | 25 |"));
        assert!(text.contains("## Recommendations"));
    }

    #[test]
    fn survey_report_skips_empty_sections() {
        let clean = InventorySnapshot::from_records(Vec::new(), Vec::new());
        let survey = crate::cohesion::survey(&clean, &Default::default());
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_survey(&survey)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(!text.contains("Routes That Should Be Moved"));
        assert!(!text.contains("Routes With Inappropriate Names"));
        assert!(text.contains("| Total Routes | 0 |"));
    }
}
