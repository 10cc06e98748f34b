use crate::blueprint::{ConversionBlueprint, StepStatus};
use crate::cohesion::{CohesionReport, CohesionSurvey, RoutePlacement};
use crate::io::output::OutputWriter;
use crate::plan::ConversionPlan;
use colored::*;

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_plan(&mut self, plan: &ConversionPlan) -> anyhow::Result<()> {
        print_plan_header(plan);
        print_overview(plan);
        print_phases(plan);
        print_candidates(plan);
        print_strategies(plan);
        print_recommendations(plan);
        print_plan_footer();
        Ok(())
    }

    fn write_survey(&mut self, survey: &CohesionSurvey) -> anyhow::Result<()> {
        print_survey_header();
        print_moves(survey);
        print_misnamed(survey);
        print_cohesion(&survey.reports);
        print_survey_summary(survey);
        Ok(())
    }

    fn write_blueprint(&mut self, blueprint: &ConversionBlueprint) -> anyhow::Result<()> {
        print_blueprint(blueprint);
        Ok(())
    }
}

fn priority_display(priority: u32) -> ColoredString {
    match priority {
        p if p >= 20 => p.to_string().green(),
        p if p >= 10 => p.to_string().yellow(),
        p => p.to_string().normal(),
    }
}

fn print_plan_header(plan: &ConversionPlan) {
    println!(
        "{}",
        "🚀 SPEC-DRIVEN MODULE CONVERSION PLAN".bold().cyan()
    );
    println!("{}", "=".repeat(50).cyan());
    println!(
        "Generated: {}",
        plan.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

fn print_overview(plan: &ConversionPlan) {
    let overview = &plan.overview;
    println!("{} {}", "📊".bold(), "SYSTEM OVERVIEW".bold());
    println!("Total Modules: {}", overview.total_modules);
    println!("Total Routes: {}", overview.total_routes);
    println!("Total Features: {}", overview.total_features);
    println!("Hot-Reloadable: {}", overview.hot_reloadable_modules);
    println!("Stable: {}", overview.stable_modules);
    println!();
}

fn print_phases(plan: &ConversionPlan) {
    println!("{} {}", "📋".bold(), "CONVERSION PHASES".bold());
    for phase in &plan.phases {
        println!();
        println!(
            "Phase {}: {}",
            phase.index,
            phase.name.yellow()
        );
        println!("Description: {}", phase.description);
        println!("Effort: {} | Timeline: {}", phase.effort, phase.timeline);
        println!("Modules:");
        for module in &phase.modules {
            println!(
                "  - {} (Priority: {})",
                module.name,
                priority_display(module.priority)
            );
        }
    }
}

fn print_candidates(plan: &ConversionPlan) {
    if plan.candidates.is_empty() {
        return;
    }

    println!();
    if plan.candidates.len() < plan.total_candidates {
        println!(
            "{} {} (showing {} of {})",
            "🔥".bold(),
            "TOP CONVERSION CANDIDATES".bold(),
            plan.candidates.len(),
            plan.total_candidates
        );
    } else {
        println!("{} {}", "🔥".bold(), "CONVERSION CANDIDATES".bold());
    }
    for candidate in &plan.candidates {
        println!(
            "  - {} (Priority: {}) [{}]",
            candidate.name,
            priority_display(candidate.priority),
            candidate.strategy
        );
        println!("    {}", candidate.reason.dimmed());
    }
}

fn print_strategies(plan: &ConversionPlan) {
    println!();
    println!("{} {}", "🎯".bold(), "CONVERSION STRATEGIES".bold());
    for (strategy, modules) in &plan.strategy_groups {
        println!();
        println!("{}:", strategy.as_str().to_uppercase().bold());
        for module in modules.iter().take(3) {
            println!(
                "  - {} (Priority: {})",
                module.name,
                priority_display(module.priority)
            );
        }
        if modules.len() > 3 {
            println!("  ... and {} more", modules.len() - 3);
        }
    }
}

fn print_recommendations(plan: &ConversionPlan) {
    println!();
    println!("{} {}", "💡".bold(), "RECOMMENDATIONS".bold());
    for (i, recommendation) in plan.recommendations.iter().enumerate() {
        println!("{}. {}", i + 1, recommendation);
    }
}

fn print_plan_footer() {
    println!();
    println!("{}", "=".repeat(50).cyan());
    println!("{}", "✨ Ready to begin spec-driven conversion!".green());
}

fn print_survey_header() {
    println!("{}", "=".repeat(80).cyan());
    println!("{}", "DETAILED ROUTE ANALYSIS REPORT".bold().cyan());
    println!("{}", "=".repeat(80).cyan());
}

fn print_moves(survey: &CohesionSurvey) {
    let moves: Vec<&RoutePlacement> =
        survey.placements.iter().filter(|p| p.should_move).collect();

    println!();
    println!(
        "{}",
        format!("ROUTES THAT SHOULD BE MOVED ({}):", moves.len()).bold()
    );
    println!("{}", "-".repeat(50));

    for placement in moves {
        println!("Route: {}", placement.path);
        println!("  Current Module: {}", placement.current_module);
        println!(
            "  Suggested Module: {}",
            placement.suggested_module.yellow()
        );
        println!("  Reason: {}", placement.reason);
        println!("  Issues: {}", placement.issues.join(", "));
        println!();
    }
}

fn print_misnamed(survey: &CohesionSurvey) {
    let misnamed: Vec<&RoutePlacement> = survey
        .placements
        .iter()
        .filter(|p| !p.route_appropriate)
        .collect();

    println!();
    println!(
        "{}",
        format!("ROUTES WITH INAPPROPRIATE NAMES ({}):", misnamed.len()).bold()
    );
    println!("{}", "-".repeat(50));

    for placement in misnamed {
        println!("Route: {}", placement.path);
        println!("  Current Name: {}", placement.name);
        println!("  Suggested Route: {}", placement.route_suggestion.yellow());
        println!("  Issues: {}", placement.issues.join(", "));
        println!();
    }
}

fn print_cohesion(reports: &[CohesionReport]) {
    println!();
    println!("{}", "MODULE COHESION ANALYSIS:".bold());
    println!("{}", "-".repeat(50));

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
        let score = match report.cohesion_score {
            s if s >= 8 => report.cohesion_score.to_string().green(),
            s if s >= 5 => report.cohesion_score.to_string().yellow(),
            _ => report.cohesion_score.to_string().red(),
        };

        println!();
        println!("Module: {}", report.module_id);
        println!("  Route Count: {}", report.route_count);
        println!("  Concerns: {concerns}");
        println!("  Cohesion Score: {score}/10");
        if !report.issues.is_empty() {
            println!("  Issues: {}", report.issues.join(", "));
        }
        if !report.suggested_consolidations.is_empty() {
            println!(
                "  Suggestions: {}",
                report.suggested_consolidations.join(", ")
            );
        }
    }
}

fn print_survey_summary(survey: &CohesionSurvey) {
    println!();
    println!("{}", "SUMMARY STATISTICS:".bold());
    println!("{}", "-".repeat(50));
    println!("Total Routes: {}", survey.summary.total_routes);
    println!("Routes to Move: {}", survey.summary.routes_to_move);
    println!(
        "Inappropriate Names: {}",
        survey.summary.inappropriate_names
    );
    println!("Total Issues: {}", survey.summary.total_issues);
}

fn print_blueprint(blueprint: &ConversionBlueprint) {
    println!(
        "{} {}",
        "🔧".bold(),
        format!("CONVERSION BLUEPRINT: {}", blueprint.name)
            .bold()
            .cyan()
    );
    println!("{}", "=".repeat(50).cyan());
    println!(
        "Module: {} (v{})",
        blueprint.module.id, blueprint.module.version
    );
    println!("Spec Reference: {}", blueprint.spec_reference);
    println!(
        "Strategy: {} | Priority: {} | Effort: {}",
        blueprint.strategy,
        priority_display(blueprint.priority),
        blueprint.effort
    );
    println!(
        "Hot-Reload Ready: {}",
        if blueprint.hot_reload_ready {
            "yes".green()
        } else {
            "no".yellow()
        }
    );
    println!("Reason: {}", blueprint.reason);

    println!();
    println!("{}", "Steps:".bold());
    for step in &blueprint.steps {
        let marker = match step.status {
            StepStatus::Completed => "[x]".green(),
            StepStatus::Pending => "[ ]".normal(),
        };
        println!(
            "  {}. {} {} ({})",
            step.step, marker, step.name, step.estimated_time
        );
    }

    if !blueprint.routes.is_empty() {
        println!();
        println!("{}", format!("Routes ({}):", blueprint.routes.len()).bold());
        for route in &blueprint.routes {
            println!(
                "  - {} {} ({})",
                route.method,
                route.path,
                route.conversion_status.as_str()
            );
        }
    }

    println!();
    println!("{}", "Validation Criteria:".bold());
    for criterion in &blueprint.validation_criteria {
        println!("  - {criterion}");
    }
}
