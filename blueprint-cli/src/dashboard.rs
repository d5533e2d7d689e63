//! Text dashboard
//!
//! Four panels: metrics with badges, radar axes with advice, the security
//! audit and the summary.

use blueprint_core::{AnalysisError, BlueprintReport, HealthProfile, SummaryStatus};
use std::fmt::{self, Write};

const RULE: &str = "===============================================";

pub fn render(report: &BlueprintReport, profile: &HealthProfile) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    if let Err(err) = write_dashboard(&mut out, report, profile) {
        tracing::warn!("Dashboard rendering stopped early: {}", err);
    }
    out
}

/// Stable message for `err`, plus the parser diagnostic and any text-rule
/// findings for a syntax error.
pub fn render_error(err: &AnalysisError) -> String {
    let mut out = String::new();
    if let Err(fmt_err) = write_error(&mut out, err) {
        tracing::warn!("Error rendering stopped early: {}", fmt_err);
    }
    out
}

fn write_dashboard(out: &mut impl Write, report: &BlueprintReport, profile: &HealthProfile) -> fmt::Result {
    let metrics = &report.metrics;

    writeln!(out, "CODE BLUEPRINT")?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nMetrics")?;
    writeln!(
        out,
        "  Maintainability Index   {:>8.2} / 100   [{}]",
        metrics.maintainability_index, profile.maintainability_badge
    )?;
    writeln!(
        out,
        "  Cyclomatic Complexity   {:>8}         [{}]",
        metrics.cyclomatic_complexity, profile.complexity_badge
    )?;
    writeln!(out, "  Halstead Volume         {:>8.2}", metrics.halstead_volume)?;
    writeln!(out, "  Halstead Effort         {:>8.2}", metrics.effort)?;
    writeln!(out, "  Lines of Code           {:>8}", metrics.lines_of_code)?;

    if !metrics.units.is_empty() {
        writeln!(out, "\nUnits")?;
        for unit in &metrics.units {
            writeln!(
                out,
                "  {:<32} line {:<4} CC {:<3} rank {}",
                unit.name, unit.line, unit.complexity, unit.rank
            )?;
        }
        if let Some(hottest) = metrics.hottest_unit() {
            writeln!(
                out,
                "  Hottest unit: {} (CC {}, rank {})",
                hottest.name, hottest.complexity, hottest.rank
            )?;
        }
    }

    writeln!(out, "\nHealth Radar")?;
    writeln!(out, "  Maintainability         {:>6.1}", profile.radar.maintainability)?;
    writeln!(out, "  Structural Simplicity   {:>6.1}", profile.radar.structural_simplicity)?;
    writeln!(out, "  Security                {:>6.1}", profile.radar.security)?;
    writeln!(out, "  Advice: {}", profile.advice.message())?;

    writeln!(out, "\nSecurity Audit")?;
    if report.is_clean() {
        writeln!(out, "  No security issues detected.")?;
    } else {
        for finding in &report.security_issues {
            writeln!(out, "  {finding}")?;
        }
    }

    writeln!(out, "\nSummary")?;
    writeln!(out, "  {}", report.ai_summary)?;
    match report.summary_status {
        SummaryStatus::Generated => {}
        SummaryStatus::TimedOut => writeln!(out, "  (summary engine timed out)")?,
        SummaryStatus::Unavailable => writeln!(out, "  (summary engine unavailable)")?,
    }
    Ok(())
}

fn write_error(out: &mut impl Write, err: &AnalysisError) -> fmt::Result {
    writeln!(out, "{}", err.user_message())?;
    match err {
        AnalysisError::SyntaxInvalid { diagnostic, text_findings } => {
            writeln!(out, "  {diagnostic}")?;
            for finding in text_findings {
                writeln!(out, "  {finding}")?;
            }
        }
        AnalysisError::EmptyInput => {}
        other => writeln!(out, "  {other}")?,
    }
    Ok(())
}
