use crate::core::{Insights, Priority, Recommendation, RiskAssessment, RiskLevel};
use colored::*;
use im::Vector;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// One report per call site: assessment, insights, or recommendations.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Assessment(RiskAssessment),
    Insights(Insights),
    Recommendations(Vector<Recommendation>),
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Assessment(assessment) => self.write_assessment(assessment),
            Report::Insights(insights) => self.write_insights(insights),
            Report::Recommendations(recommendations) => {
                self.write_recommendations(recommendations)
            }
        }
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_assessment(&mut self, assessment: &RiskAssessment) -> anyhow::Result<()> {
        writeln!(self.writer, "# Risk Assessment Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            assessment.last_updated.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Overall risk: {:.0}/100 ({})**",
            assessment.overall_risk_score, assessment.risk_level
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Factor Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Factor | Impact | Health | Risk |")?;
        writeln!(self.writer, "|--------|--------|--------|------|")?;
        for factor in &assessment.factors {
            writeln!(
                self.writer,
                "| {} | {:?} | {:.1} | {:.1} |",
                factor.name, factor.impact_tier, factor.health_score, factor.risk_score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_insights(&mut self, insights: &Insights) -> anyhow::Result<()> {
        writeln!(self.writer, "# Business Insights Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Key Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Score |")?;
        writeln!(self.writer, "|--------|-------|")?;
        let km = &insights.key_metrics;
        writeln!(self.writer, "| Profitability | {:.1} |", km.profitability)?;
        writeln!(self.writer, "| Efficiency | {:.1} |", km.efficiency)?;
        writeln!(self.writer, "| Stability | {:.1} |", km.stability)?;
        writeln!(self.writer, "| Growth | {:.1} |", km.growth)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Risk Factors")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Risk | Trend | Notes |")?;
        writeln!(self.writer, "|----------|------|-------|-------|")?;
        let rf = &insights.risk_factors;
        for (category, factor) in [
            ("Financial", &rf.financial),
            ("Operational", &rf.operational),
            ("Market", &rf.market),
        ] {
            writeln!(
                self.writer,
                "| {} | {:.1} | {:?} | {} |",
                category, factor.score, factor.trend, factor.description
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Outlook")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Overall risk score: {:.0}",
            insights.trends.risk_score
        )?;
        writeln!(self.writer, "- {}", insights.trends.improvement)?;
        writeln!(self.writer, "- {}", insights.trends.forecast)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(
        &mut self,
        recommendations: &Vector<Recommendation>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "# Recommendations")?;
        writeln!(self.writer)?;
        if recommendations.is_empty() {
            writeln!(self.writer, "No recommendations for this snapshot.")?;
            return Ok(());
        }
        for (i, rec) in recommendations.iter().enumerate() {
            writeln!(self.writer, "## {}. {}", i + 1, rec.title)?;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "*{} | priority {} | impact {} | {}*",
                rec.category.as_str(),
                rec.priority.as_str(),
                rec.impact.as_str(),
                rec.timeframe
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", rec.description)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "**Action**: {}", rec.action)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct TerminalWriter;

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Assessment(assessment) => print_assessment(assessment),
            Report::Insights(insights) => print_insights(insights),
            Report::Recommendations(recommendations) => print_recommendations(recommendations),
        }
        Ok(())
    }
}

fn print_assessment(assessment: &RiskAssessment) {
    println!("{}", "Risk Assessment".bold().blue());
    println!("{}", "===============".blue());
    println!();
    println!(
        "Overall risk: {} ({})",
        colorize_risk(assessment.overall_risk_score),
        assessment.risk_level
    );
    println!();
    println!("Factor breakdown:");
    for factor in &assessment.factors {
        println!(
            "  {:<20} [{:?}] health {:>5.1}, risk {}",
            factor.name.as_str(),
            factor.impact_tier,
            factor.health_score,
            colorize_risk(factor.risk_score)
        );
    }
    println!();
}

fn print_insights(insights: &Insights) {
    println!("{}", "Business Insights".bold().blue());
    println!("{}", "=================".blue());
    println!();
    let km = &insights.key_metrics;
    println!("Key metrics:");
    println!("  Profitability: {:.1}", km.profitability);
    println!("  Efficiency:    {:.1}", km.efficiency);
    println!("  Stability:     {:.1}", km.stability);
    println!("  Growth:        {:.1}", km.growth);
    println!();
    let rf = &insights.risk_factors;
    println!("Risk factors:");
    for (category, factor) in [
        ("Financial", &rf.financial),
        ("Operational", &rf.operational),
        ("Market", &rf.market),
    ] {
        println!(
            "  {:<12} risk {} ({:?}) - {}",
            category,
            colorize_risk(factor.score),
            factor.trend,
            factor.description
        );
    }
    println!();
    println!("{} {}", "Outlook:".bold(), insights.trends.forecast);
    println!("  {}", insights.trends.improvement);
    println!();
}

fn print_recommendations(recommendations: &Vector<Recommendation>) {
    println!("{}", "Recommendations".bold().blue());
    println!("{}", "===============".blue());
    println!();
    if recommendations.is_empty() {
        println!("{}", "No recommendations for this snapshot.".green());
        return;
    }
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} [{}]",
            i + 1,
            rec.title.bold(),
            colorize_priority(rec.priority)
        );
        println!("   {} | impact {} | {}", rec.category.as_str(), rec.impact.as_str(), rec.timeframe);
        println!("   {}", rec.description);
        println!("   Action: {}", rec.action);
        println!();
    }
}

fn colorize_risk(score: f64) -> ColoredString {
    let text = format!("{score:.1}");
    match RiskLevel::from_score(score) {
        RiskLevel::Low => text.green(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::High => text.red(),
    }
}

fn colorize_priority(priority: Priority) -> ColoredString {
    match priority {
        Priority::Low => priority.as_str().green(),
        Priority::Medium => priority.as_str().yellow(),
        Priority::High => priority.as_str().red(),
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

/// Writer for `--output <path>`. The terminal format is stdout-only.
pub fn create_file_writer(format: OutputFormat, path: &Path) -> anyhow::Result<Box<dyn OutputWriter>> {
    let file = std::fs::File::create(path)?;
    match format {
        OutputFormat::Json => Ok(Box::new(JsonWriter::new(file))),
        OutputFormat::Markdown => Ok(Box::new(MarkdownWriter::new(file))),
        OutputFormat::Terminal => {
            anyhow::bail!("terminal format writes to stdout; use json or markdown with --output")
        }
    }
}
