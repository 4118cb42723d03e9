use super::{Output, ago, short_id};
use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use docintel_application::AppServices;
use docintel_core::analytics::Insight;

#[derive(Subcommand, Debug)]
pub enum InsightAction {
    /// List every insight
    List,
    /// Find insights by title, description or category
    Search { query: String },
    /// Generate an insight (chart, report or insight) from documents
    Generate {
        kind: String,
        /// Source document ID (repeatable)
        #[arg(long = "document", required = true)]
        documents: Vec<String>,
    },
}

pub async fn handle(app: &AppServices, action: InsightAction, output: &Output) -> Result<()> {
    match action {
        InsightAction::List => {
            let insights = app.insights.list_insights().await?;
            output.emit(&insights, |insights| print_insights(insights))
        }
        InsightAction::Search { query } => {
            let insights = app.insights.search_insights(&query).await?;
            output.emit(&insights, |insights| print_insights(insights))
        }
        InsightAction::Generate { kind, documents } => {
            let insight = app.insights.generate_insight(&documents, &kind).await?;
            output.emit(&insight, |insight| {
                println!("{}", format!("Generated \"{}\"", insight.title).green());
                println!("  id: {}", insight.id);
                if let Some(summary) = insight.data.get("summary").and_then(|s| s.as_str()) {
                    println!("  {}", summary);
                }
            })
        }
    }
}

fn print_insights(insights: &[Insight]) {
    if insights.is_empty() {
        println!("{}", "No insights.".yellow());
        return;
    }

    for insight in insights {
        println!(
            "{:<8} {} [{} / {}] {}",
            short_id(&insight.id).cyan(),
            insight.title.bold(),
            insight.kind,
            insight.category,
            ago(insight.created_at).dimmed()
        );
        println!("         {}", insight.description);
    }
}
