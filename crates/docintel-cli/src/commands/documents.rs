use super::{Output, ago, short_id};
use anyhow::{Result, bail};
use clap::Subcommand;
use colored::Colorize;
use docintel_application::AppServices;
use docintel_core::config::LatencySettings;
use docintel_core::document::{Document, DocumentStatus, UploadFile, UploadOptions};
use std::time::Duration;

#[derive(Subcommand, Debug)]
pub enum DocumentAction {
    /// List every document
    List,
    /// Find documents whose name contains QUERY
    Search { query: String },
    /// Upload a file (only its name and size are used)
    Upload {
        name: String,
        /// File size in bytes
        #[arg(long)]
        size: u64,
        /// Processing option to enable, e.g. extract_text (repeatable)
        #[arg(long = "flag")]
        flags: Vec<String>,
        /// Wait for processing to finish before printing
        #[arg(long)]
        wait: bool,
    },
    /// Delete a document
    Delete { id: String },
}

pub async fn handle(
    app: &AppServices,
    action: DocumentAction,
    latency: &LatencySettings,
    output: &Output,
) -> Result<()> {
    match action {
        DocumentAction::List => {
            let documents = app.documents.list_documents().await?;
            output.emit(&documents, |documents| print_documents(documents))
        }
        DocumentAction::Search { query } => {
            let documents = app.documents.search_documents(&query).await?;
            output.emit(&documents, |documents| {
                if documents.is_empty() {
                    println!("{}", format!("No documents match \"{}\".", query).yellow());
                } else {
                    print_documents(documents);
                }
            })
        }
        DocumentAction::Upload {
            name,
            size,
            flags,
            wait,
        } => {
            let options = upload_options(&flags);
            let mut document = app
                .documents
                .upload_document(UploadFile::new(name, size), options)
                .await?;

            if wait {
                // Processing finishes on a background task; give it a moment past its deadline.
                tokio::time::sleep(latency.processing() + Duration::from_millis(50)).await;
                if let Some(latest) = app.documents.get_document(&document.id).await? {
                    document = latest;
                }
            }

            output.emit(&document, |doc| {
                println!(
                    "{}",
                    format!("Uploaded {} ({}, {})", doc.name, doc.doc_type, doc.size).green()
                );
                println!("  id:     {}", doc.id);
                println!("  status: {}", status_label(doc.status));
            })
        }
        DocumentAction::Delete { id } => {
            if app.documents.get_document(&id).await?.is_none() {
                bail!("Document '{}' not found", id);
            }
            app.documents.delete_document(&id).await?;
            println!("{}", format!("Deleted document {}", id).green());
            Ok(())
        }
    }
}

/// Maps `--flag` values onto the named options; unknown names are kept as extras.
fn upload_options(flags: &[String]) -> UploadOptions {
    let mut options = UploadOptions::default();
    for flag in flags {
        let flag = flag.trim().replace('-', "_").to_lowercase();
        match flag.as_str() {
            "extract_text" => options.extract_text = true,
            "auto_classify" => options.auto_classify = true,
            "extract_entities" => options.extract_entities = true,
            "summarize" => options.summarize = true,
            "" => {}
            other => {
                options.extra.insert(other.to_string(), true);
            }
        }
    }
    options
}

fn status_label(status: DocumentStatus) -> colored::ColoredString {
    match status {
        DocumentStatus::Processed => status.to_string().green(),
        DocumentStatus::Processing => status.to_string().yellow(),
        DocumentStatus::Failed => status.to_string().red(),
    }
}

fn print_documents(documents: &[Document]) {
    if documents.is_empty() {
        println!("{}", "No documents.".yellow());
        return;
    }

    println!(
        "{:<8}  {:<36}  {:<7}  {:<8}  {:<10}  {}",
        "ID".bold(),
        "Name".bold(),
        "Type".bold(),
        "Size".bold(),
        "Status".bold(),
        "Uploaded".bold()
    );
    for doc in documents {
        println!(
            "{:<8}  {:<36}  {:<7}  {:<8}  {:<10}  {}",
            short_id(&doc.id).cyan(),
            doc.name,
            doc.doc_type,
            doc.size,
            status_label(doc.status),
            ago(doc.uploaded_at)
        );
    }
}
