//! Bundled sample records used to seed the stores.
//!
//! Relative ages ("2 hours ago") are resolved against `now` at seed time.

use chrono::{DateTime, Duration, Utc};
use docintel_core::analytics::{Insight, InsightKind};
use docintel_core::chat::{ChatMessage, ChatSession, PageReference, Sender};
use docintel_core::document::{Document, DocumentStatus};
use docintel_core::workflow::{Level, Workflow, WorkflowStatus, WorkflowTemplate};
use serde_json::json;

pub fn documents(now: DateTime<Utc>) -> Vec<Document> {
    let document = |id: &str, name: &str, doc_type: &str, size: &str, status, age| Document {
        id: id.to_string(),
        name: name.to_string(),
        doc_type: doc_type.to_string(),
        size: size.to_string(),
        status,
        uploaded_at: now - age,
        content: None,
        metadata: None,
    };

    vec![
        document(
            "1",
            "Q2 Financial Report.pdf",
            "PDF",
            "2.4 MB",
            DocumentStatus::Processed,
            Duration::hours(2),
        ),
        document(
            "2",
            "Employee Onboarding.docx",
            "DOCX",
            "1.8 MB",
            DocumentStatus::Processing,
            Duration::hours(3),
        ),
        document(
            "3",
            "Customer Feedback Analysis.xlsx",
            "XLSX",
            "4.2 MB",
            DocumentStatus::Processed,
            Duration::days(1),
        ),
        document(
            "4",
            "Legal Contract - Vendor A.pdf",
            "PDF",
            "3.1 MB",
            DocumentStatus::Processed,
            Duration::days(2),
        ),
        document(
            "5",
            "Marketing Campaign Results.pptx",
            "PPTX",
            "6.7 MB",
            DocumentStatus::Processed,
            Duration::days(3),
        ),
    ]
}

/// Builder input for one sample workflow; `ran` is how long ago it last ran.
struct WorkflowSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    department: &'static str,
    ran: Duration,
    documents: u32,
    automations: u32,
}

pub fn workflows(now: DateTime<Utc>) -> Vec<Workflow> {
    let seeds = [
        WorkflowSeed {
            id: "1",
            title: "Resume Processing",
            description: "Automatically extract candidate information from resumes",
            department: "HR",
            ran: Duration::minutes(10),
            documents: 42,
            automations: 3,
        },
        WorkflowSeed {
            id: "2",
            title: "Invoice Processing",
            description: "Extract and validate invoice data for accounts payable",
            department: "Finance",
            ran: Duration::hours(1),
            documents: 156,
            automations: 5,
        },
        WorkflowSeed {
            id: "3",
            title: "Contract Analysis",
            description: "Extract key terms and clauses from legal contracts",
            department: "Legal",
            ran: Duration::hours(3),
            documents: 78,
            automations: 4,
        },
        WorkflowSeed {
            id: "4",
            title: "Customer Feedback Analysis",
            description: "Analyze customer feedback for sentiment and key issues",
            department: "Operations",
            ran: Duration::days(1),
            documents: 215,
            automations: 6,
        },
        WorkflowSeed {
            id: "5",
            title: "Compliance Document Review",
            description: "Scan documents for compliance issues and flag for review",
            department: "Legal",
            ran: Duration::days(2),
            documents: 63,
            automations: 4,
        },
    ];

    seeds
        .into_iter()
        .map(|seed| Workflow {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            department: seed.department.to_string(),
            status: WorkflowStatus::Active,
            last_run: Some(now - seed.ran),
            documents: seed.documents,
            automations: seed.automations,
        })
        .collect()
}

pub fn workflow_templates() -> Vec<WorkflowTemplate> {
    let template = |id: &str, title: &str, description: &str, department: &str| WorkflowTemplate {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        department: department.to_string(),
        complexity: Level::Medium,
        popularity: Level::Medium,
    };

    vec![
        WorkflowTemplate {
            complexity: Level::Medium,
            popularity: Level::High,
            ..template(
                "1",
                "Employee Onboarding",
                "Process new employee documents and extract key information",
                "HR",
            )
        },
        WorkflowTemplate {
            complexity: Level::High,
            popularity: Level::Medium,
            ..template(
                "2",
                "Vendor Contract Review",
                "Analyze vendor contracts for key terms and obligations",
                "Legal",
            )
        },
        WorkflowTemplate {
            complexity: Level::Low,
            popularity: Level::High,
            ..template(
                "3",
                "Expense Report Processing",
                "Extract and categorize expenses from reports",
                "Finance",
            )
        },
    ]
}

pub fn chat_sessions(now: DateTime<Utc>) -> Vec<ChatSession> {
    let message = |id: &str, sender, content: &str, at, references: &[(u32, f64)]| ChatMessage {
        id: id.to_string(),
        content: content.to_string(),
        sender,
        timestamp: at,
        document_id: None,
        references: references
            .iter()
            .map(|&(page, confidence)| PageReference { page, confidence })
            .collect(),
    };

    let financial_at = now - Duration::hours(2);
    let onboarding_at = now - Duration::hours(3);

    vec![
        ChatSession {
            id: "1".to_string(),
            title: "Q2 Financial Report Analysis".to_string(),
            document_id: Some("1".to_string()),
            messages: vec![
                message(
                    "1",
                    Sender::Ai,
                    "I've analyzed the Q2 Financial Report. This document contains quarterly financial statements, revenue breakdowns by product line, expense analysis, and projections for Q3. What specific information would you like to know?",
                    financial_at,
                    &[],
                ),
                message(
                    "2",
                    Sender::User,
                    "What were the top performing product lines this quarter?",
                    financial_at,
                    &[],
                ),
                message(
                    "3",
                    Sender::Ai,
                    "According to the report, the top performing product lines in Q2 were:\n\n1. Enterprise Solutions: $4.2M revenue, 18% YoY growth\n2. Cloud Services: $3.8M revenue, 24% YoY growth\n3. Data Analytics: $2.5M revenue, 15% YoY growth\n\nEnterprise Solutions and Cloud Services exceeded quarterly targets by 12% and 15% respectively.",
                    financial_at,
                    &[(8, 0.92), (12, 0.87)],
                ),
            ],
            created_at: financial_at,
            updated_at: financial_at,
        },
        ChatSession {
            id: "2".to_string(),
            title: "Employee Onboarding Document Review".to_string(),
            document_id: Some("2".to_string()),
            messages: vec![
                message(
                    "1",
                    Sender::Ai,
                    "I've analyzed the Employee Onboarding document. This contains procedures for new hire orientation, required paperwork, IT setup, and department-specific training. How can I help you with this document?",
                    onboarding_at,
                    &[],
                ),
                message(
                    "2",
                    Sender::User,
                    "What are the required forms for new employees?",
                    onboarding_at,
                    &[],
                ),
                message(
                    "3",
                    Sender::Ai,
                    "The required forms for new employees include:\n\n1. W-4 Tax Withholding Form\n2. I-9 Employment Eligibility Verification\n3. Direct Deposit Authorization\n4. Employee Handbook Acknowledgement\n5. Emergency Contact Information\n6. Benefits Enrollment Forms (due within 30 days)\n7. Confidentiality and Non-Disclosure Agreement",
                    onboarding_at,
                    &[(3, 0.95), (4, 0.89)],
                ),
            ],
            created_at: onboarding_at,
            updated_at: onboarding_at,
        },
    ]
}

pub fn insights(now: DateTime<Utc>) -> Vec<Insight> {
    vec![
        Insight {
            id: "1".to_string(),
            title: "Revenue Trend Analysis".to_string(),
            description: "Analysis of revenue trends across product lines".to_string(),
            kind: InsightKind::Chart,
            category: "Finance".to_string(),
            created_at: now - Duration::days(2),
            data: json!({
                "chartType": "line",
                "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                "datasets": [
                    {
                        "label": "Enterprise Solutions",
                        "data": [4200, 4500, 4800, 5100, 5400, 5700],
                    },
                    {
                        "label": "Cloud Services",
                        "data": [3800, 4000, 4300, 4600, 4900, 5200],
                    },
                    {
                        "label": "Data Analytics",
                        "data": [2500, 2700, 2900, 3100, 3300, 3500],
                    },
                ],
            }),
        },
        Insight {
            id: "2".to_string(),
            title: "Customer Sentiment Analysis".to_string(),
            description: "Analysis of customer feedback sentiment over time".to_string(),
            kind: InsightKind::Report,
            category: "Customer Success".to_string(),
            created_at: now - Duration::days(3),
            data: json!({
                "summary": "Overall positive sentiment with 78% satisfaction rate",
                "keyFindings": [
                    "Product usability received highest scores",
                    "Support response time was the main area for improvement",
                    "Feature requests centered around integration capabilities",
                ],
                "sentimentBreakdown": { "positive": 78, "neutral": 15, "negative": 7 },
            }),
        },
        Insight {
            id: "3".to_string(),
            title: "HR Recruitment Efficiency".to_string(),
            description: "Analysis of recruitment process efficiency".to_string(),
            kind: InsightKind::Insight,
            category: "Human Resources".to_string(),
            created_at: now - Duration::weeks(1),
            data: json!({
                "averageTimeToHire": "32 days",
                "costPerHire": "$4,200",
                "topRecruitmentChannels": [
                    "Employee Referrals (42%)",
                    "LinkedIn (28%)",
                    "Job Boards (18%)",
                ],
                "recommendations": [
                    "Streamline technical interview process",
                    "Expand employee referral program",
                    "Improve candidate communication workflow",
                ],
            }),
        },
    ]
}
