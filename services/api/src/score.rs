use crate::infra::InMemoryReceiptRepository;
use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{ReceiptService, ReceiptSubmission};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Receipt JSON document to score ('-' reads standard input)
    pub(crate) receipt: PathBuf,
    /// Print the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

/// Score a receipt document without starting the server or persisting
/// anything.
pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = if args.receipt.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&args.receipt)?
    };

    let submission: ReceiptSubmission = serde_json::from_str(&raw)?;

    let service = ReceiptService::new(Arc::new(InMemoryReceiptRepository::default()));
    let preview = service.preview(submission)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    println!("Receipt score");
    for component in &preview.components {
        println!("  {:<18} {:>6}", component.rule, component.points);
    }
    println!("  {:<18} {:>6}", "total", preview.total);

    Ok(())
}
