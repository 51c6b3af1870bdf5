//! `shield analyze`

use anyhow::{Context, bail};
use shield_analysis::AnalyzerChain;
use shield_config::ShieldConfig;
use tokio::io::AsyncReadExt;

use crate::cli::AnalyzeArgs;

/// Run the analysis chain over a file or stdin and print the result as JSON.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is empty.
pub async fn handle(args: &AnalyzeArgs, config: &ShieldConfig) -> anyhow::Result<()> {
    let content = match &args.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read stdin")?;
            buf
        }
    };

    if content.trim().is_empty() {
        bail!("nothing to analyze: input is empty");
    }

    let chain = AnalyzerChain::from_config(config);
    let outcome = chain.analyze(&content, args.input_type).await;
    tracing::info!(provider = %outcome.provider, "analysis complete");

    println!("{}", serde_json::to_string_pretty(&outcome.result)?);
    Ok(())
}
