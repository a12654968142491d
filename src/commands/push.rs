use anyhow::Context;
use nf_core::notification::PushRequest;
use serde_json::Value;

use crate::bootstrap::ClientDeps;

pub async fn run(
    deps: &ClientDeps,
    token: String,
    title: String,
    body: String,
    data: Option<&str>,
) -> anyhow::Result<()> {
    let data = data
        .map(serde_json::from_str::<Value>)
        .transpose()
        .context("--data must be valid JSON")?;
    let request = PushRequest {
        token,
        title,
        body,
        data,
    };
    let response = deps
        .api
        .send_notification(&request)
        .await
        .context("Failed to send notification")?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
