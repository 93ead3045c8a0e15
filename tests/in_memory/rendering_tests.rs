//! In-memory integration tests for task list rendering.

use super::helpers::{Workflow, confirm, register, workflow};
use rstest::rstest;
use taskdesk::form::adapters::HtmlCardRenderer;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rendered_list_follows_registrations(workflow: Workflow) -> eyre::Result<()> {
    let Workflow { mut controller, .. } = workflow;
    let renderer = HtmlCardRenderer::new()?;

    let empty = renderer.render_list(controller.list())?;
    eyre::ensure!(empty.contains("0 Tasks"));
    eyre::ensure!(empty.contains("No tasks registered yet"));

    confirm(&mut controller, "123").await?;
    register(&mut controller, "Fix <b>bug</b>", "active", "Ship it").await?;

    let html = renderer.render_list(controller.list())?;
    eyre::ensure!(html.contains(r#"<span id="messageCount">1 Task</span>"#));
    eyre::ensure!(!html.contains("No tasks registered yet"));
    eyre::ensure!(html.contains("Fix &lt;b&gt;bug"), "title must be escaped");
    eyre::ensure!(!html.contains("<b>"));
    eyre::ensure!(html.contains("June 2026"));
    Ok(())
}
