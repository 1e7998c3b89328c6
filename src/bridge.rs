//! Script bridge to the rendered page.
//!
//! Geometry, window scrolling and intersection observation only exist in
//! the webview, so they go through `document::eval`. Results come back as
//! the core's serde types.

use anyhow::{anyhow, Result};
use contactpage_core::{
    IntersectionEntry, LayoutSnapshot, ObserverOptions, ScrollRequest, ViewportObserver,
};
use dioxus::document::{self, Eval};

/// Measure a section's document offset and the fixed header's height.
///
/// A missing section is simply absent from the snapshot; a missing header
/// measures 0.
pub async fn measure_layout(target_id: &str, header_selector: &str) -> Result<LayoutSnapshot> {
    let script = format!(
        r#"
        const target = document.getElementById({target});
        const header = document.querySelector({header});
        const sections = {{}};
        if (target) {{
            sections[target.id] = target.offsetTop;
        }}
        return {{ sections, header_height: header ? header.offsetHeight : 0 }};
        "#,
        target = serde_json::to_string(target_id)?,
        header = serde_json::to_string(header_selector)?,
    );

    document::eval(&script)
        .join::<LayoutSnapshot>()
        .await
        .map_err(|err| anyhow!("layout script failed: {err:?}"))
}

fn scroll_script(request: ScrollRequest) -> Result<String> {
    Ok(format!(
        "window.scrollTo({{ top: {}, behavior: {} }});\nreturn true;",
        request.top,
        serde_json::to_string(&request.behavior)?,
    ))
}

/// Scroll the window and wait for the page to run the call.
pub async fn scroll_window(request: ScrollRequest) -> Result<()> {
    document::eval(&scroll_script(request)?)
        .join::<bool>()
        .await
        .map_err(|err| anyhow!("scroll script failed: {err:?}"))?;
    Ok(())
}

/// [`ViewportObserver`] backed by a page-side `IntersectionObserver`.
///
/// Cards are collected while the interactions are initialized; the
/// platform observer is installed by [`ScriptObserver::start`] once the
/// cards are in the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptObserver {
    targets: Vec<String>,
    options: Option<ObserverOptions>,
}

impl ViewportObserver for ScriptObserver {
    fn observe(&mut self, target: &str, options: &ObserverOptions) {
        self.targets.push(target.to_string());
        self.options = Some(*options);
    }
}

impl ScriptObserver {
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    fn script(&self, options: &ObserverOptions) -> Result<String> {
        Ok(format!(
            r#"
            const targets = {targets};
            const observer = new IntersectionObserver((entries) => {{
                dioxus.send(entries.map((entry) => ({{
                    target: entry.target.id,
                    isIntersecting: entry.isIntersecting,
                    intersectionRatio: entry.intersectionRatio,
                }})));
            }}, {{ threshold: {threshold}, rootMargin: {root_margin} }});
            for (const id of targets) {{
                const card = document.getElementById(id);
                if (card) observer.observe(card);
            }}
            await new Promise(() => {{}});
            "#,
            targets = serde_json::to_string(&self.targets)?,
            threshold = options.threshold,
            root_margin = serde_json::to_string(&options.root_margin.to_string())?,
        ))
    }

    /// Install the page-side observer.
    ///
    /// Returns `None` when nothing was registered.
    pub fn start(&self) -> Result<Option<IntersectionFeed>> {
        let Some(options) = self.options else {
            return Ok(None);
        };
        let eval = document::eval(&self.script(&options)?);
        tracing::debug!(cards = self.targets.len(), "Intersection observer installed");
        Ok(Some(IntersectionFeed { eval }))
    }
}

/// Stream of observer callback batches.
pub struct IntersectionFeed {
    eval: Eval,
}

impl IntersectionFeed {
    /// Wait for the next callback batch.
    pub async fn next_batch(&mut self) -> Result<Vec<IntersectionEntry>> {
        self.eval
            .recv::<Vec<IntersectionEntry>>()
            .await
            .map_err(|err| anyhow!("intersection feed closed: {err:?}"))
    }
}
