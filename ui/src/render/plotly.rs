use dioxus::{
    document,
    logger::tracing::{trace, warn},
};

use super::{ChartRenderer, Region};
use crate::charts::Figure;

/// Draws through Plotly.js in the page, via Dioxus `document::eval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyRenderer;

impl ChartRenderer for PlotlyRenderer {
    fn draw(&mut self, region: Region, figure: &Figure) {
        match plotly_script(region, figure) {
            Ok(script) => {
                trace!(region = region.element_id(), "queueing Plotly draw");
                let _ = document::eval(&script);
            }
            Err(err) => warn!(region = region.element_id(), %err, "couldn't encode figure"),
        }
    }
}

/// Page-wide draw queue, installed by the first draw. It holds only the latest figure
/// per element id, and a single poller draws them once Plotly (loaded by a `<script>`
/// tag) and the element both exist. It gives up after `MAX_TRIES` polls without
/// progress.
const DRAW_QUEUE_JS: &str = r#"
if (!window.__bbbQueueDraw) {
  const RETRY_MS = 50;
  const MAX_TRIES = 200;
  const pending = {};
  let timer = null;
  let tries = 0;
  const flush = () => {
    timer = null;
    for (const id of Object.keys(pending)) {
      const el = document.getElementById(id);
      if (window.Plotly && el) {
        const { data, layout } = pending[id];
        delete pending[id];
        Plotly.newPlot(el, data, layout);
      }
    }
    if (Object.keys(pending).length === 0) return;
    if (++tries > MAX_TRIES) {
      console.warn("Plotly unavailable, dropping charts:", Object.keys(pending));
      for (const id of Object.keys(pending)) delete pending[id];
      return;
    }
    timer = setTimeout(flush, RETRY_MS);
  };
  window.__bbbQueueDraw = (id, data, layout) => {
    pending[id] = { data, layout };
    tries = 0;
    if (timer === null) flush();
  };
}
"#;

/// JavaScript that queues `figure` for the region's element. Draws already waiting
/// for the same region are replaced, so the latest figure wins.
pub fn plotly_script(region: Region, figure: &Figure) -> Result<String, serde_json::Error> {
    let id = serde_json::to_string(region.element_id())?;
    let data = serde_json::to_string(&figure.data)?;
    let layout = serde_json::to_string(&figure.layout)?;
    Ok(format!(
        "{DRAW_QUEUE_JS}window.__bbbQueueDraw({id}, {data}, {layout});"
    ))
}
