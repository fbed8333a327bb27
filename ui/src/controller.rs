//! Page controller: owns the selector and renderer, holds the loaded dataset, and
//! runs the resolve → project → render cycle.

use dioxus::logger::tracing::{debug, info, warn};
use serde::Serialize;

use crate::{
    charts::{
        project_bar_chart, project_bubble_chart, project_gauge_chart, project_table, BarSpec,
        BubbleSpec, GaugeSpec, TableSpec,
    },
    core::{
        average_wash_frequency, resolve_metadata, resolve_sample, DashboardError, Dataset,
        DatasetLoader, LoadError, SubjectId, SubjectSelector,
    },
    render::{ChartRenderer, Region},
};

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// Before the first successful load. Holds the failure if loading gave up.
    Loading { error: Option<LoadError> },
    Ready(ReadyState),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyState {
    pub dataset: Dataset,
    /// `None` when the dataset has no metadata to average; no gauge can be drawn.
    pub avg_washes: Option<f64>,
}

/// Everything projected for one subject in the last successful cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub subject: SubjectId,
    pub table: TableSpec,
    pub bar: BarSpec,
    pub bubble: BubbleSpec,
    pub gauge: GaugeSpec,
}

#[derive(Debug)]
pub struct PageController<R> {
    state: PageState,
    selector: SubjectSelector,
    renderer: R,
    view: Option<DashboardView>,
    last_error: Option<DashboardError>,
}

impl<R: ChartRenderer> PageController<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            state: PageState::Loading { error: None },
            selector: SubjectSelector::new(),
            renderer,
            view: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, PageState::Ready(_))
    }

    pub fn selector(&self) -> &SubjectSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut SubjectSelector {
        &mut self.selector
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    /// Error from the most recent load or render cycle, cleared by the next success.
    pub fn last_error(&self) -> Option<&DashboardError> {
        self.last_error.as_ref()
    }

    /// Fetch through `loader` and apply the outcome.
    pub async fn load(&mut self, loader: &impl DatasetLoader) -> Result<(), DashboardError> {
        let result = loader.load().await;
        self.finish_loading(result)
    }

    /// Apply a load outcome. Success moves to `Ready` and renders the first subject;
    /// failure stays in `Loading`.
    pub fn finish_loading(
        &mut self,
        result: Result<Dataset, LoadError>,
    ) -> Result<(), DashboardError> {
        self.finish_loading_with(result, None)
    }

    /// Like [`finish_loading`](Self::finish_loading), but renders `initial` instead of
    /// the first subject when it is one of the options. An unknown `initial` is
    /// reported after the first subject has been rendered.
    pub fn finish_loading_with(
        &mut self,
        result: Result<Dataset, LoadError>,
        initial: Option<&str>,
    ) -> Result<(), DashboardError> {
        let dataset = match result {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!(%err, "dataset load failed");
                self.state = PageState::Loading {
                    error: Some(err.clone()),
                };
                return self.record(Err(err.into()));
            }
        };

        self.selector.populate(&dataset.names);
        let deep_link = initial.map_or(Ok(()), |subject| self.selector.preselect(subject));
        let avg_washes = average_wash_frequency(&dataset).ok();
        self.state = PageState::Ready(ReadyState {
            dataset,
            avg_washes,
        });
        self.view = None;
        if let Some(avg) = avg_washes {
            info!(avg_washes = avg, "dashboard ready");
        }

        let outcome = self.refresh().and(deep_link);
        self.record(outcome)
    }

    /// Handle a selection change: validate it, then re-run the render cycle.
    pub fn select(&mut self, subject: &str) -> Result<(), DashboardError> {
        if !self.is_ready() {
            return self.record(Err(DashboardError::NotReady));
        }
        let outcome = self
            .selector
            .select(subject)
            .and_then(|()| self.refresh());
        self.record(outcome)
    }

    /// Resolve, project, and draw the current selection. Every check runs before
    /// anything is drawn, so a failed cycle leaves the previous visuals up.
    fn refresh(&mut self) -> Result<(), DashboardError> {
        let PageState::Ready(ready) = &self.state else {
            return Err(DashboardError::NotReady);
        };
        let avg_washes = ready.avg_washes.ok_or(DashboardError::EmptyDataset)?;
        let subject = self.selector.selected().ok_or(DashboardError::NoSubjects)?;

        let metadata = resolve_metadata(&ready.dataset, subject)?;
        let sample = resolve_sample(&ready.dataset, subject)?;

        let view = DashboardView {
            subject: subject.to_string(),
            table: project_table(metadata),
            bar: project_bar_chart(sample),
            bubble: project_bubble_chart(sample),
            gauge: project_gauge_chart(metadata, avg_washes),
        };

        self.renderer.draw(Region::Bar, &view.bar.figure());
        self.renderer.draw(Region::Bubble, &view.bubble.figure());
        self.renderer.draw(Region::Gauge, &view.gauge.figure());

        debug!(subject = %view.subject, otus = view.bubble.x.len(), "render cycle complete");
        self.view = Some(view);
        Ok(())
    }

    fn record(&mut self, outcome: Result<(), DashboardError>) -> Result<(), DashboardError> {
        match &outcome {
            Ok(()) => self.last_error = None,
            Err(err) => {
                warn!(%err, "render cycle aborted");
                self.last_error = Some(err.clone());
            }
        }
        outcome
    }
}
