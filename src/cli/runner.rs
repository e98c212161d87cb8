//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, Step};
use crate::error::{Error, Result};
use crate::history::TokenHistory;
use crate::params::ParameterNamespace;
use crate::session::{PageView, PagerSession};
use crate::settings::{load_settings, PagerSettings};
use crate::source::MemorySource;
use crate::tracker::{ContinuationPageTracker, Navigation};
use serde::Serialize;
use serde_json::json;

/// Summary of one walk step
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: Option<String>,
    pub page: u32,
    pub first_item: Option<String>,
    pub last_item: Option<String>,
    pub items: usize,
    pub navigation: Navigation,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub history_pages: Vec<u32>,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Walk {
                items,
                page_size,
                steps,
                max_history,
                prefix,
            } => {
                let mut settings = self.load_settings()?;
                if let Some(size) = page_size {
                    settings.page_size = *size;
                    settings.max_page_size = settings.max_page_size.max(*size);
                }
                if let Some(max) = max_history {
                    settings.max_history_entries = *max;
                }
                if let Some(prefix) = prefix {
                    settings.parameter_prefix = ParameterNamespace::new(Some(prefix));
                }
                settings.validate()?;

                let steps = Step::parse_list(steps)?;
                let reports = self.walk(*items, settings, &steps).await?;
                for report in &reports {
                    self.output_report(report);
                }
                Ok(())
            }
            Commands::Decode {
                history,
                max_history,
                page,
            } => self.decode(history, *max_history, *page),
            Commands::Settings => {
                let settings = self.load_settings()?;
                self.output_message(&serde_json::to_value(&settings)?);
                Ok(())
            }
        }
    }

    /// Load settings from the `-C` file, or defaults
    fn load_settings(&self) -> Result<PagerSettings> {
        match &self.cli.config {
            Some(path) => load_settings(path),
            None => Ok(PagerSettings::default()),
        }
    }

    /// Walk an in-memory source, following links like a browser would
    pub async fn walk(
        &self,
        items: usize,
        settings: PagerSettings,
        steps: &[Step],
    ) -> Result<Vec<StepReport>> {
        let source = MemorySource::new((1..=items).map(|i| format!("item-{i:04}")).collect());
        let session = PagerSession::new(&source, settings).with_base_url("/walk");

        let mut view = session.handle_query_str("").await?;
        let mut reports = vec![Self::report(None, &view, &session)];

        for step in steps {
            let link = match step {
                Step::Next => view.links.next.as_deref(),
                Step::Previous => view.links.previous.as_deref(),
                Step::First => view.links.first.as_deref(),
            }
            .ok_or_else(|| {
                Error::Other(format!(
                    "No '{step}' link from page {}",
                    view.current_page()
                ))
            })?;

            let query = link.split_once('?').map_or("", |(_, q)| q).to_string();
            view = session.handle_query_str(&query).await?;
            reports.push(Self::report(Some(*step), &view, &session));
        }

        Ok(reports)
    }

    fn report(
        step: Option<Step>,
        view: &PageView<String>,
        session: &PagerSession<'_, MemorySource<String>>,
    ) -> StepReport {
        let history_pages = view
            .token_history
            .as_deref()
            .map(|json| {
                TokenHistory::from_json_lossy(json, session.settings().max_history_entries)
                    .pages()
                    .collect()
            })
            .unwrap_or_default();

        StepReport {
            step: step.map(|s| s.to_string()),
            page: view.current_page(),
            first_item: view.items.first().cloned(),
            last_item: view.items.last().cloned(),
            items: view.items.len(),
            navigation: view.navigation,
            can_go_back: view.can_go_back,
            can_go_forward: view.can_go_forward,
            history_pages,
        }
    }

    /// Decode a history payload and report what it allows
    fn decode(&self, payload: &str, max_history: usize, page: Option<u32>) -> Result<()> {
        let valid = TokenHistory::from_json(payload, max_history).is_ok();
        let tracker = ContinuationPageTracker::from_history_json(payload, max_history);

        let mut msg = json!({
            "valid": valid,
            "entries": tracker.history().len(),
            "history": tracker.history(),
        });
        if let Some(page) = page {
            msg["page"] = json!(page);
            msg["previous_token"] = json!(tracker.previous_token(page));
            msg["can_go_back"] = json!(tracker.can_go_back(page));
        }
        self.output_message(&msg);
        Ok(())
    }

    fn output_report(&self, report: &StepReport) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(report).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                let step = report.step.as_deref().unwrap_or("start");
                println!(
                    "{step:>5} -> page {:>3}  [{} .. {}]  back={} forward={} history={:?}",
                    report.page,
                    report.first_item.as_deref().unwrap_or("-"),
                    report.last_item.as_deref().unwrap_or("-"),
                    report.can_go_back,
                    report.can_go_forward,
                    report.history_pages,
                );
            }
        }
    }

    fn output_message(&self, msg: &serde_json::Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
