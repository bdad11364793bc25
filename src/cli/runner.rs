//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{
    load_properties, BASE_URL, CONNECTION_TIMEOUT_FIELD_NAME, ENCODING, READ_TIMEOUT_FIELD_NAME,
};
use crate::error::Result;
use crate::processor::{EntityContext, JsonApiEntityProcessor, RowProducible, URL};
use crate::source::JsonApiDataSource;
use crate::template::{TemplateContext, TokenResolver};
use crate::types::{QueryCounter, StringMap};
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

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
            Commands::Fetch { query, max_records } => self.fetch(query, *max_records).await,
            Commands::Resolve { query } => self.resolve(query),
        }
    }

    /// Properties file merged with command-line overrides
    fn properties(&self) -> Result<StringMap> {
        let mut props = match &self.cli.properties {
            Some(path) => load_properties(path)?,
            None => StringMap::new(),
        };

        let overrides = [
            (BASE_URL, &self.cli.base_url),
            (ENCODING, &self.cli.encoding),
            (CONNECTION_TIMEOUT_FIELD_NAME, &self.cli.connect_timeout),
            (READ_TIMEOUT_FIELD_NAME, &self.cli.read_timeout),
        ];
        for (name, value) in overrides {
            if let Some(value) = value {
                props.insert(name.to_string(), value.clone());
            }
        }

        Ok(props)
    }

    /// Token context built from `--var` flags
    fn template_context(&self) -> TemplateContext {
        let mut ctx = TemplateContext::new();
        for (name, value) in &self.cli.vars {
            ctx.set_var(name.clone(), value.clone());
        }
        ctx
    }

    fn data_source(&self, counter: QueryCounter) -> Result<JsonApiDataSource> {
        let props = self.properties()?;
        let ctx = self.template_context();
        JsonApiDataSource::from_properties(&props, &ctx, counter)
    }

    /// Fetch every page for a query and print the records
    async fn fetch(&self, query: &str, max_records: Option<usize>) -> Result<()> {
        let counter = QueryCounter::new();
        let source = self.data_source(counter.clone())?;
        let entity = EntityContext::with_resolver(StringMap::new(), Arc::new(self.template_context()))
            .attribute(URL, query);

        let start = Instant::now();
        let mut processor = JsonApiEntityProcessor::init(&entity, &source).await?;
        let elapsed = start.elapsed();

        let total = processor.remaining();
        let limit = max_records.unwrap_or(usize::MAX);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let mut printed = 0;
        while printed < limit {
            let Some(record) = processor.next_row() else {
                break;
            };
            let value = Value::Object(record);
            let line = match self.cli.format {
                OutputFormat::Json => serde_json::to_string(&value),
                OutputFormat::Pretty => serde_json::to_string_pretty(&value),
            }?;
            writeln!(out, "{line}")?;
            printed += 1;
        }

        info!(
            "Fetched {} records with {} queries in {:?}",
            total,
            counter.get(),
            elapsed
        );

        if self.cli.verbose {
            eprintln!(
                "{total} records, {} queries, {:.2}s",
                counter.get(),
                elapsed.as_secs_f64()
            );
        }

        Ok(())
    }

    /// Print the URL a query resolves to
    fn resolve(&self, query: &str) -> Result<()> {
        let source = self.data_source(QueryCounter::new())?;
        let query = self.template_context().replace_tokens(query);
        let url = source.resolve(&query)?;
        println!("{url}");
        Ok(())
    }
}
