use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use mise::{load_config, DirectoryCatalog, JsonFileSink, Pipeline, PipelineConfig};

use crate::cli::{InspectArgs, RunArgs, SelectionArgs};

fn pipeline_config(config_path: &Path, selection: &SelectionArgs) -> Result<PipelineConfig> {
    let config = load_config(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let mut pipeline_config = PipelineConfig::from_config(&config)?;
    if selection.event_file.is_some() {
        pipeline_config = pipeline_config.with_active_event_file_id(selection.event_file.clone());
    }
    if let Some(today) = &selection.today {
        pipeline_config = pipeline_config.with_today(today)?;
    }

    Ok(pipeline_config)
}

fn build_pipeline(config_path: &Path, selection: &SelectionArgs) -> Result<Pipeline> {
    let config = pipeline_config(config_path, selection)?;
    Ok(Pipeline::from_config(Arc::new(config)))
}

pub fn run(config_path: &Path, args: RunArgs) -> Result<()> {
    let mut config = pipeline_config(config_path, &args.selection)?;
    if let Some(output) = args.output {
        config = config.with_output_path(output);
    }
    let pipeline = Pipeline::from_config(Arc::new(config));

    let catalog = DirectoryCatalog::new(&pipeline.config().events_directory);
    let mut sink = JsonFileSink::new(&pipeline.config().output_path);

    let summary = pipeline.run(&catalog, &mut sink)?;
    info!("Report written to {}", sink.path().display());

    println!(
        "{} ({}): {} sources, {} items, {} rows -> {}",
        summary.file.file_name,
        summary.file.extracted_date.as_deref().unwrap_or("undated"),
        summary.sources,
        summary.groups,
        summary.rows,
        sink.path().display()
    );
    Ok(())
}

pub fn resolve(config_path: &Path, args: SelectionArgs) -> Result<()> {
    let pipeline = build_pipeline(config_path, &args)?;
    let catalog = DirectoryCatalog::new(&pipeline.config().events_directory);

    let file = pipeline.resolve(&catalog)?;
    println!("{}", serde_json::to_string_pretty(&file)?);
    Ok(())
}

pub fn inspect(config_path: &Path, args: InspectArgs) -> Result<()> {
    let pipeline = build_pipeline(config_path, &args.selection)?;
    let catalog = DirectoryCatalog::new(&pipeline.config().events_directory);

    let ctx = pipeline.prepare(&catalog)?;
    let found = ctx.report.find_groups(&args.fragment);

    if found.is_empty() {
        println!("No items matching '{}' in {}", args.fragment, ctx.file.file_name);
        return Ok(());
    }

    for group in found {
        println!(
            "{} [{}] total: {} {}",
            group.item_name, group.item_key, group.total_quantity, group.unit
        );
        for member in &group.members {
            println!(
                "    {} {} {} {}",
                member.source_id,
                member
                    .station_name
                    .as_deref()
                    .unwrap_or(member.station_id.as_str()),
                member.qty,
                member.unit
            );
        }
    }
    Ok(())
}
