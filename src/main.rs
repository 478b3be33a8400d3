mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod resolution;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use adapters::outbound::metadata::LocalMetadataSource;
use adapters::outbound::network::RegistryDependencySource;
use adapters::outbound::render::GraphvizExporter;
use application::dto::GraphRequest;
use application::use_cases::BuildGraphUseCase;
use cli::{Args, OutputFormat, SourceKind};
use config::Settings;
use ports::outbound::{DependencySource, OutputPresenter};
use shared::error::{ExitCode, GraphError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments and merge with the config file
    let args = Args::parse_args();
    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = Settings::merge(args, config)?;

    // Create the configured dependency source (Dependency Injection)
    match settings.source {
        SourceKind::Local => {
            let site_packages = resolve_site_packages(&settings)?;
            let source = LocalMetadataSource::new(&site_packages)?;
            eprintln!(
                "📖 Scanning {} ({} installed package(s))",
                site_packages.display(),
                source.package_count()
            );
            run_with_source(source, &settings).await
        }
        SourceKind::Registry => {
            let source = RegistryDependencySource::new(settings.repository.clone())?;
            eprintln!("🌐 Querying registry: {}", settings.repository);
            run_with_source(source, &settings).await
        }
    }
}

/// Explicit --site-packages wins; otherwise look for a project-local .venv
fn resolve_site_packages(settings: &Settings) -> Result<PathBuf> {
    if let Some(path) = &settings.site_packages {
        return Ok(path.clone());
    }

    LocalMetadataSource::discover(Path::new(".")).ok_or_else(|| {
        anyhow::Error::from(GraphError::SitePackagesNotFound {
            path: PathBuf::from(".venv"),
            suggestion: "No .venv found in the current directory. Pass --site-packages pointing at a Python environment's site-packages directory.".to_string(),
        })
    })
}

async fn run_with_source<S: DependencySource>(source: S, settings: &Settings) -> Result<()> {
    // Create use case with injected dependencies
    let progress_reporter = StderrProgressReporter::new();
    let use_case = BuildGraphUseCase::new(source, progress_reporter);

    let request = GraphRequest::new(settings.package.clone(), settings.max_depth);
    let response = use_case.execute(request).await?;

    // Render in the requested format
    eprintln!("{}", settings.format.progress_message());
    let renderer = settings.format.create_renderer();
    let rendered = renderer.render(&response.graph, &response.metadata)?;

    match settings.format {
        OutputFormat::Png => {
            let output = settings.output.as_ref().ok_or(GraphError::MissingOutputPath {
                format: "png".to_string(),
            })?;
            let exporter = GraphvizExporter::new(&settings.dot_binary);
            exporter.export_png(&rendered, output)?;
        }
        OutputFormat::Dot | OutputFormat::Mermaid => {
            let presenter: Box<dyn OutputPresenter> = match &settings.output {
                Some(path) => Box::new(FileSystemWriter::new(path.clone())),
                None => Box::new(StdoutPresenter::new()),
            };
            presenter.present(&rendered)?;
        }
    }

    Ok(())
}
