//! componentgen CLI entrypoint
//! Parses command-line arguments and dispatches to the generation pipeline.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use componentgen::core::GeneratorConfig;
use componentgen::generation::{GenerationPipeline, GenerationPlan, Language};
use componentgen::infrastructure::descriptors::DescriptorBundle;
use componentgen::infrastructure::output::{FileSystemOutputService, OutputService};
use componentgen::infrastructure::rendering::TeraRenderer;
use componentgen::infrastructure::templates::{
    FileSystemTemplateStore, InMemoryTemplateStore, TemplateDir, TemplateStore,
};
use componentgen::infrastructure::{ComponentProjectGenerator, GeneratorRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "componentgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every subcommand
#[derive(clap::Args, Debug)]
pub struct SelectionArgs {
    /// Path to the YAML descriptor bundle
    #[arg(long)]
    descriptor: PathBuf,
    /// Target language (java, python)
    #[arg(long, required_unless_present = "generator")]
    language: Option<Language>,
    /// Explicit generator id, e.g. python/component/pull
    #[arg(long)]
    generator: Option<String>,
    /// Generator configuration file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Custom template directory
    #[arg(long)]
    template_dir: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the generation plan for a component as JSON
    Plan {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Plan the project packaging files instead of the component
        #[arg(long)]
        project: bool,
    },
    /// Render a component and its packaging files to disk
    Render {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Output directory for generated code
        #[arg(long)]
        output_dir: PathBuf,
        /// Skip the project packaging files
        #[arg(long)]
        no_project: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Plan { selection, project } => run_plan(selection, *project).await?,
        Commands::Render {
            selection,
            output_dir,
            no_project,
        } => run_render(selection, output_dir, *no_project).await?,
    }
    Ok(())
}

async fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::load(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

fn template_store(
    selection: &SelectionArgs,
    config: &GeneratorConfig,
) -> anyhow::Result<Arc<dyn TemplateStore>> {
    let custom_dir = selection
        .template_dir
        .as_deref()
        .or(config.template_dir.as_deref());
    let dir = TemplateDir::discover(custom_dir).context("Failed to locate template directory")?;
    info!("Using templates from {}", dir.root().display());
    Ok(Arc::new(FileSystemTemplateStore::new(dir.root())))
}

fn component_plan(
    pipeline: &GenerationPipeline,
    selection: &SelectionArgs,
    bundle: &DescriptorBundle,
) -> anyhow::Result<GenerationPlan> {
    let plan = match (&selection.generator, selection.language) {
        (Some(id), _) => pipeline.plan_with(id, &bundle.softpkg, &bundle.interfaces),
        (None, Some(language)) => {
            pipeline.plan_component(&bundle.softpkg, language, &bundle.interfaces)
        }
        (None, None) => anyhow::bail!("Either --language or --generator is required"),
    };
    plan.with_context(|| format!("Failed to plan component '{}'", bundle.softpkg.name))
}

async fn run_plan(selection: &SelectionArgs, project: bool) -> anyhow::Result<()> {
    let config = load_config(selection.config.as_deref()).await?;
    let bundle = DescriptorBundle::load(&selection.descriptor)
        .await
        .context("Failed to load descriptor")?;

    // Planning never reads template content
    let store = template_store(selection, &config).unwrap_or_else(|e| {
        warn!("{e:#}");
        Arc::new(InMemoryTemplateStore::new()) as Arc<dyn TemplateStore>
    });
    let pipeline = GenerationPipeline::new(
        Arc::new(GeneratorRegistry::with_defaults(&config)),
        Arc::new(ComponentProjectGenerator),
        store,
    );

    let plan = if project {
        pipeline.plan_project(&bundle.softpkg)
    } else {
        component_plan(&pipeline, selection, &bundle)?
    };
    println!("{}", serde_json::to_string_pretty(&plan.summary())?);
    Ok(())
}

async fn run_render(
    selection: &SelectionArgs,
    output_dir: &Path,
    no_project: bool,
) -> anyhow::Result<()> {
    let config = load_config(selection.config.as_deref()).await?;
    let bundle = DescriptorBundle::load(&selection.descriptor)
        .await
        .context("Failed to load descriptor")?;
    let pipeline = GenerationPipeline::new(
        Arc::new(GeneratorRegistry::with_defaults(&config)),
        Arc::new(ComponentProjectGenerator),
        template_store(selection, &config)?,
    );

    let mut plans = vec![component_plan(&pipeline, selection, &bundle)?];
    if !no_project {
        plans.push(pipeline.plan_project(&bundle.softpkg));
    }

    let renderer = TeraRenderer::new();
    let mut artifacts = Vec::new();
    for plan in &plans {
        artifacts.extend(
            renderer
                .render(plan)
                .with_context(|| format!("Failed to render with {}", plan.generator()))?,
        );
    }

    let output = FileSystemOutputService::new(output_dir);
    let written = output
        .write_artifacts(&artifacts)
        .await
        .context("Failed to write generated files")?;
    info!(
        "Generated {} files for '{}' in {}",
        written.len(),
        bundle.softpkg.name,
        output_dir.display()
    );
    Ok(())
}
