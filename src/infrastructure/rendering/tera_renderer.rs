//! Tera-based rendering of generation plans

use std::collections::HashMap;
use std::path::PathBuf;
use tera::{Context, Tera, Value};
use thiserror::Error;
use tracing::debug;

use crate::generation::utils::{to_camel_case, to_snake_case};
use crate::generation::{Artifact, GenerationPlan};
use crate::infrastructure::templates::TemplateError;

/// File mode applied to executable artifacts
pub const EXECUTABLE_MODE: u32 = 0o755;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to render template '{template}': {source}")]
    Tera {
        template: String,
        #[source]
        source: tera::Error,
    },
}

/// Renders every binding of a plan with Tera
#[derive(Debug, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a plan into artifacts whose paths are relative to the output root
    pub fn render(&self, plan: &GenerationPlan) -> Result<Vec<Artifact>, RenderError> {
        let context = Context::from_value(plan.context().to_json()).map_err(|source| {
            RenderError::Tera {
                template: plan.generator().to_string(),
                source,
            }
        })?;

        let mut tera = Tera::default();
        tera.register_filter("snake_case", snake_case_filter);
        tera.register_filter("camel_case", camel_case_filter);

        let mut artifacts = Vec::with_capacity(plan.templates().len());
        for binding in plan.templates() {
            let template = plan.loader().load(&binding.template)?;
            let tera_error = |source| RenderError::Tera {
                template: binding.template.clone(),
                source,
            };

            tera.add_raw_template(&binding.template, &template.content)
                .map_err(tera_error)?;
            let content = tera
                .render(&binding.template, &context)
                .map_err(tera_error)?;
            debug!(
                template = %binding.template,
                source = %template.path,
                file = %binding.filename,
                "Rendered template"
            );

            artifacts.push(Artifact {
                path: PathBuf::from(&binding.filename),
                content,
                permissions: binding.executable.then_some(EXECUTABLE_MODE),
            });
        }
        Ok(artifacts)
    }
}

fn string_arg<'a>(value: &'a Value, filter: &str) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("Filter `{filter}` expects a string")))
}

fn snake_case_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(to_snake_case(string_arg(value, "snake_case")?)))
}

fn camel_case_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(to_camel_case(string_arg(value, "camel_case")?)))
}
