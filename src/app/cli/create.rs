//! Create command implementation.

use crate::app::api::{self, WebhookOptions};
use crate::domain::AppError;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum CreateCommands {
    /// Scaffold kustomize manifests for a webhook
    #[clap(visible_alias = "wh")]
    Webhook(WebhookArgs),
}

#[derive(Args)]
pub struct WebhookArgs {
    /// API group of the resource
    #[arg(long)]
    group: String,
    /// API version of the resource (e.g. v1, v1beta1)
    #[arg(long)]
    version: String,
    /// Kind of the resource (e.g. CronJob)
    #[arg(long)]
    kind: String,
    /// Override the lowercase plural of the kind
    #[arg(long)]
    plural: Option<String>,
    /// Scaffold a defaulting webhook
    #[arg(long)]
    defaulting: bool,
    /// Scaffold a validating webhook
    #[arg(long)]
    programmatic_validation: bool,
    /// Scaffold a conversion webhook
    #[arg(long)]
    conversion: bool,
    /// Import path of a resource defined outside the project
    #[arg(long)]
    external_api_path: Option<String>,
    /// Domain of the external resource
    #[arg(long, requires = "external_api_path")]
    external_api_domain: Option<String>,
    /// Overwrite the webhook kustomization if it exists
    #[arg(long)]
    force: bool,
}

impl From<WebhookArgs> for WebhookOptions {
    fn from(args: WebhookArgs) -> Self {
        WebhookOptions {
            group: args.group,
            version: args.version,
            kind: args.kind,
            plural: args.plural,
            defaulting: args.defaulting,
            validation: args.programmatic_validation,
            conversion: args.conversion,
            external_api_path: args.external_api_path,
            external_api_domain: args.external_api_domain,
            force: args.force,
        }
    }
}

pub fn run_create(command: CreateCommands) -> Result<(), AppError> {
    match command {
        CreateCommands::Webhook(args) => run_create_webhook(args.into()),
    }
}

fn run_create_webhook(options: WebhookOptions) -> Result<(), AppError> {
    let report = api::create_webhook(&options)?;

    println!("✅ Scaffolded webhook manifests for {}", options.kind);
    for path in &report.rendered {
        println!("  {}", path);
    }
    if !report.warnings.is_empty() {
        println!("⚠️  {} edit(s) need manual attention:", report.warnings.len());
        for warning in &report.warnings {
            println!("  {}", warning);
        }
    }
    Ok(())
}
