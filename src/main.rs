use clap::Parser;
use materialweb::{Catalog, Environment, Error, RenderConfig};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Renders a component template to HTML.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The template file
    template: PathBuf,

    /// JSON object with the template variables. The `_fields` key holds
    /// form fields by path.
    #[arg(long)]
    context: Option<PathBuf>,

    /// JSON message catalog, `{"message": "translation"}`
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Fail on references that resolve to nothing
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Number element ids `<PREFIX>1`, `<PREFIX>2`, ... instead of random UUIDs
    #[arg(long, value_name = "PREFIX")]
    sequential_ids: Option<String>,

    /// Write the HTML here instead of standard output
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("materialweb=info")).init();

    let args = Args::parse();

    let mut config = RenderConfig::new().with_strict_variables(args.strict);
    if let Some(prefix) = args.sequential_ids {
        config = config.with_sequential_ids(prefix);
    }

    let mut builder = Environment::builder().with_config(config);
    if let Some(path) = &args.catalog {
        let catalog = Catalog::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded {} messages from {}", catalog.len(), path.display());
        builder = builder.with_translator(Arc::new(catalog));
    }
    let env = builder.build()?;

    let template = env.compile_file(&args.template)?;
    let mut context = match &args.context {
        Some(path) => env.context_from_json(&fs::read_to_string(path)?)?,
        None => env.context(),
    };
    let html = template.render(&mut context)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &html)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}
