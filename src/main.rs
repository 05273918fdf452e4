use clap::Parser;
use cmstag::application::{
    ConfigService, InitService, ListBlocksService, RenderOptions, RenderService,
};
use cmstag::cli::{format_content_listing, format_tag_uses, Cli, Commands};
use cmstag::error::CmsTagError;
use cmstag::infrastructure::FileSystemSite;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr when RUST_LOG is set (e.g. `RUST_LOG=cmstag=debug`)
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(cli: Cli) -> Result<(), CmsTagError> {
    match cli.command {
        Some(Commands::Init { path, max_depth }) => InitService::execute(&path, max_depth),
        Some(Commands::Render {
            file,
            tags,
            allow_script,
            max_depth,
        }) => {
            let site = FileSystemSite::discover()?;
            let service = RenderService::new(site);

            let options = RenderOptions {
                input: file,
                allow_script: allow_script.then_some(true),
                max_depth,
            };
            let output = service.execute(&options)?;

            print!("{}", output.content);
            if tags {
                if !output.content.ends_with('\n') {
                    println!();
                }
                println!("--- tags ---");
                print!("{}", format_tag_uses(&output.tags));
                if output.tags.is_empty() {
                    println!();
                }
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let site = FileSystemSite::discover()?;
            let service = ConfigService::new(site);

            if list {
                let config = service.list()?;
                println!("allow_script = {}", config.allow_script);
                println!("max_depth = {}", config.max_depth);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: cmstag config [--list | <key> [<value>]]");
                println!("Valid keys: allow_script, max_depth, created");
                Ok(())
            }
        }
        Some(Commands::Blocks) => {
            let site = FileSystemSite::discover()?;
            let listing = ListBlocksService::new(site).execute()?;
            let output = format_content_listing(&listing);
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(())
        }
        None => {
            println!("cmstag - Expand CMS tags in content files");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
