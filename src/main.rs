use anyhow::Result;
use spanner_ddl_to_meta::{
    ast,
    cli::{Cli, Commands},
    model,
    writer::{convert_to_json, up_to_date},
};
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    match cli.command {
        Commands::Convert {
            ast_file,
            output,
            force,
            changed,
        } => {
            if !force {
                if let Some(out) = &output {
                    // rebuilding the tool itself also invalidates the output
                    let mut sources = vec![ast_file.clone()];
                    if let Ok(exe) = std::env::current_exe() {
                        sources.push(exe);
                    }
                    if up_to_date(&sources, out) {
                        eprintln!("skip: {} is up to date (use -f to force)", out.display());
                        return Ok(());
                    }
                }
            }

            let start = Instant::now();
            let table_count = convert_to_json(&ast_file, output.as_deref())?;
            let elapsed = start.elapsed();

            if let Some(out) = &output {
                eprintln!(
                    "Wrote {} ({} tables) in {:.1}s",
                    out.display(),
                    table_count,
                    elapsed.as_secs_f64()
                );
            }

            if changed {
                std::process::exit(2);
            }
        }

        Commands::Tables { ast_file } => {
            let text = fs::read_to_string(&ast_file)?;
            let ddl = ast::parse(&text)?;
            let tables = model::build_model(&ddl)?;
            for table in &tables {
                println!("{:4}  {}", table.dependency_order, table.key);
            }
        }
    }

    Ok(())
}
