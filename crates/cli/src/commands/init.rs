use anyhow::{Context, Result};
use nunit_runner_core::{config::CONFIG_FILE_NAME, StepConfig, ToolInstallation};
use std::{env, path::PathBuf};
use tracing::info;

pub fn init_command(cwd: Option<&str>, force: bool, nunit_home: Option<&str>) -> Result<()> {
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let installation = match nunit_home {
        Some(home) => ToolInstallation::new(ToolInstallation::DEFAULT, home),
        None => ToolInstallation::fallback(),
    };
    let config = StepConfig {
        test_files: Some("**/*.Tests.dll".to_string()),
        installations: vec![installation],
        ..Default::default()
    };

    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Created config: {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Next steps:");
    println!("   Adjust test_files to match your test assemblies");
    println!("   Run: nunit-runner run");

    Ok(())
}
