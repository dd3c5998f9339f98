//! Open command - Launch an IDE, optionally with a project

use anyhow::{Context, Result};
use std::process::Command;

use super::utils;
use jetbrains_projects::jetbrains::Product;

/// Arguments for `open` that start a new instance of the app
pub fn open_args(bundle_id: &str, args: &[String]) -> Vec<String> {
    let mut cmd = vec!["-nb".to_string(), bundle_id.to_string()];
    if !args.is_empty() {
        cmd.push("--args".to_string());
        cmd.extend_from_slice(args);
    }
    cmd
}

/// Launch `product`, passing `args` (usually a project path) through
pub fn execute(product: &Product, args: &[String]) -> Result<()> {
    let args = utils::expand_args(args);
    launch(product, &args)
}

#[cfg(target_os = "macos")]
fn launch(product: &Product, args: &[String]) -> Result<()> {
    // A running IDE won't come forward for an already open project on its own
    let activate = format!(r#"tell application "{}" to activate"#, product.name());
    if let Err(e) = Command::new("osascript").args(["-e", &activate]).status() {
        tracing::warn!("Failed to activate {}: {}", product.name(), e);
    }

    let status = Command::new("open")
        .args(open_args(&product.bundle_id, args))
        .status()
        .with_context(|| format!("Can't open {}", product.keyword))?;
    if !status.success() {
        anyhow::bail!("Can't open {}: open exited with {}", product.keyword, status);
    }
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn launch(product: &Product, args: &[String]) -> Result<()> {
    let command = product.launcher_command();
    tracing::debug!("Running {} {:?}", command, args);
    // The IDE outlives us; don't wait for it
    Command::new(command)
        .args(args)
        .spawn()
        .with_context(|| format!("Can't open {} (command: {})", product.keyword, command))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_args_without_project() {
        assert_eq!(open_args("com.jetbrains.goland", &[]), vec!["-nb", "com.jetbrains.goland"]);
    }

    #[test]
    fn test_open_args_with_project() {
        let args = vec!["/Users/me/src/app".to_string()];
        assert_eq!(
            open_args("com.jetbrains.goland", &args),
            vec!["-nb", "com.jetbrains.goland", "--args", "/Users/me/src/app"]
        );
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_launch_missing_command_fails() {
        use jetbrains_projects::jetbrains::product::ProductSpec;

        let product = Product::from_spec(
            "ghost",
            ProductSpec {
                folder_name: "Ghost".to_string(),
                bundle_id: "com.example.ghost".to_string(),
                display_name: None,
                vendor: None,
                preferences_path: None,
                command: Some("no-such-ide-launcher-5f1c9e2a".to_string()),
            },
        );
        assert!(execute(&product, &[]).is_err());
    }
}
