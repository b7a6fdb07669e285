use crate::settings::{resolve_path, Settings};
use std::path::Path;

pub fn run(config: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = resolve_path(config)?;

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite.",
            path.display()
        );
    }

    Settings::default().save(&path)?;

    println!("✓ Wrote default settings to {}", path.display());
    println!("\nSet walk.latitude / walk.longitude and source.base_url before running.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        run(Some(&path), false).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(run(Some(&path), false).is_err());
        assert!(run(Some(&path), true).is_ok());
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }
}
