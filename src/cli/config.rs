use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn show() -> Result<()> {
    let settings = load_settings();
    println!("Settings:     {}", settings_path().display());
    println!("Organization: {}", settings.organization);
    println!("Period:       {}", settings.period);
    println!("Export dir:   {}", settings.export_dir);
    Ok(())
}

pub fn set(org: Option<String>, period: Option<String>, export_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(org) = org {
        settings.organization = org;
    }
    if let Some(period) = period {
        settings.period = period;
    }
    if let Some(dir) = export_dir {
        settings.export_dir = shellexpand_path(&dir);
    }
    save_settings(&settings)?;
    println!("Saved {}", settings_path().display());
    Ok(())
}
