// ABOUTME: Command implementations for the scrivener CLI
// ABOUTME: Handles execution of draft, kinds, check, deadlines, and init commands

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use std::path::PathBuf;
use tracing::{info, warn};

use super::config::Config;
use crate::instrument::deadline::{weekday_date, ResponseWindows};
use crate::instrument::{Engine, Family, InstrumentKind, RenderOptions};
use crate::matter::{requirements, MatterLoader, MatterRecord};
use crate::output::{format_draft, writer_for, DraftEnvelope, OutputFormat};

/// Load a matter record, apply configured defaults, then CLI overrides
async fn load_record(
    matter_path: Option<&PathBuf>,
    fields: &[String],
    config: &Config,
) -> Result<MatterRecord> {
    let mut record = match matter_path {
        Some(path) => {
            let loader = MatterLoader::new();
            loader
                .parse_file(path)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load matter file: {}", e))?
        }
        None => MatterRecord::default(),
    };

    record.apply_defaults(&config.field_defaults)?;

    let overrides = MatterRecord::parse_overrides(fields)?;
    if !overrides.is_empty() {
        info!("Applying {} field overrides", overrides.len());
        record.merge_overrides(&overrides)?;
    }

    Ok(record)
}

/// Render an instrument and write it to its destination
#[allow(clippy::too_many_arguments)]
pub async fn draft_instrument(
    kind: InstrumentKind,
    matter: Option<PathBuf>,
    fields: Vec<String>,
    issued_on: Option<NaiveDate>,
    notice_date: Option<NaiveDate>,
    window_days: Option<i64>,
    output: Option<PathBuf>,
    format: String,
    config: &Config,
) -> Result<()> {
    info!("Drafting {} ({})", kind.label(), kind.code());

    let record = load_record(matter.as_ref(), &fields, config).await?;

    let missing = requirements::missing_fields(kind, &record);
    if !missing.is_empty() {
        warn!(
            "{} field(s) absent; output will contain placeholders: {}",
            missing.len(),
            missing
                .iter()
                .map(|f| f.key())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    // The clock is read here, not inside the engine
    let issued_on = issued_on.unwrap_or_else(|| Local::now().date_naive());
    let mut options = RenderOptions::on(issued_on);
    if let Some(date) = notice_date {
        options = options.with_notice_date(date);
    }
    if let Some(days) = window_days {
        options = options.with_window_days(days);
    }

    let engine = Engine::new()?;
    let body = engine.render(kind, &record, &options);

    let envelope = DraftEnvelope::new(kind, body, Utc::now());
    let output_format: OutputFormat = format.parse()?;
    let content = format_draft(&envelope, output_format)?;

    let destination = output.or_else(|| {
        config
            .default_output_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.txt", kind.slug())))
    });

    let writer = writer_for(destination.as_deref());
    writer.write(&content).await?;

    info!("Draft complete: {}", envelope.instrument_id);
    Ok(())
}

/// List every instrument kind with its code, slug, and family membership
pub fn list_kinds() -> Result<()> {
    println!("Remedy instruments:");
    for kind in InstrumentKind::in_family(Family::Remedy) {
        println!("  {:<5} {:<24} {}", kind.code(), kind.slug(), kind.label());
    }

    println!();
    println!("Trust operations:");
    for kind in InstrumentKind::in_family(Family::TrustOps) {
        println!("  {:<5} {:<24} {}", kind.code(), kind.slug(), kind.label());
    }

    Ok(())
}

/// Report which fields will render as placeholders for the given kind
pub async fn check_matter(
    kind: InstrumentKind,
    matter: Option<PathBuf>,
    fields: Vec<String>,
    config: &Config,
) -> Result<()> {
    let record = load_record(matter.as_ref(), &fields, config).await?;

    println!("Checking matter against {} ({})", kind.label(), kind.code());

    let mut missing = 0;
    for field in requirements::required_fields(kind) {
        match record.value_of(*field) {
            Some(value) => println!("  ✓ {}: {}", field.key(), value),
            None => {
                missing += 1;
                println!(
                    "  - {}: will render as {}",
                    field.key(),
                    requirements::placeholder_for(kind, *field)
                );
            }
        }
    }

    if kind == InstrumentKind::ConditionalAcceptance {
        if record.proof_points.is_empty() {
            println!("  - proof_points: empty; the AI-placeholder line will be rendered");
        } else {
            println!("  ✓ proof_points: {} item(s)", record.proof_points.len());
        }
    }

    if missing == 0 {
        println!("✓ All fields present");
    } else {
        println!("{} field(s) will render as placeholders", missing);
    }

    Ok(())
}

/// Print both standard response windows for a notice date
pub fn compute_deadlines(notice_date: NaiveDate) -> Result<()> {
    let windows = ResponseWindows::from_notice_date(notice_date);

    println!("Notice served: {}", weekday_date(windows.notice_date));
    println!("10-day window lapses: {}", weekday_date(windows.ten_day));
    println!(
        "28-day window lapses: {}",
        weekday_date(windows.twenty_eight_day)
    );

    Ok(())
}

const MATTER_TEMPLATE: &str = r#"# Matter file: {name}
# Fill in what you know; anything left blank renders as a bracketed placeholder.

man_name: ""
fiction_name: ""
creditor: ""
claim_ref: ""
situation_context: ""
proof_points: []

# Trust details (used by trust instruments only)
trust_name: ""
trustee_name: ""
vehicle_vin: ""
purchase_price: ""
amendment_text: ""
asset_description: ""
asset_recipient: ""
"#;

/// Create a scaffolded matter file with every field present
pub async fn init_matter(name: String, output_dir: PathBuf) -> Result<()> {
    let path = output_dir.join(format!("{}.yaml", name));

    if path.exists() {
        return Err(anyhow::anyhow!(
            "Matter file already exists: {}",
            path.display()
        ));
    }

    tokio::fs::create_dir_all(&output_dir).await?;
    tokio::fs::write(&path, MATTER_TEMPLATE.replace("{name}", &name)).await?;

    println!("✓ Created matter file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_record_with_overrides() {
        let config = Config::default();
        let fields = vec!["man_name=John Henry".to_string()];

        let record = load_record(None, &fields, &config).await.unwrap();
        assert_eq!(
            record.value_of(crate::matter::Field::ManName),
            Some("John Henry")
        );
    }

    #[tokio::test]
    async fn test_load_record_config_defaults_fill_blanks() {
        let mut config = Config::default();
        config
            .field_defaults
            .insert("creditor".to_string(), "ACME Corp".to_string());

        let record = load_record(None, &[], &config).await.unwrap();
        assert_eq!(
            record.value_of(crate::matter::Field::Creditor),
            Some("ACME Corp")
        );
    }

    #[tokio::test]
    async fn test_init_matter_creates_parseable_file() {
        let temp_dir = TempDir::new().unwrap();
        init_matter("test-matter".to_string(), temp_dir.path().to_path_buf())
            .await
            .unwrap();

        let path = temp_dir.path().join("test-matter.yaml");
        let contents = std::fs::read_to_string(&path).unwrap();
        let record = MatterLoader::from_yaml(&contents).unwrap();

        // Scaffolded blanks count as absent
        assert_eq!(record.value_of(crate::matter::Field::ManName), None);
        assert!(record.proof_points.is_empty());
    }

    #[tokio::test]
    async fn test_init_matter_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        init_matter("dup".to_string(), temp_dir.path().to_path_buf())
            .await
            .unwrap();

        let result = init_matter("dup".to_string(), temp_dir.path().to_path_buf()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_compute_deadlines_runs() {
        let notice_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        compute_deadlines(notice_date).unwrap();
    }
}
