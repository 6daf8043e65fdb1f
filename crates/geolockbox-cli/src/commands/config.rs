use anyhow::Result;
use geolockbox_core::config::LayeredConfig;
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputWriter;

#[derive(Debug, Serialize, Tabled)]
struct ConfigRow {
    #[tabled(rename = "Setting")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let rows = config_rows(config);

    if output.is_json() {
        return output.result(rows);
    }

    output.info("Engine configuration");
    output.table(rows);
    Ok(())
}

fn config_rows(config: &LayeredConfig) -> Vec<ConfigRow> {
    let mut rows: Vec<ConfigRow> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigRow {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));
    rows
}
