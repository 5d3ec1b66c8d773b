// src/config/loader.rs

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use toml::Table;
use tracing::debug;

/// Candidate config files for `name`, lowest precedence first:
/// `~/.{name}.toml`, `./.{name}.toml`, then `{dir}/{name}.toml` for each
/// explicitly passed location directory.
///
/// `locations` is consulted per call; there is no ambient search list
/// to mutate between calls.
pub fn search_paths(name: &str, locations: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{name}.toml")));
    }
    paths.push(PathBuf::from(format!(".{name}.toml")));
    for dir in locations {
        paths.push(dir.join(format!("{name}.toml")));
    }
    paths
}

/// Load and merge every config layer that exists for `name`.
///
/// Later layers override earlier ones: tables merge key by key, while
/// scalars and arrays replace the older value outright. When no layer
/// exists the result is simply empty.
pub fn load_layered(name: &str, locations: &[PathBuf]) -> Result<Table> {
    load_layered_from(&search_paths(name, locations))
}

/// Merge an explicit list of candidate files; missing ones are skipped.
pub fn load_layered_from(paths: &[PathBuf]) -> Result<Table> {
    let mut merged = Table::new();
    for path in paths {
        if !path.is_file() {
            continue;
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file at {:?}", path))?;
        let layer: Table = toml::from_str(&contents)
            .with_context(|| format!("parsing TOML config from {:?}", path))?;
        merge_tables(&mut merged, layer);
        debug!(path = ?path, "merged config layer");
    }
    Ok(merged)
}

fn merge_tables(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(s: &str) -> Table {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn scalars_from_later_layers_win() {
        let mut base = table("a = 1\nb = 2");
        merge_tables(&mut base, table("b = 3\nc = 4"));
        assert_eq!(base, table("a = 1\nb = 3\nc = 4"));
    }

    #[test]
    fn nested_tables_merge_key_by_key() {
        let mut base = table("[exec]\ncapture = \"stdout\"\nverbose = true");
        merge_tables(&mut base, table("[exec]\ncapture = \"both\""));
        assert_eq!(
            base,
            table("[exec]\ncapture = \"both\"\nverbose = true")
        );
    }

    #[test]
    fn table_replaced_by_scalar_is_gone() {
        let mut base = table("[exec]\nverbose = true");
        merge_tables(&mut base, table("exec = \"off\""));
        assert_eq!(base, table("exec = \"off\""));
    }
}
