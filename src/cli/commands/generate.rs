use anyhow::Result;

use crate::sequencing::{generate_from_params, SequenceItem, SequenceParams};

pub struct GenerateCommand {
    pub params: SequenceParams,
    pub json: bool,
}

impl GenerateCommand {
    pub fn new(params: SequenceParams) -> Self {
        Self { params, json: false }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn execute(&self) -> Result<()> {
        let items = generate_from_params(&self.params)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&items)?);
        } else {
            print!("{}", render_table(&items));
        }
        Ok(())
    }
}

/// Checklist as a plain-text table, one row per item
pub fn render_table(items: &[SequenceItem]) -> String {
    let mut out = String::new();
    out.push_str("📋 INSPECTION SEQUENCE\n");
    out.push_str("─────────────────────\n");
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  Floor {:<4} {:<12} {}\n",
            index + 1,
            item.floor_number,
            item.shaft_id,
            item.location
        ));
    }
    out.push_str(&format!("\n🎯 Total items: {}\n", items.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencing::generate;

    #[test]
    fn test_render_table_lists_every_item() {
        let items = generate(0, 2, 2, "Smoke Shaft", "SS1").unwrap();
        let table = render_table(&items);

        assert!(table.contains("Floor 00"));
        assert!(table.contains("SS1-2"));
        assert!(table.contains("Total items: 4"));
        assert_eq!(table.lines().filter(|l| l.contains("Smoke Shaft")).count(), 4);
    }
}
