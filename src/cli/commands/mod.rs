use crate::cli::SequenceArgs;
use crate::config::SequenceDefaults;
use crate::sequencing::SequenceParams;

pub mod generate;
pub mod show_config;
pub mod walk;

pub use generate::GenerateCommand;
pub use show_config::ShowConfigCommand;
pub use walk::WalkCommand;

/// Merge command-line generator flags over configured defaults
pub fn resolve_params(args: &SequenceArgs, defaults: &SequenceDefaults) -> SequenceParams {
    let base = defaults.to_params();
    SequenceParams {
        start_floor: args.start_floor.unwrap_or(base.start_floor),
        floor_count: args.floors.unwrap_or(base.floor_count),
        dampers_per_floor: args.dampers.unwrap_or(base.dampers_per_floor),
        location: args.location.clone().unwrap_or(base.location),
        shaft_id_prefix: args.shaft_prefix.clone().unwrap_or(base.shaft_id_prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = SequenceArgs {
            floors: Some(4),
            shaft_prefix: Some("SC".to_string()),
            ..Default::default()
        };
        let params = resolve_params(&args, &SequenceDefaults::default());

        assert_eq!(params.floor_count, 4);
        assert_eq!(params.shaft_id_prefix, "SC");
        assert_eq!(params.dampers_per_floor, 1);
        assert_eq!(params.location, "Smoke Shaft");
        assert_eq!(params.start_floor, 0);
    }
}
