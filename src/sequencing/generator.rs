// Sequence generator - expands a building's floors into an ordered checklist

use crate::sequencing::error::{SessionError, SessionResult};
use crate::sequencing::types::{SequenceItem, SequenceParams};

/// Zero-padded floor label, at least two digits
pub fn floor_label(floor: i32) -> String {
    format!("{:02}", floor)
}

/// Shaft id for a damper; the bare prefix when a floor has a single damper
pub fn shaft_id(prefix: &str, damper_index: u32, dampers_per_floor: u32) -> String {
    if dampers_per_floor == 1 {
        prefix.to_string()
    } else {
        format!("{}-{}", prefix, damper_index)
    }
}

/// Generate the inspection checklist, floor-major and damper-minor.
///
/// Floors run ascending from `start_floor`; within each floor dampers run
/// from 1 to `dampers_per_floor`. The result always holds exactly
/// `floor_count * dampers_per_floor` items.
pub fn generate(
    start_floor: i32,
    floor_count: u32,
    dampers_per_floor: u32,
    location: &str,
    shaft_id_prefix: &str,
) -> SessionResult<Vec<SequenceItem>> {
    if floor_count == 0 {
        return Err(SessionError::InvalidSequence {
            field: "floor_count",
            value: 0,
        });
    }
    if dampers_per_floor == 0 {
        return Err(SessionError::InvalidSequence {
            field: "dampers_per_floor",
            value: 0,
        });
    }

    let last_floor = i32::try_from(floor_count - 1)
        .ok()
        .and_then(|span| start_floor.checked_add(span))
        .ok_or(SessionError::FloorRangeOverflow {
            start_floor,
            floor_count,
        })?;

    let mut items = Vec::with_capacity(floor_count as usize * dampers_per_floor as usize);
    for floor_number in start_floor..=last_floor {
        let floor = floor_label(floor_number);
        for damper in 1..=dampers_per_floor {
            items.push(SequenceItem::new(
                floor.clone(),
                location.to_string(),
                shaft_id(shaft_id_prefix, damper, dampers_per_floor),
            ));
        }
    }

    tracing::debug!(
        start_floor = %start_floor,
        floor_count = %floor_count,
        dampers_per_floor = %dampers_per_floor,
        items = %items.len(),
        "Generated inspection sequence"
    );
    Ok(items)
}

pub fn generate_from_params(params: &SequenceParams) -> SessionResult<Vec<SequenceItem>> {
    generate(
        params.start_floor,
        params.floor_count,
        params.dampers_per_floor,
        &params.location,
        &params.shaft_id_prefix,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_floors_single_damper() {
        let items = generate(0, 2, 1, "Smoke Shaft", "SS1").unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].floor_number, "00");
        assert_eq!(items[1].floor_number, "01");
        assert!(items.iter().all(|i| i.shaft_id == "SS1"));
        assert!(items.iter().all(|i| i.location == "Smoke Shaft"));
        assert!(items.iter().all(|i| !i.completed && i.test_id.is_none()));
    }

    #[test]
    fn test_floor_major_order() {
        let items = generate(4, 3, 2, "Stair Core", "SC").unwrap();

        let floors: Vec<&str> = items.iter().map(|i| i.floor_number.as_str()).collect();
        assert_eq!(floors, vec!["04", "04", "05", "05", "06", "06"]);

        let shafts: Vec<&str> = items.iter().map(|i| i.shaft_id.as_str()).collect();
        assert_eq!(shafts, vec!["SC-1", "SC-2", "SC-1", "SC-2", "SC-1", "SC-2"]);
    }

    #[test]
    fn test_output_size_is_product() {
        for floors in 1..=6u32 {
            for dampers in 1..=5u32 {
                let items = generate(-2, floors, dampers, "L", "P").unwrap();
                assert_eq!(items.len(), (floors * dampers) as usize);
            }
        }
    }

    #[test]
    fn test_floor_labels() {
        assert_eq!(floor_label(3), "03");
        assert_eq!(floor_label(11), "11");
        assert_eq!(floor_label(120), "120");
        assert_eq!(floor_label(-1), "-1");
    }

    #[test]
    fn test_rejects_zero_counts() {
        assert_eq!(
            generate(0, 0, 1, "L", "P"),
            Err(SessionError::InvalidSequence { field: "floor_count", value: 0 })
        );
        assert_eq!(
            generate(0, 1, 0, "L", "P"),
            Err(SessionError::InvalidSequence { field: "dampers_per_floor", value: 0 })
        );
    }

    #[test]
    fn test_rejects_floor_range_past_i32() {
        assert_eq!(
            generate(i32::MAX, 2, 1, "L", "P"),
            Err(SessionError::FloorRangeOverflow {
                start_floor: i32::MAX,
                floor_count: 2,
            })
        );
        assert_eq!(
            generate(0, u32::MAX, 1, "L", "P"),
            Err(SessionError::FloorRangeOverflow {
                start_floor: 0,
                floor_count: u32::MAX,
            })
        );

        let top = generate(i32::MAX, 1, 1, "L", "P").unwrap();
        assert_eq!(top[0].floor_number, i32::MAX.to_string());
        let basement = generate(i32::MIN, 2, 1, "L", "P").unwrap();
        assert_eq!(basement[1].floor_number, (i32::MIN + 1).to_string());
    }

    #[test]
    fn test_generate_from_params() {
        let params = SequenceParams {
            start_floor: 10,
            floor_count: 1,
            dampers_per_floor: 3,
            location: "Plant Room".to_string(),
            shaft_id_prefix: "PR".to_string(),
        };
        let items = generate_from_params(&params).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].shaft_id, "PR-3");
        assert_eq!(items[2].floor_number, "10");
    }
}
