// Property-Based Testing for Damper Sequencing
// Checks generator shape and session counters under arbitrary operator actions

use damper_sequencer::sequencing::{
    generate, NewSession, NoopCollaborator, SessionController, SessionStatus,
};
use proptest::prelude::*;
use proptest_derive::Arbitrary;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum OperatorAction {
    Complete,
    Skip,
    Pause,
    Resume,
}

fn actions_strategy() -> impl Strategy<Value = Vec<OperatorAction>> {
    prop::collection::vec(any::<OperatorAction>(), 0..40)
}

proptest! {
    #[test]
    fn generated_length_is_floors_times_dampers(
        start in -5i32..50,
        floors in 1u32..=20,
        dampers in 1u32..=6,
    ) {
        let items = generate(start, floors, dampers, "Smoke Shaft", "SS1").unwrap();
        prop_assert_eq!(items.len(), (floors * dampers) as usize);
    }

    #[test]
    fn generated_order_is_floor_major(
        start in 0i32..30,
        floors in 1u32..=10,
        dampers in 1u32..=5,
    ) {
        let items = generate(start, floors, dampers, "Core", "C").unwrap();
        for (index, item) in items.iter().enumerate() {
            let floor = start + (index as u32 / dampers) as i32;
            let damper = index as u32 % dampers + 1;
            prop_assert_eq!(&item.floor_number, &format!("{:02}", floor));
            if dampers == 1 {
                prop_assert_eq!(item.shaft_id.as_str(), "C");
            } else {
                prop_assert_eq!(&item.shaft_id, &format!("C-{}", damper));
            }
        }
    }

    #[test]
    fn counters_stay_consistent_under_any_actions(
        floors in 1u32..=6,
        dampers in 1u32..=3,
        actions in actions_strategy(),
    ) {
        let mut controller = SessionController::new(NoopCollaborator);
        let sequence = generate(0, floors, dampers, "Smoke Shaft", "SS1").unwrap();
        let total = sequence.len();
        let session = controller
            .create_session(NewSession::new("Harbour Tower", sequence))
            .unwrap();
        controller.start(&session.id).unwrap();

        for action in actions {
            match action {
                OperatorAction::Complete => { controller.mark_current_complete(None).unwrap(); }
                OperatorAction::Skip => { controller.skip_current().unwrap(); }
                OperatorAction::Pause => { controller.pause().unwrap(); }
                OperatorAction::Resume => {
                    let status = controller.session(&session.id).unwrap().status;
                    if status != SessionStatus::Completed {
                        controller.start(&session.id).unwrap();
                    }
                }
            }

            let stored = controller.session(&session.id).unwrap();
            prop_assert_eq!(stored.completed_count, stored.count_completed());
            prop_assert_eq!(stored.total_count, total);
            prop_assert!(stored.current_index < total);
            if controller.active_session().is_some() {
                prop_assert_eq!(stored.status, SessionStatus::InProgress);
            } else {
                prop_assert_ne!(stored.status, SessionStatus::InProgress);
            }
        }
    }
}
