//! Property tests for round invariants.
//!
//! Random grid sizes, seeds and input sequences are fed to the controller;
//! after every input the round must still satisfy its invariants.

use forbidden_face::{Phase, RoundConfig, RoundController, RoundEventKind, TileId};
use proptest::prelude::*;

/// One player input.
#[derive(Clone, Debug)]
enum Input {
    Tap(u32),
    Ack,
    Restart,
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        8 => (0u32..40).prop_map(Input::Tap),
        3 => Just(Input::Ack),
        1 => Just(Input::Restart),
    ]
}

fn check_invariants(controller: &RoundController, size: usize) -> Result<(), TestCaseError> {
    let grid = controller.grid().unwrap();
    let phase = controller.phase().unwrap();
    let score = controller.score().unwrap() as usize;
    let forbidden = controller.forbidden().unwrap();

    prop_assert_eq!(score + grid.remaining_count(), size * size);
    prop_assert_eq!(phase == Phase::Won, grid.remaining_count() == 1);

    if !phase.is_finished() {
        prop_assert!(grid.contains(forbidden));
    }
    if phase == Phase::Won {
        prop_assert_eq!(grid.ids().next(), Some(forbidden));
    }
    prop_assert_eq!(
        controller.pending_punishment().is_some(),
        phase == Phase::AwaitingPunishmentAck
    );
    Ok(())
}

proptest! {
    /// Invariants hold after every input in either mode.
    #[test]
    fn test_invariants_hold(
        size in 2usize..=6,
        seed in any::<u64>(),
        drinking in any::<bool>(),
        inputs in prop::collection::vec(input_strategy(), 0..120),
    ) {
        let config = if drinking {
            RoundConfig::drinking(size)
        } else {
            RoundConfig::classic(size)
        };
        let mut controller = RoundController::new(seed);
        controller.start(config).unwrap();
        check_invariants(&controller, size)?;

        for input in inputs {
            let before = controller.summary().unwrap();
            let event = match input {
                Input::Tap(raw) => controller.on_tap(TileId(raw)).unwrap(),
                Input::Ack => controller.acknowledge_punishment().unwrap(),
                Input::Restart => controller.restart().unwrap(),
            };

            if before.phase.is_finished() && !matches!(input, Input::Restart) {
                prop_assert!(event.is_none());
                prop_assert_eq!(controller.summary().unwrap(), before);
            }
            if let Some(event) = &event {
                prop_assert_eq!(event.score, controller.score().unwrap());
                prop_assert_eq!(event.phase, controller.phase().unwrap());
            }
            check_invariants(&controller, size)?;
        }
    }

    /// Safe taps always lead to a win with score N² - 1.
    #[test]
    fn test_safe_play_wins(size in 2usize..=6, seed in any::<u64>(), drinking in any::<bool>()) {
        let config = if drinking {
            RoundConfig::drinking(size)
        } else {
            RoundConfig::classic(size)
        };
        let mut controller = RoundController::new(seed);
        controller.start(config).unwrap();

        while controller.phase() == Some(Phase::Active) {
            let forbidden = controller.forbidden().unwrap();
            let safe = controller.grid().unwrap().ids().find(|&id| id != forbidden).unwrap();
            let event = controller.on_tap(safe).unwrap().unwrap();
            if drinking {
                prop_assert_eq!(event.kind, RoundEventKind::PunishmentPrompted);
                controller.acknowledge_punishment().unwrap();
            }
        }

        prop_assert_eq!(controller.phase(), Some(Phase::Won));
        prop_assert_eq!(controller.score(), Some((size * size - 1) as u32));
    }

    /// Tapping the forbidden tile loses and freezes the score.
    #[test]
    fn test_forbidden_tap_loses(size in 2usize..=6, seed in any::<u64>(), safe_taps in 0usize..5) {
        let mut controller = RoundController::new(seed);
        controller.start(RoundConfig::classic(size)).unwrap();

        for _ in 0..safe_taps.min(size * size - 2) {
            let forbidden = controller.forbidden().unwrap();
            let safe = controller.grid().unwrap().ids().find(|&id| id != forbidden).unwrap();
            controller.on_tap(safe).unwrap();
        }
        let score = controller.score();
        let forbidden = controller.forbidden().unwrap();

        let event = controller.on_tap(forbidden).unwrap().unwrap();
        prop_assert_eq!(event.kind, RoundEventKind::Lost);
        prop_assert_eq!(controller.score(), score);
        prop_assert!(controller.grid().unwrap().contains(forbidden));
    }
}
