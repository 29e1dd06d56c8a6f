//! Tests for turn-in-place и recoil weight.

#[cfg(test)]
mod tests {
    use crate::pose::{recoil_weight, RecoilInputs, TurnInPlace, TurnInPlaceInputs, MAX_TURN_OFFSET};

    fn standing(actor_yaw: f32) -> TurnInPlaceInputs {
        TurnInPlaceInputs {
            actor_yaw,
            ..Default::default()
        }
    }

    #[test]
    fn test_standing_rotation_accumulates_offset() {
        let mut turn = TurnInPlace::default();

        turn.update(standing(0.0));
        turn.update(standing(30.0));

        // Контроллер повернул на +30, ноги остались → offset -30
        assert_eq!(turn.root_yaw_offset, -30.0);
        assert!(!turn.turning_in_place);
    }

    #[test]
    fn test_offset_folds_into_half_circle() {
        let mut turn = TurnInPlace::default();
        turn.update(standing(0.0));

        // Без turn анимации offset растет, но остается в [-180, 180]
        let mut yaw = 0.0;
        for _ in 0..20 {
            yaw += 25.0;
            turn.update(standing(yaw));
            assert!(turn.root_yaw_offset >= -180.0 && turn.root_yaw_offset <= 180.0,
                "offset {} вне диапазона", turn.root_yaw_offset);
        }
    }

    #[test]
    fn test_moving_resets_to_neutral() {
        let mut turn = TurnInPlace::default();
        turn.update(standing(0.0));
        turn.update(standing(45.0));
        assert_ne!(turn.root_yaw_offset, 0.0);

        turn.update(TurnInPlaceInputs {
            planar_speed: 150.0,
            actor_yaw: 50.0,
            ..Default::default()
        });

        assert_eq!(turn.root_yaw_offset, 0.0);
        assert_eq!(turn.character_yaw, 50.0);
        assert_eq!(turn.character_yaw_last_frame, 50.0);
        assert_eq!(turn.rotation_curve, 0.0);
        assert!(!turn.turning_in_place);
    }

    #[test]
    fn test_in_air_resets_to_neutral() {
        let mut turn = TurnInPlace::default();
        turn.update(standing(0.0));
        turn.update(standing(-70.0));

        turn.update(TurnInPlaceInputs {
            in_air: true,
            actor_yaw: -70.0,
            ..Default::default()
        });
        assert_eq!(turn.root_yaw_offset, 0.0);
    }

    #[test]
    fn test_rotation_curve_consumes_offset() {
        let mut turn = TurnInPlace::default();
        turn.update(standing(0.0));
        turn.update(standing(-60.0));
        // Поворот вправо → offset +60
        assert_eq!(turn.root_yaw_offset, 60.0);

        // Turn анимация началась: rotation curve 0 → 20 → 60
        turn.update(TurnInPlaceInputs {
            actor_yaw: -60.0,
            turning_curve: 1.0,
            rotation_curve: 20.0,
            ..Default::default()
        });
        assert!(turn.turning_in_place);
        assert_eq!(turn.root_yaw_offset, 40.0);

        turn.update(TurnInPlaceInputs {
            actor_yaw: -60.0,
            turning_curve: 1.0,
            rotation_curve: 60.0,
            ..Default::default()
        });
        assert_eq!(turn.root_yaw_offset, 0.0);

        // Анимация закончилась
        turn.update(standing(-60.0));
        assert!(!turn.turning_in_place);
        assert_eq!(turn.root_yaw_offset, 0.0);
    }

    #[test]
    fn test_negative_offset_adds_curve_delta() {
        let mut turn = TurnInPlace::default();
        turn.update(standing(0.0));
        turn.update(standing(50.0));
        assert_eq!(turn.root_yaw_offset, -50.0);

        turn.update(TurnInPlaceInputs {
            actor_yaw: 50.0,
            turning_curve: 1.0,
            rotation_curve: 30.0,
            ..Default::default()
        });
        assert_eq!(turn.root_yaw_offset, -20.0);
    }

    #[test]
    fn test_excess_clamped_during_turn() {
        let mut turn = TurnInPlace::default();
        turn.update(standing(0.0));

        // Резкий поворот на 150 во время turn анимации
        turn.update(TurnInPlaceInputs {
            actor_yaw: -150.0,
            turning_curve: 1.0,
            rotation_curve: 0.0,
            ..Default::default()
        });
        assert_eq!(turn.root_yaw_offset, MAX_TURN_OFFSET);

        turn.update(TurnInPlaceInputs {
            actor_yaw: 60.0,
            turning_curve: 1.0,
            rotation_curve: 0.0,
            ..Default::default()
        });
        // 90 - 210 = -120 → clamp -90
        assert_eq!(turn.root_yaw_offset, -MAX_TURN_OFFSET);
    }

    #[test]
    fn test_offset_bounded_over_turn_cycle() {
        let mut turn = TurnInPlace::default();
        turn.update(standing(0.0));

        let mut yaw = 0.0;
        let mut curve = 0.0;
        for frame in 0..240 {
            yaw -= 3.0;
            curve += 1.5;
            turn.update(TurnInPlaceInputs {
                actor_yaw: crate::shared::normalize_axis(yaw),
                turning_curve: if frame % 60 < 40 { 1.0 } else { 0.0 },
                rotation_curve: curve,
                ..Default::default()
            });
            if turn.turning_in_place {
                assert!(turn.root_yaw_offset.abs() <= MAX_TURN_OFFSET + 1e-4);
            } else {
                assert!(turn.root_yaw_offset.abs() <= 180.0);
            }
        }
    }

    #[test]
    fn test_recoil_weight_table() {
        // (turning, crouching, reloading, aiming) → weight
        let cases = [
            (true, false, false, false, 0.0),
            (true, false, false, true, 0.0),
            (true, false, true, false, 1.0),
            (true, false, true, true, 1.0),
            (true, true, false, false, 0.0),
            (true, true, false, true, 0.0),
            (true, true, true, false, 1.0),
            (true, true, true, true, 1.0),
            (false, true, false, false, 0.1),
            (false, true, false, true, 0.1),
            (false, true, true, false, 1.0),
            (false, true, true, true, 1.0),
            (false, false, false, false, 0.5),
            (false, false, false, true, 1.0),
            (false, false, true, false, 1.0),
            (false, false, true, true, 1.0),
        ];

        for (turning, crouching, reloading, aiming, expected) in cases {
            let weight = recoil_weight(turning, RecoilInputs { crouching, reloading, aiming });
            assert_eq!(
                weight, expected,
                "turning={} crouching={} reloading={} aiming={}",
                turning, crouching, reloading, aiming
            );
        }
    }

    #[test]
    fn test_update_recoil_weight_uses_turning_flag() {
        let mut turn = TurnInPlace {
            turning_in_place: true,
            ..Default::default()
        };
        assert_eq!(turn.update_recoil_weight(RecoilInputs::default()), 0.0);

        turn.turning_in_place = false;
        assert_eq!(turn.update_recoil_weight(RecoilInputs::default()), 0.5);
        assert_eq!(turn.recoil_weight, 0.5);
    }
}
