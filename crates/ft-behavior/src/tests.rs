//! Unit tests for ft-behavior.

use ft_agent::{DeviceState, DeviceStateBuilder};
use ft_core::{DeviceKind, DeviceRng, Mode, Position, Tick};

use crate::{CarModel, DeviceModel, DroneModel, Motion, PhoneModel, ResourceModel};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn state(kind: DeviceKind, alt: f64, speed_kmh: f64) -> DeviceState {
    DeviceStateBuilder::new(format!("{kind}-1"), kind, Position::new(1.2921, 36.8219, alt))
        .heading(90.0)
        .speed_kmh(speed_kmh)
        .build()
}

fn rng() -> DeviceRng {
    DeviceRng::new(7, 0)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── CarModel ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car_tests {
    use super::*;

    #[test]
    fn burns_fuel_above_threshold() {
        let mut s = state(DeviceKind::Car, 0.0, 60.0);
        s.set_resource(80.0);
        CarModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.resource, 79.8);
        assert_eq!(s.mode, Mode::Driving);
    }

    #[test]
    fn refill_replaces_burn_when_draw_fires() {
        let model = CarModel { refill_probability: 1.0, ..CarModel::default() };
        let mut s = state(DeviceKind::Car, 0.0, 60.0);
        s.set_resource(30.0);
        model.step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.resource, 100.0);
    }

    #[test]
    fn no_refill_above_threshold_even_if_draw_fires() {
        let model = CarModel { refill_probability: 1.0, ..CarModel::default() };
        let mut s = state(DeviceKind::Car, 0.0, 60.0);
        s.set_resource(30.5);
        model.step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.resource, 30.3);
    }

    #[test]
    fn burns_at_threshold_when_draw_misses() {
        let model = CarModel { refill_probability: 0.0, ..CarModel::default() };
        let mut s = state(DeviceKind::Car, 0.0, 60.0);
        s.set_resource(10.0);
        model.step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.resource, 9.8);
    }

    #[test]
    fn empty_tank_stays_at_zero() {
        let model = CarModel { refill_probability: 0.0, ..CarModel::default() };
        let mut s = state(DeviceKind::Car, 0.0, 60.0);
        s.set_resource(0.1);
        model.step(&mut s, Tick(0), &mut rng());
        model.step(&mut s, Tick(1), &mut rng());
        assert_eq!(s.resource, 0.0);
    }

    #[test]
    fn turn_snaps_to_cardinal() {
        let model = CarModel { turn_probability: 1.0, ..CarModel::default() };
        let mut s = state(DeviceKind::Car, 0.0, 60.0);
        s.heading_deg = 45.0;
        model.step(&mut s, Tick(0), &mut rng());
        assert!([0.0, 90.0, 180.0, 270.0].contains(&s.heading_deg));
    }

    #[test]
    fn no_turn_keeps_heading() {
        let model = CarModel { turn_probability: 0.0, ..CarModel::default() };
        let mut s = state(DeviceKind::Car, 0.0, 60.0);
        s.heading_deg = 45.0;
        model.step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.heading_deg, 45.0);
    }

    #[test]
    fn cruises_at_own_speed() {
        let mut s = state(DeviceKind::Car, 0.0, 42.0);
        let motion = CarModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(motion, Motion::cruise(42.0));
    }

    #[test]
    fn initial_speed_within_bounds() {
        let model = CarModel::default();
        for slot in 0..200 {
            let v = model.initial_speed_kmh(&mut DeviceRng::new(3, slot));
            assert!((30.0..=90.0).contains(&v) && v.fract() == 0.0, "{v}");
        }
    }
}

// ── DroneModel ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod drone_tests {
    use ft_core::VelocityVector;

    use super::*;

    #[test]
    fn low_battery_starts_descent() {
        let mut s = state(DeviceKind::Drone, 10.0, 40.0);
        s.set_resource(20.0);
        let motion = DroneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.mode, Mode::Descending);
        assert!(approx(s.resource, 19.0));
        assert_eq!(motion, Motion::Override(VelocityVector::new(0.0, 0.0, -0.3)));
    }

    #[test]
    fn normal_flight_drains_and_jitters() {
        let mut s = state(DeviceKind::Drone, 10.0, 40.0);
        s.set_resource(50.0);
        let motion = DroneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.mode, Mode::Flying);
        assert!(approx(s.resource, 49.5));
        match motion {
            Motion::Cruise { speed_kmh, climb_m } => {
                assert_eq!(speed_kmh, 40.0);
                assert!((-0.1..=0.1).contains(&climb_m));
            }
            other => panic!("expected cruise, got {other:?}"),
        }
    }

    #[test]
    fn flight_never_climbs_below_ground() {
        let model = DroneModel::default();
        let mut r = rng();
        for _ in 0..200 {
            let mut s = state(DeviceKind::Drone, 0.0, 40.0);
            if let Motion::Cruise { climb_m, .. } = model.step(&mut s, Tick(0), &mut r) {
                assert!(climb_m >= 0.0);
            }
        }
    }

    #[test]
    fn descent_stops_at_ground() {
        let mut s = state(DeviceKind::Drone, 0.1, 40.0);
        s.mode = Mode::Descending;
        s.set_resource(15.0);
        let motion = DroneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(motion, Motion::Override(VelocityVector::new(0.0, 0.0, -0.1)));
        assert!(approx(s.resource, 14.0));
    }

    #[test]
    fn grounded_descent_lands_and_holds() {
        let mut s = state(DeviceKind::Drone, 0.0, 40.0);
        s.mode = Mode::Descending;
        s.set_resource(10.0);
        let before = s.position;
        let motion = DroneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.mode, Mode::Landed);
        assert_eq!(motion, Motion::Hold);
        assert_eq!(s.position, before);
        assert!(approx(s.resource, 11.2));
    }

    #[test]
    fn landed_charges_until_resume() {
        let mut s = state(DeviceKind::Drone, 0.0, 40.0);
        s.mode = Mode::Landed;
        s.set_resource(94.0);
        DroneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.mode, Mode::Landed);
        assert!(approx(s.resource, 95.2));
    }

    #[test]
    fn charged_drone_takes_off() {
        let mut s = state(DeviceKind::Drone, 0.0, 40.0);
        s.mode = Mode::Landed;
        s.set_resource(95.0);
        let motion = DroneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.mode, Mode::Flying);
        assert!(approx(s.resource, 94.5));
        assert!(matches!(motion, Motion::Cruise { .. }));
    }

    #[test]
    fn landed_altitude_pinned_to_zero() {
        let mut s = state(DeviceKind::Drone, -0.2, 40.0);
        s.mode = Mode::Landed;
        s.set_resource(50.0);
        DroneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.position.alt, 0.0);
    }

    #[test]
    fn charge_capped_at_full() {
        let model = DroneModel { resume_battery: 200.0, ..DroneModel::default() };
        let mut s = state(DeviceKind::Drone, 0.0, 40.0);
        s.mode = Mode::Landed;
        s.set_resource(99.5);
        model.step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.resource, 100.0);
    }
}

// ── PhoneModel ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod phone_tests {
    use super::*;

    #[test]
    fn drains_while_moving() {
        let mut s = state(DeviceKind::Phone, 0.0, 5.0);
        s.set_resource(50.0);
        let motion = PhoneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.mode, Mode::Moving);
        assert!(approx(s.resource, 49.7));
        assert_eq!(motion, Motion::cruise(5.0));
    }

    #[test]
    fn low_battery_starts_charging() {
        let mut s = state(DeviceKind::Phone, 0.0, 5.0);
        s.set_resource(15.0);
        let motion = PhoneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.mode, Mode::Charging);
        assert_eq!(motion, Motion::Hold);
        assert!(approx(s.resource, 15.8));
    }

    #[test]
    fn charging_holds_position() {
        let mut s = state(DeviceKind::Phone, 0.0, 5.0);
        s.mode = Mode::Charging;
        s.set_resource(60.0);
        let heading = s.heading_deg;
        let motion = PhoneModel { turn_probability: 1.0, ..PhoneModel::default() }
            .step(&mut s, Tick(0), &mut rng());
        assert_eq!(motion, Motion::Hold);
        assert_eq!(s.heading_deg, heading);
        assert!(approx(s.resource, 60.8));
    }

    #[test]
    fn charged_phone_moves_again() {
        let mut s = state(DeviceKind::Phone, 0.0, 5.0);
        s.mode = Mode::Charging;
        s.set_resource(95.0);
        let motion = PhoneModel::default().step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.mode, Mode::Moving);
        assert!(matches!(motion, Motion::Cruise { .. }));
    }

    #[test]
    fn walking_speed_is_fixed() {
        let model = PhoneModel::default();
        assert_eq!(model.initial_speed_kmh(&mut rng()), 5.0);
    }
}

// ── DeviceModel ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod device_model_tests {
    use super::*;

    #[test]
    fn for_kind_selects_variant() {
        for kind in DeviceKind::ALL {
            assert_eq!(DeviceModel::for_kind(kind).kind(), kind);
        }
    }

    #[test]
    fn delegates_step() {
        let mut s = state(DeviceKind::Phone, 0.0, 5.0);
        s.set_resource(15.0);
        DeviceModel::from(DeviceKind::Phone).step(&mut s, Tick(0), &mut rng());
        assert_eq!(s.mode, Mode::Charging);
    }

    #[test]
    fn usable_as_trait_object() {
        let model: Box<dyn ResourceModel> = Box::new(DeviceModel::for_kind(DeviceKind::Car));
        assert_eq!(model.kind(), DeviceKind::Car);
    }

    #[test]
    fn resource_always_clamped() {
        for kind in DeviceKind::ALL {
            let model = DeviceModel::for_kind(kind);
            for slot in 0..10 {
                let mut r = DeviceRng::new(99, slot);
                let mut s = state(kind, 5.0, 30.0);
                for t in 0..5_000 {
                    model.step(&mut s, Tick(t), &mut r);
                    assert!((0.0..=100.0).contains(&s.resource), "{kind} at {t}: {}", s.resource);
                    assert_eq!(s.mode.kind(), kind);
                }
            }
        }
    }
}
