//! Property-based tests for signal decision logic.
//!
//! These tests use proptest to verify the signal invariants hold across
//! many randomly generated event sequences and layouts.

use proptest::prelude::*;
use signalbox::config::{LayoutConfig, SignalConfig};
use signalbox::core::{Address, Bitmask, RngClearance, Signal};
use signalbox::signals::{
    Feather, GroundSignal, SubsidiarySignal, ThreeAspectAddresses, ThreeAspectSignal,
};

const DANGER: Address = 1;
const PROCEED: Address = 2;
const CAUTION: Address = 3;
const RANDOM_PROCEED: Address = 4;

const ADDRESSES: ThreeAspectAddresses = ThreeAspectAddresses {
    danger: DANGER,
    proceed: PROCEED,
    caution: CAUTION,
    random_proceed: RANDOM_PROCEED,
};

prop_compose! {
    fn arbitrary_event()(address in 0..6u16, active in any::<bool>()) -> (Address, bool) {
        (address, active)
    }
}

fn events() -> impl Strategy<Value = Vec<(Address, bool)>> {
    prop::collection::vec(arbitrary_event(), 0..40)
}

fn span_mask(start_bit: u32, span: u32) -> Bitmask {
    ((1 << span) - 1) << start_bit
}

fn three_aspect(start_bit: u32, seed: u64) -> ThreeAspectSignal {
    ThreeAspectSignal::with_clearance(start_bit, ADDRESSES, RngClearance::seeded(seed))
}

prop_compose! {
    fn arbitrary_config()(kind in 0..4u8, start_bit in 0..34u32, base in 0..20u16) -> SignalConfig {
        match kind {
            0 => SignalConfig::ThreeAspect {
                start_bit,
                danger: base,
                proceed: base + 1,
                caution: base + 2,
                random_proceed: base + 3,
            },
            1 => SignalConfig::Ground { start_bit, danger: base, proceed: base + 1 },
            2 => SignalConfig::Subsidiary { start_bit, proceed: base },
            _ => SignalConfig::Feather { start_bit, diverge: base },
        }
    }
}

proptest! {
    #[test]
    fn three_aspect_shows_exactly_one_confined_bit(
        start_bit in 0..=29u32,
        seed in any::<u64>(),
        events in events(),
    ) {
        let mut signal = three_aspect(start_bit, seed);
        let mask = span_mask(start_bit, 3);

        for (address, active) in events {
            signal.handle_event(address, active);
            let state = signal.current_state();
            prop_assert_eq!(state.count_ones(), 1);
            prop_assert_eq!(state & !mask, 0);
        }
    }

    #[test]
    fn ground_shows_exactly_one_confined_bit(start_bit in 0..=30u32, events in events()) {
        let mut signal = GroundSignal::new(start_bit, DANGER, PROCEED);
        let mask = span_mask(start_bit, 2);

        for (address, active) in events {
            signal.handle_event(address, active);
            let state = signal.current_state();
            prop_assert_eq!(state.count_ones(), 1);
            prop_assert_eq!(state & !mask, 0);
        }
    }

    #[test]
    fn changed_flag_matches_state_change(seed in any::<u64>(), events in events()) {
        let mut three = three_aspect(0, seed);
        let mut ground = GroundSignal::new(3, DANGER, PROCEED);
        let mut subsidiary = SubsidiarySignal::new(5, PROCEED);
        let mut feather = Feather::new(6, CAUTION);

        for (address, active) in events {
            let signals: [&mut dyn Signal; 4] =
                [&mut three, &mut ground, &mut subsidiary, &mut feather];
            for signal in signals {
                let before = signal.current_state();
                let changed = signal.handle_event(address, active);
                prop_assert_eq!(changed, before != signal.current_state());
            }
        }
    }

    #[test]
    fn inactive_commands_never_change_aspect_signals(
        seed in any::<u64>(),
        prefix in events(),
        address in 0..6u16,
    ) {
        let mut three = three_aspect(0, seed);
        let mut ground = GroundSignal::new(3, DANGER, PROCEED);
        for (a, active) in prefix {
            three.handle_event(a, active);
            ground.handle_event(a, active);
        }

        let three_before = three.current_state();
        let ground_before = ground.current_state();

        prop_assert!(!three.handle_event(address, false));
        prop_assert!(!ground.handle_event(address, false));
        prop_assert_eq!(three.current_state(), three_before);
        prop_assert_eq!(ground.current_state(), ground_before);
    }

    #[test]
    fn repeated_selection_changes_only_once(
        seed in any::<u64>(),
        prefix in events(),
        address in prop::sample::select(vec![DANGER, PROCEED, CAUTION]),
    ) {
        let mut signal = three_aspect(0, seed);
        for (a, active) in prefix {
            signal.handle_event(a, active);
        }

        signal.handle_event(address, true);
        let settled = signal.current_state();

        prop_assert!(!signal.handle_event(address, true));
        prop_assert_eq!(signal.current_state(), settled);
    }

    #[test]
    fn random_proceed_only_clears_from_danger(seed in any::<u64>(), prefix in events()) {
        let mut signal = three_aspect(0, seed);
        for (a, active) in prefix {
            signal.handle_event(a, active);
        }

        let before = signal.current_state();
        let changed = signal.handle_event(RANDOM_PROCEED, true);

        if before == 0b001 {
            prop_assert!(changed);
            prop_assert!(matches!(signal.current_state(), 0b010 | 0b100));
        } else {
            prop_assert!(!changed);
            prop_assert_eq!(signal.current_state(), before);
        }
    }

    #[test]
    fn indicators_debounce_repeated_commands(
        start_bit in 0..32u32,
        prefix in events(),
        active in any::<bool>(),
    ) {
        let mut subsidiary = SubsidiarySignal::new(start_bit, PROCEED);
        let mut feather = Feather::new(start_bit, PROCEED);
        for (a, act) in prefix {
            subsidiary.handle_event(a, act);
            feather.handle_event(a, act);
        }

        subsidiary.handle_event(PROCEED, active);
        feather.handle_event(PROCEED, active);

        prop_assert!(!subsidiary.handle_event(PROCEED, active));
        prop_assert!(!feather.handle_event(PROCEED, active));

        let expected: Bitmask = if active { 1 << start_bit } else { 0 };
        prop_assert_eq!(subsidiary.current_state(), expected);
        prop_assert_eq!(feather.current_state(), expected);
    }

    #[test]
    fn built_layouts_have_disjoint_in_range_spans(
        configs in prop::collection::vec(arbitrary_config(), 0..8),
    ) {
        let layout = LayoutConfig::new(configs).with_seed(1);

        if let Ok(signals) = layout.build() {
            let masks: Vec<Bitmask> = signals
                .iter()
                .map(|s| s.bit_span().mask())
                .collect::<Option<_>>()
                .expect("validated spans fit the word");

            for (i, a) in masks.iter().enumerate() {
                for b in &masks[i + 1..] {
                    prop_assert_eq!(a & b, 0);
                }
            }
        }
    }

    #[test]
    fn validation_rejects_exactly_the_invalid_layouts(
        configs in prop::collection::vec(arbitrary_config(), 0..8),
    ) {
        let spans: Vec<_> = configs.iter().map(SignalConfig::bit_span).collect();
        let in_range = spans.iter().all(|s| s.fits_word());
        let disjoint = spans
            .iter()
            .enumerate()
            .all(|(i, a)| spans[i + 1..].iter().all(|b| !a.overlaps(b)));

        let layout = LayoutConfig::new(configs);
        prop_assert_eq!(layout.validate().is_ok(), in_range && disjoint);
    }
}
