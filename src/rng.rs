//! MT19937, the 32-bit Mersenne Twister.
//!
//! Output is bit-identical to the reference generator for every seed, which
//! is what slime-chunk classification depends on.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

const TEMPER_U: u32 = 11;
const TEMPER_D: u32 = 0xffff_ffff;
const TEMPER_S: u32 = 7;
const TEMPER_B: u32 = 0x9d2c_5680;
const TEMPER_T: u32 = 15;
const TEMPER_C: u32 = 0xefc6_0000;
const TEMPER_L: u32 = 18;

fn temper(mut y: u32) -> u32 {
    y ^= (y >> TEMPER_U) & TEMPER_D;
    y ^= (y << TEMPER_S) & TEMPER_B;
    y ^= (y << TEMPER_T) & TEMPER_C;
    y ^= y >> TEMPER_L;
    y
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            state: [0; N],
            index: N,
        };
        rng.reseed(seed);
        rng
    }

    /// Refills the state from `seed`. The next draw regenerates the state
    /// before tempering, exactly like a freshly constructed generator.
    pub fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let y = self.state[self.index];
        self.index += 1;
        temper(y)
    }

    // In place and in ascending order: entries past index 227 read words
    // that this same pass already rewrote.
    fn twist(&mut self) {
        for i in 0..N {
            let x = (self.state[i] & UPPER_MASK)
                .wrapping_add(self.state[(i + 1) % N] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= MATRIX_A;
            }
            self.state[i] = self.state[(i + M) % N] ^ x_a;
        }
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_zero_matches_reference_outputs() {
        let mut rng = Mt19937::new(0);
        assert_eq!(rng.next_u32(), 2_357_136_044);
        assert_eq!(rng.next_u32(), 2_546_248_239);
        assert_eq!(rng.next_u32(), 3_071_714_933);
    }

    #[test]
    fn output_after_first_twist_boundary_matches_reference() {
        let mut rng = Mt19937::new(0);
        let mut last = 0;
        for _ in 0..624 {
            last = rng.next_u32();
        }
        assert_eq!(last, 3_791_854_820);
        assert_eq!(rng.next_u32(), 341_544_762);
    }

    #[test]
    fn second_twist_boundary_matches_reference() {
        let mut rng = Mt19937::new(0);
        let outputs: Vec<u32> = (0..1249).map(|_| rng.next_u32()).collect();
        assert_eq!(outputs[1247], 1_145_454_359);
        assert_eq!(outputs[1248], 4_192_857_288);
    }

    #[test]
    fn ten_thousandth_output_for_seed_zero() {
        let mut rng = Mt19937::new(0);
        let mut last = 0;
        for _ in 0..10_000 {
            last = rng.next_u32();
        }
        assert_eq!(last, 1_543_171_712);
    }

    #[test]
    fn canonical_default_seed_matches_reference() {
        let mut rng = Mt19937::new(5489);
        assert_eq!(rng.next_u32(), 3_499_211_612);
        assert_eq!(rng.next_u32(), 581_869_302);
        assert_eq!(rng.next_u32(), 3_890_346_734);
    }

    #[test]
    fn all_ones_seed_matches_reference() {
        let mut rng = Mt19937::new(u32::MAX);
        assert_eq!(rng.next_u32(), 419_326_371);
        assert_eq!(rng.next_u32(), 479_346_978);
    }

    #[test]
    fn same_seed_produces_same_sequence() {
        for seed in [0u32, 1, 42, 0x1f1f_1f1f, u32::MAX] {
            let mut a = Mt19937::new(seed);
            let mut b = Mt19937::new(seed);
            for _ in 0..2_000 {
                assert_eq!(a.next_u32(), b.next_u32());
            }
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = Mt19937::new(1);
        let mut b = Mt19937::new(2);
        let va: Vec<u32> = (0..10).map(|_| a.next_u32()).collect();
        let vb: Vec<u32> = (0..10).map(|_| b.next_u32()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn reseed_restarts_the_sequence() {
        let mut rng = Mt19937::new(7);
        let first: Vec<u32> = (0..700).map(|_| rng.next_u32()).collect();
        rng.reseed(7);
        let again: Vec<u32> = (0..700).map(|_| rng.next_u32()).collect();
        assert_eq!(first, again);
        assert_eq!(rng, {
            let mut fresh = Mt19937::new(7);
            for _ in 0..700 {
                fresh.next_u32();
            }
            fresh
        });
    }

    #[test]
    fn cursor_stays_within_state_length() {
        let mut rng = Mt19937::new(99);
        assert_eq!(rng.index, N);
        for _ in 0..(N * 3 + 5) {
            rng.next_u32();
            assert!(rng.index >= 1 && rng.index <= N);
        }
        assert_eq!(rng.index, 5);
    }

    #[test]
    fn seeding_fills_state_from_recurrence() {
        let rng = Mt19937::new(0);
        assert_eq!(rng.state[0], 0);
        assert_eq!(rng.state[1], 1);
        assert_eq!(rng.state[2], 1_812_433_255);
    }

    #[test]
    fn tempering_is_identity_on_zero() {
        assert_eq!(temper(0), 0);
    }

    #[test]
    fn generators_on_separate_threads_agree() {
        let expected: Vec<u32> = {
            let mut rng = Mt19937::new(1234);
            (0..1_000).map(|_| rng.next_u32()).collect()
        };
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        let mut rng = Mt19937::new(1234);
                        (0..1_000).map(|_| rng.next_u32()).collect::<Vec<u32>>()
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().expect("worker should finish"), expected);
            }
        });
    }
}
